//! Basic usage example for citydb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled city dataset
//! - Score a city, with and without a country filter
//! - List cities and countries

use citydb_rs::query::{list_cities, list_countries, score_city};
use citydb_rs::{Catalog, CatalogSearch, CityFilter, Result};

fn main() -> Result<()> {
    println!("=== citydb-rs Basic Usage Example ===\n");

    let catalog = Catalog::load_from_path(Catalog::default_dataset_path())?;
    let stats = catalog.stats();
    println!(
        "Loaded {} cities in {} countries\n",
        stats.cities, stats.countries
    );

    println!("--- Example 1: Score a city ---");
    let berlin = score_city(&catalog, "Berlin", None)?;
    println!(
        "{}, {}: {} ({})",
        berlin.city, berlin.country, berlin.internship_score, berlin.recommendation
    );
    println!();

    println!("--- Example 2: Disambiguate by country ---");
    for (city, country) in [("a", "spain"), ("a", "united"), ("Berlin", "France")] {
        match score_city(&catalog, city, Some(country)) {
            Ok(r) => println!("  '{city}' in '{country}' -> {} ({})", r.city, r.recommendation_level),
            Err(e) => println!("  '{city}' in '{country}' -> {e}"),
        }
    }
    println!();

    println!("--- Example 3: Substring search ---");
    for (key, record) in catalog.find_by_name("bur") {
        println!("  {key}: quality of life {}", record.indices.quality_of_life_index);
    }
    println!();

    println!("--- Example 4: Affordable cities ---");
    let filter = CityFilter {
        max_cost: 70.0,
        limit: 5,
        ..CityFilter::default()
    };
    for (i, c) in list_cities(&catalog, &filter)?.iter().enumerate() {
        println!(
            "{}. {} ({}) quality {} cost {}",
            i + 1,
            c.city,
            c.country,
            c.quality_of_life,
            c.cost_of_living
        );
    }
    println!();

    println!("--- Example 5: Countries ---");
    let listing = list_countries(&catalog)?;
    for c in &listing.countries {
        println!("  {}: {}", c.country, c.city_count);
    }
    println!("Total: {} countries, {} cities", listing.total, listing.total_cities);

    Ok(())
}
