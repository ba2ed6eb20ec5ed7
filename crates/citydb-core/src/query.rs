// crates/citydb-core/src/query.rs

//! # Query Service
//!
//! Stateless operations over a [`Catalog`] snapshot: score one city, list
//! cities by filter, list countries by size. Every function is pure in the
//! catalog and its arguments, so identical calls give identical results.

use crate::error::{CityDbError, Result};
use crate::model::Catalog;
use crate::scoring::{round1, score_record, Tier};
use crate::search::{filter_by_country_substring, CatalogSearch};
use crate::text::contains_folded;
use serde::Serialize;
use tracing::debug;

/// Sub-indices of a scored city, rounded to one decimal.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub quality_of_life: f64,
    pub purchasing_power: f64,
    pub safety: f64,
    pub health_care: f64,
    pub cost_of_living: f64,
    pub property_price_to_income: f64,
    pub traffic_commute_time: f64,
    pub pollution: f64,
    pub climate: f64,
}

/// Successful answer to [`score_city`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub found: bool,
    pub city: String,
    pub country: String,
    pub scores: ScoreBreakdown,
    pub internship_score: f64,
    pub recommendation: &'static str,
    pub recommendation_level: &'static str,
}

/// Projection of a city used by [`list_cities`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySummary {
    pub city: String,
    pub country: String,
    pub quality_of_life: f64,
    pub cost_of_living: f64,
    pub safety: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    pub country: String,
    pub city_count: usize,
}

/// Answer to [`list_countries`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryListing {
    pub total: usize,
    pub total_cities: usize,
    pub countries: Vec<CountrySummary>,
}

/// Filter for [`list_cities`].
#[derive(Clone, Debug, PartialEq)]
pub struct CityFilter {
    /// Case-insensitive country substring; `None` or empty keeps every country.
    pub country: Option<String>,
    pub min_quality: f64,
    pub max_cost: f64,
    pub limit: usize,
}

impl CityFilter {
    pub const DEFAULT_MIN_QUALITY: f64 = 0.0;
    pub const DEFAULT_MAX_COST: f64 = 200.0;
    pub const DEFAULT_LIMIT: usize = 20;
}

impl Default for CityFilter {
    fn default() -> Self {
        Self {
            country: None,
            min_quality: Self::DEFAULT_MIN_QUALITY,
            max_cost: Self::DEFAULT_MAX_COST,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

fn ensure_loaded(catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        return Err(CityDbError::ServiceUnavailable);
    }
    Ok(())
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Scores the first city (in catalog order) whose name contains `city_name`,
/// optionally restricted to countries containing `country`.
pub fn score_city(catalog: &Catalog, city_name: &str, country: Option<&str>) -> Result<ScoreResult> {
    if city_name.is_empty() {
        return Err(CityDbError::Validation("city_name required".to_string()));
    }
    ensure_loaded(catalog)?;

    let mut matches = catalog.find_by_name(city_name);
    if matches.is_empty() {
        debug!(city = city_name, "no city matched");
        return Err(CityDbError::CityNotFound {
            city: city_name.to_string(),
            country: None,
        });
    }

    if let Some(country) = non_empty(country) {
        matches = filter_by_country_substring(matches, country);
        if matches.is_empty() {
            debug!(city = city_name, country, "no city matched in country");
            return Err(CityDbError::CityNotFound {
                city: city_name.to_string(),
                country: Some(country.to_string()),
            });
        }
    }

    let (key, record) = &matches[0];
    let score = score_record(record)?;
    let tier = Tier::classify(score);
    debug!(%key, score, tier = tier.key(), candidates = matches.len(), "scored city");

    let ix = &record.indices;
    Ok(ScoreResult {
        found: true,
        city: record.city.clone(),
        country: record.country.clone(),
        scores: ScoreBreakdown {
            quality_of_life: round1(ix.quality_of_life_index),
            purchasing_power: round1(ix.purchasing_power_index),
            safety: round1(ix.safety_index),
            health_care: round1(ix.health_care_index),
            cost_of_living: round1(ix.cost_of_living_index),
            property_price_to_income: round1(ix.property_price_to_income_ratio),
            traffic_commute_time: round1(ix.traffic_commute_time_index),
            pollution: round1(ix.pollution_index),
            climate: round1(ix.climate_index),
        },
        internship_score: round1(score),
        recommendation: tier.label(),
        recommendation_level: tier.key(),
    })
}

/// Cities passing `filter`, best quality of life first, at most `filter.limit`.
///
/// Sorting uses the rounded quality value and is stable, so ties keep
/// catalog order.
pub fn list_cities(catalog: &Catalog, filter: &CityFilter) -> Result<Vec<CitySummary>> {
    ensure_loaded(catalog)?;
    let country = non_empty(filter.country.as_deref());

    let mut out: Vec<CitySummary> = catalog
        .list_all()
        .iter()
        .filter(|r| country.is_none_or(|c| contains_folded(&r.country, c)))
        .filter(|r| r.indices.quality_of_life_index >= filter.min_quality)
        .filter(|r| r.indices.cost_of_living_index <= filter.max_cost)
        .map(|r| CitySummary {
            city: r.city.clone(),
            country: r.country.clone(),
            quality_of_life: round1(r.indices.quality_of_life_index),
            cost_of_living: round1(r.indices.cost_of_living_index),
            safety: round1(r.indices.safety_index),
        })
        .collect();

    out.sort_by(|a, b| b.quality_of_life.total_cmp(&a.quality_of_life));
    out.truncate(filter.limit);
    Ok(out)
}

/// Countries ordered by number of registered city names, largest first.
pub fn list_countries(catalog: &Catalog) -> Result<CountryListing> {
    ensure_loaded(catalog)?;

    let mut countries: Vec<CountrySummary> = catalog
        .countries()
        .iter()
        .map(|c| CountrySummary {
            country: c.name.clone(),
            city_count: c.cities.len(),
        })
        .collect();
    countries.sort_by(|a, b| b.city_count.cmp(&a.city_count));

    let stats = catalog.stats();
    Ok(CountryListing {
        total: stats.countries,
        total_cities: stats.cities,
        countries,
    })
}
