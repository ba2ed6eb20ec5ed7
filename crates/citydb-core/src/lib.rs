// crates/citydb-core/src/lib.rs

//! # citydb-core
//!
//! An in-memory catalog of cities annotated with quality-of-life sub-indices,
//! plus the query service built on top of it:
//!
//! - [`Catalog`] is built once from a `[{country, cities: [...]}]` dataset
//!   and is read-only afterwards.
//! - [`query::score_city`] computes the composite internship score and its
//!   recommendation [`Tier`].
//! - [`query::list_cities`] and [`query::list_countries`] shape filtered,
//!   sorted listings.
//!
//! ```no_run
//! use citydb_core::{query, Catalog};
//!
//! let catalog = Catalog::load_from_path(Catalog::default_dataset_path())?;
//! let result = query::score_city(&catalog, "Berlin", Some("Germany"))?;
//! println!("{} -> {} ({})", result.city, result.internship_score, result.recommendation);
//! # Ok::<(), citydb_core::CityDbError>(())
//! ```

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod scoring;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::CatalogStats;
pub use crate::error::{CityDbError, Result};
pub use crate::model::{Catalog, CityRecord, CountryEntry, SubIndices};
pub use crate::query::{
    CityFilter, CitySummary, CountryListing, CountrySummary, ScoreBreakdown, ScoreResult,
};
pub use crate::scoring::Tier;
pub use crate::search::CatalogSearch;
