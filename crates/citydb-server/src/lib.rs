//! citydb-server
//! =============
//!
//! HTTP/JSON front-end for [`citydb_core`]. The binary loads the dataset once,
//! refuses to start on an empty or unreadable dataset, then serves:
//!
//! ```text
//! GET  /health        - health check
//! POST /city/score    - score a city: {"city_name": "Berlin", "country": "Germany"}
//! GET  /cities/list   - ?country=&min_quality=&max_cost=&limit=
//! GET  /countries     - countries by number of cities
//! ```
//!
//! The router is exposed here so it can be driven in-process by tests.

pub mod error;

use crate::error::{ApiError, ErrorContext};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use citydb_core::{query, Catalog, CityDbError, CityFilter, CitySummary, CountryListing, ScoreResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared, read-only catalog handed to every handler.
pub type SharedCatalog = Arc<Catalog>;

pub fn router(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/city/score", post(score_city))
        .route("/cities/list", get(list_cities))
        .route("/countries", get(list_countries))
        .with_state(catalog)
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub cities_loaded: usize,
    pub countries: usize,
}

async fn health(State(catalog): State<SharedCatalog>) -> Json<Health> {
    let stats = catalog.stats();
    Json(Health {
        status: "healthy",
        cities_loaded: stats.cities,
        countries: stats.countries,
    })
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

async fn score_city(
    State(catalog): State<SharedCatalog>,
    body: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, ApiError> {
    let Json(req) = body.map_err(|rejection| {
        ApiError::new(
            CityDbError::Validation(format!("invalid request body: {}", rejection.body_text())),
            ErrorContext::Score {
                city: String::new(),
            },
        )
    })?;

    let city = req.city_name.unwrap_or_default();
    query::score_city(&catalog, &city, req.country.as_deref())
        .map(Json)
        .map_err(|e| ApiError::new(e, ErrorContext::Score { city }))
}

#[derive(Debug, Deserialize)]
pub struct ListCitiesParams {
    pub country: Option<String>,
    pub min_quality: Option<f64>,
    pub max_cost: Option<f64>,
    pub limit: Option<usize>,
}

impl From<ListCitiesParams> for CityFilter {
    fn from(p: ListCitiesParams) -> Self {
        Self {
            country: p.country,
            min_quality: p.min_quality.unwrap_or(Self::DEFAULT_MIN_QUALITY),
            max_cost: p.max_cost.unwrap_or(Self::DEFAULT_MAX_COST),
            limit: p.limit.unwrap_or(Self::DEFAULT_LIMIT),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CityList {
    pub total: usize,
    pub cities: Vec<CitySummary>,
}

async fn list_cities(
    State(catalog): State<SharedCatalog>,
    params: Result<Query<ListCitiesParams>, QueryRejection>,
) -> Result<Json<CityList>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        ApiError::new(
            CityDbError::Validation(format!("invalid query parameters: {}", rejection.body_text())),
            ErrorContext::Cities,
        )
    })?;

    let cities = query::list_cities(&catalog, &params.into())
        .map_err(|e| ApiError::new(e, ErrorContext::Cities))?;
    Ok(Json(CityList {
        total: cities.len(),
        cities,
    }))
}

async fn list_countries(
    State(catalog): State<SharedCatalog>,
) -> Result<Json<CountryListing>, ApiError> {
    query::list_countries(&catalog)
        .map(Json)
        .map_err(|e| ApiError::new(e, ErrorContext::Countries))
}
