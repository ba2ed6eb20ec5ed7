// crates/citydb-core/src/error.rs
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CityDbError>;

/// Errors produced while loading the dataset or answering queries.
///
/// The first group of variants can only occur while building a
/// [`Catalog`](crate::Catalog); see [`CityDbError::is_load_error`].
#[derive(Debug, Error)]
pub enum CityDbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Invalid dataset: {0}")]
    InvalidData(String),

    #[error("Dataset contains no cities")]
    EmptyDataset,

    /// Caller supplied a missing or malformed argument.
    #[error("{0}")]
    Validation(String),

    /// No record matched the city name (and optional country filter).
    #[error("{}", not_found_message(.city, .country))]
    CityNotFound {
        city: String,
        country: Option<String>,
    },

    /// The catalog holds no data, so nothing can be served.
    #[error("no data loaded")]
    ServiceUnavailable,

    /// A matched record cannot be scored.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),
}

fn not_found_message(city: &str, country: &Option<String>) -> String {
    match country {
        Some(country) => format!("city '{city}' not found in country '{country}'"),
        None => "city not found".to_string(),
    }
}

impl CityDbError {
    /// `true` for errors raised while reading or validating the dataset.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::Json(_)
                | Self::DatasetNotFound(_)
                | Self::InvalidData(_)
                | Self::EmptyDataset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_echo_the_query() {
        let plain = CityDbError::CityNotFound {
            city: "Atlantis".into(),
            country: None,
        };
        assert_eq!(plain.to_string(), "city not found");

        let scoped = CityDbError::CityNotFound {
            city: "Berlin".into(),
            country: Some("France".into()),
        };
        assert_eq!(
            scoped.to_string(),
            "city 'Berlin' not found in country 'France'"
        );
    }

    #[test]
    fn load_errors_are_classified() {
        assert!(CityDbError::EmptyDataset.is_load_error());
        assert!(CityDbError::InvalidData("x".into()).is_load_error());
        assert!(!CityDbError::ServiceUnavailable.is_load_error());
        assert!(!CityDbError::Validation("x".into()).is_load_error());
    }
}
