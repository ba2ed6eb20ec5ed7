// crates/citydb-server/src/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use citydb_core::CityDbError;
use serde_json::{json, Value};
use tracing::{debug, error};

/// Which endpoint failed, so the error body can echo its inputs.
#[derive(Debug, Clone)]
pub enum ErrorContext {
    Score {
        city: String,
    },
    Cities,
    Countries,
}

/// A [`CityDbError`] on its way to becoming an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    pub error: CityDbError,
    pub context: ErrorContext,
}

impl ApiError {
    pub fn new(error: CityDbError, context: ErrorContext) -> Self {
        Self { error, context }
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            CityDbError::Validation(_) => StatusCode::BAD_REQUEST,
            CityDbError::CityNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Value {
        let mut body = json!({ "error": self.error.to_string() });
        match (&self.context, &self.error) {
            // Bad requests only carry the message.
            (ErrorContext::Score { .. }, CityDbError::Validation(_)) => {}
            (ErrorContext::Score { city }, err) => {
                body["city"] = json!(city);
                if let CityDbError::CityNotFound {
                    country: Some(country),
                    ..
                } = err
                {
                    body["country"] = json!(country);
                }
                body["found"] = json!(false);
            }
            (ErrorContext::Cities, _) => body["cities"] = json!([]),
            (ErrorContext::Countries, _) => body["countries"] = json!([]),
        }
        body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.error, context = ?self.context, "request failed");
        } else {
            debug!(error = %self.error, status = status.as_u16(), "request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(city: &str) -> ErrorContext {
        ErrorContext::Score { city: city.into() }
    }

    #[test]
    fn validation_is_bad_request_with_bare_body() {
        let err = ApiError::new(CityDbError::Validation("city_name required".into()), score(""));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body(), json!({ "error": "city_name required" }));
    }

    #[test]
    fn not_found_echoes_city_and_country() {
        let err = ApiError::new(
            CityDbError::CityNotFound {
                city: "Berlin".into(),
                country: Some("France".into()),
            },
            score("Berlin"),
        );
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        let body = err.body();
        assert_eq!(body["city"], "Berlin");
        assert_eq!(body["country"], "France");
        assert_eq!(body["found"], false);
    }

    #[test]
    fn unavailable_listings_are_server_errors() {
        let err = ApiError::new(CityDbError::ServiceUnavailable, ErrorContext::Countries);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body()["countries"], json!([]));

        let err = ApiError::new(CityDbError::ServiceUnavailable, ErrorContext::Cities);
        assert_eq!(err.body()["cities"], json!([]));
    }
}
