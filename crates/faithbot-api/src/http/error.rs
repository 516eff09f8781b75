//! Application error type mapping to HTTP status codes and the `{error}` body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use faithbot_types::chat::ErrorBody;
use faithbot_types::error::RelayError;

/// Message returned for every upstream failure; details stay in the logs.
pub const UPSTREAM_ERROR_MESSAGE: &str = "Completion request failed";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed inbound request.
    BadRequest(String),
    /// The completion service failed.
    Upstream(String),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        match e {
            RelayError::BadRequest(msg) => AppError::BadRequest(msg),
            RelayError::Upstream(msg) => AppError::Upstream(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "rejected request");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Upstream(detail) => {
                tracing::error!(error = %detail, "completion request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPSTREAM_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_error_mapping() {
        let err: AppError = RelayError::BadRequest("empty".to_string()).into();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "empty"));
        let err: AppError = RelayError::Upstream("timeout".to_string()).into();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[test]
    fn test_status_codes() {
        let response = AppError::BadRequest("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let response = AppError::Upstream("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
