//! Error types for the photo server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == App Error Enum ==
/// Unified error type for page fetching, loading and rendering.
#[derive(Error, Debug)]
pub enum AppError {
    /// The `page` parameter could not be parsed or is out of range
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// The upstream request failed before a body was received
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status
    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    /// The upstream body did not match the photo schema
    #[error("Invalid photo payload: {0}")]
    Validation(#[from] serde_json::Error),

    /// The request was cancelled before the fetch settled
    #[error("Fetch cancelled")]
    Cancelled,

    /// The configured upstream base URL is malformed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status used when this error reaches a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPage(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::UpstreamStatus(_) | AppError::Validation(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidUrl(_) | AppError::Render(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True when the error came from the cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request error");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the photo server.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (AppError::InvalidPage("abc".to_string()), StatusCode::BAD_REQUEST),
            (AppError::UpstreamStatus(500), StatusCode::BAD_GATEWAY),
            (AppError::Cancelled, StatusCode::SERVICE_UNAVAILABLE),
            (AppError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_validation_error_is_bad_gateway() {
        let err = serde_json::from_str::<Vec<u32>>("{}").unwrap_err();
        let error = AppError::from(err);
        assert!(matches!(error, AppError::Validation(_)));
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_is_cancelled() {
        assert!(AppError::Cancelled.is_cancelled());
        assert!(!AppError::UpstreamStatus(404).is_cancelled());
    }
}
