//! Application-wide error type and its HTTP mapping.
//!
//! Handlers return [`AppError`]; only [`IntoResponse`] decides which status
//! code and body the caller sees. Internal details are logged, never sent.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::application::services::url_validator::InvalidUrl;

/// Body returned for every error response.
///
/// Kept flat (`{"error": "..."}`) because existing clients match on it.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing, malformed, or unresolvable URL. The reason is for logs only.
    #[error("invalid url")]
    InvalidUrl { reason: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-visible body. Internal errors get a generic message.
    pub fn to_error_body(&self) -> ErrorBody {
        let error = match self {
            AppError::Internal { .. } => "internal server error".to_string(),
            other => other.to_string(),
        };
        ErrorBody { error }
    }
}

impl From<InvalidUrl> for AppError {
    fn from(err: InvalidUrl) -> Self {
        AppError::invalid_url(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidUrl { reason } => {
                tracing::debug!(%reason, "Rejected URL");
            }
            AppError::Internal { message, details } => {
                tracing::error!(%details, "{}", message);
            }
            AppError::NotFound { details, .. } => {
                tracing::debug!(%details, "Lookup miss");
            }
            AppError::BadRequest { .. } => {}
        }

        (self.status(), Json(self.to_error_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_url_hides_reason() {
        let err = AppError::invalid_url("dns lookup for nope.invalid failed");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_body().error, "invalid url");
    }

    #[test]
    fn test_internal_error_is_generic() {
        let err = AppError::internal(
            "Failed to generate unique code",
            json!({ "attempts": 10 }),
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_error_body().error, "internal server error");
        assert_eq!(err.to_string(), "Failed to generate unique code");
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found("short url not found", json!({ "code": "abc" }));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_error_body().error, "short url not found");
    }

    #[test]
    fn test_from_invalid_url() {
        let err: AppError = InvalidUrl::Missing.into();
        assert!(matches!(err, AppError::InvalidUrl { .. }));
    }
}
