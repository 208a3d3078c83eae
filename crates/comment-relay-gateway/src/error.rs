//! API error types and responses.
//!
//! Relay failures are answered in plain text; validation failures carry a
//! small JSON payload. Both shapes are part of the public contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use comment_relay_core::ValidationError;
use comment_relay_upstream::UpstreamError;

/// Body returned by the root route.
pub const MISSING_POST_ID: &str = "Please send post ID";

/// Body returned when the upstream does not know the post.
pub const POST_NOT_FOUND: &str = "Post not found.";

/// API error type that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource was not found (plain text body).
    #[error("{0}")]
    NotFound(String),

    /// Internal or upstream failure (plain text body).
    #[error("{0}")]
    Internal(String),

    /// The request body failed validation (JSON body).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// JSON error payload for validation failures.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl ApiError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Map a failed comment listing.
    ///
    /// A 404 from the upstream becomes a local 404; anything else hides the
    /// detail behind a fixed message naming the upstream origin.
    #[must_use]
    pub fn list_failure(err: &UpstreamError, upstream_origin: &str) -> Self {
        if err.is_not_found() {
            return Self::NotFound(POST_NOT_FOUND.to_string());
        }

        tracing::warn!(error = %err, "Failed to fetch comments from upstream");
        Self::Internal(format!("Error fetching data from {upstream_origin}"))
    }

    /// Map a failed comment creation.
    ///
    /// Every failure is answered with 500 and the error's own message. A
    /// rejected token is logged separately but is not reported to the caller
    /// as 401.
    #[must_use]
    pub fn create_failure(err: UpstreamError) -> Self {
        tracing::error!(error = ?err, "Failed to create comment upstream");
        if err.is_unauthorized() {
            tracing::warn!("Upstream rejected authorization; check UPSTREAM_TOKEN");
        }

        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::NotFound(message) | Self::Internal(message) => {
                (status, message).into_response()
            }
            Self::Validation(err) => {
                let body = ErrorResponse {
                    error: err.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::LogCapture;

    #[test]
    fn error_status_codes() {
        assert_eq!(
            ApiError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(ValidationError::MissingFields).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn list_failure_mapping() {
        let not_found = ApiError::list_failure(&UpstreamError::Status(404), "https://gorest.co.in/");
        assert!(matches!(not_found, ApiError::NotFound(ref m) if m == "Post not found."));

        for err in [
            UpstreamError::Status(500),
            UpstreamError::Status(401),
            UpstreamError::Unreachable("connection refused".into()),
            UpstreamError::Malformed("expected value".into()),
        ] {
            let mapped = ApiError::list_failure(&err, "https://gorest.co.in/");
            assert!(
                matches!(mapped, ApiError::Internal(ref m) if m == "Error fetching data from https://gorest.co.in/")
            );
        }
    }

    #[test]
    fn create_failure_keeps_message() {
        let mapped = ApiError::create_failure(UpstreamError::Status(401));
        assert_eq!(mapped.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(mapped.to_string(), "Request failed with status code 401");

        let mapped = ApiError::create_failure(UpstreamError::Unreachable("boom".into()));
        assert_eq!(mapped.to_string(), "boom");
    }

    #[test]
    fn validation_message() {
        let err = ApiError::from(ValidationError::MissingFields);
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn create_failure_logs_raw_error() {
        let logs = LogCapture::default();
        tracing::subscriber::with_default(logs.subscriber(), || {
            let _ = ApiError::create_failure(UpstreamError::Status(500));
        });

        let errors = logs.lines_containing("Failed to create comment upstream");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ERROR"), "{}", errors[0]);
        assert!(errors[0].contains("Status(500)"), "{}", errors[0]);
        assert!(logs.lines_containing("Upstream rejected authorization").is_empty());
    }

    #[test]
    fn create_failure_flags_rejected_token() {
        let logs = LogCapture::default();
        tracing::subscriber::with_default(logs.subscriber(), || {
            let _ = ApiError::create_failure(UpstreamError::Status(401));
        });

        assert_eq!(logs.lines_containing("Failed to create comment upstream").len(), 1);
        let warnings = logs.lines_containing("Upstream rejected authorization");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("WARN"), "{}", warnings[0]);
    }
}
