//! Validation error types.

use thiserror::Error;

/// A result type using `ValidationError`.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised while validating an inbound request, before any upstream call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more of `id`, `name`, `email`, `body` is absent or falsy.
    #[error("Missing required fields")]
    MissingFields,
}
