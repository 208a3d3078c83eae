//! Upstream error types.

use thiserror::Error;

/// A result type using `UpstreamError`.
pub type Result<T> = std::result::Result<T, UpstreamError>;

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("{0}")]
    Unreachable(String),

    /// The upstream answered with a non-success status code.
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The upstream answered with a success status but the body was not JSON.
    #[error("invalid response body: {0}")]
    Malformed(String),

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl UpstreamError {
    /// Returns `true` if the upstream reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404))
    }

    /// Returns `true` if the upstream rejected our credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401))
    }

    /// The upstream status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}
