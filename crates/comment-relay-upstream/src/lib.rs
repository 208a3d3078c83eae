//! Client for the upstream comments API.
//!
//! The relay never stores anything itself: every inbound request turns into
//! exactly one call through [`CommentsApi`], and the upstream body comes back
//! verbatim as a `serde_json::Value`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │   Gateway        │────▶│   CommentsApi    │
//! │   handlers       │     │   (trait)        │
//! └──────────────────┘     └────────┬─────────┘
//!                                   │
//!                          ┌────────▼─────────┐
//!                          │  HttpCommentsApi │
//!                          │  (reqwest)       │
//!                          └────────┬─────────┘
//!                                   │ HTTPS
//!                          ┌────────▼─────────┐
//!                          │   Upstream       │
//!                          │   /posts/{id}/.. │
//!                          └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use comment_relay_core::PostId;
//! use comment_relay_upstream::{CommentsApi, HttpCommentsApi, UpstreamConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = UpstreamConfig {
//!     base_url: "https://gorest.co.in/public/v2".to_string(),
//!     token: std::env::var("UPSTREAM_TOKEN").ok(),
//! };
//!
//! let api = HttpCommentsApi::new(config)?;
//! let comments = api.list_comments(&PostId::new("18525")).await?;
//! println!("{comments}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fmt;

pub mod client;
pub mod error;

pub use client::{CommentsApi, HttpCommentsApi};
pub use error::{Result, UpstreamError};

use comment_relay_core::PostId;

/// Default upstream API root.
pub const DEFAULT_BASE_URL: &str = "https://gorest.co.in/public/v2";

/// Configuration for the upstream comments API.
#[derive(Clone)]
pub struct UpstreamConfig {
    /// API root, e.g. `https://gorest.co.in/public/v2`.
    pub base_url: String,
    /// Bearer token for write operations. Never logged.
    pub token: Option<String>,
}

impl UpstreamConfig {
    /// Get the comments endpoint for a post.
    #[must_use]
    pub fn comments_url(&self, post_id: &PostId) -> String {
        format!(
            "{}/posts/{}/comments",
            self.base_url.trim_end_matches('/'),
            post_id
        )
    }

    /// Get the origin of the API root with a trailing slash, e.g.
    /// `https://gorest.co.in/`. Used in caller-facing error messages.
    #[must_use]
    pub fn display_origin(&self) -> String {
        reqwest::Url::parse(&self.base_url).map_or_else(
            |_| self.base_url.clone(),
            |url| format!("{}/", url.origin().ascii_serialization()),
        )
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = UpstreamConfig::default();
        assert_eq!(config.base_url, "https://gorest.co.in/public/v2");
        assert!(config.token.is_none());
    }

    #[test]
    fn config_urls() {
        let config = UpstreamConfig::default();
        assert_eq!(
            config.comments_url(&PostId::new("18525")),
            "https://gorest.co.in/public/v2/posts/18525/comments"
        );
        assert_eq!(config.display_origin(), "https://gorest.co.in/");
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:9000/public/v2/".to_string(),
            token: None,
        };
        assert_eq!(
            config.comments_url(&PostId::new("1")),
            "http://127.0.0.1:9000/public/v2/posts/1/comments"
        );
        assert_eq!(config.display_origin(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn debug_redacts_token() {
        let config = UpstreamConfig {
            token: Some("super-secret".to_string()),
            ..UpstreamConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
