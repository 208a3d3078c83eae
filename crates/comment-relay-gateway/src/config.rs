//! Gateway configuration types.
//!
//! Values come from the environment at startup; nothing is reloaded at runtime.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use comment_relay_upstream::{UpstreamConfig, DEFAULT_BASE_URL};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Configuration for the gateway service.
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    /// Listen address (e.g., "0.0.0.0:3000").
    #[serde(default = "GatewayConfig::default_listen_addr")]
    pub listen_addr: String,

    /// Allowed CORS origins.
    #[serde(default = "GatewayConfig::default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    #[serde(default = "GatewayConfig::default_max_body")]
    pub max_body_bytes: usize,

    /// Upstream API root.
    #[serde(default = "GatewayConfig::default_upstream_base_url")]
    pub upstream_base_url: String,

    /// Bearer token sent with upstream writes.
    #[serde(default)]
    pub upstream_token: Option<String>,
}

impl GatewayConfig {
    fn default_listen_addr() -> String {
        "0.0.0.0:3000".to_string()
    }

    fn default_cors_origins() -> Vec<String> {
        vec!["*".to_string()]
    }

    const fn default_max_body() -> usize {
        1024 * 1024 // 1 MB
    }

    fn default_upstream_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    /// Load configuration from process environment variables.
    ///
    /// Reads `LISTEN_ADDR`, `CORS_ORIGINS` (comma separated), `MAX_BODY_BYTES`,
    /// `UPSTREAM_BASE_URL` and `UPSTREAM_TOKEN`. Unset variables keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `MAX_BODY_BYTES` is not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `MAX_BODY_BYTES` is not a non-negative integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("LISTEN_ADDR") {
            config.listen_addr = addr;
        }

        if let Some(origins) = lookup("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(raw) = lookup("MAX_BODY_BYTES") {
            config.max_body_bytes = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "MAX_BODY_BYTES",
                value: raw.clone(),
            })?;
        }

        if let Some(url) = lookup("UPSTREAM_BASE_URL") {
            config.upstream_base_url = url;
        }

        config.upstream_token = lookup("UPSTREAM_TOKEN").filter(|t| !t.trim().is_empty());

        Ok(config)
    }

    /// Build the upstream client configuration.
    #[must_use]
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig {
            base_url: self.upstream_base_url.clone(),
            token: self.upstream_token.clone(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            cors_origins: Self::default_cors_origins(),
            max_body_bytes: Self::default_max_body(),
            upstream_base_url: Self::default_upstream_base_url(),
            upstream_token: None,
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("listen_addr", &self.listen_addr)
            .field("cors_origins", &self.cors_origins)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("upstream_base_url", &self.upstream_base_url)
            .field(
                "upstream_token",
                &self.upstream_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
