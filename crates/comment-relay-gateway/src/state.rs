//! Gateway application state.
//!
//! This module defines the shared state that is available to all request handlers.

use std::sync::Arc;

use comment_relay_upstream::CommentsApi;

use crate::config::GatewayConfig;

/// Shared application state for the gateway.
///
/// Read-only after startup; requests never share mutable data.
pub struct GatewayState<A>
where
    A: CommentsApi,
{
    /// The upstream comments API.
    pub api: Arc<A>,
    /// Gateway configuration.
    pub config: GatewayConfig,
    /// Upstream origin as shown in error messages, e.g. `https://gorest.co.in/`.
    pub upstream_origin: String,
}

impl<A> GatewayState<A>
where
    A: CommentsApi,
{
    /// Create a new gateway state.
    #[must_use]
    pub fn new(api: Arc<A>, config: GatewayConfig) -> Self {
        let upstream_origin = config.upstream().display_origin();
        Self {
            api,
            config,
            upstream_origin,
        }
    }
}

impl<A> Clone for GatewayState<A>
where
    A: CommentsApi,
{
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            config: self.config.clone(),
            upstream_origin: self.upstream_origin.clone(),
        }
    }
}
