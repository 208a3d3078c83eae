//! Health check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use comment_relay_upstream::CommentsApi;

use crate::state::GatewayState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Origin requests are relayed to.
    pub upstream: String,
    /// Whether writes will carry a bearer token.
    pub token_configured: bool,
}

/// Health check handler.
///
/// Reports the relay target without contacting it. A missing token is not
/// unhealthy, since reads still work, but it is visible here.
///
/// ```text
/// GET /health
///
/// Response: 200 OK
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "upstream": "https://gorest.co.in/",
///   "token_configured": true
/// }
/// ```
pub async fn health<A>(State(state): State<Arc<GatewayState<A>>>) -> Json<HealthResponse>
where
    A: CommentsApi + 'static,
{
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        upstream: state.upstream_origin.clone(),
        token_configured: state.config.upstream_token.is_some(),
    })
}
