//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

use comment_relay_upstream::CommentsApi;

use crate::handlers::{comments, health};
use crate::state::GatewayState;
use crate::timing;

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// - `GET /` - Always 500 `Please send post ID`
/// - `GET /health` - Health check
/// - `GET /:post_id/comments` - List comments of a post
/// - `POST /:post_id/comments` - Add a comment to a post
///
/// The comment routes also match with a trailing slash.
///
/// # Middleware (outermost first)
///
/// Request timing, panic catcher, CORS, request body limit.
pub fn create_router<A>(state: GatewayState<A>) -> Router
where
    A: CommentsApi + 'static,
{
    // Extract config values before moving state
    let cors = build_cors_layer(&state.config.cors_origins);
    let max_body_bytes = state.config.max_body_bytes;

    let state = Arc::new(state);

    Router::new()
        .route("/", get(comments::missing_post_id))
        .route("/health", get(health::health::<A>))
        .route(
            "/:post_id/comments",
            get(comments::list_comments::<A>).post(comments::add_comment::<A>),
        )
        .route(
            "/:post_id/comments/",
            get(comments::list_comments::<A>).post(comments::add_comment::<A>),
        )
        // Middleware
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(cors)
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(timing::log_request_time))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
