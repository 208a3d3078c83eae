//! HTTP relay for the upstream comments API.
//!
//! Two endpoints forward to a fixed public REST API and translate a handful
//! of failure modes into status codes:
//!
//! - `GET /:post_id/comments` relays `GET {base}/posts/{post_id}/comments`
//! - `POST /:post_id/comments` validates the body, then relays
//!   `POST {base}/posts/{post_id}/comments` with the configured bearer token
//!
//! Every request is timed and logged once.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Clients (HTTP)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    comment-relay-gateway                     │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐   │
//! │  │   Timing    │ │   Router    │ │   Relay handlers    │   │
//! │  │  middleware │ │             │ │   + error mapping   │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                    ┌──────────────────┐
//!                    │  Upstream API    │
//!                    │  (CommentsApi)   │
//!                    └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use comment_relay_gateway::{create_router, GatewayConfig, GatewayState};
//! use comment_relay_upstream::HttpCommentsApi;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::from_env()?;
//! let api = Arc::new(HttpCommentsApi::new(config.upstream())?);
//!
//! let listen_addr = config.listen_addr.clone();
//! let app = create_router(GatewayState::new(api, config));
//!
//! let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod timing;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, GatewayConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::GatewayState;
