//! Comment relay gateway entry point.
//!
//! Configuration comes from the environment; see `GatewayConfig::from_env`.
//! `UPSTREAM_TOKEN` carries the bearer credential for upstream writes.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use comment_relay_gateway::{create_router, GatewayConfig, GatewayState};
use comment_relay_upstream::HttpCommentsApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,comment_relay=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting comment relay gateway");

    let config = GatewayConfig::from_env()?;
    tracing::info!(
        listen_addr = %config.listen_addr,
        upstream_base_url = %config.upstream_base_url,
        cors_origins = ?config.cors_origins,
        max_body_bytes = config.max_body_bytes,
        has_token = config.upstream_token.is_some(),
        "Gateway configuration loaded"
    );

    if config.upstream_token.is_none() {
        tracing::warn!("No UPSTREAM_TOKEN set - comment creation will be rejected upstream");
    }

    let api = Arc::new(HttpCommentsApi::new(config.upstream())?);
    let listen_addr = config.listen_addr.clone();

    let app = create_router(GatewayState::new(api, config));

    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
