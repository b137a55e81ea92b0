//! Lot Engine Binary
//!
//! Starts the lot size calculation API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin lot-engine
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG_PATH`: Path to the YAML config file (default: config.yaml;
//!   a missing default file means built-in defaults)
//! - `RUST_LOG`: Log level override (default: from config)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use lot_engine::config;
use lot_engine::infrastructure::http::{AppState, create_router};
use lot_engine::observability;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("CONFIG_PATH").ok();
    let config = config::load_config(config_path.as_deref())?;

    observability::init_tracing(&config.logging);
    tracing::info!("Starting lot engine");

    let registry = config::build_registry(&config.instruments)?;
    tracing::info!(instruments = registry.len(), "Instrument registry ready");

    let state = AppState {
        registry: Arc::new(registry),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.http_port)
        .parse()
        .context("invalid bind address")?;
    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind HTTP listener")?;
    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
