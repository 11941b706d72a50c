//! Grundatlas HTTP Server Binary
//!
//! Main entry point for the grundatlas REST API server. It loads the rate
//! dataset, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (dataset at data/grundsteuer-rates.json)
//! cargo run --bin grundatlas-server
//!
//! # Point at another dataset
//! GRUNDATLAS_DATA=/srv/rates.json cargo run --bin grundatlas-server
//! ```
//!
//! # Configuration
//!
//! Read from `grundatlas.toml` when present; every setting has an
//! environment override:
//!
//! - `GRUNDATLAS_HOST`: Server host (default: 0.0.0.0)
//! - `GRUNDATLAS_PORT`: Server port (default: 8080)
//! - `GRUNDATLAS_DATA`: Dataset path (default: data/grundsteuer-rates.json)
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use grundatlas::config::Config;
use grundatlas::dataset::DatasetStore;
use grundatlas::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting grundatlas HTTP server");

    // Load configuration (file + environment overrides)
    let config = Config::load().context("Failed to load configuration")?;

    // Load the rate dataset once; the core recomputes everything else on demand
    let store = DatasetStore::load_from_path(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset from {}", config.dataset.path))?;
    info!(
        "Dataset loaded: {} municipalities, checksum {}",
        store.len(),
        store.checksum()
    );

    // Create application state and router
    let state = AppState::new(Arc::new(store));
    let app = create_router(state);

    // Determine bind address
    let addr: SocketAddr = config
        .bind_addr()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_addr()))?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
