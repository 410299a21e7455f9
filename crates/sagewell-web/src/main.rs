//! Sagewell Web Server
//!
//! Run with: cargo run -p sagewell-web

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sagewell_web::config::Config;
use sagewell_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Sagewell Web Server...");

    let config = Config::load().context("loading configuration")?;
    if config.auth.tokens.is_empty() {
        warn!("no auth tokens configured; protected routes are open");
    }
    let addr = config.bind_addr();

    let state = AppState::with_classics(config);
    info!(passages = state.corpus.len(), "corpus loaded");

    let app = sagewell_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}
