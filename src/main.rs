//! # TaskTrack Server
//!
//! Binary entry point: initialize logging, load configuration, build the
//! application state, and serve the axum app until shutdown.

use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use tasktrack::config::TaskTrackConfig;
use tasktrack::logging::init_structured_logging;
use tasktrack::web::{create_app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging();

    let config = Arc::new(TaskTrackConfig::load().context("failed to load configuration")?);
    let bind_address = config.web.bind_address.clone();

    let app_state = AppState::new(config.clone());
    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    info!(
        address = %bind_address,
        environment = %config.environment,
        "TaskTrack server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
