//! # Health Check Handlers
//!
//! Liveness banner and basic health endpoint for monitoring and platform
//! smoke checks.

use axum::response::Html;
use axum::Json;
use serde::Serialize;

/// Basic health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
}

/// Home banner: GET /
///
/// Human-readable confirmation that the service is up.
pub async fn home() -> Html<&'static str> {
    Html(
        "<h1>TaskTrack está a correr!</h1>\
         <p>Use os endpoints /tasktrack/... para testar.</p>",
    )
}

/// Basic health check endpoint: GET /health
///
/// Returns OK whenever the service is running; there are no external
/// dependencies to probe.
pub async fn basic_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
