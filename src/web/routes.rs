//! # Web API Route Definitions
//!
//! HTTP route structure for the TaskTrack activity provider. Activity
//! endpoints live under `/tasktrack`; the home banner and health check sit
//! at the root.

use crate::web::handlers;
use crate::web::state::AppState;
use axum::routing::{get, post};
use axum::Router;

/// Create the activity routes, mounted under `/tasktrack`
///
/// - Config API - configuration page and parameter schema
/// - Deploy API - task creation for an activity/user/plan
/// - Tasks API - sorted task listing and strategy discovery
/// - Analytics API - metric descriptors and mock metric values
pub fn tasktrack_routes() -> Router<AppState> {
    Router::new()
        // Config API
        .route("/config", get(handlers::config::config_page))
        .route("/json-params", get(handlers::config::json_params))
        // Deploy API
        .route("/deploy", post(handlers::tasks::deploy_activity))
        // Tasks API
        .route("/tasks", get(handlers::tasks::list_tasks))
        .route(
            "/sort-strategies",
            get(handlers::tasks::get_sort_strategies),
        )
        // Analytics API (read-only descriptors, mock values)
        .route("/analytics-list", get(handlers::analytics::analytics_list))
        .route("/analytics", post(handlers::analytics::generate_analytics))
}

/// Create root-level routes
///
/// - `/` - HTML banner confirming the service is up
/// - `/health` - Basic health check
pub fn root_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::home))
        .route("/health", get(handlers::health::basic_health))
}
