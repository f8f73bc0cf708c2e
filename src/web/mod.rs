//! # Web API Module
//!
//! Axum-based HTTP transport for the TaskTrack activity provider. The
//! transport is a thin shim: handlers parse the request leniently, call the
//! facade, and serialize the result.
//!
//! ## Core Components
//!
//! - [`routes`] - HTTP route definitions
//! - [`handlers`] - Request handlers for each endpoint group
//! - [`state`] - Shared application state (configuration + facade)
//! - [`response_types`] - API error types and HTTP status mapping

pub mod handlers;
pub mod response_types;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Create the main Axum application with all routes and middleware
///
/// # Arguments
/// * `app_state` - Shared application state (configuration and facade)
///
/// # Returns
/// * `Router` - Configured Axum router ready for serving
pub fn create_app(app_state: AppState) -> Router {
    let request_timeout =
        std::time::Duration::from_millis(app_state.config.web.request_timeout_ms);

    Router::new()
        .merge(routes::root_routes())
        .nest("/tasktrack", routes::tasktrack_routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
