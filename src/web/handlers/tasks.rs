//! # Task Handlers
//!
//! HTTP handlers for task deployment, sorted listing, and sort strategy
//! discovery. All domain decisions live in the facade; handlers only parse
//! the request and map errors.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::facade::{DeployResponse, SortStrategiesResponse, TaskListResponse};
use crate::web::handlers::parse_lenient_body;
use crate::web::response_types::ApiResult;
use crate::web::state::AppState;

/// Query parameters for task listing
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// Sort strategy key; unknown keys fall back to `default`
    pub sort_by: Option<String>,
}

/// Deploy the activity: POST /tasktrack/deploy
///
/// Creates one task from the (optional) JSON body. Missing fields take the
/// platform defaults; a malformed body counts as an empty one.
pub async fn deploy_activity(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<DeployResponse>> {
    let data = parse_lenient_body(&body);
    info!("Deploying activity task");

    let response = state.facade.deploy_activity(&data).await?;
    Ok(Json(response))
}

/// List tasks: GET /tasktrack/tasks?sort_by=
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Json<TaskListResponse> {
    let sort_by = query.sort_by.as_deref().unwrap_or("default");
    Json(state.facade.list_tasks(sort_by).await)
}

/// List sort strategies: GET /tasktrack/sort-strategies
pub async fn get_sort_strategies(State(state): State<AppState>) -> Json<SortStrategiesResponse> {
    Json(state.facade.sort_strategies())
}
