//! # Analytics Handlers
//!
//! Read-only endpoints for the analytics contract: the fixed descriptor list
//! and mock metric values for an activity/user pair.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::facade::{AnalyticsListResponse, AnalyticsReport, TaskTrackFacade};
use crate::web::handlers::parse_lenient_body;
use crate::web::state::AppState;

/// List available analytics: GET /tasktrack/analytics-list
pub async fn analytics_list(State(state): State<AppState>) -> Json<AnalyticsListResponse> {
    Json(state.facade.analytics_list())
}

/// Generate analytics for one activity/user pair: POST /tasktrack/analytics
///
/// Body fields `activityID` and `userID` are optional; defaults mirror the
/// platform's example payload.
pub async fn generate_analytics(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<AnalyticsReport> {
    let data = parse_lenient_body(&body);
    let (default_activity, default_user) = TaskTrackFacade::default_analytics_ids();

    let activity_id = data
        .get("activityID")
        .and_then(Value::as_str)
        .unwrap_or(default_activity);
    let user_id = data
        .get("userID")
        .and_then(Value::as_str)
        .unwrap_or(default_user);

    Json(state.facade.generate_analytics(activity_id, user_id))
}
