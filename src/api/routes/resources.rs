//! Resource savings routes
//!
//! - GET /api/v1/resources - Panel snapshot with all three scores
//! - POST /api/v1/resources/habits/:id/toggle - Flip a habit's completion

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{ResourcesSnapshot, Tab};
use crate::websocket::WsEvent;

/// GET /api/v1/resources
pub async fn get_resources(State(state): State<Arc<AppState>>) -> Json<ResourcesSnapshot> {
    Json(state.engine.resources_snapshot().await)
}

/// POST /api/v1/resources/habits/:id/toggle
pub async fn toggle_habit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ApiResult<Json<ResourcesSnapshot>> {
    let snapshot = state.engine.toggle_habit(id).await?;
    state
        .ws_hub
        .publish(WsEvent::panel_changed(Tab::Resources, "toggle_habit"));
    Ok(Json(snapshot))
}
