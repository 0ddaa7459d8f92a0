//! Air quality routes
//!
//! - GET /api/v1/air - Panel snapshot with derived statistics
//! - PUT /api/v1/air/selection - Select a neighborhood

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SelectNeighborhoodRequest;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{AirSnapshot, Tab};
use crate::websocket::WsEvent;

/// GET /api/v1/air
pub async fn get_air(State(state): State<Arc<AppState>>) -> Json<AirSnapshot> {
    Json(state.engine.air_snapshot().await)
}

/// PUT /api/v1/air/selection
pub async fn select_neighborhood(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectNeighborhoodRequest>,
) -> ApiResult<Json<AirSnapshot>> {
    let snapshot = state.engine.select_neighborhood(req.id).await?;
    state
        .ws_hub
        .publish(WsEvent::panel_changed(Tab::Air, "select_neighborhood"));
    Ok(Json(snapshot))
}
