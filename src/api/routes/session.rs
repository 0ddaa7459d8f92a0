//! Shell routes
//!
//! - GET /api/v1/session - Current shell state
//! - PUT /api/v1/session/tab - Switch the visible panel

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SetTabRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::{SessionSnapshot, Tab};
use crate::websocket::WsEvent;

/// GET /api/v1/session
pub async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(state.engine.session_snapshot().await)
}

/// PUT /api/v1/session/tab
pub async fn set_tab(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetTabRequest>,
) -> ApiResult<Json<SessionSnapshot>> {
    let tab = parse_tab(&req.tab)?;
    let snapshot = state.engine.set_active_tab(tab).await;
    state.ws_hub.publish(WsEvent::tab_changed(tab));
    Ok(Json(snapshot))
}

/// Parse a tab name string
pub(crate) fn parse_tab(s: &str) -> ApiResult<Tab> {
    match s.to_lowercase().as_str() {
        "air" => Ok(Tab::Air),
        "resources" => Ok(Tab::Resources),
        "waste" => Ok(Tab::Waste),
        _ => Err(ApiError::Validation(format!(
            "Invalid tab: {}. Use air, resources, or waste",
            s
        ))),
    }
}
