//! Waste guide routes
//!
//! - GET /api/v1/waste - Panel snapshot under the active filters
//! - PUT /api/v1/waste/search - Replace the search query
//! - PUT /api/v1/waste/filter - Set or clear the category filter
//! - POST /api/v1/waste/items/:id/inspect - Open an item's detail view
//! - DELETE /api/v1/waste/selection - Close the detail view
//! - POST /api/v1/waste/rewards/:id/claim - Attempt a reward claim

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ClaimResponse, SetFilterRequest, SetSearchRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::{Tab, WasteSnapshot};
use crate::waste::{ClaimOutcome, WasteCategory};
use crate::websocket::WsEvent;

/// GET /api/v1/waste
pub async fn get_waste(State(state): State<Arc<AppState>>) -> Json<WasteSnapshot> {
    Json(state.engine.waste_snapshot().await)
}

/// PUT /api/v1/waste/search
pub async fn set_search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetSearchRequest>,
) -> Json<WasteSnapshot> {
    let snapshot = state.engine.set_search_query(req.query).await;
    state
        .ws_hub
        .publish(WsEvent::panel_changed(Tab::Waste, "set_search_query"));
    Json(snapshot)
}

/// PUT /api/v1/waste/filter
pub async fn set_filter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetFilterRequest>,
) -> ApiResult<Json<WasteSnapshot>> {
    let category = req.category.as_deref().map(parse_category).transpose()?;
    let snapshot = state.engine.set_category_filter(category).await;
    state
        .ws_hub
        .publish(WsEvent::panel_changed(Tab::Waste, "set_category_filter"));
    Ok(Json(snapshot))
}

/// POST /api/v1/waste/items/:id/inspect
pub async fn inspect_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ApiResult<Json<WasteSnapshot>> {
    let snapshot = state.engine.select_item(id).await?;
    state
        .ws_hub
        .publish(WsEvent::panel_changed(Tab::Waste, "select_item"));
    Ok(Json(snapshot))
}

/// DELETE /api/v1/waste/selection
pub async fn clear_selection(State(state): State<Arc<AppState>>) -> Json<WasteSnapshot> {
    let snapshot = state.engine.clear_item().await;
    state
        .ws_hub
        .publish(WsEvent::panel_changed(Tab::Waste, "clear_item"));
    Json(snapshot)
}

/// POST /api/v1/waste/rewards/:id/claim
///
/// A below-threshold attempt is a 200 with outcome "not_eligible", not an
/// error; only unknown reward ids fail.
pub async fn claim_reward(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ApiResult<Json<ClaimResponse>> {
    let (outcome, snapshot) = state.engine.claim_reward(id).await?;
    if outcome == ClaimOutcome::Claimed {
        state
            .ws_hub
            .publish(WsEvent::panel_changed(Tab::Waste, "claim_reward"));
    }
    Ok(Json(ClaimResponse {
        outcome: outcome_label(outcome).to_string(),
        snapshot,
    }))
}

/// Parse a category name string
pub(crate) fn parse_category(s: &str) -> ApiResult<WasteCategory> {
    match s.to_lowercase().as_str() {
        "organic" => Ok(WasteCategory::Organic),
        "recyclable" => Ok(WasteCategory::Recyclable),
        "hazardous" => Ok(WasteCategory::Hazardous),
        "general" => Ok(WasteCategory::General),
        _ => Err(ApiError::Validation(format!(
            "Invalid category: {}. Use organic, recyclable, hazardous, or general",
            s
        ))),
    }
}

/// Wire label for a claim outcome
fn outcome_label(outcome: ClaimOutcome) -> &'static str {
    match outcome {
        ClaimOutcome::Claimed => "claimed",
        ClaimOutcome::AlreadyClaimed => "already_claimed",
        ClaimOutcome::NotEligible => "not_eligible",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert!(matches!(parse_category("organic"), Ok(WasteCategory::Organic)));
        assert!(matches!(parse_category("HAZARDOUS"), Ok(WasteCategory::Hazardous)));
        assert!(parse_category("nuclear").is_err());
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(outcome_label(ClaimOutcome::Claimed), "claimed");
        assert_eq!(outcome_label(ClaimOutcome::AlreadyClaimed), "already_claimed");
        assert_eq!(outcome_label(ClaimOutcome::NotEligible), "not_eligible");
    }
}
