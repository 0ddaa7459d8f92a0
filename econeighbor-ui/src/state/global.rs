//! Global application state
//!
//! Reactive state shared across pages, plus the snapshot types mirrored
//! from the API wire format.

use leptos::*;
use serde::{Deserialize, Serialize};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Eco point total from the latest waste snapshot
    pub points: RwSignal<u32>,
    /// Day streak from the latest waste snapshot
    pub streak: RwSignal<u32>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        points: create_rw_signal(0),
        streak: create_rw_signal(0),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
    };
    provide_context(state);
}

// ============ Snapshot types (API wire format) ============

/// One neighborhood marker on the map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodView {
    pub id: u32,
    pub name: String,
    pub aqi: u32,
    pub band: String,
    pub lat_pct: f32,
    pub lng_pct: f32,
}

/// Detail card for the selected area
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaDetail {
    pub id: u32,
    pub name: String,
    pub aqi: u32,
    pub band: String,
    pub band_label: String,
    pub advisory: String,
}

/// Air quality panel snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AirSnapshot {
    pub average_aqi: u32,
    pub average_band: String,
    pub cleanest: Option<NeighborhoodView>,
    pub alert_count: usize,
    pub neighborhoods: Vec<NeighborhoodView>,
    pub selected: Option<AreaDetail>,
}

/// One habit in the checklist
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u32,
    pub label: String,
    pub points: u32,
    pub category: String,
    #[serde(default)]
    pub completed: bool,
}

/// A static saving tip card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavingTip {
    pub title: String,
    pub description: String,
    pub savings: String,
    pub category: String,
}

/// Resource savings panel snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourcesSnapshot {
    pub overall_score: u8,
    pub energy_score: u8,
    pub water_score: u8,
    pub completed_count: usize,
    pub habits: Vec<Habit>,
    pub tips: Vec<SavingTip>,
}

/// One catalog entry in the item grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WasteItemView {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub bin: String,
    pub icon: String,
}

/// Detail view of an inspected item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub category_label: String,
    pub category_description: String,
    pub bin: String,
    pub icon: String,
    pub tip: String,
}

/// One reward with its derived status
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardView {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub threshold: u32,
    pub status: String,
}

/// Category metadata for the filter chips
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryView {
    pub category: String,
    pub label: String,
    pub bin: String,
    pub description: String,
}

/// Waste guide panel snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WasteSnapshot {
    pub points: u32,
    pub streak: u32,
    pub rewards_claimed: usize,
    pub rewards_total: usize,
    pub search_query: String,
    pub category_filter: Option<String>,
    pub categories: Vec<CategoryView>,
    pub items: Vec<WasteItemView>,
    pub selected: Option<ItemDetail>,
    pub rewards: Vec<RewardView>,
}

/// Claim attempt response
#[derive(Clone, Debug, Deserialize)]
pub struct ClaimResponse {
    pub outcome: String,
    pub snapshot: WasteSnapshot,
}
