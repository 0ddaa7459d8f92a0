//! Data transfer objects
//!
//! Request and response types for the API endpoints. Panel snapshots from
//! [`crate::dashboard::snapshot`] are returned directly; this module holds
//! the intent-event request bodies and the handful of wrapper responses.

use serde::{Deserialize, Serialize};

use crate::dashboard::WasteSnapshot;

// ============================================
// SHELL DTOs
// ============================================

/// Switch the visible panel
#[derive(Debug, Deserialize)]
pub struct SetTabRequest {
    /// Tab name: "air", "resources", or "waste"
    pub tab: String,
}

// ============================================
// AIR DTOs
// ============================================

/// Select a neighborhood on the map
#[derive(Debug, Deserialize)]
pub struct SelectNeighborhoodRequest {
    /// Neighborhood id from the fixed table
    pub id: u32,
}

// ============================================
// WASTE DTOs
// ============================================

/// Replace the catalog search query
#[derive(Debug, Deserialize)]
pub struct SetSearchRequest {
    /// Free-text query; empty clears the search
    #[serde(default)]
    pub query: String,
}

/// Restrict the catalog to one category
#[derive(Debug, Deserialize)]
pub struct SetFilterRequest {
    /// Category name, or null/absent to clear the restriction
    #[serde(default)]
    pub category: Option<String>,
}

/// Outcome of a claim attempt, alongside the refreshed panel
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    /// "claimed", "already_claimed", or "not_eligible"
    pub outcome: String,
    /// Waste panel snapshot after the attempt
    pub snapshot: WasteSnapshot,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Session store status
    pub session: String,
    /// Connected dashboard count
    pub connections: usize,
    /// When the last intent event was applied (RFC 3339), if any
    pub last_event_at: Option<String>,
    /// Seconds since server start
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
