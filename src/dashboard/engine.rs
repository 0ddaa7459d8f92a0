//! Dashboard engine
//!
//! The engine owns one session behind a `tokio::sync::RwLock`:
//! intent events take the write lock and apply atomically, snapshot reads
//! take the read lock. Events therefore serialize exactly as a
//! single-threaded event loop would, and every event completes (including
//! recomputing the derived statistics in its returned snapshot) before the
//! next one is observed.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use tokio::sync::RwLock;

use crate::waste::{ClaimOutcome, WasteCategory};

use super::error::DashboardResult;
use super::session::{SessionState, Tab};
use super::snapshot::{
    AirSnapshot, ResourcesSnapshot, SessionSnapshot, WasteSnapshot,
};

/// The dashboard engine: session state plus the intent-event surface
pub struct DashboardEngine {
    session: RwLock<SessionState>,
    /// When the last intent event was applied
    last_event_at: Mutex<Option<DateTime<Utc>>>,
}

impl DashboardEngine {
    /// Create an engine over a fresh seeded session
    pub fn new() -> Self {
        Self::with_session(SessionState::seeded())
    }

    /// Create an engine over a prepared session
    pub fn with_session(session: SessionState) -> Self {
        Self {
            session: RwLock::new(session),
            last_event_at: Mutex::new(None),
        }
    }

    fn touch(&self) {
        if let Ok(mut guard) = self.last_event_at.lock() {
            *guard = Some(Utc::now());
        }
    }

    /// When the last intent event was applied, if any
    pub fn last_event_at(&self) -> Option<DateTime<Utc>> {
        self.last_event_at.lock().ok().and_then(|guard| *guard)
    }

    // ============================================
    // SHELL
    // ============================================

    /// Switch the visible panel
    pub async fn set_active_tab(&self, tab: Tab) -> SessionSnapshot {
        let mut session = self.session.write().await;
        session.active_tab = tab;
        self.touch();
        tracing::debug!(tab = %tab, "Switched active tab");
        SessionSnapshot { active_tab: tab }
    }

    /// Current shell state
    pub async fn session_snapshot(&self) -> SessionSnapshot {
        let session = self.session.read().await;
        SessionSnapshot {
            active_tab: session.active_tab,
        }
    }

    // ============================================
    // AIR QUALITY
    // ============================================

    /// Select a neighborhood on the map
    pub async fn select_neighborhood(&self, id: u32) -> DashboardResult<AirSnapshot> {
        let mut session = self.session.write().await;
        session.air.select(id)?;
        self.touch();
        tracing::debug!(neighborhood_id = id, "Selected neighborhood");
        Ok(AirSnapshot::from(&session.air))
    }

    /// Current air quality panel snapshot
    pub async fn air_snapshot(&self) -> AirSnapshot {
        let session = self.session.read().await;
        AirSnapshot::from(&session.air)
    }

    // ============================================
    // RESOURCES
    // ============================================

    /// Flip a habit's completion flag
    pub async fn toggle_habit(&self, id: u32) -> DashboardResult<ResourcesSnapshot> {
        let mut session = self.session.write().await;
        let completed = session.resources.toggle(id)?;
        self.touch();
        tracing::debug!(habit_id = id, completed, "Toggled habit");
        Ok(ResourcesSnapshot::from(&session.resources))
    }

    /// Current resource savings panel snapshot
    pub async fn resources_snapshot(&self) -> ResourcesSnapshot {
        let session = self.session.read().await;
        ResourcesSnapshot::from(&session.resources)
    }

    // ============================================
    // WASTE
    // ============================================

    /// Replace the catalog search query
    pub async fn set_search_query(&self, query: impl Into<String>) -> WasteSnapshot {
        let mut session = self.session.write().await;
        session.waste.set_search_query(query);
        self.touch();
        WasteSnapshot::from(&session.waste)
    }

    /// Restrict the catalog to one category, or clear the restriction
    pub async fn set_category_filter(&self, category: Option<WasteCategory>) -> WasteSnapshot {
        let mut session = self.session.write().await;
        session.waste.set_category_filter(category);
        self.touch();
        WasteSnapshot::from(&session.waste)
    }

    /// Open an item's detail view, awarding inspection points
    pub async fn select_item(&self, id: u32) -> DashboardResult<WasteSnapshot> {
        let mut session = self.session.write().await;
        let points = session.waste.select_item(id)?;
        self.touch();
        tracing::debug!(item_id = id, points, "Inspected waste item");
        Ok(WasteSnapshot::from(&session.waste))
    }

    /// Close the item detail view
    pub async fn clear_item(&self) -> WasteSnapshot {
        let mut session = self.session.write().await;
        session.waste.clear_item();
        self.touch();
        WasteSnapshot::from(&session.waste)
    }

    /// Attempt to claim a reward
    ///
    /// Returns the outcome together with the snapshot so callers can report
    /// a below-threshold attempt without treating it as an error.
    pub async fn claim_reward(&self, id: u32) -> DashboardResult<(ClaimOutcome, WasteSnapshot)> {
        let mut session = self.session.write().await;
        let outcome = session.waste.claim_reward(id)?;
        self.touch();
        tracing::info!(reward_id = id, outcome = ?outcome, "Claim attempt");
        Ok((outcome, WasteSnapshot::from(&session.waste)))
    }

    /// Current waste guide panel snapshot
    pub async fn waste_snapshot(&self) -> WasteSnapshot {
        let session = self.session.read().await;
        WasteSnapshot::from(&session.waste)
    }
}

impl Default for DashboardEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::air::AqiBand;
    use crate::waste::RewardStatus;

    #[tokio::test]
    async fn test_tab_switching() {
        let engine = DashboardEngine::new();
        assert_eq!(engine.session_snapshot().await.active_tab, Tab::Air);

        let snapshot = engine.set_active_tab(Tab::Waste).await;
        assert_eq!(snapshot.active_tab, Tab::Waste);
        assert_eq!(engine.session_snapshot().await.active_tab, Tab::Waste);
    }

    #[tokio::test]
    async fn test_select_neighborhood_returns_updated_snapshot() {
        let engine = DashboardEngine::new();

        let snapshot = engine.select_neighborhood(3).await.unwrap();
        let selected = snapshot.selected.unwrap();
        assert_eq!(selected.name, "Industrial Zone");
        assert_eq!(selected.band, AqiBand::Unhealthy);
    }

    #[tokio::test]
    async fn test_select_unknown_neighborhood_errors() {
        let engine = DashboardEngine::new();
        assert!(engine.select_neighborhood(99).await.is_err());
    }

    #[tokio::test]
    async fn test_toggle_recomputes_scores() {
        let engine = DashboardEngine::new();

        // Habit 4: "Set AC to 24C or higher", 10 energy points of 33 total
        let snapshot = engine.toggle_habit(4).await.unwrap();
        assert_eq!(snapshot.energy_score, 30); // 100 * 10/33 = 30.3 -> 30
        assert_eq!(snapshot.water_score, 0);

        // Toggle back: scores return to zero
        let snapshot = engine.toggle_habit(4).await.unwrap();
        assert_eq!(snapshot.energy_score, 0);
        assert_eq!(snapshot.overall_score, 0);
    }

    #[tokio::test]
    async fn test_search_and_filter_compose() {
        let engine = DashboardEngine::new();

        engine.set_search_query("cans").await;
        let snapshot = engine
            .set_category_filter(Some(WasteCategory::Recyclable))
            .await;
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].name, "Aluminum Cans");
    }

    #[tokio::test]
    async fn test_inspection_awards_accumulate() {
        let engine = DashboardEngine::new();

        let snapshot = engine.select_item(1).await.unwrap();
        assert_eq!(snapshot.points, 177);
        let snapshot = engine.select_item(1).await.unwrap();
        assert_eq!(snapshot.points, 179);

        let snapshot = engine.clear_item().await;
        assert!(snapshot.selected.is_none());
        // Clearing the detail view keeps the ledger
        assert_eq!(snapshot.points, 179);
    }

    #[tokio::test]
    async fn test_claim_reward_flow() {
        let engine = DashboardEngine::new();

        // Below threshold: no-op
        let (outcome, snapshot) = engine.claim_reward(3).await.unwrap();
        assert_eq!(outcome, ClaimOutcome::NotEligible);
        assert_eq!(snapshot.rewards_claimed, 1);

        // Eligible: claims exactly once
        let (outcome, _) = engine.claim_reward(2).await.unwrap();
        assert_eq!(outcome, ClaimOutcome::Claimed);
        let (outcome, snapshot) = engine.claim_reward(2).await.unwrap();
        assert_eq!(outcome, ClaimOutcome::AlreadyClaimed);
        assert_eq!(snapshot.rewards_claimed, 2);
        assert_eq!(
            snapshot.rewards.iter().find(|r| r.id == 2).unwrap().status,
            RewardStatus::Claimed
        );
    }

    #[tokio::test]
    async fn test_panels_are_independent() {
        let engine = DashboardEngine::new();

        engine.toggle_habit(1).await.unwrap();
        engine.set_search_query("glass").await;
        engine.select_neighborhood(5).await.unwrap();

        // Each panel only reflects its own events
        let air = engine.air_snapshot().await;
        let resources = engine.resources_snapshot().await;
        let waste = engine.waste_snapshot().await;

        assert_eq!(air.selected.unwrap().name, "Harbor District");
        assert_eq!(resources.completed_count, 1);
        assert_eq!(waste.items.len(), 1);
        assert_eq!(waste.points, 175);
    }

    #[tokio::test]
    async fn test_last_event_tracking() {
        let engine = DashboardEngine::new();
        assert!(engine.last_event_at().is_none());

        engine.set_active_tab(Tab::Resources).await;
        assert!(engine.last_event_at().is_some());
    }
}
