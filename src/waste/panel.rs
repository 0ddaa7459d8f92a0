//! Waste segregation panel state
//!
//! Owns the fixed item catalog, the reward ladder, and the user's point
//! ledger. Search and category filters compose by logical AND over the
//! catalog; an empty result is a normal state, not an error.
//!
//! Points are monotonically non-decreasing: inspecting an item awards a
//! fixed amount each time (repeated inspection awards repeatedly), and
//! claiming a reward never deducts points.

use crate::dashboard::error::{DashboardError, DashboardResult};

use super::dataset::{seed_items, seed_rewards, INSPECT_AWARD, STARTING_POINTS, STARTING_STREAK};
use super::types::{ClaimOutcome, Reward, RewardStatus, WasteCategory, WasteItem};

/// State of the waste segregation panel
#[derive(Debug, Clone)]
pub struct WastePanel {
    items: Vec<WasteItem>,
    rewards: Vec<Reward>,
    points: u32,
    streak: u32,
    search_query: String,
    category_filter: Option<WasteCategory>,
    selected: Option<u32>,
}

impl WastePanel {
    /// Create a panel over the seed catalog with the default point ledger
    pub fn seeded() -> Self {
        Self::new(seed_items(), seed_rewards(), STARTING_POINTS, STARTING_STREAK)
    }

    /// Create a panel over custom tables
    pub fn new(items: Vec<WasteItem>, rewards: Vec<Reward>, points: u32, streak: u32) -> Self {
        Self {
            items,
            rewards,
            points,
            streak,
            search_query: String::new(),
            category_filter: None,
            selected: None,
        }
    }

    /// The full catalog, unfiltered
    pub fn items(&self) -> &[WasteItem] {
        &self.items
    }

    /// The reward ladder
    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    /// Current point total
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Current day streak
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Current search query
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current category filter
    pub fn category_filter(&self) -> Option<WasteCategory> {
        self.category_filter
    }

    /// Replace the search query
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Restrict to one category, or clear the restriction with `None`
    pub fn set_category_filter(&mut self, category: Option<WasteCategory>) {
        self.category_filter = category;
    }

    /// Catalog entries matching both active filters
    pub fn filtered_items(&self) -> Vec<&WasteItem> {
        self.items
            .iter()
            .filter(|item| item.name_matches(&self.search_query))
            .filter(|item| {
                self.category_filter
                    .map(|cat| item.category == cat)
                    .unwrap_or(true)
            })
            .collect()
    }

    /// Open an item's detail view, awarding inspection points
    ///
    /// Awards a fixed amount on every call; repeated inspection of the same
    /// item awards repeatedly. Returns the new point total.
    pub fn select_item(&mut self, id: u32) -> DashboardResult<u32> {
        if !self.items.iter().any(|i| i.id == id) {
            return Err(DashboardError::ItemNotFound(id));
        }
        self.selected = Some(id);
        self.points += INSPECT_AWARD;
        Ok(self.points)
    }

    /// The item currently open in the detail view, if any
    pub fn selected(&self) -> Option<&WasteItem> {
        self.selected
            .and_then(|id| self.items.iter().find(|i| i.id == id))
    }

    /// Close the detail view
    pub fn clear_item(&mut self) {
        self.selected = None;
    }

    /// Derived claim status for a reward in this panel's ledger
    pub fn reward_status(&self, reward: &Reward) -> RewardStatus {
        reward.status(self.points)
    }

    /// Attempt to claim a reward
    ///
    /// Claims only when the point total has reached the threshold; claiming
    /// an already-claimed reward or one below threshold changes nothing.
    /// Points are never deducted.
    pub fn claim_reward(&mut self, id: u32) -> DashboardResult<ClaimOutcome> {
        let points = self.points;
        let reward = self
            .rewards
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DashboardError::RewardNotFound(id))?;

        let outcome = match reward.status(points) {
            RewardStatus::Claimed => ClaimOutcome::AlreadyClaimed,
            RewardStatus::Unclaimed => ClaimOutcome::NotEligible,
            RewardStatus::Claimable => {
                reward.claimed = true;
                ClaimOutcome::Claimed
            }
        };
        Ok(outcome)
    }

    /// Number of rewards claimed so far
    pub fn claimed_count(&self) -> usize {
        self.rewards.iter().filter(|r| r.claimed).count()
    }
}

impl Default for WastePanel {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_returns_full_catalog() {
        let panel = WastePanel::seeded();
        assert_eq!(panel.filtered_items().len(), panel.items().len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut panel = WastePanel::seeded();
        panel.set_search_query("GLASS");
        let matches = panel.filtered_items();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Glass Jars");
    }

    #[test]
    fn test_search_batteries() {
        let mut panel = WastePanel::seeded();
        panel.set_search_query("Batteries");
        let matches = panel.filtered_items();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, WasteCategory::Hazardous);
    }

    #[test]
    fn test_filters_compose_by_and() {
        let mut panel = WastePanel::seeded();

        // "ca" matches Cardboard Boxes, Aluminum Cans, Paint Cans, Broken Ceramics
        panel.set_search_query("ca");
        let by_search: Vec<u32> = panel.filtered_items().iter().map(|i| i.id).collect();
        assert!(by_search.len() > 1);

        panel.set_category_filter(Some(WasteCategory::Recyclable));
        let combined = panel.filtered_items();
        for item in &combined {
            assert!(item.name_matches("ca"));
            assert_eq!(item.category, WasteCategory::Recyclable);
        }
        assert!(combined.len() < by_search.len());
    }

    #[test]
    fn test_clearing_category_filter_restores_search_results() {
        let mut panel = WastePanel::seeded();
        panel.set_search_query("cans");
        panel.set_category_filter(Some(WasteCategory::Hazardous));
        assert_eq!(panel.filtered_items().len(), 1);

        panel.set_category_filter(None);
        assert_eq!(panel.filtered_items().len(), 2);
    }

    #[test]
    fn test_no_results_is_empty_not_error() {
        let mut panel = WastePanel::seeded();
        panel.set_search_query("submarine");
        assert!(panel.filtered_items().is_empty());
    }

    #[test]
    fn test_inspection_awards_points_each_time() {
        let mut panel = WastePanel::seeded();
        let start = panel.points();

        assert_eq!(panel.select_item(5).unwrap(), start + INSPECT_AWARD);
        assert_eq!(panel.select_item(5).unwrap(), start + 2 * INSPECT_AWARD);
        assert_eq!(panel.selected().map(|i| i.id), Some(5));
    }

    #[test]
    fn test_select_unknown_item_rejected() {
        let mut panel = WastePanel::seeded();
        let start = panel.points();
        let err = panel.select_item(99).unwrap_err();
        assert!(matches!(err, DashboardError::ItemNotFound(99)));
        // No points awarded, no selection recorded
        assert_eq!(panel.points(), start);
        assert!(panel.selected().is_none());
    }

    #[test]
    fn test_clear_item_resets_detail_view() {
        let mut panel = WastePanel::seeded();
        panel.select_item(3).unwrap();
        panel.clear_item();
        assert!(panel.selected().is_none());
    }

    #[test]
    fn test_claim_below_threshold_is_noop() {
        // Seed points (175) are below Zero Waste Hero's 300 threshold
        let mut panel = WastePanel::seeded();
        assert_eq!(panel.claim_reward(3).unwrap(), ClaimOutcome::NotEligible);
        assert!(!panel.rewards()[2].claimed);
        assert_eq!(panel.points(), STARTING_POINTS);
    }

    #[test]
    fn test_claim_at_threshold_succeeds_once() {
        // Seed points (175) reach Green Champion's 150 threshold
        let mut panel = WastePanel::seeded();
        assert_eq!(panel.claim_reward(2).unwrap(), ClaimOutcome::Claimed);
        assert!(panel.rewards()[1].claimed);

        // Second claim is idempotent, no double award
        assert_eq!(panel.claim_reward(2).unwrap(), ClaimOutcome::AlreadyClaimed);
        assert_eq!(panel.claimed_count(), 2);
        // Claiming never consumes points
        assert_eq!(panel.points(), STARTING_POINTS);
    }

    #[test]
    fn test_claim_unknown_reward_rejected() {
        let mut panel = WastePanel::seeded();
        let err = panel.claim_reward(42).unwrap_err();
        assert!(matches!(err, DashboardError::RewardNotFound(42)));
    }

    #[test]
    fn test_reward_becomes_claimable_as_points_cross_threshold() {
        let mut panel = WastePanel::new(
            seed_items(),
            vec![Reward::new(1, "Test", "desc", STARTING_POINTS + 3)],
            STARTING_POINTS,
            0,
        );

        let reward = panel.rewards()[0].clone();
        assert_eq!(panel.reward_status(&reward), RewardStatus::Unclaimed);
        assert_eq!(panel.claim_reward(1).unwrap(), ClaimOutcome::NotEligible);

        // Two inspections push the ledger past the threshold
        panel.select_item(1).unwrap();
        panel.select_item(1).unwrap();
        let reward = panel.rewards()[0].clone();
        assert_eq!(panel.reward_status(&reward), RewardStatus::Claimable);
        assert_eq!(panel.claim_reward(1).unwrap(), ClaimOutcome::Claimed);
    }

    #[test]
    fn test_seed_reward_statuses() {
        let panel = WastePanel::seeded();
        let statuses: Vec<RewardStatus> = panel
            .rewards()
            .iter()
            .map(|r| panel.reward_status(r))
            .collect();
        assert_eq!(
            statuses,
            vec![
                RewardStatus::Claimed,    // Eco Starter, pre-claimed
                RewardStatus::Claimable,  // Green Champion, 175 >= 150
                RewardStatus::Unclaimed,  // Zero Waste Hero, 175 < 300
                RewardStatus::Claimable,  // Community Leader, 175 >= 100
            ]
        );
    }
}
