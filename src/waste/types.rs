//! Core data types for the waste segregation panel
//!
//! - `WasteItem`: a catalog entry with its disposal guidance
//! - `WasteCategory`: the four disposal streams and their bin metadata
//! - `Reward`: an achievement with a point threshold
//! - `RewardStatus`: the derived claim state machine

use serde::{Deserialize, Serialize};

/// Disposal stream a waste item belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    /// Biodegradable kitchen and garden waste
    Organic,
    /// Paper, plastic, glass, and metal items
    Recyclable,
    /// Items requiring special disposal
    Hazardous,
    /// Non-recyclable, non-hazardous waste
    General,
}

impl WasteCategory {
    /// Get all categories for iteration (filter chips, legend)
    pub fn all() -> &'static [WasteCategory] {
        &[
            WasteCategory::Organic,
            WasteCategory::Recyclable,
            WasteCategory::Hazardous,
            WasteCategory::General,
        ]
    }

    /// Display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            WasteCategory::Organic => "Organic Waste",
            WasteCategory::Recyclable => "Recyclable",
            WasteCategory::Hazardous => "Hazardous",
            WasteCategory::General => "General Waste",
        }
    }

    /// Household bin this category goes into
    pub fn bin(&self) -> &'static str {
        match self {
            WasteCategory::Organic => "Green Bin",
            WasteCategory::Recyclable => "Blue Bin",
            WasteCategory::Hazardous => "Red Bin",
            WasteCategory::General => "Black Bin",
        }
    }

    /// One-line description of the stream
    pub fn description(&self) -> &'static str {
        match self {
            WasteCategory::Organic => "Biodegradable kitchen and garden waste",
            WasteCategory::Recyclable => "Paper, plastic, glass, and metal items",
            WasteCategory::Hazardous => "Items requiring special disposal",
            WasteCategory::General => "Non-recyclable, non-hazardous waste",
        }
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WasteCategory::Organic => write!(f, "organic"),
            WasteCategory::Recyclable => write!(f, "recyclable"),
            WasteCategory::Hazardous => write!(f, "hazardous"),
            WasteCategory::General => write!(f, "general"),
        }
    }
}

/// A catalog entry describing how to dispose of one kind of item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WasteItem {
    /// Unique identifier
    pub id: u32,
    /// Display name (e.g., "Plastic Bottles")
    pub name: String,
    /// Disposal stream
    pub category: WasteCategory,
    /// Display glyph shown on the item card
    pub icon: String,
    /// Disposal tip shown in the detail view
    pub tip: String,
}

impl WasteItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: WasteCategory,
        icon: impl Into<String>,
        tip: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            icon: icon.into(),
            tip: tip.into(),
        }
    }

    /// Case-insensitive substring match on the item name
    pub fn name_matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// An achievement claimable once the user's points reach its threshold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reward {
    /// Unique identifier
    pub id: u32,
    /// Display title (e.g., "Zero Waste Hero")
    pub title: String,
    /// What earns the reward
    pub description: String,
    /// Point total required to claim
    pub threshold: u32,
    /// Whether the reward has been claimed; false -> true only
    #[serde(default)]
    pub claimed: bool,
}

impl Reward {
    /// Create a new, unclaimed reward
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        threshold: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            threshold,
            claimed: false,
        }
    }

    /// Builder: mark the reward as already claimed
    pub fn claimed(mut self) -> Self {
        self.claimed = true;
        self
    }

    /// Derive the claim status for a given point total
    pub fn status(&self, points: u32) -> RewardStatus {
        RewardStatus::derive(points, self.threshold, self.claimed)
    }
}

/// Claim state of a reward, derived from (points, threshold, claimed flag)
///
/// Never stored; transitions follow
/// `Unclaimed -> Claimable -> Claimed` and nothing leaves `Claimed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RewardStatus {
    /// Points are below the threshold
    Unclaimed,
    /// Points reached the threshold but the reward is not yet claimed
    Claimable,
    /// The reward has been claimed
    Claimed,
}

impl RewardStatus {
    /// Derive the status from the point counter and the claim flag
    pub fn derive(points: u32, threshold: u32, claimed: bool) -> Self {
        if claimed {
            RewardStatus::Claimed
        } else if points >= threshold {
            RewardStatus::Claimable
        } else {
            RewardStatus::Unclaimed
        }
    }
}

/// Result of a claim attempt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClaimOutcome {
    /// The reward transitioned to claimed
    Claimed,
    /// The reward was already claimed; nothing changed
    AlreadyClaimed,
    /// Points are below the threshold; nothing changed
    NotEligible,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_case_insensitive() {
        let item = WasteItem::new(10, "Batteries", WasteCategory::Hazardous, "B", "tip");
        assert!(item.name_matches("batter"));
        assert!(item.name_matches("BATT"));
        assert!(item.name_matches("ries"));
        assert!(!item.name_matches("bottle"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let item = WasteItem::new(1, "Tea Leaves", WasteCategory::Organic, "T", "tip");
        assert!(item.name_matches(""));
    }

    #[test]
    fn test_reward_status_derivation() {
        assert_eq!(RewardStatus::derive(49, 50, false), RewardStatus::Unclaimed);
        assert_eq!(RewardStatus::derive(50, 50, false), RewardStatus::Claimable);
        assert_eq!(RewardStatus::derive(500, 50, false), RewardStatus::Claimable);
        // Claimed wins regardless of points
        assert_eq!(RewardStatus::derive(0, 50, true), RewardStatus::Claimed);
        assert_eq!(RewardStatus::derive(999, 50, true), RewardStatus::Claimed);
    }

    #[test]
    fn test_category_metadata() {
        assert_eq!(WasteCategory::Organic.bin(), "Green Bin");
        assert_eq!(WasteCategory::Recyclable.bin(), "Blue Bin");
        assert_eq!(WasteCategory::Hazardous.bin(), "Red Bin");
        assert_eq!(WasteCategory::General.bin(), "Black Bin");
        assert_eq!(WasteCategory::all().len(), 4);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&WasteCategory::Hazardous).unwrap();
        assert_eq!(json, "\"hazardous\"");
        let restored: WasteCategory = serde_json::from_str("\"organic\"").unwrap();
        assert_eq!(restored, WasteCategory::Organic);
    }
}
