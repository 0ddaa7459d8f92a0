//! Read-only state snapshots
//!
//! Snapshots are the only thing the rendering layer ever sees: serializable
//! views carrying the dataset plus every derived statistic, produced under
//! the engine's read lock. Producing a snapshot never mutates state, so
//! repeated snapshots of the same state are identical.

use serde::{Deserialize, Serialize};

use crate::air::{AirPanel, AqiBand, Neighborhood};
use crate::resources::{Habit, HabitCategory, ResourcePanel, SavingTip};
use crate::waste::{RewardStatus, WasteCategory, WastePanel};

use super::session::Tab;

/// Shell state: which panel is visible
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    /// Currently visible panel
    pub active_tab: Tab,
}

// ============================================
// AIR QUALITY
// ============================================

/// One neighborhood as rendered on the map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeighborhoodView {
    pub id: u32,
    pub name: String,
    pub aqi: u32,
    /// Classification band for the reading
    pub band: AqiBand,
    pub lat_pct: f32,
    pub lng_pct: f32,
}

impl From<&Neighborhood> for NeighborhoodView {
    fn from(n: &Neighborhood) -> Self {
        Self {
            id: n.id,
            name: n.name.clone(),
            aqi: n.aqi,
            band: n.band(),
            lat_pct: n.lat_pct,
            lng_pct: n.lng_pct,
        }
    }
}

/// Detail card for the selected area
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaDetail {
    pub id: u32,
    pub name: String,
    pub aqi: u32,
    pub band: AqiBand,
    /// Band display label
    pub band_label: String,
    /// Health recommendation for the area's band
    pub advisory: String,
}

impl From<&Neighborhood> for AreaDetail {
    fn from(n: &Neighborhood) -> Self {
        let band = n.band();
        Self {
            id: n.id,
            name: n.name.clone(),
            aqi: n.aqi,
            band,
            band_label: band.label().to_string(),
            advisory: band.advisory().to_string(),
        }
    }
}

/// Full air quality panel snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirSnapshot {
    /// Rounded citywide mean AQI
    pub average_aqi: u32,
    /// Band of the citywide mean
    pub average_band: AqiBand,
    /// Area with the lowest reading
    pub cleanest: Option<NeighborhoodView>,
    /// Areas above the alert threshold
    pub alert_count: usize,
    /// The full table
    pub neighborhoods: Vec<NeighborhoodView>,
    /// The selected area's detail card
    pub selected: Option<AreaDetail>,
}

impl From<&AirPanel> for AirSnapshot {
    fn from(panel: &AirPanel) -> Self {
        let average_aqi = panel.average_aqi();
        Self {
            average_aqi,
            average_band: AqiBand::classify(average_aqi),
            cleanest: panel.cleanest().map(NeighborhoodView::from),
            alert_count: panel.alert_count(),
            neighborhoods: panel.neighborhoods().iter().map(NeighborhoodView::from).collect(),
            selected: panel.selected().map(AreaDetail::from),
        }
    }
}

// ============================================
// RESOURCES
// ============================================

/// Full resource savings panel snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourcesSnapshot {
    /// Completion-weighted score over all habits
    pub overall_score: u8,
    /// Score over energy habits only
    pub energy_score: u8,
    /// Score over water habits only
    pub water_score: u8,
    /// Habits currently marked done
    pub completed_count: usize,
    /// The full checklist with completion flags
    pub habits: Vec<Habit>,
    /// Static tip cards
    pub tips: Vec<SavingTip>,
}

impl From<&ResourcePanel> for ResourcesSnapshot {
    fn from(panel: &ResourcePanel) -> Self {
        Self {
            overall_score: panel.overall_score(),
            energy_score: panel.category_score(HabitCategory::Energy),
            water_score: panel.category_score(HabitCategory::Water),
            completed_count: panel.completed_count(),
            habits: panel.habits().to_vec(),
            tips: panel.tips().to_vec(),
        }
    }
}

// ============================================
// WASTE
// ============================================

/// One catalog entry as rendered in the item grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WasteItemView {
    pub id: u32,
    pub name: String,
    pub category: WasteCategory,
    /// Bin badge shown on the card
    pub bin: String,
    pub icon: String,
}

/// Detail view of an inspected item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    pub category: WasteCategory,
    pub category_label: String,
    pub category_description: String,
    pub bin: String,
    pub icon: String,
    /// Disposal tip
    pub tip: String,
}

/// One reward with its derived claim status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardView {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub threshold: u32,
    pub status: RewardStatus,
}

/// Category metadata for the filter chips
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryView {
    pub category: WasteCategory,
    pub label: String,
    pub bin: String,
    pub description: String,
}

impl From<WasteCategory> for CategoryView {
    fn from(category: WasteCategory) -> Self {
        Self {
            category,
            label: category.label().to_string(),
            bin: category.bin().to_string(),
            description: category.description().to_string(),
        }
    }
}

/// Full waste guide panel snapshot
///
/// `items` carries only the entries matching the active filters; an empty
/// list is the normal no-results state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WasteSnapshot {
    pub points: u32,
    pub streak: u32,
    pub rewards_claimed: usize,
    pub rewards_total: usize,
    pub search_query: String,
    pub category_filter: Option<WasteCategory>,
    pub categories: Vec<CategoryView>,
    pub items: Vec<WasteItemView>,
    pub selected: Option<ItemDetail>,
    pub rewards: Vec<RewardView>,
}

impl From<&WastePanel> for WasteSnapshot {
    fn from(panel: &WastePanel) -> Self {
        let items = panel
            .filtered_items()
            .into_iter()
            .map(|item| WasteItemView {
                id: item.id,
                name: item.name.clone(),
                category: item.category,
                bin: item.category.bin().to_string(),
                icon: item.icon.clone(),
            })
            .collect();

        let selected = panel.selected().map(|item| ItemDetail {
            id: item.id,
            name: item.name.clone(),
            category: item.category,
            category_label: item.category.label().to_string(),
            category_description: item.category.description().to_string(),
            bin: item.category.bin().to_string(),
            icon: item.icon.clone(),
            tip: item.tip.clone(),
        });

        let rewards: Vec<RewardView> = panel
            .rewards()
            .iter()
            .map(|r| RewardView {
                id: r.id,
                title: r.title.clone(),
                description: r.description.clone(),
                threshold: r.threshold,
                status: panel.reward_status(r),
            })
            .collect();

        Self {
            points: panel.points(),
            streak: panel.streak(),
            rewards_claimed: panel.claimed_count(),
            rewards_total: panel.rewards().len(),
            search_query: panel.search_query().to_string(),
            category_filter: panel.category_filter(),
            categories: WasteCategory::all().iter().copied().map(CategoryView::from).collect(),
            items,
            selected,
            rewards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_snapshot_carries_derived_stats() {
        let panel = AirPanel::seeded();
        let snapshot = AirSnapshot::from(&panel);

        assert_eq!(snapshot.average_aqi, 53);
        assert_eq!(snapshot.average_band, AqiBand::Moderate);
        assert_eq!(snapshot.cleanest.as_ref().unwrap().name, "Green Park");
        assert_eq!(snapshot.alert_count, 1);
        assert_eq!(snapshot.neighborhoods.len(), 8);

        let selected = snapshot.selected.unwrap();
        assert_eq!(selected.name, "Downtown");
        assert_eq!(selected.band, AqiBand::Good);
        assert!(!selected.advisory.is_empty());
    }

    #[test]
    fn test_resources_snapshot_scores() {
        let mut panel = ResourcePanel::seeded();
        panel.toggle(7).unwrap(); // Fix leaky faucets, 15 water points

        let snapshot = ResourcesSnapshot::from(&panel);
        assert_eq!(snapshot.water_score, 29); // 100 * 15/51 = 29.4 -> 29
        assert_eq!(snapshot.energy_score, 0);
        assert_eq!(snapshot.completed_count, 1);
        assert_eq!(snapshot.habits.len(), 10);
        assert_eq!(snapshot.tips.len(), 4);
    }

    #[test]
    fn test_waste_snapshot_respects_filters() {
        let mut panel = WastePanel::seeded();
        panel.set_category_filter(Some(WasteCategory::Organic));

        let snapshot = WasteSnapshot::from(&panel);
        assert_eq!(snapshot.items.len(), 4);
        assert!(snapshot.items.iter().all(|i| i.category == WasteCategory::Organic));
        assert_eq!(snapshot.category_filter, Some(WasteCategory::Organic));
        // The category chip list always covers all four streams
        assert_eq!(snapshot.categories.len(), 4);
    }

    #[test]
    fn test_waste_snapshot_detail_and_ledger() {
        let mut panel = WastePanel::seeded();
        panel.select_item(10).unwrap();

        let snapshot = WasteSnapshot::from(&panel);
        assert_eq!(snapshot.points, 177);
        assert_eq!(snapshot.rewards_claimed, 1);
        assert_eq!(snapshot.rewards_total, 4);

        let detail = snapshot.selected.unwrap();
        assert_eq!(detail.name, "Batteries");
        assert_eq!(detail.bin, "Red Bin");
        assert!(!detail.tip.is_empty());
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let panel = WastePanel::seeded();
        let a = WasteSnapshot::from(&panel);
        let b = WasteSnapshot::from(&panel);
        assert_eq!(a, b);
    }

    #[test]
    fn test_snapshot_serialization_round_trip() {
        let snapshot = AirSnapshot::from(&AirPanel::seeded());
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: AirSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, restored);
    }
}
