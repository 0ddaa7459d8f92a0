//! Session state
//!
//! One session composes the three panel states plus the active tab.
//! Each panel owns its state exclusively; nothing crosses panel boundaries.

use serde::{Deserialize, Serialize};

use crate::air::AirPanel;
use crate::resources::ResourcePanel;
use crate::waste::{self, WastePanel};

/// Which panel the shell currently shows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Air quality map
    #[default]
    Air,
    /// Resource savings tracker
    Resources,
    /// Waste segregation guide
    Waste,
}

impl Tab {
    /// Get all tabs for iteration
    pub fn all() -> &'static [Tab] {
        &[Tab::Air, Tab::Resources, Tab::Waste]
    }

    /// Display label for the tab button
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Air => "Air Quality",
            Tab::Resources => "Resources",
            Tab::Waste => "Waste Guide",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tab::Air => write!(f, "air"),
            Tab::Resources => write!(f, "resources"),
            Tab::Waste => write!(f, "waste"),
        }
    }
}

/// Complete state of one dashboard session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Currently visible panel
    pub active_tab: Tab,
    /// Air quality panel
    pub air: AirPanel,
    /// Resource savings panel
    pub resources: ResourcePanel,
    /// Waste guide panel
    pub waste: WastePanel,
}

impl SessionState {
    /// A fresh session over the seed datasets
    pub fn seeded() -> Self {
        Self {
            active_tab: Tab::Air,
            air: AirPanel::seeded(),
            resources: ResourcePanel::seeded(),
            waste: WastePanel::seeded(),
        }
    }

    /// A fresh session with a custom starting ledger
    ///
    /// Used by the binaries to apply `[session]` config overrides.
    pub fn seeded_with_ledger(points: u32, streak: u32) -> Self {
        let mut session = Self::seeded();
        session.waste = WastePanel::new(
            waste::seed_items(),
            waste::seed_rewards(),
            points,
            streak,
        );
        session
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::seeded()
    }
}
