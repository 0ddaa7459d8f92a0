//! Core data types for the resource savings panel
//!
//! - `Habit`: a daily saving habit with a point value and completion flag
//! - `HabitCategory`: the energy/water split used for sub-scores
//! - `SavingTip`: a static informational tip card

use serde::{Deserialize, Serialize};

/// Resource category a habit or tip belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    /// Electricity-saving habits
    Energy,
    /// Water-saving habits
    Water,
}

impl HabitCategory {
    /// Get all categories for iteration
    pub fn all() -> &'static [HabitCategory] {
        &[HabitCategory::Energy, HabitCategory::Water]
    }

    /// Display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            HabitCategory::Energy => "Energy",
            HabitCategory::Water => "Water",
        }
    }
}

impl std::fmt::Display for HabitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HabitCategory::Energy => write!(f, "energy"),
            HabitCategory::Water => write!(f, "water"),
        }
    }
}

/// A daily saving habit
///
/// Habits are created at session start and never destroyed; only the
/// `completed` flag mutates, via toggling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habit {
    /// Unique identifier
    pub id: u32,
    /// Display label (e.g., "Fix leaky faucets")
    pub label: String,
    /// Points awarded toward the category score when completed
    pub points: u32,
    /// Category this habit counts toward
    pub category: HabitCategory,
    /// Whether the habit is currently marked done
    #[serde(default)]
    pub completed: bool,
}

impl Habit {
    /// Create a new, not-yet-completed habit
    pub fn new(id: u32, label: impl Into<String>, points: u32, category: HabitCategory) -> Self {
        Self {
            id,
            label: label.into(),
            points,
            category,
            completed: false,
        }
    }

    /// Builder: mark the habit as completed
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// A static saving tip shown alongside the habit checklist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingTip {
    /// Short title (e.g., "LED Upgrade")
    pub title: String,
    /// One-paragraph description
    pub description: String,
    /// Estimated annual savings, display string (e.g., "~₹1,500/year")
    pub savings: String,
    /// Category the tip applies to
    pub category: HabitCategory,
}

impl SavingTip {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        savings: impl Into<String>,
        category: HabitCategory,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            savings: savings.into(),
            category,
        }
    }
}
