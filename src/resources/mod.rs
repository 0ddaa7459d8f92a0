//! Resource Savings Panel
//!
//! Daily energy/water habit checklist with completion-weighted scores:
//!
//! - **types**: `Habit`, `HabitCategory`, and the static `SavingTip` cards
//! - **panel**: panel state (completion flags) and score computation
//! - **dataset**: the seed tables
//!
//! Scores are recomputed on every toggle; the panel has no hidden state.

pub mod dataset;
pub mod panel;
pub mod types;

pub use dataset::{seed_habits, seed_tips};
pub use panel::{score, ResourcePanel};
pub use types::{Habit, HabitCategory, SavingTip};
