//! Waste Segregation Panel
//!
//! Searchable disposal guide backed by a fixed item catalog, plus the
//! points/streak/reward ledger:
//!
//! - **types**: `WasteItem`, `WasteCategory` (with bin metadata), `Reward`,
//!   and the derived `RewardStatus` state machine
//! - **panel**: filter composition, detail view, and the claim logic
//! - **dataset**: the seed tables and ledger constants
//!
//! Reward status is always derived from `(points, threshold, claimed)`;
//! it is never stored alongside the flag it would duplicate.

pub mod dataset;
pub mod panel;
pub mod types;

pub use dataset::{seed_items, seed_rewards, INSPECT_AWARD, STARTING_POINTS, STARTING_STREAK};
pub use panel::WastePanel;
pub use types::{ClaimOutcome, Reward, RewardStatus, WasteCategory, WasteItem};
