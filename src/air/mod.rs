//! Air Quality Panel
//!
//! Citywide air quality overview backed by a fixed table of monitored
//! neighborhoods:
//!
//! - **types**: `Neighborhood` records and the four-band `AqiBand` classification
//! - **panel**: panel state (selection) and derived statistics
//! - **dataset**: the seed table
//!
//! Statistics are pure functions of the table: the rounded citywide mean,
//! per-area band classification, the cleanest area, and the count of areas
//! above the alert threshold.

pub mod dataset;
pub mod panel;
pub mod types;

pub use dataset::seed_neighborhoods;
pub use panel::{alert_count, average_aqi, cleanest, AirPanel, ALERT_THRESHOLD};
pub use types::{AqiBand, Neighborhood};
