//! Dashboard Core
//!
//! This module composes the three panels into one session and exposes the
//! intent-event surface:
//!
//! - **session**: the `SessionState` record and the `Tab` shell selection
//! - **engine**: `DashboardEngine`, applying intent events behind a lock
//! - **snapshot**: read-only serializable views with all derived statistics
//! - **error**: unknown-id errors at the core boundary
//!
//! # Data flow
//!
//! ```text
//! fixed dataset -> derived statistics -> snapshot -> rendering layer
//!        ^                                               |
//!        +--------------- intent event <-----------------+
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use econeighbor::dashboard::{DashboardEngine, Tab};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = DashboardEngine::new();
//!
//!     let air = engine.air_snapshot().await;
//!     println!("City average AQI: {}", air.average_aqi);
//!
//!     engine.set_active_tab(Tab::Resources).await;
//!     let resources = engine.toggle_habit(1).await?;
//!     println!("Eco score: {}%", resources.overall_score);
//!
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod session;
pub mod snapshot;

pub use engine::DashboardEngine;
pub use error::{DashboardError, DashboardResult};
pub use session::{SessionState, Tab};
pub use snapshot::{
    AirSnapshot, AreaDetail, CategoryView, ItemDetail, NeighborhoodView, ResourcesSnapshot,
    RewardView, SessionSnapshot, WasteItemView, WasteSnapshot,
};
