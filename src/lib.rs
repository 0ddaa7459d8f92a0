//! # EcoNeighbor
//!
//! Neighborhood sustainability dashboard - a full-stack Rust application
//! presenting an air-quality map, a household resource-savings tracker, and
//! a waste-segregation guide over fixed in-memory datasets.
//!
//! ## Features
//!
//! - **Three independent panels**: each owns its dataset and derived statistics
//! - **Intent events**: discrete user actions applied atomically to one session
//! - **Read-only snapshots**: serializable views carrying every derived number
//! - **Real-time**: WebSocket change notifications for connected dashboards
//!
//! ## Modules
//!
//! - [`air`]: air quality panel (AQI classification, citywide average)
//! - [`resources`]: resource savings panel (completion-weighted scores)
//! - [`waste`]: waste guide panel (catalog filters, reward ledger)
//! - [`dashboard`]: session shell and the intent-event engine
//! - [`api`]: REST API server with Axum
//! - [`websocket`]: change-notification hub
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use econeighbor::dashboard::DashboardEngine;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = DashboardEngine::new();
//!
//!     // Read the air quality panel
//!     let air = engine.air_snapshot().await;
//!     println!("City average AQI: {} ({})", air.average_aqi, air.average_band);
//!
//!     // Complete a habit and watch the score move
//!     let resources = engine.toggle_habit(1).await?;
//!     println!("Eco score: {}%", resources.overall_score);
//!
//!     // Look up an item's disposal guidance
//!     let waste = engine.set_search_query("battery").await;
//!     println!("{} matching items", waste.items.len());
//!
//!     Ok(())
//! }
//! ```

pub mod air;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod resources;
pub mod waste;
pub mod websocket;

// Re-export top-level types for convenience
pub use air::{AirPanel, AqiBand, Neighborhood};

pub use resources::{Habit, HabitCategory, ResourcePanel, SavingTip};

pub use waste::{ClaimOutcome, Reward, RewardStatus, WasteCategory, WasteItem, WastePanel};

pub use dashboard::{
    AirSnapshot, DashboardEngine, DashboardError, DashboardResult, ResourcesSnapshot,
    SessionSnapshot, SessionState, Tab, WasteSnapshot,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use websocket::{
    websocket_handler, ClientMessage, ConnectionHub, HubConfig, HubError, ServerMessage, WsEvent,
};

pub use config::{Config, ConfigError, LoggingConfig, SessionConfig};
