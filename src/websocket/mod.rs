//! Real-time change notifications
//!
//! WebSocket layer pushing panel-change events to connected dashboards:
//!
//! - **messages**: the client/server message vocabulary
//! - **hub**: connection registry and topic-based fan-out
//! - **handler**: the Axum upgrade handler and per-connection loop
//!
//! After every intent event the API publishes a `PanelChanged` event for the
//! affected panel; clients re-fetch only that panel's snapshot.

pub mod handler;
pub mod hub;
pub mod messages;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, HubConfig, HubError};
pub use messages::{ClientMessage, ServerMessage, WsEvent};
