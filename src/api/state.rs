//! Application state
//!
//! Shared state accessible by all API handlers, wrapped in `Arc` for
//! thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::dashboard::DashboardEngine;
use crate::websocket::{ConnectionHub, HubConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The dashboard engine applying intent events
    pub engine: Arc<DashboardEngine>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// WebSocket connection hub for change notifications
    pub ws_hub: Arc<ConnectionHub>,
}

impl AppState {
    /// Create state with the default hub configuration
    pub fn new(engine: Arc<DashboardEngine>, config: ApiConfig) -> Self {
        Self::with_hub_config(engine, config, HubConfig::default())
    }

    /// Create state with a custom WebSocket hub configuration
    pub fn with_hub_config(
        engine: Arc<DashboardEngine>,
        config: ApiConfig,
        hub_config: HubConfig,
    ) -> Self {
        Self {
            engine,
            config: Arc::new(config),
            start_time: Instant::now(),
            ws_hub: Arc::new(ConnectionHub::new(hub_config)),
        }
    }

    /// Server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Number of connected dashboards
    pub async fn ws_connection_count(&self) -> usize {
        self.ws_hub.connection_count().await
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
