//! WebSocket connection hub
//!
//! Tracks connected dashboards and their topic subscriptions, and fans
//! panel-change events out to subscribers. A `panels.*` wildcard matches
//! every panel topic.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use super::messages::{ServerMessage, WsEvent};

/// Unique identifier for a WebSocket connection
pub type ConnectionId = String;

/// Wildcard topic matching every panel
const PANELS_WILDCARD: &str = "panels.*";

/// Handle for sending messages to one connection
struct ConnectionHandle {
    sender: mpsc::UnboundedSender<ServerMessage>,
    subscriptions: HashSet<String>,
}

/// Configuration for the connection hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Maximum number of concurrent connections
    pub max_connections: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            max_connections: 256,
        }
    }
}

/// Manages all WebSocket connections and subscriptions
pub struct ConnectionHub {
    connections: RwLock<HashMap<ConnectionId, ConnectionHandle>>,
    /// Topic -> set of subscribed connection ids
    subscriptions: RwLock<HashMap<String, HashSet<ConnectionId>>>,
    config: HubConfig,
}

impl ConnectionHub {
    /// Create a new connection hub
    pub fn new(config: HubConfig) -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
            subscriptions: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Register a new connection, returning its id
    pub async fn register(
        &self,
        sender: mpsc::UnboundedSender<ServerMessage>,
    ) -> Result<ConnectionId, HubError> {
        let mut connections = self.connections.write().await;
        if connections.len() >= self.config.max_connections {
            return Err(HubError::TooManyConnections(self.config.max_connections));
        }

        let id = Uuid::new_v4().to_string();
        connections.insert(
            id.clone(),
            ConnectionHandle {
                sender,
                subscriptions: HashSet::new(),
            },
        );

        tracing::info!(connection_id = %id, "Dashboard connected");
        Ok(id)
    }

    /// Unregister a connection and clean up its subscriptions
    pub async fn unregister(&self, id: &str) {
        let handle = self.connections.write().await.remove(id);

        if let Some(handle) = handle {
            let mut subs = self.subscriptions.write().await;
            for topic in handle.subscriptions {
                if let Some(subscribers) = subs.get_mut(&topic) {
                    subscribers.remove(id);
                    if subscribers.is_empty() {
                        subs.remove(&topic);
                    }
                }
            }
        }

        tracing::info!(connection_id = %id, "Dashboard disconnected");
    }

    /// Subscribe a connection to topics, returning those accepted
    pub async fn subscribe(&self, id: &str, topics: Vec<String>) -> Result<Vec<String>, HubError> {
        let mut connections = self.connections.write().await;
        let handle = connections.get_mut(id).ok_or(HubError::ConnectionNotFound)?;

        let mut subs = self.subscriptions.write().await;
        let mut subscribed = Vec::new();

        for topic in topics {
            if !is_valid_topic(&topic) {
                tracing::warn!(topic = %topic, "Invalid topic ignored");
                continue;
            }

            handle.subscriptions.insert(topic.clone());
            subs.entry(topic.clone()).or_default().insert(id.to_string());
            subscribed.push(topic);
        }

        tracing::debug!(connection_id = %id, topics = ?subscribed, "Subscribed");
        Ok(subscribed)
    }

    /// Unsubscribe a connection from topics, returning those removed
    pub async fn unsubscribe(
        &self,
        id: &str,
        topics: Vec<String>,
    ) -> Result<Vec<String>, HubError> {
        let mut connections = self.connections.write().await;
        let handle = connections.get_mut(id).ok_or(HubError::ConnectionNotFound)?;

        let mut subs = self.subscriptions.write().await;
        let mut unsubscribed = Vec::new();

        for topic in topics {
            if handle.subscriptions.remove(&topic) {
                if let Some(subscribers) = subs.get_mut(&topic) {
                    subscribers.remove(id);
                    if subscribers.is_empty() {
                        subs.remove(&topic);
                    }
                }
                unsubscribed.push(topic);
            }
        }

        tracing::debug!(connection_id = %id, topics = ?unsubscribed, "Unsubscribed");
        Ok(unsubscribed)
    }

    /// Broadcast an event to all subscribers of its topic
    pub async fn broadcast(&self, event: &WsEvent) {
        let subs = self.subscriptions.read().await;
        let connections = self.connections.read().await;

        let direct = subs.get(&event.topic).cloned().unwrap_or_default();
        let wildcard = if event.topic.starts_with("panels.") {
            subs.get(PANELS_WILDCARD).cloned().unwrap_or_default()
        } else {
            HashSet::new()
        };

        let mut sent = 0;
        for id in direct.union(&wildcard) {
            if let Some(handle) = connections.get(id) {
                if handle.sender.send(event.message.clone()).is_ok() {
                    sent += 1;
                }
            }
        }

        if sent > 0 {
            tracing::trace!(topic = %event.topic, subscribers = sent, "Broadcast event");
        }
    }

    /// Fire-and-forget broadcast from non-async route handlers
    pub fn publish(self: &Arc<Self>, event: WsEvent) {
        let hub = Arc::clone(self);
        tokio::spawn(async move {
            hub.broadcast(&event).await;
        });
    }

    /// Send a message directly to one connection
    pub async fn send_to(&self, id: &str, message: ServerMessage) -> Result<(), HubError> {
        let connections = self.connections.read().await;
        let handle = connections.get(id).ok_or(HubError::ConnectionNotFound)?;
        handle.sender.send(message).map_err(|_| HubError::SendFailed)
    }

    /// Number of connected dashboards
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Number of subscribers on a topic
    pub async fn subscription_count(&self, topic: &str) -> usize {
        self.subscriptions
            .read()
            .await
            .get(topic)
            .map(|s| s.len())
            .unwrap_or(0)
    }
}

/// Check whether a topic name is one the hub serves
///
/// Valid topics: `panels.air`, `panels.resources`, `panels.waste`,
/// the `panels.*` wildcard, and `session`.
fn is_valid_topic(topic: &str) -> bool {
    matches!(
        topic,
        "panels.air" | "panels.resources" | "panels.waste" | PANELS_WILDCARD | "session"
    )
}

/// Errors that can occur in the connection hub
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Too many connections (limit: {0})")]
    TooManyConnections(usize),

    #[error("Connection not found")]
    ConnectionNotFound,

    #[error("Failed to send message")]
    SendFailed,
}
