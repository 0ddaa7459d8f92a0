//! WebSocket message types
//!
//! Message vocabulary between connected dashboards and the server. The
//! server never pushes full snapshots: it announces which panel changed and
//! clients re-fetch that panel, keeping repeated renders idempotent.

use serde::{Deserialize, Serialize};

use crate::dashboard::Tab;

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Subscribe to topics for change notifications
    Subscribe {
        /// Topics to subscribe to (e.g., "panels.waste", "panels.*")
        topics: Vec<String>,
    },
    /// Unsubscribe from topics
    Unsubscribe {
        /// Topics to unsubscribe from
        topics: Vec<String>,
    },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A panel's state changed; clients should re-fetch its snapshot
    PanelChanged {
        /// Which panel changed
        panel: Tab,
        /// The intent event that caused the change (e.g., "toggle_habit")
        event: String,
    },
    /// The shell switched tabs
    TabChanged {
        /// The newly active tab
        tab: Tab,
    },
    /// Subscription confirmed
    Subscribed { topics: Vec<String> },
    /// Unsubscription confirmed
    Unsubscribed { topics: Vec<String> },
    /// Pong response to ping
    Pong,
    /// Error message
    Error { message: String },
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
}

/// Internal event for broadcasting through the hub
#[derive(Debug, Clone)]
pub struct WsEvent {
    /// Topic this event belongs to (e.g., "panels.air")
    pub topic: String,
    /// The message to send to subscribers
    pub message: ServerMessage,
}

impl WsEvent {
    /// Announce a panel change caused by an intent event
    pub fn panel_changed(panel: Tab, event: &str) -> Self {
        Self {
            topic: format!("panels.{}", panel),
            message: ServerMessage::PanelChanged {
                panel,
                event: event.to_string(),
            },
        }
    }

    /// Announce a tab switch
    pub fn tab_changed(tab: Tab) -> Self {
        Self {
            topic: "session".to_string(),
            message: ServerMessage::TabChanged { tab },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_deserialize_subscribe() {
        let json = r#"{"type": "subscribe", "topics": ["panels.waste", "panels.*"]}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg {
            ClientMessage::Subscribe { topics } => {
                assert_eq!(topics.len(), 2);
                assert_eq!(topics[0], "panels.waste");
            }
            _ => panic!("Expected Subscribe"),
        }
    }

    #[test]
    fn test_client_message_deserialize_ping() {
        let json = r#"{"type": "ping"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }

    #[test]
    fn test_server_message_serialize_panel_changed() {
        let msg = ServerMessage::PanelChanged {
            panel: Tab::Resources,
            event: "toggle_habit".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"panel_changed\""));
        assert!(json.contains("\"panel\":\"resources\""));
        assert!(json.contains("\"event\":\"toggle_habit\""));
    }

    #[test]
    fn test_ws_event_topics() {
        let event = WsEvent::panel_changed(Tab::Air, "select_neighborhood");
        assert_eq!(event.topic, "panels.air");

        let event = WsEvent::tab_changed(Tab::Waste);
        assert_eq!(event.topic, "session");
        match event.message {
            ServerMessage::TabChanged { tab } => assert_eq!(tab, Tab::Waste),
            _ => panic!("Expected TabChanged"),
        }
    }
}
