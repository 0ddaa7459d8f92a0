//! WebSocket handler
//!
//! Upgrades HTTP connections and runs the per-connection send/receive loop.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::hub::ConnectionHub;
use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;

/// WebSocket upgrade handler, mounted at `/api/v1/ws`
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let hub = Arc::clone(&state.ws_hub);
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

/// Run an established connection until either side closes
async fn handle_socket(socket: WebSocket, hub: Arc<ConnectionHub>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let connection_id = match hub.register(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected WebSocket connection");
            let refusal = ServerMessage::Error {
                message: e.to_string(),
            };
            if let Ok(text) = serde_json::to_string(&refusal) {
                let _ = sender.send(Message::Text(text)).await;
            }
            return;
        }
    };

    let connected = ServerMessage::Connected {
        connection_id: connection_id.clone(),
    };
    match serde_json::to_string(&connected) {
        Ok(text) => {
            if sender.send(Message::Text(text)).await.is_err() {
                hub.unregister(&connection_id).await;
                return;
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize connected message");
            hub.unregister(&connection_id).await;
            return;
        }
    }

    let send_conn_id = connection_id.clone();
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(connection_id = %send_conn_id, "Send failed, closing");
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    let recv_hub = Arc::clone(&hub);
    let recv_conn_id = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_ws_message(&recv_hub, &recv_conn_id, msg).await {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(connection_id = %recv_conn_id, error = %e, "Receive error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    hub.unregister(&connection_id).await;
}

/// Handle one frame; returns false when the connection should close
async fn handle_ws_message(hub: &Arc<ConnectionHub>, connection_id: &str, message: Message) -> bool {
    match message {
        Message::Text(text) => {
            match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => handle_client_message(hub, connection_id, client_msg).await,
                Err(e) => {
                    tracing::debug!(connection_id = %connection_id, error = %e, "Invalid client message");
                    let error_msg = ServerMessage::Error {
                        message: format!("Invalid message format: {}", e),
                    };
                    let _ = hub.send_to(connection_id, error_msg).await;
                }
            }
            true
        }
        Message::Binary(_) => {
            let error_msg = ServerMessage::Error {
                message: "Binary messages not supported".to_string(),
            };
            let _ = hub.send_to(connection_id, error_msg).await;
            true
        }
        // Axum answers pings automatically; pongs just confirm liveness
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            false
        }
    }
}

/// Apply a parsed client message
async fn handle_client_message(hub: &Arc<ConnectionHub>, connection_id: &str, message: ClientMessage) {
    match message {
        ClientMessage::Subscribe { topics } => match hub.subscribe(connection_id, topics).await {
            Ok(subscribed) => {
                let _ = hub
                    .send_to(connection_id, ServerMessage::Subscribed { topics: subscribed })
                    .await;
            }
            Err(e) => {
                let _ = hub
                    .send_to(
                        connection_id,
                        ServerMessage::Error {
                            message: e.to_string(),
                        },
                    )
                    .await;
            }
        },
        ClientMessage::Unsubscribe { topics } => {
            match hub.unsubscribe(connection_id, topics).await {
                Ok(unsubscribed) => {
                    let _ = hub
                        .send_to(
                            connection_id,
                            ServerMessage::Unsubscribed {
                                topics: unsubscribed,
                            },
                        )
                        .await;
                }
                Err(e) => {
                    let _ = hub
                        .send_to(
                            connection_id,
                            ServerMessage::Error {
                                message: e.to_string(),
                            },
                        )
                        .await;
                }
            }
        }
        ClientMessage::Ping => {
            let _ = hub.send_to(connection_id, ServerMessage::Pong).await;
        }
    }
}
