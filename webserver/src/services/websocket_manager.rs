//! WebSocket client management service
//!
//! Tracks each browser's outgoing channel and fans view updates out to all of them

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{RwLock, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};
use uuid::Uuid;

use shared::{ProcessId, process_debug, process_info, process_warn};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::WebSocketManager;
use crate::types::ClientMessage;

#[derive(Debug)]
struct ClientConnection {
    sender: mpsc::Sender<ClientMessage>,
    connected_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct RealWebSocketManager {
    clients: Arc<RwLock<HashMap<Uuid, ClientConnection>>>,
}

impl RealWebSocketManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Periodically drop clients whose receivers have gone away
    pub fn start_cleanup_task(&self) -> JoinHandle<()> {
        let clients = self.clients.clone();

        tokio::spawn(async move {
            let mut interval = interval(Duration::from_secs(30));
            loop {
                interval.tick().await;

                let mut client_map = clients.write().await;
                let before = client_map.len();
                client_map.retain(|_, connection| !connection.sender.is_closed());
                let removed = before - client_map.len();
                if removed > 0 {
                    process_info!(ProcessId::current(), "🧹 Cleaned up {} disconnected clients", removed);
                }
            }
        })
    }
}

#[async_trait]
impl WebSocketManager for RealWebSocketManager {
    async fn add_client(&self, client_id: Uuid, sender: mpsc::Sender<ClientMessage>) -> WebServerResult<()> {
        let ack = ClientMessage::ConnectionAck {
            session_id: client_id,
            server_time: Utc::now().timestamp().max(0) as u64,
        };
        if let Err(e) = sender.try_send(ack) {
            process_warn!(ProcessId::current(), "Failed to send connection ack to {}: {}", client_id, e);
        }

        let connection = ClientConnection {
            sender,
            connected_at: Utc::now(),
        };
        self.clients.write().await.insert(client_id, connection);

        process_info!(ProcessId::current(), "👋 Added WebSocket client {}", client_id);
        Ok(())
    }

    async fn remove_client(&self, client_id: Uuid) -> WebServerResult<()> {
        if let Some(connection) = self.clients.write().await.remove(&client_id) {
            let connected_for = Utc::now().signed_duration_since(connection.connected_at);
            process_info!(
                ProcessId::current(),
                "👋 Removed WebSocket client {} after {}s",
                client_id,
                connected_for.num_seconds()
            );
        }
        Ok(())
    }

    async fn broadcast(&self, message: ClientMessage) -> WebServerResult<usize> {
        // Clone senders so the lock is not held while sending
        let client_senders: Vec<(Uuid, mpsc::Sender<ClientMessage>)> = {
            let clients = self.clients.read().await;
            clients
                .iter()
                .map(|(client_id, connection)| (*client_id, connection.sender.clone()))
                .collect()
        };

        if client_senders.is_empty() {
            process_debug!(ProcessId::current(), "📭 No WebSocket clients connected");
            return Ok(0);
        }

        let mut failed_clients = Vec::new();
        let mut success_count = 0;
        for (client_id, sender) in client_senders {
            match sender.try_send(message.clone()) {
                Ok(()) => success_count += 1,
                Err(TrySendError::Full(_)) => {
                    process_warn!(ProcessId::current(), "Client {} channel full, dropping message", client_id);
                }
                Err(TrySendError::Closed(_)) => failed_clients.push(client_id),
            }
        }

        if !failed_clients.is_empty() {
            let mut clients = self.clients.write().await;
            for client_id in failed_clients {
                if clients.remove(&client_id).is_some() {
                    process_info!(ProcessId::current(), "🗑️ Removed disconnected client {} during broadcast", client_id);
                }
            }
        }

        process_debug!(ProcessId::current(), "📡 Broadcast delivered to {} clients", success_count);
        Ok(success_count)
    }

    async fn send_to_client(&self, client_id: Uuid, message: ClientMessage) -> WebServerResult<()> {
        let sender = {
            let clients = self.clients.read().await;
            clients.get(&client_id).map(|connection| connection.sender.clone())
        };
        let Some(sender) = sender else {
            return Err(WebServerError::websocket(format!("Client {} not found", client_id)));
        };

        match sender.try_send(message) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(WebServerError::websocket("Client channel full")),
            Err(TrySendError::Closed(_)) => {
                self.clients.write().await.remove(&client_id);
                Err(WebServerError::websocket("Client disconnected"))
            }
        }
    }

    async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }
}
