//! Service trait definitions for dependency injection
//!
//! Socket and file I/O sit behind these traits so handlers can be tested with mocks.

use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::error::WebServerResult;
use crate::types::ClientMessage;

/// WebSocket client management service trait
#[mockall::automock]
#[async_trait]
pub trait WebSocketManager: Send + Sync {
    /// Register a client's outgoing channel
    async fn add_client(&self, client_id: Uuid, sender: mpsc::Sender<ClientMessage>) -> WebServerResult<()>;

    async fn remove_client(&self, client_id: Uuid) -> WebServerResult<()>;

    /// Send to every connected client; returns how many received it
    async fn broadcast(&self, message: ClientMessage) -> WebServerResult<usize>;

    async fn send_to_client(&self, client_id: Uuid, message: ClientMessage) -> WebServerResult<()>;

    async fn client_count(&self) -> usize;
}

/// Static file serving service trait
#[mockall::automock]
#[async_trait]
pub trait StaticFileServer: Send + Sync {
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse>;

    async fn file_exists(&self, path: &str) -> bool;
}

/// Static file response
#[derive(Debug, Clone)]
pub struct StaticFileResponse {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl StaticFileResponse {
    pub fn new(content: Vec<u8>, content_type: String) -> Self {
        Self {
            content,
            content_type,
            cache_control: None,
        }
    }

    pub fn with_cache_control(mut self, cache_control: String) -> Self {
        self.cache_control = Some(cache_control);
        self
    }
}
