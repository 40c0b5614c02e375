//! WebServer-specific error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use engine::EngineError;
use ingest::IngestError;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on port {port}")]
    ServerStartupFailed { port: u16 },

    #[error("Static file not found: {path}")]
    StaticFileNotFound { path: String },

    #[error("Access denied: {path}")]
    AccessDenied { path: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("WebSocket error: {0}")]
    WebSocketError(String),

    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("Dataset loading failed: {0}")]
    Ingest(#[from] IngestError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    pub fn websocket(message: impl Into<String>) -> Self {
        Self::WebSocketError(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::StaticFileNotFound { path: path.into() }
    }

    /// HTTP status reported to the browser
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::Engine(_) | WebServerError::SharedError(_) => StatusCode::BAD_REQUEST,
            WebServerError::StaticFileNotFound { .. } => StatusCode::NOT_FOUND,
            WebServerError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
