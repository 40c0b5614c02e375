//! Web host for the logic model dashboard
//!
//! Serves the browser presentation adapter, exposes the dataset and filter
//! view over REST, and pushes every new view to connected browsers over a
//! WebSocket.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::{DashboardState, Session};
pub use types::*;
pub use webserver_impl::{REVISION_HEADER, WebServer};

pub use traits::{StaticFileResponse, StaticFileServer, WebSocketManager};
pub use services::{RealStaticFileServer, RealWebSocketManager};
