//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod static_server;
pub mod websocket_manager;

pub use static_server::RealStaticFileServer;
pub use websocket_manager::RealWebSocketManager;
