//! Type definitions for webserver
//!
//! Wire messages exchanged with the browser and REST request/response bodies.

use engine::{FilterView, SelectionAction};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Messages sent from the browser over the WebSocket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BrowserMessage {
    SelectPbc { name: String },
    SelectPartner { index: usize },
    SelectStrategy { index: usize },
    ClearAll,
    RequestView,
}

impl BrowserMessage {
    /// Selection operation carried by this message, if any
    pub fn into_action(self) -> Option<SelectionAction> {
        match self {
            BrowserMessage::SelectPbc { name } => Some(SelectionAction::SelectPbc { name }),
            BrowserMessage::SelectPartner { index } => Some(SelectionAction::SelectPartner { index }),
            BrowserMessage::SelectStrategy { index } => Some(SelectionAction::SelectStrategy { index }),
            BrowserMessage::ClearAll => Some(SelectionAction::ClearAll),
            BrowserMessage::RequestView => None,
        }
    }
}

/// Messages pushed to browsers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    ConnectionAck { session_id: Uuid, server_time: u64 },
    /// `revision` grows by one per applied selection
    ViewUpdate { revision: u64, view: FilterView },
    Error { message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectPbcRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectIndexRequest {
    pub index: usize,
}

/// Items of one relation reachable from the visible strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedItems {
    pub relation: shared::Relation,
    pub indices: Vec<usize>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub active_clients: usize,
    pub dataset_origin: String,
    pub strategies: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_message_wire_format() {
        let message: BrowserMessage = serde_json::from_str(r#"{"type":"select_pbc","name":"Health"}"#).unwrap();
        assert_eq!(
            message.into_action(),
            Some(SelectionAction::SelectPbc { name: "Health".into() })
        );

        let message: BrowserMessage = serde_json::from_str(r#"{"type":"request_view"}"#).unwrap();
        assert_eq!(message.into_action(), None);
    }

    #[test]
    fn test_client_message_tagged() {
        let json = serde_json::to_value(ClientMessage::Error { message: "nope".into() }).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["message"], "nope");
    }
}
