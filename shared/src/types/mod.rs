//! Core types used throughout the dashboard workspace

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Reported by library code running without an initialised binary
static LIBRARY_PROCESS: ProcessId = ProcessId::Library;

/// Process identifier for any component in the system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// Dashboard web server (serves the presentation layer)
    WebServer,
    /// Standalone ingestion CLI
    Ingest,
    /// Library use without a binary (tests, embedding)
    Library,
}

impl ProcessId {
    /// Initialize the global process ID for the webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Initialize the global process ID for the ingest CLI
    pub fn init_ingest() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Ingest)
    }

    /// Get the global process ID, or `Library` when no binary initialised it
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&LIBRARY_PROCESS)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Ingest => write!(f, "ingest"),
            ProcessId::Library => write!(f, "library"),
        }
    }
}
