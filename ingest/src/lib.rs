//! Ingestion of the logic model
//!
//! Reads the spreadsheet tabs (Google Sheets export or local CSV files),
//! assembles a validated `LogicModelDataset`, and falls back to a cached or
//! static JSON copy when the live source is unavailable.

pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod services;
pub mod traits;
pub mod types;

pub use config::{IngestConfig, SourceArgs, SourceConfig};
pub use error::{IngestError, IngestResult};
pub use loader::{DatasetLoader, load_fallback};
pub use traits::{DatasetCache, SheetSource};
pub use types::{CacheKey, DatasetOrigin, LoadedDataset, LongTermPolicy, Sheet};
