//! Shared types for the logic model dashboard
//!
//! Holds the dataset contract exchanged between ingestion, the filter engine
//! and the browser, plus process identity and logging used by every binary.

pub mod dataset;
pub mod errors;
pub mod logging;
pub mod types;

pub use dataset::{DISPLAY_COLUMNS, LogicModelDataset, Relation, ResearchCitation, Strategy};
pub use errors::*;
pub use types::*;
