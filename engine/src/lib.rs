//! Filter engine for the logic model dashboard
//!
//! Tracks which PBC component, partner and strategy are selected and derives,
//! for every display column, the set of items that stay visible along with
//! the colours the presentation layer should use.

pub mod core;
pub mod error;
pub mod filter_engine;

// Re-export commonly used types
pub use core::{Color, ColorMapper, Column, ColumnVisibility, FilterView, Mode, SelectionAction, SelectionState};
pub use error::{EngineError, EngineResult};
pub use filter_engine::FilterEngine;
pub use shared::Relation;
