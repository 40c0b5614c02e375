//! Core filtering logic
//!
//! Pure functions and value types with no I/O dependencies

pub mod color;
pub mod selection;
pub mod view;
pub mod visibility;

// Re-export commonly used types
pub use color::{Color, ColorMapper, DEFAULT_COLOR, PBC_PALETTE, RAMP_LEN};
pub use selection::{Mode, SelectionAction, SelectionState};
pub use view::{Column, ColumnVisibility, FilterView};
