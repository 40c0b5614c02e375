//! Logic model dataset
//!
//! The immutable data consumed by the filter engine and exchanged as a single
//! JSON document between ingestion, the web server and the browser.

pub mod model;
pub mod relation;
pub mod research;
pub mod validate;

pub use model::{DISPLAY_COLUMNS, LogicModelDataset, ResearchCitation, Strategy};
pub use relation::Relation;
pub use research::{citation_sort_key, sort_research};
