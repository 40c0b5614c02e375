//! Pure parsing and dataset assembly, no I/O

pub mod builder;
pub mod cells;
pub mod citation;
pub mod rows;

pub use builder::DatasetBuilder;
pub use cells::split_cell;
pub use citation::{ParsedCitation, parse_citation};
pub use rows::{HeaderRow, InputRow, ResearchRow, StrategyRow, read_rows};
