//! Service implementations for ingestion I/O

pub mod file_cache;
pub mod local_source;
pub mod sheets_source;

pub use file_cache::{CacheEnvelope, FileDatasetCache};
pub use local_source::LocalCsvSource;
pub use sheets_source::GoogleSheetsSource;
