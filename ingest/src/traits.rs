//! Trait definitions for ingestion services

use async_trait::async_trait;
use shared::LogicModelDataset;

use crate::error::IngestResult;
use crate::types::{CacheKey, Sheet};

/// Tabular source of the logic model, one CSV document per sheet
#[mockall::automock]
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch one sheet as raw CSV text
    async fn fetch_sheet(&self, sheet: Sheet) -> IngestResult<String>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Persistent store for the last successfully built dataset
#[mockall::automock]
#[async_trait]
pub trait DatasetCache: Send + Sync {
    /// Cached dataset if present, not expired, and built for `key`
    async fn load_fresh(&self, key: &CacheKey) -> IngestResult<Option<LogicModelDataset>>;

    async fn store(&self, key: &CacheKey, dataset: &LogicModelDataset) -> IngestResult<()>;
}
