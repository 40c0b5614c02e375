//! On-disk cache of the last fetched dataset

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use shared::{LogicModelDataset, ProcessId, process_debug};

use crate::error::{IngestError, IngestResult};
use crate::traits::DatasetCache;
use crate::types::CacheKey;

/// Stored cache document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEnvelope {
    pub fetched_at: DateTime<Utc>,
    /// Absent in envelopes written before keys were recorded; never matches
    #[serde(default)]
    pub key: Option<CacheKey>,
    pub dataset: LogicModelDataset,
}

impl CacheEnvelope {
    pub fn is_fresh(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        let Ok(max_age) = chrono::Duration::from_std(max_age) else {
            return true;
        };
        now.signed_duration_since(self.fetched_at) <= max_age
    }
}

/// JSON file cache with a maximum age
pub struct FileDatasetCache {
    path: PathBuf,
    max_age: Duration,
}

impl FileDatasetCache {
    pub fn new(path: impl Into<PathBuf>, max_age: Duration) -> Self {
        Self { path: path.into(), max_age }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn read_envelope(&self) -> IngestResult<Option<CacheEnvelope>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let envelope: CacheEnvelope = serde_json::from_slice(&bytes).map_err(|e| IngestError::CacheError {
            message: format!("{}: {}", self.path.display(), e),
        })?;
        Ok(Some(envelope))
    }
}

#[async_trait]
impl DatasetCache for FileDatasetCache {
    async fn load_fresh(&self, key: &CacheKey) -> IngestResult<Option<LogicModelDataset>> {
        let Some(envelope) = self.read_envelope().await? else {
            return Ok(None);
        };
        if envelope.key.as_ref() != Some(key) {
            process_debug!(
                ProcessId::current(),
                "🔑 Cache {} was built for another source or policy",
                self.path.display()
            );
            return Ok(None);
        }
        if !envelope.is_fresh(self.max_age, Utc::now()) {
            process_debug!(
                ProcessId::current(),
                "⏰ Cache {} is stale (fetched {})",
                self.path.display(),
                envelope.fetched_at
            );
            return Ok(None);
        }
        Ok(Some(envelope.dataset.into_validated()?))
    }

    async fn store(&self, key: &CacheKey, dataset: &LogicModelDataset) -> IngestResult<()> {
        let envelope = CacheEnvelope {
            fetched_at: Utc::now(),
            key: Some(key.clone()),
            dataset: dataset.clone(),
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(&envelope)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
