//! Dataset loading with cache, live source and static fallback
//!
//! Order: fresh cache entry, then the configured source, then the fallback
//! JSON file. Only when the fallback also fails is the load an error.

use std::path::{Path, PathBuf};

use shared::logging::log_success;
use shared::{LogicModelDataset, ProcessId, process_info, process_warn};

use crate::config::{IngestConfig, SourceConfig};
use crate::core::builder::DatasetBuilder;
use crate::core::rows::{HeaderRow, InputRow, ResearchRow, SheetRow, StrategyRow, read_rows};
use crate::error::{IngestError, IngestResult};
use crate::services::{FileDatasetCache, GoogleSheetsSource, LocalCsvSource};
use crate::traits::{DatasetCache, SheetSource};
use crate::types::{CacheKey, DatasetOrigin, LoadedDataset, LongTermPolicy, Sheet};

pub struct DatasetLoader {
    source: Option<Box<dyn SheetSource>>,
    cache: Option<Box<dyn DatasetCache>>,
    fallback_path: PathBuf,
    policy: LongTermPolicy,
}

impl DatasetLoader {
    /// Loader that only reads the fallback file
    pub fn new(fallback_path: impl Into<PathBuf>, policy: LongTermPolicy) -> Self {
        Self {
            source: None,
            cache: None,
            fallback_path: fallback_path.into(),
            policy,
        }
    }

    pub fn with_source(mut self, source: Box<dyn SheetSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_cache(mut self, cache: Box<dyn DatasetCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Wire up the concrete services named by a configuration
    pub fn from_config(config: &IngestConfig) -> IngestResult<Self> {
        let mut loader = Self::new(&config.fallback_path, config.long_term_policy);

        match &config.source {
            Some(SourceConfig::GoogleSheets { sheet_id, base_url }) => {
                loader = loader.with_source(Box::new(GoogleSheetsSource::new(sheet_id.clone(), base_url)?));
            }
            Some(SourceConfig::CsvDirectory { dir }) => {
                loader = loader.with_source(Box::new(LocalCsvSource::new(dir)));
            }
            None => {}
        }
        if let Some(cache_path) = &config.cache_path {
            loader = loader.with_cache(Box::new(FileDatasetCache::new(cache_path, config.cache_duration)));
        }
        Ok(loader)
    }

    /// Produce a validated dataset or `DatasetLoadFailure`
    pub async fn load(&self) -> IngestResult<LoadedDataset> {
        let key = self.cache_key();
        if let Some(cache) = &self.cache {
            match cache.load_fresh(&key).await {
                Ok(Some(dataset)) => {
                    process_info!(ProcessId::current(), "💾 Using cached dataset");
                    return Ok(LoadedDataset { dataset, origin: DatasetOrigin::Cache });
                }
                Ok(None) => {}
                Err(e) => process_warn!(ProcessId::current(), "⚠️ Ignoring unreadable cache: {}", e),
            }
        }

        let source_error = match &self.source {
            Some(source) => match self.load_from_source(source.as_ref()).await {
                Ok(dataset) => {
                    log_success(
                        ProcessId::current(),
                        &format!("Loaded {} strategies from {}", dataset.strategy_count(), source.describe()),
                    );
                    self.store_in_cache(&key, &dataset).await;
                    return Ok(LoadedDataset { dataset, origin: DatasetOrigin::Source });
                }
                Err(e) => {
                    process_warn!(ProcessId::current(), "⚠️ {} failed: {}", source.describe(), e);
                    e.to_string()
                }
            },
            None => "no source configured".to_string(),
        };

        match load_fallback(&self.fallback_path).await {
            Ok(dataset) => {
                process_info!(
                    ProcessId::current(),
                    "📂 Using fallback dataset {}",
                    self.fallback_path.display()
                );
                Ok(LoadedDataset { dataset, origin: DatasetOrigin::Fallback })
            }
            Err(fallback_error) => Err(IngestError::DatasetLoadFailure {
                source_error,
                fallback_error: fallback_error.to_string(),
            }),
        }
    }

    /// Fetch every sheet and build; optional sheets that fail count as empty
    pub async fn load_from_source(&self, source: &dyn SheetSource) -> IngestResult<LogicModelDataset> {
        let strategies: Vec<StrategyRow> = fetch_rows(source).await?;
        let research: Vec<ResearchRow> = fetch_rows(source).await?;
        let inputs: Vec<InputRow> = fetch_rows(source).await?;
        let headers: Vec<HeaderRow> = fetch_rows(source).await?;

        let mut builder = DatasetBuilder::new(self.policy);
        builder
            .add_strategy_rows(&strategies)
            .add_research_rows(&research)
            .add_input_rows(&inputs)
            .add_header_rows(&headers);
        builder.build()
    }

    /// Identity of the datasets this loader builds
    pub fn cache_key(&self) -> CacheKey {
        let source = self
            .source
            .as_ref()
            .map(|source| source.describe())
            .unwrap_or_else(|| "none".to_string());
        CacheKey::new(source, self.policy)
    }

    async fn store_in_cache(&self, key: &CacheKey, dataset: &LogicModelDataset) {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.store(key, dataset).await {
                process_warn!(ProcessId::current(), "⚠️ Could not write cache: {}", e);
            }
        }
    }
}

async fn fetch_rows<T: SheetRow>(source: &dyn SheetSource) -> IngestResult<Vec<T>> {
    let sheet: Sheet = T::SHEET;

    let result = match source.fetch_sheet(sheet).await {
        Ok(csv_text) => read_rows::<T>(&csv_text),
        Err(e) => Err(e),
    };
    match result {
        Ok(rows) => Ok(rows),
        Err(e) if !sheet.is_required() => {
            process_warn!(ProcessId::current(), "⚠️ Optional sheet {} unavailable: {}", sheet, e);
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Read and validate the static dataset JSON
pub async fn load_fallback(path: &Path) -> IngestResult<LogicModelDataset> {
    let bytes = tokio::fs::read(path).await?;
    Ok(LogicModelDataset::from_json_slice(&bytes)?)
}
