//! Data source configuration
//!
//! Command line flags fall back to `LOGIC_MODEL_*` environment variables,
//! which may come from a `.env` file loaded by the binary.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{IngestError, IngestResult};
use crate::types::LongTermPolicy;

pub const DEFAULT_SHEETS_BASE_URL: &str = "https://docs.google.com";
pub const DEFAULT_CACHE_SECS: u64 = 3600;
pub const DEFAULT_FALLBACK_PATH: &str = "./data/logic_model.json";

/// Remote or local spreadsheet the dataset is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    GoogleSheets { sheet_id: String, base_url: String },
    CsvDirectory { dir: PathBuf },
}

/// Resolved ingestion configuration
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub source: Option<SourceConfig>,
    pub fallback_path: PathBuf,
    pub cache_path: Option<PathBuf>,
    pub cache_duration: Duration,
    pub long_term_policy: LongTermPolicy,
}

impl IngestConfig {
    /// Fallback-only configuration
    pub fn new(fallback_path: impl Into<PathBuf>) -> Self {
        Self {
            source: None,
            fallback_path: fallback_path.into(),
            cache_path: None,
            cache_duration: Duration::from_secs(DEFAULT_CACHE_SECS),
            long_term_policy: LongTermPolicy::default(),
        }
    }

    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_cache(mut self, path: impl Into<PathBuf>, duration: Duration) -> Self {
        self.cache_path = Some(path.into());
        self.cache_duration = duration;
        self
    }

    pub fn with_long_term_policy(mut self, policy: LongTermPolicy) -> Self {
        self.long_term_policy = policy;
        self
    }
}

/// Source flags shared by every binary that loads the dataset
#[derive(Debug, Clone, clap::Args)]
pub struct SourceArgs {
    /// Google spreadsheet ID to fetch the logic model from
    #[arg(long, env = "LOGIC_MODEL_SHEET_ID")]
    pub sheet_id: Option<String>,

    /// Base URL of the spreadsheet export service
    #[arg(long, env = "LOGIC_MODEL_SHEETS_URL", default_value = DEFAULT_SHEETS_BASE_URL)]
    pub sheets_url: String,

    /// Directory of exported CSV tabs (used instead of a spreadsheet)
    #[arg(long, env = "LOGIC_MODEL_CSV_DIR")]
    pub csv_dir: Option<PathBuf>,

    /// Static dataset JSON used when the source cannot be loaded
    #[arg(long, env = "LOGIC_MODEL_FALLBACK", default_value = DEFAULT_FALLBACK_PATH)]
    pub fallback: PathBuf,

    /// Cache file for the last successfully fetched dataset
    #[arg(long, env = "LOGIC_MODEL_CACHE_FILE")]
    pub cache_file: Option<PathBuf>,

    /// Seconds a cached dataset stays fresh
    #[arg(long, env = "LOGIC_MODEL_CACHE_SECS", default_value_t = DEFAULT_CACHE_SECS)]
    pub cache_secs: u64,

    /// Association of long-term outcomes with strategies
    #[arg(long, env = "LOGIC_MODEL_LONG_TERM_POLICY", value_enum, default_value_t = LongTermPolicy::PerRow)]
    pub long_term_policy: LongTermPolicy,
}

impl SourceArgs {
    /// Resolve flags into a configuration; a sheet ID and CSV directory are exclusive
    pub fn into_config(self) -> IngestResult<IngestConfig> {
        let source = match (self.sheet_id, self.csv_dir) {
            (Some(_), Some(_)) => {
                return Err(IngestError::ConfigError {
                    message: "Use either --sheet-id or --csv-dir, not both".to_string(),
                });
            }
            (Some(sheet_id), None) => Some(SourceConfig::GoogleSheets {
                sheet_id,
                base_url: self.sheets_url,
            }),
            (None, Some(dir)) => Some(SourceConfig::CsvDirectory { dir }),
            (None, None) => None,
        };

        let mut config = IngestConfig::new(self.fallback).with_long_term_policy(self.long_term_policy);
        config.source = source;
        if let Some(cache_file) = self.cache_file {
            config = config.with_cache(cache_file, Duration::from_secs(self.cache_secs));
        }
        Ok(config)
    }
}
