//! Ingestion error types

use thiserror::Error;
use shared::SharedError;

use crate::types::Sheet;

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Ingestion error types
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to fetch sheet {sheet}: {message}")]
    FetchFailed { sheet: Sheet, message: String },

    #[error("Sheet {sheet} returned HTTP {status}")]
    HttpStatus { sheet: Sheet, status: u16 },

    #[error("Sheet {sheet} is missing required column '{column}'")]
    MissingColumn { sheet: Sheet, column: String },

    #[error("Citation has no URL marker: {text}")]
    MalformedCitation { text: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Cache error: {message}")]
    CacheError { message: String },

    #[error("Dataset could not be loaded (source: {source_error}; fallback: {fallback_error})")]
    DatasetLoadFailure {
        source_error: String,
        fallback_error: String,
    },

    #[error("Invalid dataset: {0}")]
    InvalidDataset(#[from] SharedError),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
