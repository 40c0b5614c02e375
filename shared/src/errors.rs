//! Shared error types for the dashboard workspace

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Dataset JSON is malformed: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Strategy '{strategy}' references {relation} index {index}, but only {len} entries exist")]
    DanglingIndex {
        strategy: String,
        relation: String,
        index: usize,
        len: usize,
    },

    #[error("Strategy '{strategy}' lists {relation} index {index} more than once")]
    DuplicateIndex {
        strategy: String,
        relation: String,
        index: usize,
    },

    #[error("Strategy '{strategy}' cites '{citation}' more than once")]
    DuplicateCitation { strategy: String, citation: String },

    #[error("Citation '{citation}' of strategy '{strategy}' repeats related outcome '{outcome}'")]
    DuplicateOutcome {
        strategy: String,
        citation: String,
        outcome: String,
    },

    #[error("Duplicate label in {relation}: {label}")]
    DuplicateLabel { relation: String, label: String },

    #[error("Too many {field}: {actual} entries for {limit} slots")]
    TooManyTooltips {
        field: String,
        actual: usize,
        limit: usize,
    },

    #[error("Strategy key '{key}' does not match its label '{label}'")]
    StrategyKeyMismatch { key: String, label: String },

    #[error("Unknown relation key: {input}")]
    UnknownRelation { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
