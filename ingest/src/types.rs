//! Ingestion-specific data types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spreadsheet tabs the logic model is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sheet {
    Strategies,
    Research,
    Inputs,
    Headers,
}

impl Sheet {
    pub const ALL: [Sheet; 4] = [Sheet::Strategies, Sheet::Research, Sheet::Inputs, Sheet::Headers];

    /// Tab name in the spreadsheet and file stem in a CSV directory
    pub fn tab_name(&self) -> &'static str {
        match self {
            Sheet::Strategies => "Strategies",
            Sheet::Research => "Research",
            Sheet::Inputs => "Inputs",
            Sheet::Headers => "Headers",
        }
    }

    /// Only the strategies tab must be present; the rest enrich the model
    pub fn is_required(&self) -> bool {
        matches!(self, Sheet::Strategies)
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_name())
    }
}

/// How long-term outcomes are associated with strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LongTermPolicy {
    /// Every strategy relates to every long-term outcome
    AllStrategies,
    /// Use the long-term cell of each strategy row
    #[default]
    PerRow,
}

impl fmt::Display for LongTermPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LongTermPolicy::AllStrategies => write!(f, "all-strategies"),
            LongTermPolicy::PerRow => write!(f, "per-row"),
        }
    }
}

/// Inputs a cached dataset was built from; an entry only serves the same key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheKey {
    /// Description of the sheet source
    pub source: String,
    pub long_term_policy: LongTermPolicy,
}

impl CacheKey {
    pub fn new(source: impl Into<String>, long_term_policy: LongTermPolicy) -> Self {
        Self {
            source: source.into(),
            long_term_policy,
        }
    }
}

/// Where a loaded dataset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetOrigin {
    Cache,
    Source,
    Fallback,
}

impl fmt::Display for DatasetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetOrigin::Cache => write!(f, "cache"),
            DatasetOrigin::Source => write!(f, "source"),
            DatasetOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// A dataset together with its origin
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: shared::LogicModelDataset,
    pub origin: DatasetOrigin,
}
