//! Typed rows for each sheet
//!
//! Cells are deserialized by header name; optional columns default to empty.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{IngestError, IngestResult};
use crate::types::Sheet;

/// A row type tied to the sheet it is read from
pub trait SheetRow: DeserializeOwned {
    const SHEET: Sheet;
    const REQUIRED_COLUMNS: &'static [&'static str];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StrategyRow {
    #[serde(rename = "Strategy")]
    pub strategy: String,
    #[serde(rename = "Details", default)]
    pub details: String,
    #[serde(rename = "PBC Component", alias = "PBC Components", default)]
    pub pbc_components: String,
    #[serde(rename = "Partners", alias = "Partner", default)]
    pub partners: String,
    #[serde(rename = "Outputs", default)]
    pub outputs: String,
    #[serde(rename = "Immediate Outcomes", default)]
    pub immediate_outcomes: String,
    #[serde(rename = "Intermediate Outcomes", default)]
    pub intermediate_outcomes: String,
    #[serde(rename = "Long-Term Outcomes", alias = "Long Term Outcomes", default)]
    pub long_term_outcomes: String,
}

impl SheetRow for StrategyRow {
    const SHEET: Sheet = Sheet::Strategies;
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Strategy"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResearchRow {
    #[serde(rename = "Strategy")]
    pub strategy: String,
    #[serde(rename = "Citation")]
    pub citation: String,
    #[serde(rename = "Related Outcome", alias = "Related Outcomes", default)]
    pub related_outcome: String,
}

impl SheetRow for ResearchRow {
    const SHEET: Sheet = Sheet::Research;
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Strategy", "Citation"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InputRow {
    #[serde(rename = "Input")]
    pub input: String,
    #[serde(rename = "Tooltip", default)]
    pub tooltip: String,
}

impl SheetRow for InputRow {
    const SHEET: Sheet = Sheet::Inputs;
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Input"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HeaderRow {
    #[serde(rename = "Tooltip")]
    pub tooltip: String,
}

impl SheetRow for HeaderRow {
    const SHEET: Sheet = Sheet::Headers;
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Tooltip"];
}

/// Parse a sheet's CSV text into typed rows
pub fn read_rows<T: SheetRow>(csv_text: &str) -> IngestResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    for column in T::REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == *column) {
            return Err(IngestError::MissingColumn {
                sheet: T::SHEET,
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let mut record = record?;
        // Exports drop trailing empty cells; pad so every header has a field
        while record.len() < headers.len() {
            record.push_field("");
        }
        rows.push(record.deserialize(Some(&headers))?);
    }
    Ok(rows)
}
