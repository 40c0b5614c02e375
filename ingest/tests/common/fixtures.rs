//! Test fixtures for ingestion tests

use ingest::Sheet;
use std::path::PathBuf;

pub struct TestFixtures;

impl TestFixtures {
    /// Directory holding one exported CSV per sheet
    pub fn sheets_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sheets")
    }

    pub fn sheet_csv(sheet: Sheet) -> String {
        let path = Self::sheets_dir().join(format!("{}.csv", sheet.tab_name()));
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {}: {e}", path.display()))
    }

    /// A small valid dataset document used as the static fallback
    pub fn fallback_json() -> &'static str {
        r#"{
            "headerTooltips": [],
            "inputs": ["Funding"],
            "inputTooltips": [],
            "pbcComponents": ["Health"],
            "strategies": {
                "Fallback Strategy": {
                    "label": "Fallback Strategy",
                    "details": "",
                    "pbcComponents": [0],
                    "partners": [0],
                    "outputs": [],
                    "immediateOutputs": [],
                    "intermediateOutputs": [],
                    "longTermOutputs": [],
                    "research": []
                }
            },
            "partners": ["Hospital"],
            "outputs": [],
            "immediateOutputs": [],
            "intermediateOutputs": [],
            "longTermOutputs": []
        }"#
    }
}
