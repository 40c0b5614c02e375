//! Test helpers for ingestion tests

use ingest::traits::{MockDatasetCache, MockSheetSource};
use ingest::{IngestError, Sheet};
use std::path::{Path, PathBuf};

use super::fixtures::TestFixtures;

pub struct TestHelpers;

impl TestHelpers {
    /// Write the fallback document into `dir`
    pub fn write_fallback(dir: &Path) -> PathBuf {
        let path = dir.join("logic_model.json");
        std::fs::write(&path, TestFixtures::fallback_json()).unwrap();
        path
    }

    /// Source answering every sheet from the fixture directory
    pub fn fixture_source() -> MockSheetSource {
        let mut source = MockSheetSource::new();
        source
            .expect_fetch_sheet()
            .returning(|sheet| Ok(TestFixtures::sheet_csv(sheet)));
        source.expect_describe().return_const("fixture sheets".to_string());
        source
    }

    /// Source whose every fetch fails
    pub fn failing_source() -> MockSheetSource {
        let mut source = MockSheetSource::new();
        source.expect_fetch_sheet().returning(|sheet| {
            Err(IngestError::FetchFailed {
                sheet,
                message: "connection refused".to_string(),
            })
        });
        source.expect_describe().return_const("unreachable sheets".to_string());
        source
    }

    /// Cache that always misses and accepts stores
    pub fn empty_cache() -> MockDatasetCache {
        let mut cache = MockDatasetCache::new();
        cache.expect_load_fresh().returning(|_| Ok(None));
        cache.expect_store().returning(|_, _| Ok(()));
        cache
    }

    pub fn sheet_names() -> Vec<&'static str> {
        Sheet::ALL.iter().map(|sheet| sheet.tab_name()).collect()
    }
}
