//! Exported CSV tabs in a local directory

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::{IngestError, IngestResult};
use crate::traits::SheetSource;
use crate::types::Sheet;

/// Reads `{dir}/{tab}.csv` for each sheet
pub struct LocalCsvSource {
    dir: PathBuf,
}

impl LocalCsvSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn sheet_path(&self, sheet: Sheet) -> PathBuf {
        self.dir.join(format!("{}.csv", sheet.tab_name()))
    }
}

#[async_trait]
impl SheetSource for LocalCsvSource {
    async fn fetch_sheet(&self, sheet: Sheet) -> IngestResult<String> {
        let path = self.sheet_path(sheet);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| IngestError::FetchFailed {
                sheet,
                message: format!("{}: {}", path.display(), e),
            })
    }

    fn describe(&self) -> String {
        format!("CSV directory {}", self.dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_tab_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Inputs.csv"), "Input\nFunding\n").unwrap();
        let source = LocalCsvSource::new(dir.path());

        let csv = source.fetch_sheet(Sheet::Inputs).await.unwrap();
        assert_eq!(csv, "Input\nFunding\n");

        let err = source.fetch_sheet(Sheet::Headers).await.unwrap_err();
        assert!(matches!(err, IngestError::FetchFailed { sheet: Sheet::Headers, .. }));
    }
}
