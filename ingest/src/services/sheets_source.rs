//! Google Sheets CSV export over HTTP

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use shared::{ProcessId, process_debug};

use crate::error::{IngestError, IngestResult};
use crate::traits::SheetSource;
use crate::types::Sheet;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches each tab of a published spreadsheet as CSV
pub struct GoogleSheetsSource {
    sheet_id: String,
    base_url: Url,
    client: reqwest::Client,
}

impl GoogleSheetsSource {
    /// Create a source for `sheet_id` served from `base_url`
    pub fn new(sheet_id: impl Into<String>, base_url: &str) -> IngestResult<Self> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            sheet_id: sheet_id.into(),
            base_url: Url::parse(base_url)?,
            client,
        })
    }

    /// Export URL for one tab
    pub fn export_url(&self, sheet: Sheet) -> IngestResult<Url> {
        let mut url = self
            .base_url
            .join(&format!("/spreadsheets/d/{}/gviz/tq", self.sheet_id))?;
        url.query_pairs_mut()
            .append_pair("tqx", "out:csv")
            .append_pair("sheet", sheet.tab_name());
        Ok(url)
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsSource {
    async fn fetch_sheet(&self, sheet: Sheet) -> IngestResult<String> {
        let url = self.export_url(sheet)?;
        process_debug!(ProcessId::current(), "🌐 GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| IngestError::FetchFailed { sheet, message: e.to_string() })?;

        if !response.status().is_success() {
            return Err(IngestError::HttpStatus {
                sheet,
                status: response.status().as_u16(),
            });
        }

        // Private sheets answer 200 with a sign-in page
        let is_html = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("text/html"));
        if is_html {
            return Err(IngestError::FetchFailed {
                sheet,
                message: "received an HTML page; is the spreadsheet shared publicly?".to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| IngestError::FetchFailed { sheet, message: e.to_string() })
    }

    fn describe(&self) -> String {
        format!("Google Sheet {}", self.sheet_id)
    }
}
