//! Splitting a citation cell into text and link

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{IngestError, IngestResult};

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', ')', ']', '>', '"', '\'', '”', '’'];

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(?:https?://|www\.)\S+").expect("URL pattern is a valid regex")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCitation {
    pub citation: String,
    pub link_text: String,
    pub link: String,
}

/// Split at the first URL marker
///
/// The text before the marker is the citation; when it is empty the URL
/// itself stands in. A cell without a marker is `MalformedCitation`.
pub fn parse_citation(cell: &str) -> IngestResult<ParsedCitation> {
    let cell = cell.trim();
    let found = url_pattern()
        .find(cell)
        .ok_or_else(|| IngestError::MalformedCitation { text: cell.to_string() })?;

    let link_text = found.as_str().to_string();
    let trimmed = link_text.trim_end_matches(TRAILING_PUNCTUATION);
    let link = if trimmed.to_ascii_lowercase().starts_with("www.") {
        format!("https://{trimmed}")
    } else {
        trimmed.to_string()
    };

    let before = cell[..found.start()].trim();
    let citation = if before.is_empty() { link_text.clone() } else { before.to_string() };

    Ok(ParsedCitation { citation, link_text, link })
}
