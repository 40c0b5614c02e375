//! Ordering rules for research citations

use super::model::ResearchCitation;

const LEADING_QUOTES: [char; 6] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Comparison key for a citation: the text with leading quotation marks removed
pub fn citation_sort_key(citation: &str) -> &str {
    citation.trim_start_matches(LEADING_QUOTES)
}

/// Sort citations ascending by key; plain case-sensitive comparison, stable on ties
pub fn sort_research(research: &mut [ResearchCitation]) {
    research.sort_by(|a, b| citation_sort_key(&a.citation).cmp(citation_sort_key(&b.citation)));
}
