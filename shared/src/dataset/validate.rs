//! Load-time integrity checks
//!
//! Out-of-range indices are data errors caught here, never lookup failures
//! inside the filter engine.

use std::collections::HashSet;

use super::model::{DISPLAY_COLUMNS, LogicModelDataset, ResearchCitation};
use super::relation::Relation;
use crate::errors::{SharedError, SharedResult};

impl LogicModelDataset {
    /// Check every cross-reference and label array
    pub fn validate(&self) -> SharedResult<()> {
        self.validate_labels()?;
        self.validate_tooltips()?;
        self.validate_strategies()
    }

    fn validate_labels(&self) -> SharedResult<()> {
        check_unique("inputs", &self.inputs)?;
        for relation in Relation::ALL {
            check_unique(relation.as_key(), self.labels(relation))?;
        }
        Ok(())
    }

    fn validate_tooltips(&self) -> SharedResult<()> {
        if self.header_tooltips.len() > DISPLAY_COLUMNS {
            return Err(SharedError::TooManyTooltips {
                field: "headerTooltips".to_string(),
                actual: self.header_tooltips.len(),
                limit: DISPLAY_COLUMNS,
            });
        }
        if self.input_tooltips.len() > self.inputs.len() {
            return Err(SharedError::TooManyTooltips {
                field: "inputTooltips".to_string(),
                actual: self.input_tooltips.len(),
                limit: self.inputs.len(),
            });
        }
        Ok(())
    }

    fn validate_strategies(&self) -> SharedResult<()> {
        for (key, strategy) in &self.strategies {
            if strategy.label != *key {
                return Err(SharedError::StrategyKeyMismatch {
                    key: key.clone(),
                    label: strategy.label.clone(),
                });
            }
            for relation in Relation::ALL {
                let len = self.labels(relation).len();
                let mut seen = HashSet::new();
                for &index in strategy.indices(relation) {
                    if index >= len {
                        return Err(SharedError::DanglingIndex {
                            strategy: key.clone(),
                            relation: relation.to_string(),
                            index,
                            len,
                        });
                    }
                    if !seen.insert(index) {
                        return Err(SharedError::DuplicateIndex {
                            strategy: key.clone(),
                            relation: relation.to_string(),
                            index,
                        });
                    }
                }
            }
            validate_research(key, &strategy.research)?;
        }
        Ok(())
    }
}

/// One entry per citation text, each with distinct related outcomes
fn validate_research(strategy: &str, research: &[ResearchCitation]) -> SharedResult<()> {
    let mut citations = HashSet::with_capacity(research.len());
    for entry in research {
        if !citations.insert(entry.citation.as_str()) {
            return Err(SharedError::DuplicateCitation {
                strategy: strategy.to_string(),
                citation: entry.citation.clone(),
            });
        }
        let mut outcomes = HashSet::with_capacity(entry.related_outcomes.len());
        for outcome in &entry.related_outcomes {
            if !outcomes.insert(outcome.as_str()) {
                return Err(SharedError::DuplicateOutcome {
                    strategy: strategy.to_string(),
                    citation: entry.citation.clone(),
                    outcome: outcome.clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_unique(relation: &str, labels: &[String]) -> SharedResult<()> {
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(SharedError::DuplicateLabel {
                relation: relation.to_string(),
                label: label.clone(),
            });
        }
    }
    Ok(())
}
