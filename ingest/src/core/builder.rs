//! Assembles a `LogicModelDataset` from parsed sheet rows
//!
//! Label arrays are interned in first-seen order, so indices are stable for a
//! given spreadsheet. The result is validated before it is handed out.

use shared::{DISPLAY_COLUMNS, LogicModelDataset, ProcessId, Relation, ResearchCitation, Strategy};
use shared::{process_debug, process_warn};

use super::cells::split_cell;
use super::citation::parse_citation;
use super::rows::{HeaderRow, InputRow, ResearchRow, StrategyRow};
use crate::error::IngestResult;
use crate::types::LongTermPolicy;

/// Position of `label` in `labels`, appending it when new
fn intern(labels: &mut Vec<String>, label: &str) -> usize {
    match labels.iter().position(|existing| existing == label) {
        Some(index) => index,
        None => {
            labels.push(label.to_string());
            labels.len() - 1
        }
    }
}

pub struct DatasetBuilder {
    policy: LongTermPolicy,
    dataset: LogicModelDataset,
}

impl DatasetBuilder {
    pub fn new(policy: LongTermPolicy) -> Self {
        Self {
            policy,
            dataset: LogicModelDataset::default(),
        }
    }

    /// Add strategy rows; a repeated label merges into the first record
    pub fn add_strategy_rows(&mut self, rows: &[StrategyRow]) -> &mut Self {
        for row in rows {
            let label = row.strategy.trim();
            if label.is_empty() {
                continue;
            }

            let dataset = &mut self.dataset;
            let strategy = dataset
                .strategies
                .entry(label.to_string())
                .or_insert_with(|| Strategy::new(label));

            let details = row.details.trim();
            if strategy.details.is_empty() {
                strategy.details = details.to_string();
            } else if !details.is_empty() && strategy.details != details {
                strategy.details = format!("{}\n{}", strategy.details, details);
            }

            let cells = [
                (Relation::PbcComponents, &row.pbc_components),
                (Relation::Partners, &row.partners),
                (Relation::Outputs, &row.outputs),
                (Relation::ImmediateOutputs, &row.immediate_outcomes),
                (Relation::IntermediateOutputs, &row.intermediate_outcomes),
                (Relation::LongTermOutputs, &row.long_term_outcomes),
            ];
            for (relation, cell) in cells {
                for value in split_cell(cell) {
                    let labels = match relation {
                        Relation::Outputs => &mut dataset.outputs,
                        Relation::ImmediateOutputs => &mut dataset.immediate_outputs,
                        Relation::IntermediateOutputs => &mut dataset.intermediate_outputs,
                        Relation::LongTermOutputs => &mut dataset.long_term_outputs,
                        Relation::PbcComponents => &mut dataset.pbc_components,
                        Relation::Partners => &mut dataset.partners,
                    };
                    let index = intern(labels, &value);
                    strategy.relate(relation, index);
                }
            }
        }
        self
    }

    /// Attach citations to known strategies
    ///
    /// Rows for unknown strategies and cells without a URL are logged and skipped.
    pub fn add_research_rows(&mut self, rows: &[ResearchRow]) -> &mut Self {
        for row in rows {
            let label = row.strategy.trim();
            if label.is_empty() && row.citation.trim().is_empty() {
                continue;
            }

            let Some(strategy) = self.dataset.strategies.get_mut(label) else {
                process_warn!(ProcessId::current(), "⚠️ Research row for unknown strategy '{}' skipped", label);
                continue;
            };

            let parsed = match parse_citation(&row.citation) {
                Ok(parsed) => parsed,
                Err(e) => {
                    process_warn!(ProcessId::current(), "⚠️ Skipping citation for '{}': {}", label, e);
                    continue;
                }
            };

            let position = strategy
                .research
                .iter()
                .position(|existing| existing.citation == parsed.citation);
            let citation = match position {
                Some(index) => &mut strategy.research[index],
                None => {
                    strategy.research.push(ResearchCitation {
                        citation: parsed.citation,
                        citation_link_text: parsed.link_text,
                        citation_link: parsed.link,
                        related_outcomes: Vec::new(),
                    });
                    let last = strategy.research.len() - 1;
                    &mut strategy.research[last]
                }
            };
            for outcome in split_cell(&row.related_outcome) {
                citation.add_related_outcome(&outcome);
            }
        }
        self
    }

    /// Inputs with positional tooltips; repeated inputs keep their first tooltip
    pub fn add_input_rows(&mut self, rows: &[InputRow]) -> &mut Self {
        for row in rows {
            let input = row.input.trim();
            if input.is_empty() {
                continue;
            }
            let index = intern(&mut self.dataset.inputs, input);
            if self.dataset.input_tooltips.len() <= index {
                self.dataset.input_tooltips.resize(index + 1, String::new());
            }
            if self.dataset.input_tooltips[index].is_empty() {
                self.dataset.input_tooltips[index] = row.tooltip.trim().to_string();
            }
        }
        self
    }

    /// One tooltip per display column; extra rows are dropped
    pub fn add_header_rows(&mut self, rows: &[HeaderRow]) -> &mut Self {
        if rows.len() > DISPLAY_COLUMNS {
            process_warn!(
                ProcessId::current(),
                "⚠️ {} header tooltips provided, keeping the first {}",
                rows.len(),
                DISPLAY_COLUMNS
            );
        }
        self.dataset.header_tooltips = rows
            .iter()
            .take(DISPLAY_COLUMNS)
            .map(|row| row.tooltip.trim().to_string())
            .collect();
        self
    }

    /// Apply the long-term policy, then validate (which also orders research)
    pub fn build(self) -> IngestResult<LogicModelDataset> {
        let mut dataset = self.dataset;

        if self.policy == LongTermPolicy::AllStrategies {
            let all: Vec<usize> = (0..dataset.long_term_outputs.len()).collect();
            for strategy in dataset.strategies.values_mut() {
                strategy.long_term_outputs = all.clone();
            }
        }
        let dataset = dataset.into_validated()?;
        process_debug!(
            ProcessId::current(),
            "🧱 Built dataset: {} strategies, {} pillars, {} partners",
            dataset.strategy_count(),
            dataset.pbc_components.len(),
            dataset.partners.len()
        );
        Ok(dataset)
    }
}
