//! Dataset records and the JSON document contract

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::relation::Relation;
use super::research::sort_research;
use crate::errors::SharedResult;

/// Number of display columns the header tooltips and colour ramp align to
pub const DISPLAY_COLUMNS: usize = 7;

/// A literature reference supporting a strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchCitation {
    /// Citation text preceding the URL
    pub citation: String,
    /// URL as written in the source
    pub citation_link_text: String,
    /// Normalised URL
    pub citation_link: String,
    /// Outcomes this citation supports, deduplicated in insertion order
    #[serde(default)]
    pub related_outcomes: Vec<String>,
}

impl ResearchCitation {
    /// Record another related outcome, ignoring repeats
    pub fn add_related_outcome(&mut self, outcome: &str) {
        let outcome = outcome.trim();
        if outcome.is_empty() || self.related_outcomes.iter().any(|existing| existing == outcome) {
            return;
        }
        self.related_outcomes.push(outcome.to_string());
    }
}

/// A named intervention connecting inputs to outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub outputs: Vec<usize>,
    #[serde(default)]
    pub immediate_outputs: Vec<usize>,
    #[serde(default)]
    pub intermediate_outputs: Vec<usize>,
    #[serde(default)]
    pub long_term_outputs: Vec<usize>,
    /// First entry is the strategy's primary pillar
    #[serde(default)]
    pub pbc_components: Vec<usize>,
    #[serde(default)]
    pub partners: Vec<usize>,
    #[serde(default)]
    pub research: Vec<ResearchCitation>,
}

impl Strategy {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Index list for the given relation
    pub fn indices(&self, relation: Relation) -> &[usize] {
        match relation {
            Relation::Outputs => &self.outputs,
            Relation::ImmediateOutputs => &self.immediate_outputs,
            Relation::IntermediateOutputs => &self.intermediate_outputs,
            Relation::LongTermOutputs => &self.long_term_outputs,
            Relation::PbcComponents => &self.pbc_components,
            Relation::Partners => &self.partners,
        }
    }

    /// Mutable index list for the given relation
    pub fn indices_mut(&mut self, relation: Relation) -> &mut Vec<usize> {
        match relation {
            Relation::Outputs => &mut self.outputs,
            Relation::ImmediateOutputs => &mut self.immediate_outputs,
            Relation::IntermediateOutputs => &mut self.intermediate_outputs,
            Relation::LongTermOutputs => &mut self.long_term_outputs,
            Relation::PbcComponents => &mut self.pbc_components,
            Relation::Partners => &mut self.partners,
        }
    }

    /// Add an index to a relation, keeping the list duplicate-free
    pub fn relate(&mut self, relation: Relation, index: usize) {
        let indices = self.indices_mut(relation);
        if !indices.contains(&index) {
            indices.push(index);
        }
    }

    /// Primary PBC component index, if the strategy has one
    pub fn primary_pbc(&self) -> Option<usize> {
        self.pbc_components.first().copied()
    }
}

/// The complete logic model, immutable once loaded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicModelDataset {
    #[serde(default)]
    pub header_tooltips: Vec<String>,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub input_tooltips: Vec<String>,
    #[serde(default)]
    pub pbc_components: Vec<String>,
    /// Keyed by strategy label; iteration order is the strategy index order
    #[serde(default)]
    pub strategies: IndexMap<String, Strategy>,
    #[serde(default)]
    pub partners: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
    #[serde(default)]
    pub immediate_outputs: Vec<String>,
    #[serde(default)]
    pub intermediate_outputs: Vec<String>,
    #[serde(default)]
    pub long_term_outputs: Vec<String>,
}

impl LogicModelDataset {
    /// Parse and validate a dataset JSON document
    pub fn from_json_str(json: &str) -> SharedResult<Self> {
        let dataset: LogicModelDataset = serde_json::from_str(json)?;
        dataset.into_validated()
    }

    /// Parse and validate a dataset JSON document from raw bytes
    pub fn from_json_slice(bytes: &[u8]) -> SharedResult<Self> {
        let dataset: LogicModelDataset = serde_json::from_slice(bytes)?;
        dataset.into_validated()
    }

    /// Serialize to the pretty-printed JSON document
    pub fn to_json_pretty(&self) -> SharedResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fill labels omitted from strategy records, order research, then validate
    pub fn into_validated(mut self) -> SharedResult<Self> {
        for (key, strategy) in self.strategies.iter_mut() {
            if strategy.label.is_empty() {
                strategy.label = key.clone();
            }
            sort_research(&mut strategy.research);
        }
        self.validate()?;
        Ok(self)
    }

    /// Label array a relation indexes into
    pub fn labels(&self, relation: Relation) -> &[String] {
        match relation {
            Relation::Outputs => &self.outputs,
            Relation::ImmediateOutputs => &self.immediate_outputs,
            Relation::IntermediateOutputs => &self.intermediate_outputs,
            Relation::LongTermOutputs => &self.long_term_outputs,
            Relation::PbcComponents => &self.pbc_components,
            Relation::Partners => &self.partners,
        }
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Strategy at the given strategy index
    pub fn strategy(&self, index: usize) -> Option<&Strategy> {
        self.strategies.get_index(index).map(|(_, strategy)| strategy)
    }

    pub fn strategy_by_label(&self, label: &str) -> Option<(usize, &Strategy)> {
        self.strategies
            .get_full(label)
            .map(|(index, _, strategy)| (index, strategy))
    }

    /// Position of a PBC component name
    pub fn pbc_index(&self, name: &str) -> Option<usize> {
        self.pbc_components.iter().position(|pbc| pbc == name)
    }

    /// Names of the PBC components a strategy belongs to
    pub fn pbc_names<'a>(&'a self, strategy: &'a Strategy) -> impl Iterator<Item = &'a str> + 'a {
        strategy
            .pbc_components
            .iter()
            .filter_map(|&index| self.pbc_components.get(index).map(String::as_str))
    }

    /// Tooltip for an input, if one was provided
    pub fn input_tooltip(&self, index: usize) -> Option<&str> {
        self.input_tooltips
            .get(index)
            .map(String::as_str)
            .filter(|tooltip| !tooltip.is_empty())
    }
}
