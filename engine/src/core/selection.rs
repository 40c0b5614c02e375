//! Selection state and its transitions
//!
//! `SelectionState` is the single source of truth for what the user has
//! picked. Transitions are computed by `apply`, which reads the full prior
//! state and returns the full next state; callers write it back only when
//! the transition succeeds.

use serde::{Deserialize, Serialize};
use shared::LogicModelDataset;
use std::fmt;

use crate::error::{EngineError, EngineResult};

/// What is currently selected
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Exactly one PBC component name, or none
    pub selected_pbc: Option<String>,
    /// Exactly one partner index, or none
    pub selected_partner: Option<usize>,
    /// Exactly one strategy index, or none
    pub selected_strategy: Option<usize>,
}

/// Display mode, derived from which selection fields are set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "overview")]
    Overview,
    #[serde(rename = "pbc")]
    Pbc,
    #[serde(rename = "partner")]
    Partner,
    #[serde(rename = "strategy")]
    Strategy,
    #[serde(rename = "pbc+partner")]
    PbcPartner,
    #[serde(rename = "pbc+strategy")]
    PbcStrategy,
    #[serde(rename = "partner+strategy")]
    PartnerStrategy,
    #[serde(rename = "pbc+partner+strategy")]
    PbcPartnerStrategy,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Overview => "overview",
            Mode::Pbc => "pbc",
            Mode::Partner => "partner",
            Mode::Strategy => "strategy",
            Mode::PbcPartner => "pbc+partner",
            Mode::PbcStrategy => "pbc+strategy",
            Mode::PartnerStrategy => "partner+strategy",
            Mode::PbcPartnerStrategy => "pbc+partner+strategy",
        }
    }

    /// The clear-selection control is shown whenever anything is selected
    pub fn shows_clear_button(&self) -> bool {
        *self != Mode::Overview
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four user-facing selection operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionAction {
    SelectPbc { name: String },
    SelectPartner { index: usize },
    SelectStrategy { index: usize },
    ClearAll,
}

impl fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionAction::SelectPbc { name } => write!(f, "select_pbc({name})"),
            SelectionAction::SelectPartner { index } => write!(f, "select_partner({index})"),
            SelectionAction::SelectStrategy { index } => write!(f, "select_strategy({index})"),
            SelectionAction::ClearAll => write!(f, "clear_all"),
        }
    }
}

impl SelectionState {
    pub fn is_empty(&self) -> bool {
        self.mode() == Mode::Overview
    }

    pub fn mode(&self) -> Mode {
        match (
            self.selected_pbc.is_some(),
            self.selected_partner.is_some(),
            self.selected_strategy.is_some(),
        ) {
            (false, false, false) => Mode::Overview,
            (true, false, false) => Mode::Pbc,
            (false, true, false) => Mode::Partner,
            (false, false, true) => Mode::Strategy,
            (true, true, false) => Mode::PbcPartner,
            (true, false, true) => Mode::PbcStrategy,
            (false, true, true) => Mode::PartnerStrategy,
            (true, true, true) => Mode::PbcPartnerStrategy,
        }
    }

    /// Compute the state that follows `action`
    ///
    /// References missing from the dataset are reported as
    /// `InvalidSelectionReference`; `self` is never modified.
    pub fn apply(&self, action: &SelectionAction, dataset: &LogicModelDataset) -> EngineResult<SelectionState> {
        match action {
            SelectionAction::SelectPbc { name } => self.select_pbc(name, dataset),
            SelectionAction::SelectPartner { index } => self.select_partner(*index, dataset),
            SelectionAction::SelectStrategy { index } => self.select_strategy(*index, dataset),
            SelectionAction::ClearAll => Ok(SelectionState::default()),
        }
    }

    /// Exclusive select: re-selecting the same PBC keeps it selected
    fn select_pbc(&self, name: &str, dataset: &LogicModelDataset) -> EngineResult<SelectionState> {
        if dataset.pbc_index(name).is_none() {
            return Err(EngineError::invalid_reference("PBC component", name));
        }
        Ok(SelectionState {
            selected_pbc: Some(name.to_string()),
            selected_partner: None,
            selected_strategy: None,
        })
    }

    fn select_partner(&self, index: usize, dataset: &LogicModelDataset) -> EngineResult<SelectionState> {
        if index >= dataset.partners.len() {
            return Err(EngineError::invalid_reference("partner", index));
        }
        if self.selected_partner == Some(index) && self.selected_strategy.is_none() {
            return Ok(SelectionState::default());
        }
        Ok(SelectionState {
            selected_pbc: self.selected_pbc.clone(),
            selected_partner: Some(index),
            selected_strategy: None,
        })
    }

    /// Selecting a strategy pins the PBC to the strategy's primary pillar
    fn select_strategy(&self, index: usize, dataset: &LogicModelDataset) -> EngineResult<SelectionState> {
        let strategy = dataset
            .strategy(index)
            .ok_or_else(|| EngineError::invalid_reference("strategy", index))?;

        if self.selected_strategy == Some(index) && self.selected_partner.is_none() {
            return Ok(SelectionState::default());
        }

        let primary_pbc = strategy
            .primary_pbc()
            .and_then(|pbc| dataset.pbc_components.get(pbc))
            .cloned();

        Ok(SelectionState {
            selected_pbc: primary_pbc.or_else(|| self.selected_pbc.clone()),
            selected_partner: self.selected_partner,
            selected_strategy: Some(index),
        })
    }
}
