//! The filter engine
//!
//! Owns the selection for one dashboard session and keeps the derived view
//! in step with it. The dataset is shared read-only; every mutating call
//! computes the next selection from the complete prior one, then recomputes
//! the whole view before returning.

use shared::{LogicModelDataset, ProcessId, Relation, process_debug, process_warn};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::color::ColorMapper;
use crate::core::selection::{Mode, SelectionAction, SelectionState};
use crate::core::view::FilterView;
use crate::core::visibility;
use crate::error::EngineResult;

pub struct FilterEngine {
    dataset: Arc<LogicModelDataset>,
    selection: SelectionState,
    view: FilterView,
}

impl FilterEngine {
    /// Create an engine over a fully loaded dataset, starting in overview
    pub fn new(dataset: Arc<LogicModelDataset>) -> Self {
        let selection = SelectionState::default();
        let view = Self::compute_view(&selection, &dataset);
        Self { dataset, selection, view }
    }

    pub fn dataset(&self) -> &Arc<LogicModelDataset> {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> Mode {
        self.view.mode
    }

    /// View derived from the current selection
    pub fn view(&self) -> &FilterView {
        &self.view
    }

    /// Apply one selection operation
    ///
    /// On an invalid reference the error is returned and neither the
    /// selection nor the view changes.
    pub fn dispatch(&mut self, action: SelectionAction) -> EngineResult<&FilterView> {
        let next = match self.selection.apply(&action, &self.dataset) {
            Ok(next) => next,
            Err(e) => {
                process_warn!(ProcessId::current(), "⚠️ Ignoring {}: {}", action, e);
                return Err(e);
            }
        };

        self.view = Self::compute_view(&next, &self.dataset);
        self.selection = next;

        process_debug!(
            ProcessId::current(),
            "🎯 {} -> mode {} ({} strategies visible)",
            action,
            self.view.mode,
            self.view.visible.strategies.len()
        );
        Ok(&self.view)
    }

    pub fn select_pbc(&mut self, name: &str) -> EngineResult<&FilterView> {
        self.dispatch(SelectionAction::SelectPbc { name: name.to_string() })
    }

    pub fn select_partner(&mut self, index: usize) -> EngineResult<&FilterView> {
        self.dispatch(SelectionAction::SelectPartner { index })
    }

    pub fn select_strategy(&mut self, index: usize) -> EngineResult<&FilterView> {
        self.dispatch(SelectionAction::SelectStrategy { index })
    }

    /// Reset to overview; always succeeds
    pub fn clear_all(&mut self) -> &FilterView {
        self.selection = SelectionState::default();
        self.view = Self::compute_view(&self.selection, &self.dataset);
        &self.view
    }

    pub fn visible_strategies(&self) -> &BTreeSet<usize> {
        &self.view.visible.strategies
    }

    /// Union of a relation's indices over the visible strategies
    pub fn connected_items(&self, relation: Relation) -> BTreeSet<usize> {
        visibility::connected_items(&self.dataset, &self.view.visible.strategies, relation)
    }

    pub fn partner_visibility(&self) -> &BTreeSet<usize> {
        &self.view.visible.partners
    }

    fn compute_view(selection: &SelectionState, dataset: &LogicModelDataset) -> FilterView {
        let color = match &selection.selected_pbc {
            Some(pbc) => ColorMapper::resolve_color(pbc, dataset),
            None => crate::core::color::DEFAULT_COLOR,
        };

        FilterView {
            mode: selection.mode(),
            selection: selection.clone(),
            visible: visibility::column_visibility(selection, dataset),
            color,
            ramp: ColorMapper::derive_ramp(color),
        }
    }
}
