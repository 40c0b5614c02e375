//! Derivation of visible item sets from a selection
//!
//! Every set is recomputed from scratch for each selection change.

use shared::{LogicModelDataset, Relation, Strategy};
use std::collections::BTreeSet;

use super::selection::SelectionState;
use super::view::ColumnVisibility;

/// Whether the strategy at `index` passes every active constraint
///
/// A selected strategy is the strongest constraint: only that index passes
/// and the PBC/partner checks are skipped.
pub fn strategy_passes(selection: &SelectionState, index: usize, strategy: &Strategy, dataset: &LogicModelDataset) -> bool {
    if let Some(selected) = selection.selected_strategy {
        return index == selected;
    }
    if let Some(pbc) = &selection.selected_pbc {
        if !dataset.pbc_names(strategy).any(|name| name == pbc) {
            return false;
        }
    }
    if let Some(partner) = selection.selected_partner {
        if !strategy.partners.contains(&partner) {
            return false;
        }
    }
    true
}

/// Indices of strategies satisfying all active constraints
pub fn visible_strategies(selection: &SelectionState, dataset: &LogicModelDataset) -> BTreeSet<usize> {
    dataset
        .strategies
        .values()
        .enumerate()
        .filter(|(index, strategy)| strategy_passes(selection, *index, strategy, dataset))
        .map(|(index, _)| index)
        .collect()
}

/// Union of one relation's indices across the given strategies
pub fn connected_items(dataset: &LogicModelDataset, strategies: &BTreeSet<usize>, relation: Relation) -> BTreeSet<usize> {
    strategies
        .iter()
        .filter_map(|&index| dataset.strategy(index))
        .flat_map(|strategy| strategy.indices(relation).iter().copied())
        .collect()
}

/// Partners panel: a selected partner always shows itself, alone
pub fn partner_visibility(selection: &SelectionState, dataset: &LogicModelDataset, strategies: &BTreeSet<usize>) -> BTreeSet<usize> {
    match selection.selected_partner {
        Some(partner) => BTreeSet::from([partner]),
        None => connected_items(dataset, strategies, Relation::Partners),
    }
}

/// Visible sets for every column
pub fn column_visibility(selection: &SelectionState, dataset: &LogicModelDataset) -> ColumnVisibility {
    let strategies = visible_strategies(selection, dataset);

    let mut visible = ColumnVisibility {
        inputs: (0..dataset.inputs.len()).collect(),
        ..ColumnVisibility::default()
    };
    for relation in Relation::ALL {
        let items = match relation {
            Relation::Partners => partner_visibility(selection, dataset, &strategies),
            other => connected_items(dataset, &strategies, other),
        };
        *visible.relation_mut(relation) = items;
    }
    visible.strategies = strategies;
    visible
}
