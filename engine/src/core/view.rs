//! Snapshot of derived filter output consumed by the presentation layer

use serde::{Deserialize, Serialize};
use shared::Relation;
use std::collections::BTreeSet;

use super::color::{Color, RAMP_LEN};
use super::selection::{Mode, SelectionState};

/// The seven display columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Inputs,
    PbcComponents,
    Strategies,
    Outputs,
    ImmediateOutputs,
    IntermediateOutputs,
    LongTermOutputs,
}

impl Column {
    pub const ALL: [Column; RAMP_LEN] = [
        Column::Inputs,
        Column::PbcComponents,
        Column::Strategies,
        Column::Outputs,
        Column::ImmediateOutputs,
        Column::IntermediateOutputs,
        Column::LongTermOutputs,
    ];

    /// Position in the display, aligned with header tooltips and ramp entries
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// Strategy relation backing this column, if any
    pub fn relation(&self) -> Option<Relation> {
        match self {
            Column::Inputs | Column::Strategies => None,
            Column::PbcComponents => Some(Relation::PbcComponents),
            Column::Outputs => Some(Relation::Outputs),
            Column::ImmediateOutputs => Some(Relation::ImmediateOutputs),
            Column::IntermediateOutputs => Some(Relation::IntermediateOutputs),
            Column::LongTermOutputs => Some(Relation::LongTermOutputs),
        }
    }
}

/// Visible item indices per column, plus the partner panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnVisibility {
    pub inputs: BTreeSet<usize>,
    pub pbc_components: BTreeSet<usize>,
    pub strategies: BTreeSet<usize>,
    pub partners: BTreeSet<usize>,
    pub outputs: BTreeSet<usize>,
    pub immediate_outputs: BTreeSet<usize>,
    pub intermediate_outputs: BTreeSet<usize>,
    pub long_term_outputs: BTreeSet<usize>,
}

impl ColumnVisibility {
    pub fn column(&self, column: Column) -> &BTreeSet<usize> {
        match column {
            Column::Inputs => &self.inputs,
            Column::PbcComponents => &self.pbc_components,
            Column::Strategies => &self.strategies,
            Column::Outputs => &self.outputs,
            Column::ImmediateOutputs => &self.immediate_outputs,
            Column::IntermediateOutputs => &self.intermediate_outputs,
            Column::LongTermOutputs => &self.long_term_outputs,
        }
    }

    pub fn relation(&self, relation: Relation) -> &BTreeSet<usize> {
        match relation {
            Relation::Outputs => &self.outputs,
            Relation::ImmediateOutputs => &self.immediate_outputs,
            Relation::IntermediateOutputs => &self.intermediate_outputs,
            Relation::LongTermOutputs => &self.long_term_outputs,
            Relation::PbcComponents => &self.pbc_components,
            Relation::Partners => &self.partners,
        }
    }

    pub(crate) fn relation_mut(&mut self, relation: Relation) -> &mut BTreeSet<usize> {
        match relation {
            Relation::Outputs => &mut self.outputs,
            Relation::ImmediateOutputs => &mut self.immediate_outputs,
            Relation::IntermediateOutputs => &mut self.intermediate_outputs,
            Relation::LongTermOutputs => &mut self.long_term_outputs,
            Relation::PbcComponents => &mut self.pbc_components,
            Relation::Partners => &mut self.partners,
        }
    }
}

/// Everything the presentation layer needs after a selection change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterView {
    pub mode: Mode,
    pub selection: SelectionState,
    pub visible: ColumnVisibility,
    /// Colour of the selected PBC component, or the brand default
    pub color: Color,
    /// Light-to-dark ramp derived from `color`, one entry per column
    pub ramp: [Color; RAMP_LEN],
}

impl FilterView {
    /// Ramp colour for a display column
    pub fn column_color(&self, column: Column) -> Color {
        self.ramp[column.position()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_positions_follow_display_order() {
        for (expected, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.position(), expected);
        }
    }

    #[test]
    fn test_column_lookup_matches_relation_lookup() {
        let mut visible = ColumnVisibility::default();
        visible.relation_mut(Relation::Outputs).insert(4);
        visible.strategies.insert(1);

        assert!(visible.column(Column::Outputs).contains(&4));
        assert!(visible.column(Column::Strategies).contains(&1));
        assert!(visible.column(Column::Inputs).is_empty());
    }
}
