//! Named index relations between a strategy and the dataset label arrays

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// A per-strategy index set pointing into one dataset label array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Relation {
    Outputs,
    ImmediateOutputs,
    IntermediateOutputs,
    LongTermOutputs,
    PbcComponents,
    Partners,
}

impl Relation {
    pub const ALL: [Relation; 6] = [
        Relation::Outputs,
        Relation::ImmediateOutputs,
        Relation::IntermediateOutputs,
        Relation::LongTermOutputs,
        Relation::PbcComponents,
        Relation::Partners,
    ];

    /// JSON key of the relation, shared by the dataset and strategy records
    pub fn as_key(&self) -> &'static str {
        match self {
            Relation::Outputs => "outputs",
            Relation::ImmediateOutputs => "immediateOutputs",
            Relation::IntermediateOutputs => "intermediateOutputs",
            Relation::LongTermOutputs => "longTermOutputs",
            Relation::PbcComponents => "pbcComponents",
            Relation::Partners => "partners",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for Relation {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relation::ALL
            .into_iter()
            .find(|relation| relation.as_key() == s)
            .ok_or_else(|| SharedError::UnknownRelation { input: s.to_string() })
    }
}
