//! Test helpers and builder patterns for engine tests

use engine::{FilterEngine, Relation};
use shared::{LogicModelDataset, Strategy};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Builder for small validated datasets
#[derive(Default)]
pub struct DatasetBuilder {
    dataset: LogicModelDataset,
}

fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(mut self, labels: &[&str]) -> Self {
        self.dataset.inputs = owned(labels);
        self
    }

    pub fn pbcs(mut self, labels: &[&str]) -> Self {
        self.dataset.pbc_components = owned(labels);
        self
    }

    pub fn partners(mut self, labels: &[&str]) -> Self {
        self.dataset.partners = owned(labels);
        self
    }

    pub fn outputs(mut self, labels: &[&str]) -> Self {
        self.dataset.outputs = owned(labels);
        self
    }

    pub fn immediate(mut self, labels: &[&str]) -> Self {
        self.dataset.immediate_outputs = owned(labels);
        self
    }

    pub fn intermediate(mut self, labels: &[&str]) -> Self {
        self.dataset.intermediate_outputs = owned(labels);
        self
    }

    pub fn long_term(mut self, labels: &[&str]) -> Self {
        self.dataset.long_term_outputs = owned(labels);
        self
    }

    pub fn strategy(mut self, label: &str, pbcs: &[usize], partners: &[usize], outputs: &[usize]) -> Self {
        let mut strategy = Strategy::new(label);
        for &index in pbcs {
            strategy.relate(Relation::PbcComponents, index);
        }
        for &index in partners {
            strategy.relate(Relation::Partners, index);
        }
        for &index in outputs {
            strategy.relate(Relation::Outputs, index);
        }
        self.dataset.strategies.insert(label.to_string(), strategy);
        self
    }

    pub fn with_tiers(mut self, label: &str, immediate: &[usize], intermediate: &[usize], long_term: &[usize]) -> Self {
        let strategy = &mut self.dataset.strategies[label];
        for &index in immediate {
            strategy.relate(Relation::ImmediateOutputs, index);
        }
        for &index in intermediate {
            strategy.relate(Relation::IntermediateOutputs, index);
        }
        for &index in long_term {
            strategy.relate(Relation::LongTermOutputs, index);
        }
        self
    }

    pub fn build(self) -> Arc<LogicModelDataset> {
        Arc::new(self.dataset.into_validated().expect("fixture dataset must be valid"))
    }
}

/// Assertion and setup helpers
pub struct TestHelpers;

impl TestHelpers {
    pub fn engine(dataset: &Arc<LogicModelDataset>) -> FilterEngine {
        FilterEngine::new(dataset.clone())
    }

    pub fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    /// Visible strategies after applying a PBC and/or partner filter to a fresh engine
    pub fn visible_with(dataset: &Arc<LogicModelDataset>, pbc: Option<&str>, partner: Option<usize>) -> BTreeSet<usize> {
        let mut engine = Self::engine(dataset);
        if let Some(pbc) = pbc {
            engine.select_pbc(pbc).unwrap();
        }
        if let Some(partner) = partner {
            engine.select_partner(partner).unwrap();
        }
        engine.visible_strategies().clone()
    }
}
