//! End-to-end scenarios: dataset JSON in, filter views out

mod common;
use common::{TestFixtures, TestHelpers};

use engine::{Column, FilterEngine, FilterView, Mode, Relation, SelectionAction};
use shared::LogicModelDataset;
use std::sync::Arc;

#[test]
fn test_select_pbc_scenario() {
    let dataset = TestFixtures::two_strategies();
    let mut engine = TestHelpers::engine(&dataset);

    engine.select_pbc(&dataset.pbc_components[0]).unwrap();

    assert_eq!(engine.visible_strategies(), &TestHelpers::set(&[0]));
    assert_eq!(engine.connected_items(Relation::Partners), TestHelpers::set(&[0, 1]));
    assert_eq!(engine.connected_items(Relation::Outputs), TestHelpers::set(&[0]));
}

#[test]
fn test_scenario_from_json_document() {
    let json = r##"{
        "headerTooltips": ["Inputs", "Pillars", "Strategies", "Outputs", "Immediate", "Intermediate", "Long-term"],
        "inputs": ["Funding"],
        "inputTooltips": ["Money"],
        "pbcComponents": ["Economic Vitality", "Health"],
        "strategies": {
            "A": {"label": "A", "details": "", "pbcComponents": [0], "partners": [0, 1], "outputs": [0],
                  "immediateOutputs": [], "intermediateOutputs": [], "longTermOutputs": [0], "research": []},
            "B": {"label": "B", "details": "", "pbcComponents": [1], "partners": [1], "outputs": [1],
                  "immediateOutputs": [], "intermediateOutputs": [], "longTermOutputs": [0], "research": []}
        },
        "partners": ["P0", "P1"],
        "outputs": ["O0", "O1"],
        "immediateOutputs": [],
        "intermediateOutputs": [],
        "longTermOutputs": ["L0"]
    }"##;
    let dataset = Arc::new(LogicModelDataset::from_json_str(json).unwrap());
    let mut engine = FilterEngine::new(dataset);

    let view = engine.select_partner(0).unwrap().clone();
    assert_eq!(view.mode, Mode::Partner);
    assert_eq!(view.visible.strategies, TestHelpers::set(&[0]));
    assert_eq!(view.visible.long_term_outputs, TestHelpers::set(&[0]));

    let view = engine.select_pbc("Health").unwrap().clone();
    assert_eq!(view.mode, Mode::Pbc);
    assert_eq!(view.visible.strategies, TestHelpers::set(&[1]));
    assert_eq!(view.visible.partners, TestHelpers::set(&[1]));
}

#[test]
fn test_dispatch_sequence_matches_direct_calls() {
    let dataset = TestFixtures::community_model();
    let mut direct = TestHelpers::engine(&dataset);
    let mut dispatched = TestHelpers::engine(&dataset);

    direct.select_pbc(TestFixtures::ECONOMIC).unwrap();
    direct.select_partner(0).unwrap();
    direct.select_strategy(3).unwrap();

    for action in [
        SelectionAction::SelectPbc { name: TestFixtures::ECONOMIC.to_string() },
        SelectionAction::SelectPartner { index: 0 },
        SelectionAction::SelectStrategy { index: 3 },
    ] {
        dispatched.dispatch(action).unwrap();
    }

    assert_eq!(direct.view(), dispatched.view());
}

#[test]
fn test_view_serializes_for_presentation() {
    let dataset = TestFixtures::two_strategies();
    let mut engine = TestHelpers::engine(&dataset);
    engine.select_pbc(TestFixtures::HEALTH).unwrap();

    let json = serde_json::to_value(engine.view()).unwrap();

    assert_eq!(json["mode"], "pbc");
    assert_eq!(json["selection"]["selectedPbc"], "Health");
    assert_eq!(json["visible"]["strategies"], serde_json::json!([1]));
    assert_eq!(json["color"], "#0072BC");
    assert_eq!(json["ramp"].as_array().unwrap().len(), 7);

    let back: FilterView = serde_json::from_value(json).unwrap();
    assert_eq!(&back, engine.view());
    assert_eq!(back.column_color(Column::Strategies), back.ramp[2]);
}
