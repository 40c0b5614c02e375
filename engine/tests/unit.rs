//! Property tests for the filter engine
//!
//! Each test pins down one behavioural guarantee of the selection state machine.

mod common;
use common::{TestFixtures, TestHelpers};

use engine::core::DEFAULT_COLOR;
use engine::{ColorMapper, EngineError, FilterEngine, Mode, Relation, SelectionState};

/// clear_all twice equals clear_all once equals a fresh engine
#[test]
fn test_clear_all_is_idempotent() {
    let dataset = TestFixtures::community_model();
    let fresh = TestHelpers::engine(&dataset);
    let mut engine = TestHelpers::engine(&dataset);

    engine.select_pbc(TestFixtures::HEALTH).unwrap();
    engine.select_partner(1).unwrap();

    let once = engine.clear_all().clone();
    let twice = engine.clear_all().clone();

    assert_eq!(once, twice);
    assert_eq!(&once, fresh.view());
    assert_eq!(engine.selection(), &SelectionState::default());
    assert_eq!(engine.mode(), Mode::Overview);
}

/// Selecting the same partner twice returns to overview
#[test]
fn test_partner_toggle_symmetry() {
    let dataset = TestFixtures::community_model();
    let mut cleared = TestHelpers::engine(&dataset);
    cleared.clear_all();

    for partner in 0..dataset.partners.len() {
        let mut engine = TestHelpers::engine(&dataset);
        engine.select_partner(partner).unwrap();
        engine.select_partner(partner).unwrap();

        assert_eq!(engine.mode(), Mode::Overview);
        assert_eq!(engine.view(), cleared.view());
    }
}

/// PBC and partner filters only ever narrow the visible strategies
#[test]
fn test_and_composition_narrows() {
    let dataset = TestFixtures::community_model();

    for pbc in &dataset.pbc_components {
        for partner in 0..dataset.partners.len() {
            let both = TestHelpers::visible_with(&dataset, Some(pbc.as_str()), Some(partner));
            let pbc_only = TestHelpers::visible_with(&dataset, Some(pbc.as_str()), None);
            let partner_only = TestHelpers::visible_with(&dataset, None, Some(partner));

            assert!(both.is_subset(&pbc_only), "{pbc}/{partner}");
            assert!(both.is_subset(&partner_only), "{pbc}/{partner}");
        }
    }
}

/// A strategy selection collapses the visible set to exactly that strategy
#[test]
fn test_strategy_selection_collapses_to_one() {
    let dataset = TestFixtures::community_model();

    for strategy in 0..dataset.strategy_count() {
        let mut engine = TestHelpers::engine(&dataset);
        // Partner 3 (Library) is unrelated to most strategies
        engine.select_partner(3).unwrap();
        engine.select_strategy(strategy).unwrap();

        assert_eq!(engine.visible_strategies(), &TestHelpers::set(&[strategy]));
    }
}

/// Selecting a strategy pins the PBC to its first pillar
#[test]
fn test_auto_pbc_derivation() {
    let dataset = TestFixtures::community_model();
    let mut engine = TestHelpers::engine(&dataset);

    engine.select_pbc(TestFixtures::HEALTH).unwrap();
    // "After-School Tutoring" has pbcComponents [2, 5]
    let view = engine.select_strategy(2).unwrap();

    assert_eq!(view.selection.selected_pbc.as_deref(), Some(dataset.pbc_components[2].as_str()));
    assert_eq!(view.mode, Mode::PbcStrategy);
    assert_eq!(view.color, ColorMapper::palette_color(2));
}

/// The auto-derived PBC colours the view but does not filter further
#[test]
fn test_auto_pbc_used_for_color_only() {
    let dataset = TestFixtures::community_model();
    let mut engine = TestHelpers::engine(&dataset);

    // "Affordable Housing": pillars [3, 0], partner [0]
    engine.select_partner(0).unwrap();
    let view = engine.select_strategy(3).unwrap();

    assert_eq!(view.mode, Mode::PbcPartnerStrategy);
    assert_eq!(view.visible.strategies, TestHelpers::set(&[3]));
    assert_eq!(view.visible.pbc_components, TestHelpers::set(&[0, 3]));
    assert_eq!(view.color, ColorMapper::palette_color(3));
    // Partner stays selected and alone in the partner panel
    assert_eq!(view.visible.partners, TestHelpers::set(&[0]));
}

/// Strategy toggle returns to overview when no partner is selected
#[test]
fn test_strategy_toggle_off() {
    let dataset = TestFixtures::community_model();
    let mut engine = TestHelpers::engine(&dataset);

    engine.select_strategy(1).unwrap();
    assert_eq!(engine.mode(), Mode::PbcStrategy);

    engine.select_strategy(1).unwrap();
    assert_eq!(engine.mode(), Mode::Overview);
    assert_eq!(engine.visible_strategies().len(), dataset.strategy_count());
}

/// A strategy without any pillar leaves the mode in plain strategy form
#[test]
fn test_strategy_without_pillar() {
    let dataset = TestFixtures::community_model();
    let mut engine = TestHelpers::engine(&dataset);

    let view = engine.select_strategy(4).unwrap();

    assert_eq!(view.mode, Mode::Strategy);
    assert_eq!(view.color, DEFAULT_COLOR);
    assert!(view.visible.pbc_components.is_empty());
    assert_eq!(view.visible.partners, TestHelpers::set(&[3]));
}

/// Invalid references are reported and leave everything untouched
#[test]
fn test_invalid_references_leave_state_unchanged() {
    let dataset = TestFixtures::community_model();
    let mut engine = TestHelpers::engine(&dataset);
    engine.select_pbc(TestFixtures::ECONOMIC).unwrap();
    let before = engine.view().clone();

    assert!(matches!(
        engine.select_pbc("Space Program"),
        Err(EngineError::InvalidSelectionReference { .. })
    ));
    assert!(engine.select_partner(dataset.partners.len()).is_err());
    assert!(engine.select_strategy(dataset.strategy_count()).is_err());

    assert_eq!(engine.view(), &before);
}

/// A selected partner is always visible, even with no connected strategy
#[test]
fn test_partner_visibility_special_case() {
    let dataset = TestFixtures::community_model();
    let mut engine = TestHelpers::engine(&dataset);

    // Health strategies never involve the Library (partner 3)
    engine.select_pbc(TestFixtures::HEALTH).unwrap();
    let view = engine.select_partner(3).unwrap();

    assert!(view.visible.strategies.is_empty());
    assert_eq!(view.visible.partners, TestHelpers::set(&[3]));
    assert!(engine.connected_items(Relation::Partners).is_empty());
    assert_eq!(engine.partner_visibility(), &TestHelpers::set(&[3]));
}

/// Overview shows every item linked to some strategy, and every input
#[test]
fn test_overview_visibility() {
    let dataset = TestFixtures::community_model();
    let engine = TestHelpers::engine(&dataset);
    let view = engine.view();

    assert_eq!(view.mode, Mode::Overview);
    assert_eq!(view.visible.inputs, TestHelpers::set(&[0, 1, 2]));
    assert_eq!(view.visible.strategies.len(), 5);
    assert_eq!(view.visible.partners, TestHelpers::set(&[0, 1, 2, 3]));
    assert_eq!(view.visible.outputs, TestHelpers::set(&[0, 1, 2, 3]));
    assert_eq!(view.visible.long_term_outputs, TestHelpers::set(&[0]));
    assert_eq!(view.ramp, ColorMapper::default_ramp());
}

/// Engines are independent instances without shared state
#[test]
fn test_engines_are_independent() {
    let dataset = TestFixtures::two_strategies();
    let mut first = FilterEngine::new(dataset.clone());
    let second = FilterEngine::new(dataset.clone());

    first.select_partner(1).unwrap();

    assert_eq!(first.mode(), Mode::Partner);
    assert_eq!(second.mode(), Mode::Overview);
}
