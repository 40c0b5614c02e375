//! Test fixtures and data for engine tests
//!
//! This module provides consistent datasets used across all test suites.

use shared::LogicModelDataset;
use std::sync::Arc;

use super::helpers::DatasetBuilder;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const ECONOMIC: &'static str = "Economic Vitality";
    pub const HEALTH: &'static str = "Health";
    pub const EDUCATION: &'static str = "Education";

    /// Two strategies, two partners: A in pillar 0 with both partners, B in pillar 1 with partner 1
    pub fn two_strategies() -> Arc<LogicModelDataset> {
        DatasetBuilder::new()
            .pbcs(&[Self::ECONOMIC, Self::HEALTH])
            .partners(&["P0", "P1"])
            .outputs(&["O0", "O1"])
            .strategy("A", &[0], &[0, 1], &[0])
            .strategy("B", &[1], &[1], &[1])
            .build()
    }

    /// A larger model where strategies span several pillars and partners
    pub fn community_model() -> Arc<LogicModelDataset> {
        DatasetBuilder::new()
            .inputs(&["Funding", "Staff", "Volunteers"])
            .pbcs(&[Self::ECONOMIC, Self::HEALTH, Self::EDUCATION, "Housing", "Safety", "Arts"])
            .partners(&["City", "Hospital", "School District", "Library"])
            .outputs(&["Graduates", "Visits", "Tutoring hours", "Units built"])
            .immediate(&["Employment", "Screenings", "Reading level"])
            .intermediate(&["Income", "Chronic disease managed"])
            .long_term(&["Thriving community"])
            .strategy("Job Training", &[0, 2], &[0, 2], &[0])
            .strategy("Mobile Clinics", &[1], &[1], &[1])
            .strategy("After-School Tutoring", &[2, 5], &[2, 3], &[2])
            .strategy("Affordable Housing", &[3, 0], &[0], &[3])
            .strategy("Community Events", &[], &[3], &[])
            .with_tiers("Job Training", &[0], &[0], &[0])
            .with_tiers("Mobile Clinics", &[1], &[1], &[0])
            .with_tiers("After-School Tutoring", &[2], &[], &[0])
            .build()
    }
}
