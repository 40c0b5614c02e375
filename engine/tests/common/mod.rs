//! Common test utilities for engine tests

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{DatasetBuilder, TestHelpers};
