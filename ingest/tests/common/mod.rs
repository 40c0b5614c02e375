//! Common test utilities for ingestion tests

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
