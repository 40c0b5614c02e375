//! Common test utilities for webserver tests

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
