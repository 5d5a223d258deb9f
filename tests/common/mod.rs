//! Common test utilities for Libris CLI and scenario tests.
//!
//! - `TestEnv`: Isolated working and home directories plus a CLI runner
//! - Fixtures: Sample books and patrons

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
