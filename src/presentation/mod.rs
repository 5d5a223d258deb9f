//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//!
//! Rendering lives in `ui`; the binary wires parsed arguments, configuration
//! and event sinks together.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
