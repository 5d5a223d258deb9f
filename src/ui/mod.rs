//! Terminal UI
//!
//! - `terminal` - Capability detection (tty, color, unicode, CI)
//! - `context` - Resolved output settings for one run
//! - `theme` - Colors, icons and rules
//! - `table` - Column alignment
//! - `views` - Text and JSON renderings of command results

pub mod context;
pub mod json;
pub mod table;
pub mod terminal;
pub mod theme;
pub mod views;

pub use context::UiContext;
