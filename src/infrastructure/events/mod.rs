//! Event Sink Implementations
//!
//! Provides concrete implementations of LibraryEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable lines
//! - RecordingEventSink: In-memory capture

mod console;
mod json;
mod recording;

pub use console::{ConsoleEventSink, ConsoleStyle};
pub use json::{event_to_json, JsonEventSink};
pub use recording::RecordingEventSink;
