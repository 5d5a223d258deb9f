//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `clock` - Wall-clock and pinned `Clock` implementations
//! - `events/` - Event sinks (JSON, console, recording)

pub mod clock;
pub mod events;

// Re-export for convenience
pub use clock::{FixedClock, SystemClock};
pub use events::{ConsoleEventSink, ConsoleStyle, JsonEventSink, RecordingEventSink};
