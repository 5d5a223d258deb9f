//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod library_events;

pub use clock::Clock;
pub(crate) use library_events::emit;
pub use library_events::{LibraryEvent, LibraryEventSink, NoopEventSink};
