//! Recording Event Sink
//!
//! Keeps every event in memory. Used by tests and by the demo driver to
//! count outcomes after a run.

use std::sync::Mutex;

use crate::domain::ports::{LibraryEvent, LibraryEventSink};

#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<LibraryEvent>>,
    detailed: bool,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also record detail events (search results)
    pub fn detailed() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            detailed: true,
        }
    }

    /// Snapshot of recorded events, oldest first
    pub fn events(&self) -> Vec<LibraryEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LibraryEventSink for RecordingEventSink {
    fn on_event(&self, event: LibraryEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.detailed
    }
}
