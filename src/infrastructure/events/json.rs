//! JSON Event Sink
//!
//! Outputs library events as NDJSON for scripting and CI consumption.

use crate::domain::ports::{LibraryEvent, LibraryEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert an event to its NDJSON object
pub fn event_to_json(event: &LibraryEvent) -> serde_json::Value {
    match event {
        LibraryEvent::BookAdded { isbn, title } => serde_json::json!({
            "event": "book_added",
            "isbn": isbn,
            "title": title,
        }),

        LibraryEvent::BookRejected { isbn, reason } => serde_json::json!({
            "event": "book_rejected",
            "isbn": isbn,
            "reason": reason.as_str(),
        }),

        LibraryEvent::BookRemoved { isbn, removed } => serde_json::json!({
            "event": "book_removed",
            "isbn": isbn,
            "removed": removed,
        }),

        LibraryEvent::SearchResult { query, matches } => serde_json::json!({
            "event": "search_result",
            "query": query,
            "matches": matches,
        }),

        LibraryEvent::PatronRegistered { id, name } => serde_json::json!({
            "event": "patron_registered",
            "patron": id,
            "name": name,
        }),

        LibraryEvent::PatronRejected { id, reason } => serde_json::json!({
            "event": "patron_rejected",
            "patron": id,
            "reason": reason.as_str(),
        }),

        LibraryEvent::PatronRemoved { id, removed } => serde_json::json!({
            "event": "patron_removed",
            "patron": id,
            "removed": removed,
        }),

        LibraryEvent::PatronStatusChanged { id, name, status } => serde_json::json!({
            "event": "patron_status_changed",
            "patron": id,
            "name": name,
            "status": status,
        }),

        LibraryEvent::CheckedOut {
            isbn,
            title,
            patron,
            patron_name,
            due_date,
        } => serde_json::json!({
            "event": "checked_out",
            "isbn": isbn,
            "title": title,
            "patron": patron,
            "patron_name": patron_name,
            "due_date": due_date.to_string(),
        }),

        LibraryEvent::CheckoutRejected {
            isbn,
            title,
            patron,
            reason,
        } => serde_json::json!({
            "event": "checkout_rejected",
            "isbn": isbn,
            "title": title,
            "patron": patron,
            "reason": reason.as_str(),
        }),

        LibraryEvent::FineAssessed { patron, amount } => serde_json::json!({
            "event": "fine_assessed",
            "patron": patron,
            "amount": amount.to_string(),
        }),

        LibraryEvent::Returned {
            isbn,
            title,
            patron,
            patron_name,
        } => serde_json::json!({
            "event": "returned",
            "isbn": isbn,
            "title": title,
            "patron": patron,
            "patron_name": patron_name,
        }),

        LibraryEvent::ReturnRejected {
            isbn,
            patron,
            reason,
        } => serde_json::json!({
            "event": "return_rejected",
            "isbn": isbn,
            "patron": patron,
            "reason": reason.as_str(),
        }),

        LibraryEvent::FinePaid {
            patron,
            amount,
            remaining,
        } => serde_json::json!({
            "event": "fine_paid",
            "patron": patron,
            "amount": amount.to_string(),
            "remaining": remaining.to_string(),
        }),
    }
}

impl LibraryEventSink for JsonEventSink {
    fn on_event(&self, event: LibraryEvent) {
        self.write_event(event_to_json(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
