//! Library Event Port
//!
//! Observable interface for catalog, membership and lending operations.
//! Operations return their outcome as a `Result`; events are the optional
//! reporting channel (console output, NDJSON streams, test recorders).

use chrono::NaiveDate;

use crate::domain::value_objects::{AccountStatus, Isbn, Money, PatronId};
use crate::error::ErrorKind;

/// Event emitted by the catalog, membership and lending services
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryEvent {
    /// Book added to the catalog
    BookAdded { isbn: Isbn, title: String },

    /// Book not added (duplicate ISBN)
    BookRejected { isbn: Isbn, reason: ErrorKind },

    /// Book removed, or removal failed
    BookRemoved { isbn: Isbn, removed: bool },

    /// Catalog search result (detailed)
    SearchResult {
        query: String,
        matches: Vec<Isbn>,
    },

    /// Patron registered
    PatronRegistered { id: PatronId, name: String },

    /// Patron not registered (duplicate id)
    PatronRejected { id: PatronId, reason: ErrorKind },

    /// Patron removed, or removal failed
    PatronRemoved { id: PatronId, removed: bool },

    /// Account suspended or reactivated
    PatronStatusChanged {
        id: PatronId,
        name: String,
        status: AccountStatus,
    },

    /// Copy checked out
    CheckedOut {
        isbn: Isbn,
        title: String,
        patron: PatronId,
        patron_name: String,
        due_date: NaiveDate,
    },

    /// Checkout refused
    CheckoutRejected {
        isbn: Isbn,
        title: String,
        patron: PatronId,
        reason: ErrorKind,
    },

    /// Overdue fine added to a patron's balance
    FineAssessed { patron: PatronId, amount: Money },

    /// Copy returned
    Returned {
        isbn: Isbn,
        title: String,
        patron: PatronId,
        patron_name: String,
    },

    /// Return refused
    ReturnRejected {
        isbn: Isbn,
        patron: PatronId,
        reason: ErrorKind,
    },

    /// Payment applied to a fine balance
    FinePaid {
        patron: PatronId,
        amount: Money,
        remaining: Money,
    },
}

impl LibraryEvent {
    /// Detailed events are only shown to sinks that ask for them
    pub fn is_detail(&self) -> bool {
        matches!(self, LibraryEvent::SearchResult { .. })
    }
}

/// Trait for receiving library events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable lines in the terminal
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait LibraryEventSink: Send + Sync {
    /// Handle a library event
    fn on_event(&self, event: LibraryEvent);

    /// Check if this sink wants detailed events (e.g., search results)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl LibraryEventSink for NoopEventSink {
    fn on_event(&self, _event: LibraryEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Send `event` to `sink`, skipping detail events it does not want
pub(crate) fn emit(sink: &dyn LibraryEventSink, event: LibraryEvent) {
    if event.is_detail() && !sink.wants_detailed_events() {
        return;
    }
    sink.on_event(event);
}
