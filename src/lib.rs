//! Libris - library catalog, membership and lending
//!
//! Libris keeps a catalog of books with copy counts, a register of patrons,
//! and a lending engine that checks books out and in and charges overdue
//! fines. All state lives in memory for the duration of a run.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{run_demo, Catalog, DemoSummary, Membership};
pub use config::{Config, ConfigError};
pub use domain::entities::{Book, Patron};
pub use domain::policies::LoanPolicy;
pub use domain::ports::{Clock, LibraryEvent, LibraryEventSink, NoopEventSink};
pub use domain::services::{LendingService, ReturnReceipt};
pub use domain::value_objects::{AccountStatus, BookStatus, Isbn, Loan, Money, PatronId};
pub use error::{ErrorKind, LibraryError, LibraryResult, RecordKind};
pub use infrastructure::{FixedClock, SystemClock};
