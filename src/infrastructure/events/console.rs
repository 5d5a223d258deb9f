//! Console Event Sink
//!
//! Human-readable, one line per event. Icons and colors come from
//! `ui::theme`; ASCII fallbacks are used when unicode is off.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{LibraryEvent, LibraryEventSink};
use crate::domain::value_objects::{AccountStatus, Money};
use crate::error::ErrorKind;
use crate::ui::theme::{colors, Icon};

/// Rendering options for [`ConsoleEventSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleStyle {
    pub color: bool,
    pub unicode: bool,
    /// Prefix printed before amounts (e.g. `Rs.`)
    pub currency: String,
    pub verbose: u8,
}

impl Default for ConsoleStyle {
    fn default() -> Self {
        Self {
            color: false,
            unicode: false,
            currency: "Rs.".to_string(),
            verbose: 0,
        }
    }
}

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    style: ConsoleStyle,
}

impl ConsoleEventSink {
    pub fn stdout(style: ConsoleStyle) -> Self {
        Self::with_writer(io::stdout(), style)
    }

    /// Create a console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W, style: ConsoleStyle) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            style,
        }
    }

    /// Render one event as a single line (no trailing newline)
    pub fn render(&self, event: &LibraryEvent) -> String {
        let ok = self.icon(Icon::Success);
        let fail = self.icon(Icon::Error);
        let warn = self.icon(Icon::Warning);

        match event {
            LibraryEvent::BookAdded { isbn, title } => {
                format!("{ok} Book added: {title} ({isbn})")
            }
            LibraryEvent::BookRejected { isbn, reason } => {
                format!("{fail} Book {isbn} not added: {}", describe(*reason))
            }
            LibraryEvent::BookRemoved { isbn, removed: true } => {
                format!("{ok} Book removed: {isbn}")
            }
            LibraryEvent::BookRemoved {
                isbn,
                removed: false,
            } => format!("{fail} Book {isbn} not found"),
            LibraryEvent::SearchResult { query, matches } => {
                let arrow = self.icon(Icon::Arrow);
                if matches.is_empty() {
                    format!("{arrow} Search '{query}': no match")
                } else {
                    let found: Vec<&str> = matches.iter().map(|m| m.as_str()).collect();
                    format!("{arrow} Search '{query}': {}", found.join(", "))
                }
            }
            LibraryEvent::PatronRegistered { id, name } => {
                format!("{ok} Patron registered: {name} ({id})")
            }
            LibraryEvent::PatronRejected { id, reason } => {
                format!("{fail} Patron {id} not registered: {}", describe(*reason))
            }
            LibraryEvent::PatronRemoved { id, removed: true } => {
                format!("{ok} Patron removed: {id}")
            }
            LibraryEvent::PatronRemoved { id, removed: false } => {
                format!("{fail} Patron {id} not found")
            }
            LibraryEvent::PatronStatusChanged { id, name, status } => {
                let verb = match status {
                    AccountStatus::Active => "activated",
                    AccountStatus::Suspended => "suspended",
                };
                format!("{warn} Account {verb}: {name} ({id})")
            }
            LibraryEvent::CheckedOut {
                title,
                patron_name,
                due_date,
                ..
            } => format!("{ok} Book checked out: {title} to {patron_name} (due {due_date})"),
            LibraryEvent::CheckoutRejected {
                title,
                patron,
                reason,
                ..
            } => format!(
                "{fail} Cannot check out {title} to {patron}: {}",
                describe(*reason)
            ),
            LibraryEvent::FineAssessed { patron, amount } => {
                format!("{warn} Fine of {} charged to {patron}", self.money(*amount))
            }
            LibraryEvent::Returned {
                title, patron_name, ..
            } => format!("{ok} Book returned: {title} by {patron_name}"),
            LibraryEvent::ReturnRejected {
                isbn,
                patron,
                reason,
            } => format!(
                "{fail} Cannot return {isbn} from {patron}: {}",
                describe(*reason)
            ),
            LibraryEvent::FinePaid {
                patron,
                amount,
                remaining,
            } => format!(
                "{ok} Fine paid by {patron}: {} (remaining {})",
                self.money(*amount),
                self.money(*remaining)
            ),
        }
    }

    /// Format an amount with the configured currency prefix
    pub fn money(&self, amount: Money) -> String {
        let text = format!("{}{}", self.style.currency, amount);
        if self.style.color {
            format!("{}", text.with(colors::WARNING))
        } else {
            text
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.style.color, self.style.unicode)
    }
}

fn describe(reason: ErrorKind) -> &'static str {
    match reason {
        ErrorKind::DuplicateKey => "already exists",
        ErrorKind::NotFound => "not found",
        ErrorKind::Unavailable => "no copies available",
        ErrorKind::AccountSuspended => "account suspended",
        ErrorKind::NotBorrowed => "not borrowed by this patron",
        ErrorKind::PaymentExceedsBalance => "payment exceeds balance",
    }
}

impl LibraryEventSink for ConsoleEventSink {
    fn on_event(&self, event: LibraryEvent) {
        let line = self.render(&event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.style.verbose > 0
    }
}
