//! Error types for Libris
//!
//! Every domain failure is a reported outcome, never a panic. Callers check
//! `is_ok()` for success and `LibraryError::kind()` for the reason.

use thiserror::Error;

use crate::domain::value_objects::{Isbn, Money, PatronId};

/// Result type alias for Libris operations
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Which collection a key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Book,
    Patron,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Book => write!(f, "book"),
            RecordKind::Patron => write!(f, "patron"),
        }
    }
}

/// Stable discriminant of a [`LibraryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateKey,
    NotFound,
    Unavailable,
    AccountSuspended,
    NotBorrowed,
    PaymentExceedsBalance,
}

impl ErrorKind {
    /// snake_case name used in event streams
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateKey => "duplicate_key",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unavailable => "unavailable",
            ErrorKind::AccountSuspended => "account_suspended",
            ErrorKind::NotBorrowed => "not_borrowed",
            ErrorKind::PaymentExceedsBalance => "payment_exceeds_balance",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for Libris operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// An entry with the same key is already present
    #[error("{kind} '{key}' already exists")]
    DuplicateKey { kind: RecordKind, key: String },

    /// No entry with this key
    #[error("{kind} '{key}' not found")]
    NotFound { kind: RecordKind, key: String },

    /// Every copy is checked out
    #[error("book not available: {title} ({isbn})")]
    Unavailable { isbn: Isbn, title: String },

    /// Patron account is suspended
    #[error("patron account is suspended: {patron}")]
    AccountSuspended { patron: PatronId },

    /// Return of a book the patron does not hold
    #[error("patron {patron} has not borrowed {isbn}")]
    NotBorrowed { isbn: Isbn, patron: PatronId },

    /// Payment larger than the outstanding balance
    #[error("payment of {requested} exceeds outstanding balance of {balance}")]
    PaymentExceedsBalance { requested: Money, balance: Money },
}

impl LibraryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            LibraryError::NotFound { .. } => ErrorKind::NotFound,
            LibraryError::Unavailable { .. } => ErrorKind::Unavailable,
            LibraryError::AccountSuspended { .. } => ErrorKind::AccountSuspended,
            LibraryError::NotBorrowed { .. } => ErrorKind::NotBorrowed,
            LibraryError::PaymentExceedsBalance { .. } => ErrorKind::PaymentExceedsBalance,
        }
    }

    pub(crate) fn book_not_found(isbn: &Isbn) -> Self {
        LibraryError::NotFound {
            kind: RecordKind::Book,
            key: isbn.to_string(),
        }
    }

    pub(crate) fn patron_not_found(id: &PatronId) -> Self {
        LibraryError::NotFound {
            kind: RecordKind::Patron,
            key: id.to_string(),
        }
    }
}
