//! Patron entity - a library member
//!
//! Tracks what the patron currently holds, everything they have ever
//! borrowed, their outstanding fine and whether the account is active.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::value_objects::{AccountStatus, Isbn, Money, PatronId};
use crate::error::{LibraryError, LibraryResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patron {
    id: PatronId,
    name: String,
    email: String,
    phone: String,
    /// Books currently held, keyed by ISBN with the number of copies held.
    ///
    /// A key is present only while its count is at least 1.
    borrowed: BTreeMap<Isbn, u32>,
    /// Every checkout in order, duplicates included
    history: Vec<Isbn>,
    fine_balance: Money,
    status: AccountStatus,
}

impl Patron {
    /// Create a new active Patron with no loans and no fines
    pub fn new(
        id: impl Into<PatronId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            borrowed: BTreeMap::new(),
            history: Vec::new(),
            fine_balance: Money::ZERO,
            status: AccountStatus::Active,
        }
    }

    // --- Getters ---

    pub fn id(&self) -> &PatronId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn fine_balance(&self) -> Money {
        self.fine_balance
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Currently held ISBNs, one entry per held copy, in ISBN order
    pub fn borrowed_books(&self) -> Vec<&Isbn> {
        self.borrowed
            .iter()
            .flat_map(|(isbn, count)| std::iter::repeat(isbn).take(*count as usize))
            .collect()
    }

    /// Number of copies currently held
    pub fn borrowed_count(&self) -> usize {
        self.borrowed.values().map(|count| *count as usize).sum()
    }

    /// Copies of `isbn` currently held
    pub fn copies_held(&self, isbn: &Isbn) -> u32 {
        self.borrowed.get(isbn).copied().unwrap_or(0)
    }

    pub fn has_borrowed(&self, isbn: &Isbn) -> bool {
        self.borrowed.contains_key(isbn)
    }

    pub fn borrowing_history(&self) -> &[Isbn] {
        &self.history
    }

    // --- Mutations ---

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn set_status(&mut self, status: AccountStatus) {
        self.status = status;
    }

    /// Record one more held copy of `isbn`
    pub fn add_borrowed_book(&mut self, isbn: Isbn) {
        *self.borrowed.entry(isbn).or_insert(0) += 1;
    }

    /// Drop one held copy of `isbn`. Returns false if none was held.
    pub fn remove_borrowed_book(&mut self, isbn: &Isbn) -> bool {
        let Some(count) = self.borrowed.get_mut(isbn) else {
            return false;
        };
        if *count > 1 {
            *count -= 1;
        } else {
            self.borrowed.remove(isbn);
        }
        true
    }

    pub fn add_to_history(&mut self, isbn: Isbn) {
        self.history.push(isbn);
    }

    pub fn add_fine(&mut self, amount: Money) {
        self.fine_balance = self.fine_balance.saturating_add(amount);
    }

    /// Pay down the balance by exactly `amount`.
    ///
    /// Payments larger than the balance are rejected and leave it unchanged.
    pub fn pay_fine(&mut self, amount: Money) -> LibraryResult<Money> {
        let remaining = self.fine_balance.checked_sub(amount).ok_or(
            LibraryError::PaymentExceedsBalance {
                requested: amount,
                balance: self.fine_balance,
            },
        )?;
        self.fine_balance = remaining;
        Ok(remaining)
    }
}

impl fmt::Display for Patron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patron{{id='{}', name='{}', email='{}', borrowed={}, fine={}, status='{}'}}",
            self.id,
            self.name,
            self.email,
            self.borrowed_count(),
            self.fine_balance,
            self.status
        )
    }
}
