//! Lending service
//!
//! Checkout eligibility, return processing and fine calculation. The
//! service borrows the book and patron mutably for the length of a call;
//! the caller keeps ownership of both records.
//!
//! ## Fine anchoring
//!
//! Fines on return are measured from `today - loan period`, not from the
//! checkout date of the copy being returned (no per-copy checkout date is
//! stored). `LoanPolicy::fine_for_loan` gives the checkout-anchored figure
//! for callers that kept the `Loan` receipt.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{Book, Patron};
use crate::domain::policies::LoanPolicy;
use crate::domain::ports::{emit, Clock, LibraryEvent, LibraryEventSink, NoopEventSink};
use crate::domain::value_objects::{Loan, Money};
use crate::error::{LibraryError, LibraryResult};

/// Outcome of a successful return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnReceipt {
    /// Fine added to the patron's balance (zero when on time)
    pub fine: Money,
}

pub struct LendingService<C: Clock> {
    policy: LoanPolicy,
    clock: C,
    events: Arc<dyn LibraryEventSink>,
}

impl<C: Clock> LendingService<C> {
    pub fn new(policy: LoanPolicy, clock: C) -> Self {
        Self {
            policy,
            clock,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Builder: report outcomes to `sink`
    pub fn with_event_sink(mut self, sink: Arc<dyn LibraryEventSink>) -> Self {
        self.events = sink;
        self
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    pub fn loan_period_days(&self) -> u32 {
        self.policy.loan_period_days()
    }

    pub fn fine_per_day(&self) -> Money {
        self.policy.fine_per_day()
    }

    /// Lend one copy of `book` to `patron`.
    ///
    /// Checked in order: a copy must be available, then the account must be
    /// active. On rejection neither record changes.
    pub fn checkout(
        &self,
        book: &mut Book,
        patron: &mut Patron,
        checkout_date: NaiveDate,
    ) -> LibraryResult<Loan> {
        if let Err(err) = Self::check_eligibility(book, patron) {
            emit(
                self.events.as_ref(),
                LibraryEvent::CheckoutRejected {
                    isbn: book.isbn().clone(),
                    title: book.title().to_string(),
                    patron: patron.id().clone(),
                    reason: err.kind(),
                },
            );
            return Err(err);
        }

        book.borrow();
        patron.add_borrowed_book(book.isbn().clone());
        patron.add_to_history(book.isbn().clone());

        let loan = Loan {
            isbn: book.isbn().clone(),
            patron: patron.id().clone(),
            checkout_date,
            due_date: self.policy.due_date(checkout_date),
        };

        emit(
            self.events.as_ref(),
            LibraryEvent::CheckedOut {
                isbn: loan.isbn.clone(),
                title: book.title().to_string(),
                patron: loan.patron.clone(),
                patron_name: patron.name().to_string(),
                due_date: loan.due_date,
            },
        );

        Ok(loan)
    }

    /// Take back one copy of `book` from `patron`, charging any fine.
    ///
    /// Rejected with `NotBorrowed` when the patron holds no copy of the book.
    pub fn return_book(
        &self,
        book: &mut Book,
        patron: &mut Patron,
        return_date: NaiveDate,
    ) -> LibraryResult<ReturnReceipt> {
        if !patron.has_borrowed(book.isbn()) {
            let err = LibraryError::NotBorrowed {
                isbn: book.isbn().clone(),
                patron: patron.id().clone(),
            };
            emit(
                self.events.as_ref(),
                LibraryEvent::ReturnRejected {
                    isbn: book.isbn().clone(),
                    patron: patron.id().clone(),
                    reason: err.kind(),
                },
            );
            return Err(err);
        }

        let fine = self.calculate_fine(return_date);
        if !fine.is_zero() {
            patron.add_fine(fine);
            emit(
                self.events.as_ref(),
                LibraryEvent::FineAssessed {
                    patron: patron.id().clone(),
                    amount: fine,
                },
            );
        }

        book.return_copy();
        patron.remove_borrowed_book(book.isbn());

        emit(
            self.events.as_ref(),
            LibraryEvent::Returned {
                isbn: book.isbn().clone(),
                title: book.title().to_string(),
                patron: patron.id().clone(),
                patron_name: patron.name().to_string(),
            },
        );

        Ok(ReturnReceipt { fine })
    }

    /// Fine for a return on `return_date`, measured from `today - loan period`
    pub fn calculate_fine(&self, return_date: NaiveDate) -> Money {
        self.policy.rolling_fine(self.clock.today(), return_date)
    }

    fn check_eligibility(book: &Book, patron: &Patron) -> LibraryResult<()> {
        if !book.is_available() {
            return Err(LibraryError::Unavailable {
                isbn: book.isbn().clone(),
                title: book.title().to_string(),
            });
        }
        if !patron.is_active() {
            return Err(LibraryError::AccountSuspended {
                patron: patron.id().clone(),
            });
        }
        Ok(())
    }
}

impl<C: Clock> std::fmt::Debug for LendingService<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LendingService")
            .field("policy", &self.policy)
            .field("today", &self.clock.today())
            .finish()
    }
}
