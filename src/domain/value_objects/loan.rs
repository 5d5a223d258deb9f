//! Loan receipt
//!
//! A loan is not stored anywhere: the engine hands one back from a
//! successful checkout so the caller can report the due date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Isbn, Money, PatronId};
use crate::domain::policies::LoanPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub isbn: Isbn,
    pub patron: PatronId,
    pub checkout_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl Loan {
    /// Whole days past the due date on `date` (0 when on time)
    pub fn overdue_days(&self, date: NaiveDate) -> u64 {
        let days = (date - self.due_date).num_days();
        u64::try_from(days).unwrap_or(0)
    }

    pub fn is_overdue_on(&self, date: NaiveDate) -> bool {
        date > self.due_date
    }

    /// Fine for returning this copy on `date`, counted from its own due date.
    ///
    /// Reporting only: `LendingService` charges the rolling fine instead.
    pub fn fine_if_returned_on(&self, date: NaiveDate, policy: &LoanPolicy) -> Money {
        policy.fine_for_loan(self, date)
    }
}
