//! Loan Policy
//!
//! Loan period and overdue fine rate, and the date arithmetic built on them.
//! Pure functions over `NaiveDate`; "today" is always passed in.

use chrono::{Days, NaiveDate};

use crate::domain::value_objects::{Loan, Money};

/// Default days a copy may be held
pub const DEFAULT_LOAN_PERIOD_DAYS: u32 = 14;

/// Default fine per overdue day, in whole currency units
pub const DEFAULT_FINE_PER_DAY_UNITS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPolicy {
    loan_period_days: u32,
    fine_per_day: Money,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: DEFAULT_LOAN_PERIOD_DAYS,
            fine_per_day: Money::from_units(DEFAULT_FINE_PER_DAY_UNITS),
        }
    }
}

impl LoanPolicy {
    pub fn new(loan_period_days: u32, fine_per_day: Money) -> Self {
        Self {
            loan_period_days,
            fine_per_day,
        }
    }

    pub fn loan_period_days(&self) -> u32 {
        self.loan_period_days
    }

    pub fn fine_per_day(&self) -> Money {
        self.fine_per_day
    }

    /// Due date of a loan starting on `checkout_date`
    pub fn due_date(&self, checkout_date: NaiveDate) -> NaiveDate {
        checkout_date
            .checked_add_days(self.period())
            .unwrap_or(NaiveDate::MAX)
    }

    /// The rolling due date used when returning: `today - loan period`.
    ///
    /// Fines on return are measured from this date, not from the loan's own
    /// checkout date. See [`Loan`] for the checkout-anchored alternative.
    pub fn rolling_due_date(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(self.period())
            .unwrap_or(NaiveDate::MIN)
    }

    /// Fine for returning on `return_date` against `due_date`.
    ///
    /// Zero unless `return_date` is strictly after `due_date`; otherwise
    /// whole days late times the daily rate.
    pub fn fine_between(&self, due_date: NaiveDate, return_date: NaiveDate) -> Money {
        if return_date <= due_date {
            return Money::ZERO;
        }
        let days_late = (return_date - due_date).num_days();
        self.fine_per_day
            .saturating_mul(u64::try_from(days_late).unwrap_or(0))
    }

    /// Fine the engine charges on return, relative to `today`
    pub fn rolling_fine(&self, today: NaiveDate, return_date: NaiveDate) -> Money {
        self.fine_between(self.rolling_due_date(today), return_date)
    }

    /// Fine measured from the loan's own due date
    pub fn fine_for_loan(&self, loan: &Loan, return_date: NaiveDate) -> Money {
        self.fine_per_day
            .saturating_mul(loan.overdue_days(return_date))
    }

    fn period(&self) -> Days {
        Days::new(u64::from(self.loan_period_days))
    }
}
