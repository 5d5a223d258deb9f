//! Domain Policies
//!
//! Business rules that govern lending.
//! These are pure functions that operate on dates and amounts.

mod loan_policy;

pub use loan_policy::{LoanPolicy, DEFAULT_FINE_PER_DAY_UNITS, DEFAULT_LOAN_PERIOD_DAYS};
