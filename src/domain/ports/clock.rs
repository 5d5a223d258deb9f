//! Clock port - source of "today"
//!
//! The lending engine measures fines from the current date. Reading it
//! through this trait keeps the domain free of wall-clock access.

use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
