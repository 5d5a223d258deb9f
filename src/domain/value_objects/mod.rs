//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod ids;
mod loan;
mod money;
mod status;

pub use ids::{Isbn, PatronId};
pub use loan::Loan;
pub use money::{Money, ParseMoneyError};
pub use status::{AccountStatus, BookStatus};
