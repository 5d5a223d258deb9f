//! Domain Entities
//!
//! Records that have identity and lifecycle.
//! - `Book` - A catalog entry with copy counters
//! - `Patron` - A library member with loans, history and fines

mod book;
mod patron;

pub use book::Book;
pub use patron::Patron;
