//! Domain Layer
//!
//! The core of Libris - lending rules and records without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Records with identity (Book, Patron)
//! - `value_objects/` - Immutable value types (Isbn, Money, Loan, statuses)
//! - `services/` - Domain services (LendingService)
//! - `policies/` - Business rules (LoanPolicy)
//! - `ports/` - Interface definitions for infrastructure (Clock, event sink)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never reads the wall clock or prints
//! 2. **Outcomes, not output** - Failures are returned as `LibraryError`
//! 3. **Ports & Adapters** - Time and reporting go through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
