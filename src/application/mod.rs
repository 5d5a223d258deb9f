//! Application Layer
//!
//! Owned collections and the flows that run over them.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//!
//! ## Managers
//!
//! - `Catalog` - Books keyed by ISBN
//! - `Membership` - Patrons keyed by id
//!
//! ## Flows
//!
//! - `demo` - Scripted sample session, plus keyed checkout/return helpers

mod catalog;
pub mod demo;
mod membership;

pub use catalog::Catalog;
pub use demo::{run_demo, DemoReturn, DemoSummary};
pub use membership::Membership;
