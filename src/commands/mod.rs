pub mod demo;
pub mod fine;
pub mod policy;

pub use demo::cmd_demo;
pub use fine::cmd_fine;
pub use policy::cmd_policy;
