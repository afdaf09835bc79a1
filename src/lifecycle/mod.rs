//! Startup, wiring and shutdown of the actor system, plus tracing setup.

pub mod store_system;
pub mod tracing;

pub use store_system::*;
pub use self::tracing::setup_tracing;
