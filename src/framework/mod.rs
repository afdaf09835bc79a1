//! Generic resource framework backing every storefront collection.
//!
//! Each collection (categories, products, cart items, orders, ...) is owned by one
//! [`ResourceActor`] and reached only through its [`ResourceClient`]. The actor plays
//! the part of the hosted persistence service: it assigns identifiers, filters rows,
//! and serialises every write to its collection.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that row types implement to be stored by an actor
//! - [`ResourceActor`] - Generic actor that owns one collection
//! - [`ResourceClient`] - Cloneable async handle used to send requests
//! - [`FrameworkError`] - Transport and storage failures
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
