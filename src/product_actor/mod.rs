//! # Product Actor
//!
//! This module implements the Product resource actor: the catalog of items a
//! user can browse and add to a cart.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront::model::{CategoryId, ProductCreate};
//! use storefront::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let widget = ProductCreate::new(CategoryId(1), "Widget", Decimal::new(999, 2), 10);
//!     let product = client.create_product(widget).await?;
//!     assert_eq!(product.price.to_string(), "9.99");
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Validation**: empty names and negative prices are refused at insert and update
//! - **Price changes**: [`ProductUpdate`](crate::model::ProductUpdate) patches price or stock
//!   without touching order history, which keeps its own price snapshot

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, ProductClient::new(generic_client))
}
