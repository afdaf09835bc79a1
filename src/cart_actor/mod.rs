//! # Cart Actor
//!
//! Owns the `cart_items` collection. One row per (user, product) pair; adding a
//! product that is already in the cart increments the existing row.
//!
//! ## Atomic add-to-cart
//!
//! The insert-or-increment runs as a single
//! [`ResourceRequest::Upsert`](crate::framework::ResourceRequest::Upsert) inside the actor:
//!
//! ```rust,ignore
//! cart_client.add_one(user_id, product_id).await?;
//! ```
//!
//! Because the actor handles one message at a time, two overlapping calls for the
//! same pair always end as one row with quantity 2.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::CartItem;

/// Creates a new Cart actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<CartItem>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, CartClient::new(generic_client))
}
