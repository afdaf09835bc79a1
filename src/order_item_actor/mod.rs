//! Order-line resource logic. Rows are written once, in a batch, at checkout.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderItemClient;
use crate::framework::ResourceActor;
use crate::model::OrderItem;

/// Creates a new OrderItem actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<OrderItem>, OrderItemClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, OrderItemClient::new(generic_client))
}
