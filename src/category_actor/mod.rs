//! Category-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CategoryClient;
use crate::framework::ResourceActor;
use crate::model::Category;

/// Creates a new Category actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, CategoryClient::new(generic_client))
}
