//! User-specific resource logic and entity implementation.
//!
//! Backs the local identity provider. E-mail uniqueness is enforced by
//! [`create_unique`](crate::framework::ResourceClient::create_unique) inside the actor.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, UserClient::new(generic_client))
}
