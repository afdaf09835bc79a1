//! # Identity
//!
//! The identity provider and the session it signs callers into.
//!
//! - [`Session`] - explicit "current identity" context, passed to every operation that
//!   needs a caller. Changes are published to subscribers.
//! - [`IdentityProvider`] - sign-up, sign-in and sign-out against an account store.
//! - [`LocalIdentityProvider`] - provider backed by the `users` collection with
//!   argon2 password hashes.

pub mod password;
pub mod provider;
pub mod session;

pub use provider::*;
pub use session::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::UserId;
use crate::user_actor::UserError;

/// The signed-in caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("User already registered")]
    AlreadyRegistered,

    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    User(#[from] UserError),
}
