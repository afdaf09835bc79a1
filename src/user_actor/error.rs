//! Failures of the `users` collection.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// Another account already uses this e-mail (compared case-insensitively).
    #[error("E-mail already registered: {0}")]
    AlreadyExists(String),

    #[error("Not a valid e-mail address: {0}")]
    InvalidEmail(String),

    /// Accounts are stored with an argon2 hash only, never without one.
    #[error("Account has no password hash")]
    MissingPasswordHash,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}
