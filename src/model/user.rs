//! An account row of the identity store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::entity_id;

entity_id!(
    /// Type-safe identifier for Users.
    UserId,
    "user"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Stored trimmed and lower-cased.
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub enum UserFilter {
    Email(String),
}
