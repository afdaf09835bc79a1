//! Entity trait implementation for the User domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`User`] to be managed by the generic [`crate::framework::ResourceActor`].

use chrono::Utc;

use crate::framework::{ActorEntity, Immutable};
use crate::model::{User, UserCreate, UserFilter, UserId};
use crate::user_actor::UserError;

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = Immutable;
    type Filter = UserFilter;
    type Error = UserError;

    /// Creates a new User. The e-mail is normalised before it is stored.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        let email = params.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(UserError::InvalidEmail(email));
        }
        if params.password_hash.is_empty() {
            return Err(UserError::MissingPasswordHash);
        }
        Ok(Self {
            id,
            email,
            password_hash: params.password_hash,
            created_at: Utc::now(),
        })
    }

    fn id(&self) -> &UserId {
        &self.id
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        match filter {
            UserFilter::Email(email) => self.email.eq_ignore_ascii_case(email.trim()),
        }
    }

    fn on_update(&mut self, update: Immutable) -> Result<(), UserError> {
        match update {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(email: &str, hash: &str) -> Result<User, UserError> {
        User::from_create_params(UserId(1), UserCreate { email: email.into(), password_hash: hash.into() })
    }

    #[test]
    fn email_is_normalised() {
        let user = create("  Zoe@Example.COM ", "$argon2id$stub").unwrap();
        assert_eq!(user.email, "zoe@example.com");
        assert!(user.matches(&UserFilter::Email("ZOE@example.com".into())));
    }

    #[test]
    fn invalid_rows_are_refused() {
        assert_eq!(create("zoe", "$argon2id$stub").unwrap_err(), UserError::InvalidEmail("zoe".into()));
        assert_eq!(create("zoe@example.com", "").unwrap_err(), UserError::MissingPasswordHash);
    }
}
