use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::clients::UserClient;
use crate::identity::password::{hash_password, verify_password};
use crate::identity::{AuthError, Identity, Session};
use crate::model::User;
use crate::user_actor::UserError;

/// Account store that signs callers in and out of a [`Session`].
///
/// Every method either succeeds or fails with an [`AuthError`] whose message is
/// shown to the user as-is.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Registers a new account and signs the caller in.
    async fn sign_up(&self, session: &Session, email: &str, password: &str) -> Result<Identity, AuthError>;

    async fn sign_in(&self, session: &Session, email: &str, password: &str) -> Result<Identity, AuthError>;

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;

    fn current_user(&self, session: &Session) -> Option<Identity> {
        session.current_user()
    }
}

/// [`IdentityProvider`] backed by the `users` collection.
#[derive(Clone)]
pub struct LocalIdentityProvider {
    users: UserClient,
    min_password_len: usize,
}

impl LocalIdentityProvider {
    pub fn new(users: UserClient, min_password_len: usize) -> Self {
        Self { users, min_password_len }
    }
}

fn normalise(email: &str, password: &str) -> Result<String, AuthError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    Ok(email.to_lowercase())
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Identity { id: user.id, email: user.email.clone() }
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    #[instrument(skip(self, session, password))]
    async fn sign_up(&self, session: &Session, email: &str, password: &str) -> Result<Identity, AuthError> {
        let email = normalise(email, password)?;
        if password.chars().count() < self.min_password_len {
            return Err(AuthError::PasswordTooShort(self.min_password_len));
        }

        let password = password.to_string();
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;

        let user = match self.users.register(&email, hash).await {
            Ok(user) => user,
            Err(UserError::AlreadyExists(_)) => {
                warn!("E-mail already registered");
                return Err(AuthError::AlreadyRegistered);
            }
            Err(e) => return Err(AuthError::User(e)),
        };

        let identity = Identity::from(&user);
        session.set(Some(identity.clone()));
        info!(user_id = %identity.id, "Signed up");
        Ok(identity)
    }

    #[instrument(skip(self, session, password))]
    async fn sign_in(&self, session: &Session, email: &str, password: &str) -> Result<Identity, AuthError> {
        let email = normalise(email, password)?;
        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!("Unknown e-mail");
            return Err(AuthError::InvalidCredentials);
        };

        let stored = user.password_hash.clone();
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || verify_password(&stored, &password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;
        if !matches {
            warn!(user_id = %user.id, "Wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let identity = Identity::from(&user);
        session.set(Some(identity.clone()));
        info!(user_id = %identity.id, "Signed in");
        Ok(identity)
    }

    #[instrument(skip_all)]
    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        if let Some(identity) = session.current_user() {
            info!(user_id = %identity.id, "Signed out");
        }
        session.set(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{mock::MockClient, FrameworkError};

    fn provider(mock: &MockClient<User>) -> LocalIdentityProvider {
        LocalIdentityProvider::new(UserClient::new(mock.client()), 6)
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected_before_any_request() {
        let mock = MockClient::<User>::new();
        let provider = provider(&mock);
        let session = Session::new();

        assert_eq!(provider.sign_in(&session, "  ", "secret").await, Err(AuthError::MissingFields));
        assert_eq!(provider.sign_up(&session, "a@b.c", "").await, Err(AuthError::MissingFields));
        mock.verify();
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let mock = MockClient::<User>::new();
        let session = Session::new();

        let result = provider(&mock).sign_up(&session, "a@b.c", "12345").await;
        assert_eq!(result, Err(AuthError::PasswordTooShort(6)));
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_reports_already_registered() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create_unique().return_err(FrameworkError::Conflict("Email".into()));
        let session = Session::new();

        let result = provider(&mock).sign_up(&session, "a@b.c", "secret1").await;
        assert_eq!(result, Err(AuthError::AlreadyRegistered));
        assert!(session.current_user().is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_email_is_invalid_credentials() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![]);
        let session = Session::new();

        let result = provider(&mock).sign_in(&session, "nobody@b.c", "secret1").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
        mock.verify();
    }
}
