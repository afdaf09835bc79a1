use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{User, UserCreate, UserFilter};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Stores a new account. Fails with [`UserError::AlreadyExists`] when the
    /// e-mail is taken.
    #[instrument(skip(self, password_hash))]
    pub async fn register(&self, email: &str, password_hash: String) -> Result<User, UserError> {
        debug!("Sending request");
        let payload = UserCreate { email: email.to_string(), password_hash };
        match self.inner.create_unique(UserFilter::Email(email.to_string()), payload).await {
            Ok(user) => Ok(user),
            Err(FrameworkError::Conflict(_)) => Err(UserError::AlreadyExists(email.to_string())),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let users = self
            .inner
            .list(UserFilter::Email(email.to_string()), Some(1))
            .await
            .map_err(Self::map_error)?;
        Ok(users.into_iter().next())
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Conflict(what) => UserError::AlreadyExists(what),
            FrameworkError::EntityError(e) => entity_error(e),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
