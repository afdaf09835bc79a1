use crate::category_actor::CategoryError;
use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Category, CategoryCreate, CategoryFilter};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<Category, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// All categories, ordered by name.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        debug!("Sending request");
        let mut categories = self
            .inner
            .list(CategoryFilter::All, None)
            .await
            .map_err(Self::map_error)?;
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(e) => entity_error(e),
            other => CategoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
