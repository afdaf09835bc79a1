use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CategoryId, Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Products in id order, optionally capped at `limit`.
    #[instrument(skip(self))]
    pub async fn list_products(&self, limit: Option<usize>) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.list(ProductFilter::All, limit).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn products_in_category(&self, category_id: CategoryId) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .list(ProductFilter::Category(category_id), None)
            .await
            .map_err(Self::map_error)
    }

    /// Fetches the given products in one request. Unknown ids are skipped.
    #[instrument(skip(self))]
    pub async fn products_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        debug!("Sending request");
        self.inner
            .list(ProductFilter::AnyOf(ids.to_vec()), None)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: ProductId, update: ProductUpdate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(e) => entity_error(e),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_list};

    #[tokio::test]
    async fn test_products_by_ids_skips_request_when_empty() {
        let (client, mut receiver) = create_mock_client::<Product>(4);
        let client = ProductClient::new(client);

        assert!(client.products_by_ids(&[]).await.unwrap().is_empty());
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_products_by_ids_sends_any_of_filter() {
        let (client, mut receiver) = create_mock_client::<Product>(4);
        let client = ProductClient::new(client);

        let task = tokio::spawn(async move { client.products_by_ids(&[ProductId(2), ProductId(5)]).await });

        let (filter, limit, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert!(matches!(filter, ProductFilter::AnyOf(ref ids) if ids == &vec![ProductId(2), ProductId(5)]));
        assert_eq!(limit, None);
        responder.send(Ok(vec![])).unwrap();

        assert!(task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_of_missing_product_is_not_found() {
        let mut mock = crate::framework::mock::MockClient::<Product>::new();
        mock.expect_update().return_err(FrameworkError::NotFound("product_9".into()));

        let client = ProductClient::new(mock.client());
        let result = client.update_product(ProductId(9), ProductUpdate::default()).await;
        assert_eq!(result, Err(ProductError::NotFound("product_9".into())));
        mock.verify();
    }
}
