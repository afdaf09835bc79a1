use crate::cart_actor::CartError;
use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CartItem, CartItemCreate, CartItemFilter, CartItemId, CartItemUpdate, ProductId, UserId};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartItem>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartItem>) -> Self {
        Self { inner }
    }

    /// The user's cart rows in insertion order.
    #[instrument(skip(self))]
    pub async fn items_for_user(&self, user_id: UserId) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        self.inner
            .list(CartItemFilter::User(user_id), None)
            .await
            .map_err(Self::map_error)
    }

    /// Adds one unit of `product_id` to the user's cart.
    ///
    /// Increments the existing row for the pair, or inserts a row with quantity 1.
    /// Both paths run as one request, so overlapping calls never produce two rows.
    #[instrument(skip(self))]
    pub async fn add_one(&self, user_id: UserId, product_id: ProductId) -> Result<CartItem, CartError> {
        debug!("Sending request");
        self.inner
            .upsert(
                CartItemFilter::UserProduct { user_id, product_id },
                CartItemCreate { user_id, product_id, quantity: 1 },
                CartItemUpdate::Increment(1),
            )
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_quantity(&self, id: CartItemId, quantity: u32) -> Result<CartItem, CartError> {
        debug!("Sending request");
        self.inner
            .update(id, CartItemUpdate::SetQuantity(quantity))
            .await
            .map_err(Self::map_error)
    }

    /// Deletes a cart row. Removing a row that is already gone succeeds.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: CartItemId) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.delete(id).await {
            Ok(()) | Err(FrameworkError::NotFound(_)) => Ok(()),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Deletes every row in the user's cart and returns how many were removed.
    #[instrument(skip(self))]
    pub async fn clear(&self, user_id: UserId) -> Result<usize, CartError> {
        debug!("Sending request");
        let removed = self
            .inner
            .delete_where(CartItemFilter::User(user_id))
            .await
            .map_err(Self::map_error)?;
        info!(removed, "Cart cleared");
        Ok(removed)
    }
}

#[async_trait]
impl ActorClient<CartItem> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::EntityError(e) => entity_error(e),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_delete_where, expect_upsert, MockClient};

    #[tokio::test]
    async fn test_add_one_sends_insert_or_increment() {
        let (client, mut receiver) = create_mock_client::<CartItem>(4);
        let client = CartClient::new(client);

        let task = tokio::spawn(async move { client.add_one(UserId(1), ProductId(7)).await });

        let (filter, create, update, responder) =
            expect_upsert(&mut receiver).await.expect("Expected Upsert request");
        assert!(matches!(
            filter,
            CartItemFilter::UserProduct { user_id: UserId(1), product_id: ProductId(7) }
        ));
        assert_eq!(create.quantity, 1);
        assert_eq!(update, CartItemUpdate::Increment(1));
        responder
            .send(Ok(CartItem { id: CartItemId(1), user_id: UserId(1), product_id: ProductId(7), quantity: 1 }))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap().quantity, 1);
    }

    #[tokio::test]
    async fn test_clear_filters_by_user() {
        let (client, mut receiver) = create_mock_client::<CartItem>(4);
        let client = CartClient::new(client);

        let task = tokio::spawn(async move { client.clear(UserId(3)).await });

        let (filter, responder) = expect_delete_where(&mut receiver).await.expect("Expected DeleteWhere request");
        assert!(matches!(filter, CartItemFilter::User(UserId(3))));
        responder.send(Ok(2)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(2));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let mut mock = MockClient::<CartItem>::new();
        mock.expect_delete().return_err(FrameworkError::NotFound("cart_item_4".into()));
        mock.expect_delete().return_err(FrameworkError::ActorClosed);

        let client = CartClient::new(mock.client());
        assert_eq!(client.remove(CartItemId(4)).await, Ok(()));
        assert!(matches!(
            client.remove(CartItemId(4)).await,
            Err(CartError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_invalid_quantity_surfaces_entity_error() {
        let mut mock = MockClient::<CartItem>::new();
        mock.expect_update()
            .return_err(FrameworkError::EntityError(Box::new(CartError::InvalidQuantity(0))));

        let client = CartClient::new(mock.client());
        assert_eq!(client.set_quantity(CartItemId(1), 0).await, Err(CartError::InvalidQuantity(0)));
        mock.verify();
    }
}
