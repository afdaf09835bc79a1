use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{OrderId, OrderItem, OrderItemCreate, OrderItemFilter};
use crate::order_item_actor::OrderItemError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the OrderItem actor.
#[derive(Clone)]
pub struct OrderItemClient {
    inner: ResourceClient<OrderItem>,
}

impl OrderItemClient {
    pub fn new(inner: ResourceClient<OrderItem>) -> Self {
        Self { inner }
    }

    /// Inserts all lines as one batch. Either every line is stored or none is.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn create_items(&self, items: Vec<OrderItemCreate>) -> Result<Vec<OrderItem>, OrderItemError> {
        debug!("Sending request");
        self.inner.create_many(items).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn items_for_order(&self, order_id: OrderId) -> Result<Vec<OrderItem>, OrderItemError> {
        debug!("Sending request");
        self.inner
            .list(OrderItemFilter::Order(order_id), None)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_for_order(&self, order_id: OrderId) -> Result<usize, OrderItemError> {
        debug!("Sending request");
        self.inner
            .delete_where(OrderItemFilter::Order(order_id))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<OrderItem> for OrderItemClient {
    type Error = OrderItemError;

    fn inner(&self) -> &ResourceClient<OrderItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(e) => entity_error(e),
            other => OrderItemError::ActorCommunicationError(other.to_string()),
        }
    }
}
