use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus, OrderUpdate, UserId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::cmp::Reverse;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, total = %order.total_amount, "Order created");
        Ok(order)
    }

    /// The user's orders, newest first.
    #[instrument(skip(self))]
    pub async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self
            .inner
            .list(OrderFilter::User(user_id), None)
            .await
            .map_err(Self::map_error)?;
        orders.sort_by_key(|order| Reverse((order.created_at, order.id)));
        Ok(orders)
    }

    /// Moves an order to `status`. Used by fulfilment, never by checkout.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate { status })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(e) => entity_error(e),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn spawn() -> OrderClient {
        let (actor, client) = crate::order_actor::new(8);
        tokio::spawn(actor.run());
        client
    }

    fn params(user: u32, cents: i64) -> OrderCreate {
        OrderCreate {
            user_id: UserId(user),
            total_amount: Decimal::new(cents, 2),
            shipping_address: "1 Road".into(),
        }
    }

    #[tokio::test]
    async fn test_orders_for_user_newest_first() {
        let client = spawn();
        let first = client.create_order(params(1, 100)).await.unwrap();
        client.create_order(params(2, 200)).await.unwrap();
        let third = client.create_order(params(1, 300)).await.unwrap();

        let ids: Vec<OrderId> = client.orders_for_user(UserId(1)).await.unwrap().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![third.id, first.id]);
    }

    #[tokio::test]
    async fn test_update_status() {
        let client = spawn();
        let order = client.create_order(params(1, 100)).await.unwrap();
        assert_eq!(order.status, OrderStatus::Pending);

        let shipped = client.update_status(order.id, OrderStatus::Completed).await.unwrap();
        assert_eq!(shipped.status, OrderStatus::Completed);

        let missing = client.update_status(OrderId(99), OrderStatus::Cancelled).await;
        assert!(matches!(missing, Err(OrderError::NotFound(_))));
    }
}
