//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! See the trait implementation on [`Order`] for method documentation.

use chrono::Utc;

use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Filter = OrderFilter;
    type Error = OrderError;

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is initialized with status [`OrderStatus::Pending`] and stamped
    /// with the current time.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.total_amount.is_sign_negative() && !params.total_amount.is_zero() {
            return Err(OrderError::NegativeTotal(params.total_amount));
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            total_amount: params.total_amount,
            status: OrderStatus::Pending,
            shipping_address: params.shipping_address,
            created_at: Utc::now(),
        })
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::User(user_id) => self.user_id == *user_id,
        }
    }

    /// Status changes come from fulfilment; checkout never patches an order.
    fn on_update(&mut self, update: OrderUpdate) -> Result<(), OrderError> {
        self.status = update.status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use rust_decimal::Decimal;

    fn create(total: Decimal) -> OrderCreate {
        OrderCreate { user_id: UserId(1), total_amount: total, shipping_address: "1 Road".into() }
    }

    #[test]
    fn new_orders_are_pending() {
        let order = Order::from_create_params(OrderId(1), create(Decimal::new(2498, 2))).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.shipping_address, "1 Road");
    }

    #[test]
    fn negative_total_is_refused() {
        let result = Order::from_create_params(OrderId(1), create(Decimal::new(-1, 2)));
        assert_eq!(result.unwrap_err(), OrderError::NegativeTotal(Decimal::new(-1, 2)));
    }
}
