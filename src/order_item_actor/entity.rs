use crate::framework::{ActorEntity, Immutable};
use crate::model::{OrderItem, OrderItemCreate, OrderItemFilter, OrderItemId};
use crate::order_item_actor::OrderItemError;

impl ActorEntity for OrderItem {
    type Id = OrderItemId;
    type Create = OrderItemCreate;
    type Update = Immutable;
    type Filter = OrderItemFilter;
    type Error = OrderItemError;

    fn from_create_params(id: OrderItemId, params: OrderItemCreate) -> Result<Self, OrderItemError> {
        if params.quantity < 1 {
            return Err(OrderItemError::ValidationError("quantity must be at least 1".into()));
        }
        if params.price.is_sign_negative() && !params.price.is_zero() {
            return Err(OrderItemError::ValidationError(format!(
                "price must not be negative: {}",
                params.price
            )));
        }
        Ok(Self {
            id,
            order_id: params.order_id,
            product_id: params.product_id,
            quantity: params.quantity,
            price: params.price,
        })
    }

    fn id(&self) -> &OrderItemId {
        &self.id
    }

    fn matches(&self, filter: &OrderItemFilter) -> bool {
        match filter {
            OrderItemFilter::Order(order_id) => self.order_id == *order_id,
        }
    }

    fn on_update(&mut self, update: Immutable) -> Result<(), OrderItemError> {
        match update {}
    }
}
