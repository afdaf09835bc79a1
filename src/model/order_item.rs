use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{entity_id, OrderId, ProductId};

entity_id!(
    /// Type-safe identifier for order lines.
    OrderItemId,
    "order_item"
);

/// One purchased line of an order.
///
/// `price` is the unit price captured when the order was placed. It is never
/// re-read from the product afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone)]
pub struct OrderItemCreate {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Decimal,
}

#[derive(Debug, Clone)]
pub enum OrderItemFilter {
    Order(OrderId),
}
