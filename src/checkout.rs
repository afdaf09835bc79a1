//! # Order Placement
//!
//! Turns a loaded [`Cart`] into one [`Order`] plus its [`OrderItem`]s and then
//! empties the cart.
//!
//! ## Sequence
//!
//! 1. Validate: the shipping address must not be blank, then the cart must not be empty.
//!    Nothing is written when either check fails.
//! 2. Create the order (`pending`, total = [`Cart::total`]).
//! 3. Insert one order item per cart line in a single batch. Each item keeps the
//!    unit price the cart was loaded with.
//! 4. Delete every cart row of the user.
//!
//! ## Compensation
//!
//! The three writes touch three collections and are not one transaction. When a
//! later step fails, the earlier ones are undone before the error is returned:
//!
//! | Failed step | Undone |
//! |---|---|
//! | order items | the order |
//! | cart clear | the order items, then the order |
//!
//! A failed undo is logged; the caller still gets the original
//! [`StoreError::OrderPlacementError`].

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::cart::Cart;
use crate::clients::{ActorClient, CartClient, OrderClient, OrderItemClient};
use crate::error::StoreError;
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderItemCreate};

/// The persisted result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Clone)]
pub struct OrderPlacement {
    orders: OrderClient,
    order_items: OrderItemClient,
    carts: CartClient,
}

impl OrderPlacement {
    pub fn new(orders: OrderClient, order_items: OrderItemClient, carts: CartClient) -> Self {
        Self { orders, order_items, carts }
    }

    #[instrument(skip(self, cart, shipping_address), fields(user_id = %cart.user_id, lines = cart.len()))]
    pub async fn place(&self, cart: &Cart, shipping_address: &str) -> Result<PlacedOrder, StoreError> {
        if shipping_address.trim().is_empty() {
            return Err(StoreError::validation("address required"));
        }
        if cart.is_empty() {
            return Err(StoreError::validation("cart empty"));
        }

        let total_amount = cart.total();
        let order = self
            .orders
            .create_order(OrderCreate {
                user_id: cart.user_id,
                total_amount,
                shipping_address: shipping_address.to_string(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Order insert failed");
                StoreError::OrderPlacementError(format!("create order: {e}"))
            })?;

        let params: Vec<OrderItemCreate> = cart
            .lines
            .iter()
            .map(|line| {
                if line.product.is_none() {
                    warn!(product_id = %line.product_id(), "Ordering line without product at price 0");
                }
                OrderItemCreate {
                    order_id: order.id,
                    product_id: line.product_id(),
                    quantity: line.item.quantity,
                    price: line.unit_price(),
                }
            })
            .collect();

        let items = match self.order_items.create_items(params).await {
            Ok(items) => items,
            Err(e) => {
                error!(order_id = %order.id, error = %e, "Order items insert failed");
                self.discard_order(order.id).await;
                return Err(StoreError::OrderPlacementError(format!("create order items: {e}")));
            }
        };

        if let Err(e) = self.carts.clear(cart.user_id).await {
            error!(order_id = %order.id, error = %e, "Cart clear failed");
            self.discard_items(order.id).await;
            self.discard_order(order.id).await;
            return Err(StoreError::OrderPlacementError(format!("clear cart: {e}")));
        }

        info!(order_id = %order.id, total = %order.total_amount, items = items.len(), "Order placed");
        Ok(PlacedOrder { order, items })
    }

    async fn discard_order(&self, order_id: OrderId) {
        match self.orders.delete(order_id).await {
            Ok(()) => warn!(%order_id, "Rolled back order"),
            Err(e) => error!(%order_id, error = %e, "Rollback of order failed"),
        }
    }

    async fn discard_items(&self, order_id: OrderId) {
        match self.order_items.delete_for_order(order_id).await {
            Ok(removed) => warn!(%order_id, removed, "Rolled back order items"),
            Err(e) => error!(%order_id, error = %e, "Rollback of order items failed"),
        }
    }
}
