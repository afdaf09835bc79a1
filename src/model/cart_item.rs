//! A pending purchase line: one product in one user's cart.
//!
//! The product itself is not stored on the row; the cart aggregate joins it at
//! read time (see [`crate::cart::load_cart`]).

use serde::{Deserialize, Serialize};

use crate::model::{entity_id, ProductId, UserId};

entity_id!(
    /// Type-safe identifier for cart rows.
    CartItemId,
    "cart_item"
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Always at least 1.
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct CartItemCreate {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartItemUpdate {
    SetQuantity(u32),
    Increment(u32),
}

#[derive(Debug, Clone)]
pub enum CartItemFilter {
    User(UserId),
    UserProduct { user_id: UserId, product_id: ProductId },
}
