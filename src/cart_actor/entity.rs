//! Entity trait implementation for [`CartItem`].
//!
//! Enforces the row invariant `quantity >= 1` on insert and on every update.

use crate::cart_actor::CartError;
use crate::framework::ActorEntity;
use crate::model::{CartItem, CartItemCreate, CartItemFilter, CartItemId, CartItemUpdate};

impl ActorEntity for CartItem {
    type Id = CartItemId;
    type Create = CartItemCreate;
    type Update = CartItemUpdate;
    type Filter = CartItemFilter;
    type Error = CartError;

    fn from_create_params(id: CartItemId, params: CartItemCreate) -> Result<Self, CartError> {
        if params.quantity < 1 {
            return Err(CartError::InvalidQuantity(params.quantity));
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            product_id: params.product_id,
            quantity: params.quantity,
        })
    }

    fn id(&self) -> &CartItemId {
        &self.id
    }

    fn matches(&self, filter: &CartItemFilter) -> bool {
        match filter {
            CartItemFilter::User(user_id) => self.user_id == *user_id,
            CartItemFilter::UserProduct { user_id, product_id } => {
                self.user_id == *user_id && self.product_id == *product_id
            }
        }
    }

    fn on_update(&mut self, update: CartItemUpdate) -> Result<(), CartError> {
        let quantity = match update {
            CartItemUpdate::SetQuantity(quantity) => quantity,
            CartItemUpdate::Increment(by) => self.quantity.saturating_add(by),
        };
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        self.quantity = quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, UserId};

    fn item(quantity: u32) -> Result<CartItem, CartError> {
        CartItem::from_create_params(
            CartItemId(1),
            CartItemCreate { user_id: UserId(1), product_id: ProductId(2), quantity },
        )
    }

    #[test]
    fn zero_quantity_is_never_stored() {
        assert_eq!(item(0), Err(CartError::InvalidQuantity(0)));

        let mut row = item(3).unwrap();
        assert_eq!(row.on_update(CartItemUpdate::SetQuantity(0)), Err(CartError::InvalidQuantity(0)));
        assert_eq!(row.quantity, 3);
    }

    #[test]
    fn increment_adds_to_existing_quantity() {
        let mut row = item(1).unwrap();
        row.on_update(CartItemUpdate::Increment(1)).unwrap();
        assert_eq!(row.quantity, 2);
    }

    #[test]
    fn user_product_filter_needs_both_keys() {
        let row = item(1).unwrap();
        assert!(row.matches(&CartItemFilter::UserProduct { user_id: UserId(1), product_id: ProductId(2) }));
        assert!(!row.matches(&CartItemFilter::UserProduct { user_id: UserId(2), product_id: ProductId(2) }));
        assert!(row.matches(&CartItemFilter::User(UserId(1))));
    }
}
