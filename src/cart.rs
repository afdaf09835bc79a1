//! # Cart Aggregate
//!
//! A priced, read-only view of one user's cart: each [`CartItem`] row joined with
//! its [`Product`]. The same view feeds the cart screen and checkout, so the
//! prices a user sees are exactly the prices their order items capture.
//!
//! Totals are accumulated exactly in [`Decimal`]; rounding to cents only happens
//! in [`format_price`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::cart_actor::CartError;
use crate::clients::{CartClient, ProductClient};
use crate::error::StoreError;
use crate::model::{CartItem, CartItemId, Product, ProductId, UserId};

/// One cart row joined with its product. `product` is `None` when the product
/// has been deleted since it was added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub item: CartItem,
    pub product: Option<Product>,
}

impl CartLine {
    /// Unit price at load time; zero for a missing product.
    pub fn unit_price(&self) -> Decimal {
        self.product.as_ref().map_or(Decimal::ZERO, |p| p.price)
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.item.quantity)
    }

    pub fn product_id(&self) -> ProductId {
        self.item.product_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub user_id: UserId,
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.item.quantity).sum()
    }

    pub fn total(&self) -> Decimal {
        compute_total(&self.lines)
    }
}

/// Sum of `price * quantity` over all lines. Lines without a product add nothing.
pub fn compute_total(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

/// Formats an amount for display, e.g. `$24.98`. Halves round away from zero.
pub fn format_price(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", rounded.abs())
    } else {
        format!("${}", rounded.abs())
    }
}

/// Loads the user's cart rows and joins each with its product in a second query.
#[instrument(skip(carts, products))]
pub async fn load_cart(carts: &CartClient, products: &ProductClient, user_id: UserId) -> Result<Cart, StoreError> {
    let items = carts.items_for_user(user_id).await?;
    let ids: Vec<ProductId> = items.iter().map(|item| item.product_id).collect();
    let catalog = products.products_by_ids(&ids).await?;

    let lines: Vec<CartLine> = items
        .into_iter()
        .map(|item| {
            let product = catalog.iter().find(|p| p.id == item.product_id).cloned();
            if product.is_none() {
                warn!(cart_item = %item.id, product_id = %item.product_id, "Cart line without product");
            }
            CartLine { item, product }
        })
        .collect();

    debug!(lines = lines.len(), "Cart loaded");
    Ok(Cart { user_id, lines })
}

/// Sets a line's quantity. Values below 1 are ignored and leave the row as it is.
///
/// The caller reloads the cart afterwards to see the change.
#[instrument(skip(carts))]
pub async fn set_quantity(carts: &CartClient, item_id: CartItemId, new_quantity: i64) -> Result<(), StoreError> {
    if new_quantity < 1 {
        debug!("Quantity below 1 ignored");
        return Ok(());
    }
    let quantity = u32::try_from(new_quantity).map_err(|_| StoreError::validation("quantity too large"))?;
    match carts.set_quantity(item_id, quantity).await {
        Ok(_) => Ok(()),
        Err(CartError::NotFound(_)) => Err(StoreError::validation("cart item not found")),
        Err(e) => Err(e.into()),
    }
}

/// Deletes a line. Removing a line that is already gone succeeds.
#[instrument(skip(carts))]
pub async fn remove_item(carts: &CartClient, item_id: CartItemId) -> Result<(), StoreError> {
    carts.remove(item_id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{mock::MockClient, FrameworkError};
    use crate::model::CategoryId;

    fn product(id: u32, price: Decimal) -> Product {
        Product {
            id: ProductId(id),
            category_id: CategoryId(1),
            name: format!("Product {id}"),
            description: String::new(),
            price,
            stock: 10,
            image_url: None,
        }
    }

    fn line(item_id: u32, product_id: u32, quantity: u32, price: Option<Decimal>) -> CartLine {
        CartLine {
            item: CartItem {
                id: CartItemId(item_id),
                user_id: UserId(1),
                product_id: ProductId(product_id),
                quantity,
            },
            product: price.map(|price| product(product_id, price)),
        }
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        assert_eq!(compute_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let lines = vec![
            line(1, 1, 2, Some(Decimal::new(999, 2))),
            line(2, 2, 1, Some(Decimal::new(500, 2))),
        ];
        assert_eq!(compute_total(&lines), Decimal::new(2498, 2));
    }

    #[test]
    fn missing_product_contributes_zero() {
        let lines = vec![line(1, 1, 3, None), line(2, 2, 2, Some(Decimal::new(150, 2)))];
        assert_eq!(compute_total(&lines), Decimal::new(300, 2));
        assert_eq!(lines[0].unit_price(), Decimal::ZERO);
    }

    #[test]
    fn rounding_happens_only_on_display() {
        // Three thirds of a cent each would round to 0.00 per line if rounded early.
        let third = Decimal::new(1, 2) / Decimal::from(3);
        let lines = vec![
            line(1, 1, 1, Some(third)),
            line(2, 2, 1, Some(third)),
            line(3, 3, 1, Some(third)),
        ];
        assert_eq!(format_price(compute_total(&lines)), "$0.01");
    }

    #[test]
    fn format_price_pads_and_rounds_half_away_from_zero() {
        assert_eq!(format_price(Decimal::new(2498, 2)), "$24.98");
        assert_eq!(format_price(Decimal::from(5)), "$5.00");
        assert_eq!(format_price(Decimal::new(1005, 3)), "$1.01");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
        assert_eq!(format_price(Decimal::new(-250, 2)), "-$2.50");
    }

    #[test]
    fn item_count_sums_quantities() {
        let cart = Cart {
            user_id: UserId(1),
            lines: vec![line(1, 1, 2, None), line(2, 2, 3, None)],
        };
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.len(), 2);
    }

    #[tokio::test]
    async fn test_set_quantity_below_one_sends_nothing() {
        let mock = MockClient::<CartItem>::new();
        let carts = CartClient::new(mock.client());

        for q in [0, -1, -50] {
            set_quantity(&carts, CartItemId(1), q).await.unwrap();
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_set_quantity_on_missing_row_is_validation_error() {
        let mut mock = MockClient::<CartItem>::new();
        mock.expect_update().return_err(FrameworkError::NotFound("cart_item_9".into()));
        let carts = CartClient::new(mock.client());

        let result = set_quantity(&carts, CartItemId(9), 2).await;
        assert_eq!(result, Err(StoreError::validation("cart item not found")));
        mock.verify();
    }

    #[tokio::test]
    async fn test_load_cart_joins_products() {
        let mut cart_mock = MockClient::<CartItem>::new();
        let mut product_mock = MockClient::<Product>::new();
        cart_mock.expect_list().return_ok(vec![line(1, 4, 2, None).item, line(2, 9, 1, None).item]);
        product_mock.expect_list().return_ok(vec![product(4, Decimal::new(999, 2))]);

        let carts = CartClient::new(cart_mock.client());
        let products = ProductClient::new(product_mock.client());
        let cart = load_cart(&carts, &products, UserId(1)).await.unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines[0].product.as_ref().map(|p| p.id), Some(ProductId(4)));
        assert!(cart.lines[1].product.is_none());
        assert_eq!(cart.total(), Decimal::new(1998, 2));
        cart_mock.verify();
        product_mock.verify();
    }
}
