//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Product`] to be managed by the generic [`crate::framework::ResourceActor`].

use rust_decimal::Decimal;

use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use crate::product_actor::ProductError;

fn check_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ProductError::ValidationError(format!("price must not be negative: {price}")));
    }
    Ok(price)
}

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type Error = ProductError;

    /// Creates a new Product from creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(ProductError::ValidationError("name must not be empty".into()));
        }
        Ok(Self {
            id,
            category_id: params.category_id,
            name: name.to_string(),
            description: params.description,
            price: check_price(params.price)?,
            stock: params.stock,
            image_url: params.image_url,
        })
    }

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::All => true,
            ProductFilter::Category(category_id) => self.category_id == *category_id,
            ProductFilter::AnyOf(ids) => ids.contains(&self.id),
        }
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `price`: Unit price
    /// - `stock`: Available stock quantity
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        let price = update.price.map(check_price).transpose()?;
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryId;

    #[test]
    fn rejects_blank_name_and_negative_price() {
        let blank = ProductCreate::new(CategoryId(1), "  ", Decimal::ONE, 1);
        assert!(Product::from_create_params(ProductId(1), blank).is_err());

        let negative = ProductCreate::new(CategoryId(1), "Widget", Decimal::new(-1, 2), 1);
        assert!(matches!(
            Product::from_create_params(ProductId(1), negative),
            Err(ProductError::ValidationError(_))
        ));
    }

    #[test]
    fn rejected_price_update_keeps_stock() {
        let params = ProductCreate::new(CategoryId(1), "Widget", Decimal::new(999, 2), 4);
        let mut product = Product::from_create_params(ProductId(1), params).unwrap();

        let update = ProductUpdate { price: Some(Decimal::new(-5, 0)), stock: Some(0) };
        assert!(product.on_update(update).is_err());
        assert_eq!(product.stock, 4);
        assert_eq!(product.price, Decimal::new(999, 2));
    }
}
