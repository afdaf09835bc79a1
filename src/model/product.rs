//! Represents a product in the catalog.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
//! - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{entity_id, CategoryId};

entity_id!(
    /// Type-safe identifier for Products.
    ProductId,
    "product"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    pub image_url: Option<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// DTO for Product creation.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    pub image_url: Option<String>,
}

impl ProductCreate {
    /// Creates a payload with an empty description and no image.
    ///
    /// # Arguments
    /// * `category_id` - Category the product is listed under
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `stock` - Available stock quantity
    pub fn new(category_id: CategoryId, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            category_id,
            name: name.into(),
            description: String::new(),
            price,
            stock,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// DTO for Product updates. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
}

#[derive(Debug, Clone)]
pub enum ProductFilter {
    All,
    Category(CategoryId),
    AnyOf(Vec<ProductId>),
}
