use serde::{Deserialize, Serialize};

use crate::model::entity_id;

entity_id!(
    /// Type-safe identifier for Categories.
    CategoryId,
    "category"
);

/// A browsable product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl CategoryCreate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_url: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CategoryFilter {
    All,
}
