//! [`ActorEntity`] implementation for [`Category`].

use crate::category_actor::CategoryError;
use crate::framework::{ActorEntity, Immutable};
use crate::model::{Category, CategoryCreate, CategoryFilter, CategoryId};

impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = Immutable;
    type Filter = CategoryFilter;
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CategoryError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CategoryError::ValidationError("name must not be empty".into()));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            description: params.description,
            image_url: params.image_url,
        })
    }

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn matches(&self, filter: &CategoryFilter) -> bool {
        match filter {
            CategoryFilter::All => true,
        }
    }

    fn on_update(&mut self, update: Immutable) -> Result<(), CategoryError> {
        match update {}
    }
}
