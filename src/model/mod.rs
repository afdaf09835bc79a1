//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.
//!
//! One submodule per collection. Each holds the row type plus the payloads the
//! collection's actor accepts (`*Create`, `*Update`, `*Filter`).

pub mod cart_item;
pub mod category;
pub mod order;
pub mod order_item;
pub mod product;
pub mod user;

pub use cart_item::*;
pub use category::*;
pub use order::*;
pub use order_item::*;
pub use product::*;
pub use user::*;

/// Declares a type-safe `u32` identifier displayed with a collection prefix.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub(crate) use entity_id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_with_collection_prefix() {
        assert_eq!(ProductId(7).to_string(), "product_7");
        assert_eq!(CartItemId(1).to_string(), "cart_item_1");
        assert_eq!(OrderId::from(3).to_string(), "order_3");
    }
}
