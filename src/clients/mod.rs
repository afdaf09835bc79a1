//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client turns the generic request/response surface into the queries a
//! screen needs (ordering, joins by id, idempotent deletes) and maps
//! [`FrameworkError`](crate::framework::FrameworkError) into the collection's own error.

pub mod actor_client;
pub mod cart_client;
pub mod category_client;
pub mod order_client;
pub mod order_item_client;
pub mod product_client;
pub mod user_client;

pub use actor_client::*;
pub use cart_client::*;
pub use category_client::*;
pub use order_client::*;
pub use order_item_client::*;
pub use product_client::*;
pub use user_client::*;
