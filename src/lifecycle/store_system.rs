use tracing::{error, info};

use crate::clients::{CartClient, CategoryClient, OrderClient, OrderItemClient, ProductClient, UserClient};
use crate::config::StoreConfig;

/// The runtime orchestrator: one resource actor per collection.
///
/// `StoreSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Client Distribution**: Handing out the typed clients the rest of the crate uses
///
/// # Architecture
///
/// | Actor | Collection |
/// |---|---|
/// | Category | `categories` |
/// | Product | `products` |
/// | Cart | `cart_items` |
/// | Order | `orders` |
/// | OrderItem | `order_items` |
/// | User | `users` |
///
/// Actors do not call each other. Work that spans collections (cart joins, order
/// placement) runs in the caller and talks to each actor through its client.
///
/// # Example
///
/// ```ignore
/// let system = StoreSystem::new(&StoreConfig::default());
///
/// let books = system.category_client.create_category(CategoryCreate::new("Books", "")).await?;
/// let product = system.product_client.create_product(params).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    pub category_client: CategoryClient,
    pub product_client: ProductClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub order_item_client: OrderItemClient,
    pub user_client: UserClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns every actor on the current Tokio runtime.
    ///
    /// Each mailbox holds `config.channel_capacity` pending requests.
    pub fn new(config: &StoreConfig) -> Self {
        let capacity = config.channel_capacity;

        let (category_actor, category_client) = crate::category_actor::new(capacity);
        let (product_actor, product_client) = crate::product_actor::new(capacity);
        let (cart_actor, cart_client) = crate::cart_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);
        let (order_item_actor, order_item_client) = crate::order_item_actor::new(capacity);
        let (user_actor, user_client) = crate::user_actor::new(capacity);

        let handles = vec![
            tokio::spawn(category_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(cart_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(order_item_actor.run()),
            tokio::spawn(user_actor.run()),
        ];
        info!(actors = handles.len(), capacity, "Store system started");

        Self {
            category_client,
            product_client,
            cart_client,
            order_client,
            order_item_client,
            user_client,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes every channel; each actor then drains its
    /// mailbox and exits. Clones of the clients held elsewhere keep their actor
    /// alive, so drop them before calling this.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        let Self {
            category_client,
            product_client,
            cart_client,
            order_client,
            order_item_client,
            user_client,
            handles,
        } = self;
        drop(category_client);
        drop(product_client);
        drop(cart_client);
        drop(order_client);
        drop(order_item_client);
        drop(user_client);

        for handle in handles {
            // If the task panicked, this will return an Err
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
