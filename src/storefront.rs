//! # Storefront
//!
//! One async operation per user action of the shopping app. Screens call these,
//! render the result, and re-fetch after a mutation.
//!
//! Operations that need a caller take the [`Session`] explicitly and fail with
//! [`StoreError::AuthenticationRequired`] when nobody is signed in. Every failure
//! is logged here, at the action that triggered it, before it is returned.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::cart::{self, Cart};
use crate::checkout::{OrderPlacement, PlacedOrder};
use crate::clients::ActorClient;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::identity::{Identity, IdentityProvider, LocalIdentityProvider, Session};
use crate::lifecycle::StoreSystem;
use crate::model::{
    CartItem, CartItemId, Category, CategoryId, Order, OrderId, OrderItem, Product, ProductId,
};

/// Categories and the first products of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeFeed {
    pub categories: Vec<Category>,
    pub featured: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPage {
    pub category: Category,
    pub products: Vec<Product>,
}

/// A purchased line joined with its product for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub item: OrderItem,
    pub product: Option<Product>,
}

impl OrderLine {
    /// Uses the price captured at checkout, never the product's current price.
    pub fn line_total(&self) -> rust_decimal::Decimal {
        self.item.line_total()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    pub order: Order,
    pub lines: Vec<OrderLine>,
}

fn report<T>(action: &'static str, result: Result<T, StoreError>) -> Result<T, StoreError> {
    if let Err(e) = &result {
        match e {
            StoreError::ValidationError(_) | StoreError::AuthenticationRequired => {
                debug!(action, error = %e, "Action rejected")
            }
            StoreError::RemoteOperationError(_) | StoreError::OrderPlacementError(_) => {
                error!(action, error = %e, "Action failed")
            }
        }
    }
    result
}

pub struct Storefront {
    system: StoreSystem,
    placement: OrderPlacement,
    identity: Arc<dyn IdentityProvider>,
    featured_limit: usize,
}

impl Storefront {
    pub fn new(system: StoreSystem, identity: Arc<dyn IdentityProvider>, config: &StoreConfig) -> Self {
        let placement = OrderPlacement::new(
            system.order_client.clone(),
            system.order_item_client.clone(),
            system.cart_client.clone(),
        );
        Self {
            system,
            placement,
            identity,
            featured_limit: config.featured_product_limit,
        }
    }

    /// Spawns a [`StoreSystem`] and signs users in against its `users` collection.
    pub fn local(config: &StoreConfig) -> Self {
        let system = StoreSystem::new(config);
        let identity = LocalIdentityProvider::new(system.user_client.clone(), config.min_password_len);
        Self::new(system, Arc::new(identity), config)
    }

    /// Direct access to the collections, e.g. for seeding the catalog.
    pub fn system(&self) -> &StoreSystem {
        &self.system
    }

    /// Stops every actor. Other clones of the identity provider must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        let Self { system, placement, identity, .. } = self;
        drop(placement);
        drop(identity);
        system.shutdown().await
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    #[instrument(skip(self, session, password))]
    pub async fn sign_up(&self, session: &Session, email: &str, password: &str) -> Result<Identity, StoreError> {
        let result = self.identity.sign_up(session, email, password).await;
        report("sign_up", result.map_err(StoreError::from))
    }

    #[instrument(skip(self, session, password))]
    pub async fn sign_in(&self, session: &Session, email: &str, password: &str) -> Result<Identity, StoreError> {
        let result = self.identity.sign_in(session, email, password).await;
        report("sign_in", result.map_err(StoreError::from))
    }

    #[instrument(skip_all)]
    pub async fn sign_out(&self, session: &Session) -> Result<(), StoreError> {
        let result = self.identity.sign_out(session).await;
        report("sign_out", result.map_err(StoreError::from))
    }

    pub fn current_user(&self, session: &Session) -> Option<Identity> {
        self.identity.current_user(session)
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn home(&self) -> Result<HomeFeed, StoreError> {
        let result = tokio::try_join!(
            async { self.system.category_client.list_categories().await.map_err(StoreError::from) },
            async {
                self.system
                    .product_client
                    .list_products(Some(self.featured_limit))
                    .await
                    .map_err(StoreError::from)
            },
        )
        .map(|(categories, featured)| HomeFeed { categories, featured });
        report("home", result)
    }

    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let result = self.system.category_client.list_categories().await;
        report("categories", result.map_err(StoreError::from))
    }

    /// The category and its products, or `None` if the category does not exist.
    #[instrument(skip(self))]
    pub async fn category(&self, id: CategoryId) -> Result<Option<CategoryPage>, StoreError> {
        report("category", self.load_category_page(id).await)
    }

    async fn load_category_page(&self, id: CategoryId) -> Result<Option<CategoryPage>, StoreError> {
        let Some(category) = self.system.category_client.get(id).await? else {
            return Ok(None);
        };
        let products = self.system.product_client.products_in_category(id).await?;
        Ok(Some(CategoryPage { category, products }))
    }

    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let result = self.system.product_client.get(id).await;
        report("product", result.map_err(StoreError::from))
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Adds one unit of the product to the caller's cart.
    #[instrument(skip(self, session))]
    pub async fn add_to_cart(&self, session: &Session, product_id: ProductId) -> Result<CartItem, StoreError> {
        report("add_to_cart", self.add_one_to_cart(session, product_id).await)
    }

    async fn add_one_to_cart(&self, session: &Session, product_id: ProductId) -> Result<CartItem, StoreError> {
        let identity = session.require_user()?;
        let product = self
            .system
            .product_client
            .get(product_id)
            .await?
            .ok_or_else(|| StoreError::validation("product not found"))?;
        if !product.in_stock() {
            return Err(StoreError::validation("out of stock"));
        }
        let item = self.system.cart_client.add_one(identity.id, product_id).await?;
        info!(user_id = %identity.id, %product_id, quantity = item.quantity, "Added to cart");
        Ok(item)
    }

    #[instrument(skip(self, session))]
    pub async fn cart(&self, session: &Session) -> Result<Cart, StoreError> {
        report("cart", self.load_cart(session).await)
    }

    async fn load_cart(&self, session: &Session) -> Result<Cart, StoreError> {
        let identity = session.require_user()?;
        cart::load_cart(&self.system.cart_client, &self.system.product_client, identity.id).await
    }

    /// Sets a line's quantity. Values below 1 leave the line unchanged.
    #[instrument(skip(self, session))]
    pub async fn set_quantity(&self, session: &Session, item_id: CartItemId, new_quantity: i64) -> Result<(), StoreError> {
        report("set_quantity", self.update_quantity(session, item_id, new_quantity).await)
    }

    async fn update_quantity(&self, session: &Session, item_id: CartItemId, new_quantity: i64) -> Result<(), StoreError> {
        let identity = session.require_user()?;
        if new_quantity >= 1 && self.owned_cart_item(&identity, item_id).await?.is_none() {
            return Err(StoreError::validation("cart item not found"));
        }
        cart::set_quantity(&self.system.cart_client, item_id, new_quantity).await
    }

    /// Removes a line. A line that is already gone counts as removed.
    #[instrument(skip(self, session))]
    pub async fn remove_item(&self, session: &Session, item_id: CartItemId) -> Result<(), StoreError> {
        report("remove_item", self.delete_cart_line(session, item_id).await)
    }

    async fn delete_cart_line(&self, session: &Session, item_id: CartItemId) -> Result<(), StoreError> {
        let identity = session.require_user()?;
        if self.owned_cart_item(&identity, item_id).await?.is_none() {
            return Ok(());
        }
        cart::remove_item(&self.system.cart_client, item_id).await
    }

    async fn owned_cart_item(&self, identity: &Identity, item_id: CartItemId) -> Result<Option<CartItem>, StoreError> {
        let item = self.system.cart_client.get(item_id).await?;
        Ok(item.filter(|item| item.user_id == identity.id))
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Places an order for `cart`, which must have been loaded for the caller.
    #[instrument(skip(self, session, cart, shipping_address))]
    pub async fn place_order(&self, session: &Session, cart: &Cart, shipping_address: &str) -> Result<PlacedOrder, StoreError> {
        report("place_order", self.checkout(session, cart, shipping_address).await)
    }

    async fn checkout(&self, session: &Session, cart: &Cart, shipping_address: &str) -> Result<PlacedOrder, StoreError> {
        let identity = session.require_user()?;
        if cart.user_id != identity.id {
            return Err(StoreError::validation("cart belongs to another user"));
        }
        self.placement.place(cart, shipping_address).await
    }

    /// The caller's orders, newest first.
    #[instrument(skip(self, session))]
    pub async fn order_history(&self, session: &Session) -> Result<Vec<Order>, StoreError> {
        report("order_history", self.load_order_history(session).await)
    }

    async fn load_order_history(&self, session: &Session) -> Result<Vec<Order>, StoreError> {
        let identity = session.require_user()?;
        Ok(self.system.order_client.orders_for_user(identity.id).await?)
    }

    /// One of the caller's orders with its lines. Orders of other users are reported as absent.
    #[instrument(skip(self, session))]
    pub async fn order_detail(&self, session: &Session, order_id: OrderId) -> Result<Option<OrderDetail>, StoreError> {
        report("order_detail", self.load_order_detail(session, order_id).await)
    }

    async fn load_order_detail(&self, session: &Session, order_id: OrderId) -> Result<Option<OrderDetail>, StoreError> {
        let identity = session.require_user()?;
        let order = self.system.order_client.get(order_id).await?;
        let Some(order) = order.filter(|order| order.user_id == identity.id) else {
            return Ok(None);
        };

        let items = self.system.order_item_client.items_for_order(order.id).await?;
        let ids: Vec<ProductId> = items.iter().map(|item| item.product_id).collect();
        let products = self.system.product_client.products_by_ids(&ids).await?;
        let lines = items
            .into_iter()
            .map(|item| {
                let product = products.iter().find(|p| p.id == item.product_id).cloned();
                OrderLine { item, product }
            })
            .collect();
        Ok(Some(OrderDetail { order, lines }))
    }
}
