#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Storefront
//!
//! > **The core of a shopping app: catalog, cart, checkout and order history.**
//!
//! Every collection the app reads and writes (categories, products, cart items,
//! orders, order items, users) is owned by one resource actor running on Tokio.
//! Screens talk to those actors only through typed clients, the way a mobile
//! client talks to a hosted database.
//!
//! ## 🏗️ Design
//!
//! ### Collections as actors
//! A [`ResourceActor`](framework::ResourceActor) owns one collection and handles one
//! request at a time. That makes every single-collection operation atomic:
//! - **add to cart** is one insert-or-increment request, so two quick taps never
//!   leave two rows for the same product;
//! - **batch inserts** of order items store every line or none;
//! - **cart clear** deletes all of a user's rows in one request.
//!
//! ### Checkout with compensation
//! Placing an order writes to three collections. [`checkout::OrderPlacement`] runs
//! the writes in sequence and undoes the earlier ones when a later one fails.
//!
//! ### Explicit session
//! There is no global "current user". A [`Session`](identity::Session) is passed to
//! every operation that needs one and publishes sign-in/sign-out to subscribers.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` / `ResourceClient<T>` pair and the mocks used in tests.
//!
//! ### 2. The Rows ([`model`]) and their actors
//! [`category_actor`], [`product_actor`], [`cart_actor`], [`order_actor`],
//! [`order_item_actor`], [`user_actor`]: validation rules and error types per collection.
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers that add ordering, joins by id and idempotent deletes.
//!
//! ### 4. The Flows ([`cart`], [`checkout`], [`identity`])
//! The priced cart view, order placement and sign-in.
//!
//! ### 5. The Facade ([`storefront`])
//! One async method per user action, each returning a [`StoreError`] on failure.
//!
//! ### 6. The Orchestrator ([`lifecycle`]) and [`config`]
//! Spawning and shutting down the actors, tracing setup, environment settings.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront::model::{CategoryCreate, ProductCreate};
//! use storefront::{Session, StoreConfig, Storefront};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Storefront::local(&StoreConfig::default());
//!     let system = store.system();
//!     let tools = system.category_client.create_category(CategoryCreate::new("Tools", "")).await?;
//!     let widget = system
//!         .product_client
//!         .create_product(ProductCreate::new(tools.id, "Widget", Decimal::new(999, 2), 10))
//!         .await?;
//!
//!     let session = Session::new();
//!     store.sign_up(&session, "alice@example.com", "secret1").await?;
//!     store.add_to_cart(&session, widget.id).await?;
//!
//!     let cart = store.cart(&session).await?;
//!     let placed = store.place_order(&session, &cart, "123 Main St").await?;
//!     assert_eq!(placed.items.len(), 1);
//!
//!     store.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart;
pub mod cart_actor;
pub mod category_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod error;
pub mod framework;
pub mod identity;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod order_item_actor;
pub mod product_actor;
pub mod storefront;
pub mod user_actor;

pub use config::StoreConfig;
pub use error::StoreError;
pub use identity::Session;
pub use storefront::Storefront;
