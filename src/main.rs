//! # Storefront Demo
//!
//! Walks one shopper through the app against an in-process store:
//! 1. Seeding a small catalog.
//! 2. Signing up and browsing.
//! 3. Filling the cart and placing an order.
//! 4. Reading the order back from history.

use rust_decimal::Decimal;
use storefront::cart::format_price;
use storefront::lifecycle::setup_tracing;
use storefront::model::{CategoryCreate, ProductCreate};
use storefront::{Session, StoreConfig, Storefront};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StoreConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting storefront demo");

    let store = Storefront::local(&config);

    let span = tracing::info_span!("seed_catalog");
    let (widget, gadget) = async {
        let system = store.system();
        let tools = system
            .category_client
            .create_category(CategoryCreate::new("Tools", "Things that do things"))
            .await
            .map_err(|e| e.to_string())?;
        let widget = system
            .product_client
            .create_product(
                ProductCreate::new(tools.id, "Widget", Decimal::new(999, 2), 25)
                    .with_description("A dependable widget"),
            )
            .await
            .map_err(|e| e.to_string())?;
        let gadget = system
            .product_client
            .create_product(ProductCreate::new(tools.id, "Gadget", Decimal::new(500, 2), 10))
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((widget, gadget))
    }
    .instrument(span)
    .await?;

    let session = Session::new();
    let identity = store
        .sign_up(&session, "alice@example.com", "secret1")
        .await
        .map_err(|e| e.user_message())?;
    info!(user_id = %identity.id, "Signed up");

    let home = store.home().await.map_err(|e| e.user_message())?;
    info!(categories = home.categories.len(), featured = home.featured.len(), "Home feed loaded");

    for product_id in [widget.id, widget.id, gadget.id] {
        store
            .add_to_cart(&session, product_id)
            .await
            .map_err(|e| e.user_message())?;
    }

    let cart = store.cart(&session).await.map_err(|e| e.user_message())?;
    info!(lines = cart.len(), items = cart.item_count(), total = %format_price(cart.total()), "Cart ready");

    // An empty address is refused before anything is written.
    if let Err(e) = store.place_order(&session, &cart, "   ").await {
        info!(message = %e.user_message(), "Checkout refused");
    }

    let span = tracing::info_span!("checkout");
    let placed = store
        .place_order(&session, &cart, "123 Main St")
        .instrument(span)
        .await;

    match placed {
        Ok(placed) => {
            info!(
                order_id = %placed.order.id,
                total = %format_price(placed.order.total_amount),
                status = %placed.order.status,
                "Order placed"
            );
            if let Some(detail) = store
                .order_detail(&session, placed.order.id)
                .await
                .map_err(|e| e.user_message())?
            {
                for line in &detail.lines {
                    let name = line.product.as_ref().map_or("(removed)", |p| p.name.as_str());
                    info!(product = name, quantity = line.item.quantity, total = %format_price(line.line_total()), "Order line");
                }
            }
        }
        Err(e) => error!(error = %e, "Checkout failed: {}", e.user_message()),
    }

    let history = store.order_history(&session).await.map_err(|e| e.user_message())?;
    info!(orders = history.len(), "Order history loaded");

    store.sign_out(&session).await.map_err(|e| e.user_message())?;

    // Shutdown system gracefully
    store.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
