//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the storefront.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate,
//! providing hierarchical spans that show the complete request flow through the system.
//!
//! ## Configuration
//!
//! The framework uses a compact format that hides the crate/module prefix (`with_target(false)`).
//! This keeps log lines short while still providing rich structured data.
//!
//! - **Structured logging** with `tracing` crate
//! - **Hierarchical spans** for request tracing
//! - **Configurable log levels** via `RUST_LOG` environment variable
//! - **Compact format** optimized for development
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final state
//! - **Entity Operations**: Create, Get, List, Update, Upsert, Delete
//! - **Request Flow**: Hierarchical spans showing the complete request path
//! - **Errors**: Every failed user action, logged where it was triggered
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Very verbose tracing
//! RUST_LOG=trace cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=storefront::framework=debug cargo run
//! ```
//!
//! ## Debug Flag for Full Payload
//!
//! With `RUST_LOG=debug`, every actor logs the full request payload once, when the
//! request arrives:
//!
//! ```rust,ignore
//! debug!(entity_type, ?params, "Create");
//! ```
//!
//! The `?` syntax is a `tracing` macro feature that records the variable using its
//! `Debug` representation as a structured field.
//!
//! ## Checkout Trace Example
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Upserted entity_type="CartItem" id=cart_item_1
//! INFO add_to_cart: Added to cart user_id=user_1 product_id=product_1 quantity=1
//! INFO place_order:place: Created entity_type="Order" id=order_1 size=1
//! INFO place_order:place:create_order: Order created order_id=order_1 total=24.98
//! INFO place_order:place: Created batch entity_type="OrderItem" count=2 size=2
//! INFO place_order:place: Deleted matching entity_type="CartItem" removed=2 size=0
//! INFO place_order:place: Order placed order_id=order_1 total=24.98 items=2
//! ```
//!
//! A failed step shows up as an `ERROR` line followed by `WARN Rolled back ...`
//! lines for every write that was undone.
//!
//! ## Output Formats
//!
//! The compact format shows span hierarchy inline:
//! - `INFO add_to_cart: Added to cart` - top-level span
//! - `INFO place_order:place: Order placed` - nested spans
//!
//! Use `debug` level to see full object details at function entry points.

/// Installs the global fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "place_order:place")
        .try_init();
}
