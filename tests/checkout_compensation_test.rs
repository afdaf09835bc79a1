use rust_decimal::Decimal;
use storefront::cart::{Cart, CartLine};
use storefront::checkout::OrderPlacement;
use storefront::clients::{CartClient, OrderItemClient};
use storefront::framework::mock::MockClient;
use storefront::framework::FrameworkError;
use storefront::model::{CartItem, CategoryId, OrderItem, Product, ProductId, UserId};
use storefront::{cart_actor, order_actor, order_item_actor, StoreError};

fn widget() -> Product {
    Product {
        id: ProductId(1),
        category_id: CategoryId(1),
        name: "Widget".into(),
        description: String::new(),
        price: Decimal::new(999, 2),
        stock: 25,
        image_url: None,
    }
}

/// Order items fail to insert: the order is deleted and the cart keeps its rows.
#[tokio::test]
async fn test_failed_items_insert_keeps_cart() {
    let (order_actor, orders) = order_actor::new(8);
    let (cart_actor, carts) = cart_actor::new(8);
    tokio::spawn(order_actor.run());
    tokio::spawn(cart_actor.run());

    let user_id = UserId(1);
    let item = carts.add_one(user_id, ProductId(1)).await.unwrap();
    let cart = Cart { user_id, lines: vec![CartLine { item, product: Some(widget()) }] };

    let mut items = MockClient::<OrderItem>::new();
    items.expect_create_many().return_err(FrameworkError::ActorClosed);

    let placement = OrderPlacement::new(orders.clone(), OrderItemClient::new(items.client()), carts.clone());
    let result = placement.place(&cart, "123 Main St").await;

    assert!(matches!(result, Err(StoreError::OrderPlacementError(_))));
    assert_eq!(
        result.unwrap_err().user_message(),
        "Failed to place order. Please try again."
    );
    assert!(orders.orders_for_user(user_id).await.unwrap().is_empty());
    assert_eq!(carts.items_for_user(user_id).await.unwrap().len(), 1);
    items.verify();
}

/// The cart cannot be cleared: items and order are both deleted again.
#[tokio::test]
async fn test_failed_cart_clear_removes_order_and_items() {
    let (order_actor, orders) = order_actor::new(8);
    let (item_actor, order_items) = order_item_actor::new(8);
    tokio::spawn(order_actor.run());
    tokio::spawn(item_actor.run());

    let user_id = UserId(7);
    let line = CartLine {
        item: CartItem {
            id: storefront::model::CartItemId(3),
            user_id,
            product_id: ProductId(1),
            quantity: 2,
        },
        product: Some(widget()),
    };
    let cart = Cart { user_id, lines: vec![line] };

    let mut carts = MockClient::<CartItem>::new();
    carts.expect_delete_where().return_err(FrameworkError::ActorClosed);

    let placement = OrderPlacement::new(orders.clone(), order_items.clone(), CartClient::new(carts.client()));
    let result = placement.place(&cart, "9 Elm St").await;

    match result {
        Err(StoreError::OrderPlacementError(message)) => assert!(message.starts_with("clear cart")),
        other => panic!("Expected an order placement error, got {other:?}"),
    }

    assert!(orders.orders_for_user(user_id).await.unwrap().is_empty());
    // The order id was 1; its items must be gone too.
    let order_id = storefront::model::OrderId(1);
    assert!(order_items.items_for_order(order_id).await.unwrap().is_empty());
    carts.verify();
}
