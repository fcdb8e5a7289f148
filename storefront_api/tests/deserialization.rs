use storefront_api::types::{
    Cart, Order, OrderStatus, PaginatedResponse, User, UserRole, Wishlist,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_orders_full() {
    let json = load_fixture("orders.json");
    let resp: PaginatedResponse<Order> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.meta.total_pages, 8);

    let order = &resp.data[0];
    assert_eq!(order.order_id, 9001);
    assert_eq!(order.email, "alice@example.com");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, 149.97);
    assert_eq!(order.item_count, 3);
    assert_eq!(order.created_at.to_rfc3339(), "2024-03-01T12:30:00+00:00");
}

#[test]
fn deserialize_orders_empty_page() {
    let json = load_fixture("orders_empty.json");
    let resp: PaginatedResponse<Order> = serde_json::from_str(&json).unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.meta.total_pages, 1);
}

#[test]
fn deserialize_users() {
    let json = load_fixture("users.json");
    let resp: PaginatedResponse<User> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].role, UserRole::Admin);
    assert_eq!(resp.data[1].role, UserRole::Customer);
    assert_eq!(resp.meta.total_pages, 3);
}

#[test]
fn deserialize_carts_and_compute_total() {
    let json = load_fixture("carts.json");
    let resp: PaginatedResponse<Cart> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 1);

    let cart = &resp.data[0];
    assert_eq!(cart.cart_id, 701);
    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.items[0].quantity, 2);
    assert!((cart.total() - 103.0).abs() < 1e-9);
}

#[test]
fn deserialize_wishlists() {
    let json = load_fixture("wishlists.json");
    let resp: PaginatedResponse<Wishlist> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 1);
    assert_eq!(resp.data[0].items[0].title, "Mechanical Keyboard");
}

#[test]
fn order_status_rejects_unknown_value() {
    let json = r#"{"_orderId":1,"email":"x@example.com","status":"teleported","total":1.0,"itemCount":1,"createdAt":"2024-01-01T00:00:00Z"}"#;
    assert!(serde_json::from_str::<Order>(json).is_err());
}

#[test]
fn order_status_round_trips_as_wire_name() {
    let val = serde_json::to_value(OrderStatus::Shipped).unwrap();
    assert_eq!(val, serde_json::json!("shipped"));
}
