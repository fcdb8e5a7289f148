use storefront_api::types::{OrderStatus, UserRole};
use storefront_api::{
    CartQuery, OrderQuery, OrderSortBy, Query, SortDirection, UserQuery, UserSortBy, WishlistQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn order_query_defaults() {
    let url = OrderQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=1"));
    assert!(query.contains("sortBy=-createdAt"));
    assert!(!query.contains("limit="));
    assert!(!query.contains("searchTerm="));
}

#[test]
fn order_query_with_page_and_limit() {
    let url = OrderQuery::default()
        .with_page(3)
        .with_limit(50)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=3"));
    assert!(query.contains("limit=50"));
}

#[test]
fn order_query_with_search() {
    let url = OrderQuery::default()
        .with_search("alice@example.com")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("searchTerm=alice%40example.com"));
}

#[test]
fn order_query_search_is_percent_encoded() {
    let url = OrderQuery::default()
        .with_search("walnut lamp")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("searchTerm=walnut+lamp") || query.contains("searchTerm=walnut%20lamp"));
}

#[test]
fn order_query_with_statuses() {
    let url = OrderQuery::default()
        .with_status(OrderStatus::Pending)
        .with_status(OrderStatus::Processing)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("status=pending"));
    assert!(query.contains("status=processing"));
}

#[test]
fn order_query_sort_variants() {
    let url = OrderQuery::default()
        .with_sort_by(OrderSortBy::Total)
        .with_sort_direction(SortDirection::Asc)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("sortBy=total"));

    let url = OrderQuery::default()
        .with_sort_by(OrderSortBy::Total)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("sortBy=-total"));
}

#[test]
fn user_query_defaults() {
    let url = UserQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=1"));
    assert!(query.contains("sortBy=-createdAt"));
}

#[test]
fn user_query_with_roles_and_search() {
    let url = UserQuery::default()
        .with_role(UserRole::Admin)
        .with_role(UserRole::Customer)
        .with_search("harmon")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("role=admin"));
    assert!(query.contains("role=customer"));
    assert!(query.contains("searchTerm=harmon"));
}

#[test]
fn user_query_sort_variants() {
    let url = UserQuery::default()
        .with_sort_by(UserSortBy::Name)
        .with_sort_direction(SortDirection::Asc)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("sortBy=name"));
}

#[test]
fn cart_query_carries_only_common_params() {
    let url = CartQuery::default()
        .with_page(2)
        .with_limit(5)
        .with_search("bob")
        .add_to_url(&base_url());
    assert_eq!(
        url.to_string(),
        "https://example.com/?page=2&limit=5&searchTerm=bob"
    );
}

#[test]
fn wishlist_query_carries_only_common_params() {
    let url = WishlistQuery::default().with_page(7).add_to_url(&base_url());
    assert_eq!(url.to_string(), "https://example.com/?page=7");
}

#[test]
fn same_descriptor_builds_same_url() {
    let a = OrderQuery::default()
        .with_page(2)
        .with_limit(10)
        .with_search("lamp")
        .add_to_url(&base_url());
    let b = OrderQuery::default()
        .with_page(2)
        .with_limit(10)
        .with_search("lamp")
        .add_to_url(&base_url());
    assert_eq!(a.to_string(), b.to_string());
}
