//! Wishlist types returned by the API.

use serde::{Deserialize, Serialize};

/// Unique identifier for a wishlist.
pub type WishlistID = i64;

/// A customer's wishlist, as inspected from the admin console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    /// Unique wishlist identifier.
    #[serde(rename = "_wishlistId")]
    pub wishlist_id: WishlistID,

    /// Email of the owning customer.
    pub email: String,

    /// Saved products.
    pub items: Vec<WishlistItem>,
}

/// A single saved product on a wishlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Identifier of the product.
    pub product_id: i64,

    /// Product title as listed in the catalog.
    pub title: String,

    /// Current listed price.
    pub price: f64,
}
