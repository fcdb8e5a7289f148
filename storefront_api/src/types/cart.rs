//! Cart types returned by the API.

use serde::{Deserialize, Serialize};

/// Unique identifier for a cart.
pub type CartID = i64;

/// A customer's open cart, as inspected from the admin console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Unique cart identifier.
    #[serde(rename = "_cartId")]
    pub cart_id: CartID,

    /// Email of the owning customer.
    pub email: String,

    /// Line items currently in the cart.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Sum of `price * quantity` over all line items.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum()
    }
}

/// A single line item in a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Identifier of the product.
    pub product_id: i64,

    /// Product title as listed in the catalog.
    pub title: String,

    /// Units of the product in the cart.
    pub quantity: i64,

    /// Unit price at the time the item was added.
    pub price: f64,
}
