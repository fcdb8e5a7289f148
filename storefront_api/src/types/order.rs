//! Order-related types returned by the API.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an order.
pub type OrderID = i64;

/// Order record returned by the `/orders` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    #[serde(rename = "_orderId")]
    pub order_id: OrderID,

    /// Email of the customer who placed the order.
    pub email: String,

    /// Current fulfillment status.
    pub status: OrderStatus,

    /// Grand total in the store currency.
    pub total: f64,

    /// Number of line items.
    pub item_count: i64,

    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

/// Order fulfillment status.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Placed but not yet picked up by fulfillment.
    #[serde(rename = "pending")]
    Pending,

    /// Being prepared for shipment.
    #[serde(rename = "processing")]
    Processing,

    /// Handed to the carrier.
    #[serde(rename = "shipped")]
    Shipped,

    /// Received by the customer.
    #[serde(rename = "delivered")]
    Delivered,

    /// Cancelled before delivery.
    #[serde(rename = "cancelled")]
    Cancelled,
}
impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OrderStatus::Pending => "pending",
                OrderStatus::Processing => "processing",
                OrderStatus::Shipped => "shipped",
                OrderStatus::Delivered => "delivered",
                OrderStatus::Cancelled => "cancelled",
            }
        )
    }
}
impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}
