//! User-related types returned by the API.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user account.
pub type UserID = i64;

/// User record returned by the `/users` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    #[serde(rename = "_userId")]
    pub user_id: UserID,

    /// Display name.
    pub name: String,

    /// Account email, unique per user.
    pub email: String,

    /// Access role.
    pub role: UserRole,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Access role of a user account.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    /// Regular shopper.
    #[serde(rename = "customer")]
    Customer,

    /// Can reach the admin console.
    #[serde(rename = "admin")]
    Admin,
}
impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                UserRole::Customer => "customer",
                UserRole::Admin => "admin",
            }
        )
    }
}
impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(UserRole::Customer),
            "admin" => Ok(UserRole::Admin),
            _ => Err(()),
        }
    }
}
