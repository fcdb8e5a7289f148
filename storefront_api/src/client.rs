//! HTTP client for the storefront admin API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{CartQuery, OrderQuery, Query, UserQuery, WishlistQuery},
    types::{Cart, Order, OrderStatus, PaginatedResponse, Response, User, UserRole, Wishlist},
    Error,
};

/// HTTP client for the storefront admin API.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
/// An optional bearer token is attached to every request; the server answers
/// 401/403 when it is missing or lacks the admin role.
pub struct Client {
    base_api_url: String,
    token: Option<String>,
}

impl Client {
    /// Creates a new client for the given base URL, without credentials.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Creates a new client that authenticates with the given bearer token.
    pub fn with_token(base_url: &str, token: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            token: Some(token.to_string()),
        }
    }

    fn http(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .user_agent(concat!("storefront-admin/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })
    }

    fn get_url<Q: Query>(&self, path: &str, query: Option<&Q>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn request(&self, method: reqwest::Method, url: Url) -> Result<reqwest::RequestBuilder, Error> {
        let mut req = self
            .http()?
            .request(method, url)
            .header("accept", "application/json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        Ok(req)
    }

    async fn send<T>(&self, req: reqwest::RequestBuilder) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to reach API: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            return Err(error_for_status(status.as_u16(), &body));
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        self.send(self.request(reqwest::Method::GET, url)?).await
    }

    async fn patch<T>(&self, path: &str, body: serde_json::Value) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url::<OrderQuery>(path, None)?;
        self.send(self.request(reqwest::Method::PATCH, url)?.json(&body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.get_url::<OrderQuery>(path, None)?;
        let resp = self
            .request(reqwest::Method::DELETE, url)?
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach API: {}", e);
                Error::RequestFailed
            })?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), &body));
        }
        Ok(())
    }

    /// Fetches a paginated list of orders matching the given query.
    pub async fn get_orders(&self, query: &OrderQuery) -> Result<PaginatedResponse<Order>, Error> {
        self.get::<PaginatedResponse<Order>, OrderQuery>("/orders", Some(query))
            .await
    }

    /// Fetches a single order by its numeric ID.
    pub async fn get_order(&self, order_id: i64) -> Result<Response<Order>, Error> {
        self.get::<Response<Order>, OrderQuery>(format!("/orders/{}", order_id).as_str(), None)
            .await
    }

    /// Fetches a paginated list of users matching the given query.
    pub async fn get_users(&self, query: &UserQuery) -> Result<PaginatedResponse<User>, Error> {
        self.get::<PaginatedResponse<User>, UserQuery>("/users", Some(query))
            .await
    }

    /// Fetches a single user by its numeric ID.
    pub async fn get_user(&self, user_id: i64) -> Result<Response<User>, Error> {
        self.get::<Response<User>, UserQuery>(format!("/users/{}", user_id).as_str(), None)
            .await
    }

    /// Fetches a paginated list of carts matching the given query.
    pub async fn get_carts(&self, query: &CartQuery) -> Result<PaginatedResponse<Cart>, Error> {
        self.get::<PaginatedResponse<Cart>, CartQuery>("/carts", Some(query))
            .await
    }

    /// Fetches a paginated list of wishlists matching the given query.
    pub async fn get_wishlists(
        &self,
        query: &WishlistQuery,
    ) -> Result<PaginatedResponse<Wishlist>, Error> {
        self.get::<PaginatedResponse<Wishlist>, WishlistQuery>("/wishlists", Some(query))
            .await
    }

    /// Moves an order to a new status. The server may reject invalid
    /// transitions with a [`Error::Validation`].
    pub async fn set_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<Response<Order>, Error> {
        self.patch(
            format!("/orders/{}", order_id).as_str(),
            serde_json::json!({ "status": status }),
        )
        .await
    }

    /// Changes a user's role.
    pub async fn set_user_role(
        &self,
        user_id: i64,
        role: UserRole,
    ) -> Result<Response<User>, Error> {
        self.patch(
            format!("/users/{}", user_id).as_str(),
            serde_json::json!({ "role": role }),
        )
        .await
    }

    /// Deletes an order.
    pub async fn delete_order(&self, order_id: i64) -> Result<(), Error> {
        self.delete(format!("/orders/{}", order_id).as_str()).await
    }

    /// Deletes a user.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), Error> {
        self.delete(format!("/users/{}", user_id).as_str()).await
    }
}

/// Maps a non-2xx response to the error taxonomy: 400/422 carry a
/// server-side rejection message, everything else is a plain HTTP failure.
fn error_for_status(status: u16, body: &str) -> Error {
    if status == 400 || status == 422 {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| truncate_body(body));
        tracing::warn!("Mutation rejected by server: {}", message);
        return Error::Validation { message };
    }
    let snippet = truncate_body(body);
    tracing::error!("Request failed with status {}: {}", status, snippet);
    Error::HttpStatus {
        status,
        body: snippet,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
