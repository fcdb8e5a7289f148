//! Caching and request-deduplicating wrapper around the API client.

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use storefront_api::types::{Cart, Order, OrderStatus, PaginatedResponse, Response, User, UserRole, Wishlist};
use storefront_api::{CartQuery, Client, OrderQuery, UserQuery, WishlistQuery};
use tokio::sync::Mutex;

use crate::cache::MemoryCache;
use crate::error::StorefrontError;

/// API client wrapper that adds an in-memory TTL cache and in-flight
/// request deduplication.
///
/// Cache hits bypass the network entirely. Concurrent requests for the same
/// query descriptor serialize on a per-key lock; the followers re-check the
/// cache once the leader lands, so N identical concurrent queries cost one
/// network round trip. Successful mutations invalidate every cached page of
/// the mutated resource.
pub struct CachedClient {
    inner: Client,
    cache: MemoryCache,
    inflight: DashMap<String, Arc<Mutex<()>>>,
}

impl CachedClient {
    /// Creates a new cached client for the given base URL, without credentials.
    pub fn new(base_url: &str, cache: MemoryCache) -> Self {
        Self {
            inner: Client::new(base_url),
            cache,
            inflight: DashMap::new(),
        }
    }

    /// Creates a new cached client that authenticates with the given bearer token.
    pub fn with_token(base_url: &str, token: &str, cache: MemoryCache) -> Self {
        Self {
            inner: Client::with_token(base_url, token),
            cache,
            inflight: DashMap::new(),
        }
    }

    async fn get_cached<T, F, Fut>(
        &self,
        cache_key: String,
        fetch: F,
    ) -> Result<T, StorefrontError>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, storefront_api::Error>>,
    {
        if let Some(cached) = self.cache.get(&cache_key) {
            return Ok(serde_json::from_str(&cached)?);
        }

        let lock = self
            .inflight
            .entry(cache_key.clone())
            .or_default()
            .clone();
        let _guard = lock.lock().await;

        // A request for the same descriptor may have landed while we waited.
        if let Some(cached) = self.cache.get(&cache_key) {
            return Ok(serde_json::from_str(&cached)?);
        }

        // The entry is removed whether the fetch landed or not; a failed
        // descriptor must not pin its lock in the map forever.
        let outcome = fetch().await;
        self.inflight.remove(&cache_key);
        let resp = outcome?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json);
        }
        Ok(resp)
    }

    /// Fetches orders, returning cached results when available.
    pub async fn get_orders(
        &self,
        query: &OrderQuery,
    ) -> Result<PaginatedResponse<Order>, StorefrontError> {
        let cache_key = order_cache_key(query);
        self.get_cached(cache_key, || self.inner.get_orders(query))
            .await
    }

    /// Fetches a single order by ID, returning cached results when available.
    pub async fn get_order(&self, order_id: i64) -> Result<Response<Order>, StorefrontError> {
        let cache_key = format!("orders:id{}", order_id);
        self.get_cached(cache_key, || self.inner.get_order(order_id))
            .await
    }

    /// Fetches users, returning cached results when available.
    pub async fn get_users(
        &self,
        query: &UserQuery,
    ) -> Result<PaginatedResponse<User>, StorefrontError> {
        let cache_key = user_cache_key(query);
        self.get_cached(cache_key, || self.inner.get_users(query))
            .await
    }

    /// Fetches a single user by ID, returning cached results when available.
    pub async fn get_user(&self, user_id: i64) -> Result<Response<User>, StorefrontError> {
        let cache_key = format!("users:id{}", user_id);
        self.get_cached(cache_key, || self.inner.get_user(user_id))
            .await
    }

    /// Fetches carts, returning cached results when available.
    pub async fn get_carts(
        &self,
        query: &CartQuery,
    ) -> Result<PaginatedResponse<Cart>, StorefrontError> {
        let cache_key = format!("carts:{}", list_params_key(&query.common));
        self.get_cached(cache_key, || self.inner.get_carts(query))
            .await
    }

    /// Fetches wishlists, returning cached results when available.
    pub async fn get_wishlists(
        &self,
        query: &WishlistQuery,
    ) -> Result<PaginatedResponse<Wishlist>, StorefrontError> {
        let cache_key = format!("wishlists:{}", list_params_key(&query.common));
        self.get_cached(cache_key, || self.inner.get_wishlists(query))
            .await
    }

    /// Moves an order to a new status. On success every cached order page is
    /// invalidated so the next read reflects the change; on failure the
    /// cache is left untouched.
    pub async fn set_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<Response<Order>, StorefrontError> {
        let resp = self.inner.set_order_status(order_id, status).await?;
        self.cache.invalidate_prefix("orders:");
        Ok(resp)
    }

    /// Changes a user's role, invalidating cached user pages on success.
    pub async fn set_user_role(
        &self,
        user_id: i64,
        role: UserRole,
    ) -> Result<Response<User>, StorefrontError> {
        let resp = self.inner.set_user_role(user_id, role).await?;
        self.cache.invalidate_prefix("users:");
        Ok(resp)
    }

    /// Deletes an order, invalidating cached order pages on success.
    pub async fn delete_order(&self, order_id: i64) -> Result<(), StorefrontError> {
        self.inner.delete_order(order_id).await?;
        self.cache.invalidate_prefix("orders:");
        Ok(())
    }

    /// Deletes a user, invalidating cached user pages on success.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), StorefrontError> {
        self.inner.delete_user(user_id).await?;
        self.cache.invalidate_prefix("users:");
        Ok(())
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

fn list_params_key(params: &storefront_api::ListParams) -> String {
    format!(
        "p{}:l{:?}:q{:?}:sd{}",
        params.page, params.limit, params.search, params.sort_direction as u8
    )
}

fn order_cache_key(query: &OrderQuery) -> String {
    format!(
        "orders:{}:st[{}]:sb{}",
        list_params_key(&query.common),
        query
            .statuses
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(","),
        query.sort_by,
    )
}

fn user_cache_key(query: &UserQuery) -> String {
    format!(
        "users:{}:ro[{}]:sb{}",
        list_params_key(&query.common),
        query
            .roles
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(","),
        query.sort_by,
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn failed_fetch_releases_inflight_entry() {
        let client = CachedClient::new(
            "http://localhost",
            MemoryCache::new(Duration::from_secs(60)),
        );

        let result: Result<String, StorefrontError> = client
            .get_cached("orders:p1".to_string(), || async {
                Err(storefront_api::Error::RequestFailed)
            })
            .await;
        assert!(result.is_err());
        assert!(client.inflight.is_empty());

        // A later fetch for the same descriptor proceeds normally.
        let result: Result<String, StorefrontError> = client
            .get_cached("orders:p1".to_string(), || async {
                Ok("recovered".to_string())
            })
            .await;
        assert_eq!(result.unwrap(), "recovered");
        assert!(client.inflight.is_empty());
    }
}
