//! Error types for the library layer.

/// Errors produced by the library layer, wrapping upstream API errors and
/// cache serialization failures.
#[derive(thiserror::Error, Debug)]
pub enum StorefrontError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] storefront_api::Error),
    /// Deserialization of a cached entry failed.
    #[error("Cache error: {0}")]
    Cache(#[from] serde_json::Error),
}

impl StorefrontError {
    /// True when the server rejected a mutation rather than failing outright.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StorefrontError::Api(storefront_api::Error::Validation { .. })
        )
    }
}
