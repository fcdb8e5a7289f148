//! Library layer for the storefront admin console: cached API client plus the
//! reusable list-browsing pattern (search debounce, pagination window math,
//! and last-request-wins result adoption).

pub mod browser;
pub mod cache;
pub mod client;
pub mod debounce;
pub mod error;
pub mod pager;

pub use storefront_api;
pub use storefront_api::types;
pub use storefront_api::{
    CartQuery, ListParams, OrderQuery, OrderSortBy, Query, SortDirection, UserQuery, UserSortBy,
    WishlistQuery,
};

pub use browser::{BrowseStatus, FetchTicket, ListBrowser};
pub use cache::MemoryCache;
pub use client::CachedClient;
pub use debounce::Debouncer;
pub use error::StorefrontError;
pub use pager::{page_window, PageItem, Pager};
