use url::Url;

use super::common::{ListParams, Query};

/// Query for the `/wishlists` endpoint. Wishlists have no extra filters
/// beyond the common pagination and search parameters.
#[derive(Default)]
pub struct WishlistQuery {
    pub common: ListParams,
}

impl Query for WishlistQuery {
    fn get_common(&mut self) -> &mut ListParams {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
