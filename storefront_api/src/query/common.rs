//! Shared query infrastructure: the [`Query`] trait, [`ListParams`] fields, and [`SortDirection`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination, search, and sort direction.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common list parameters.
    fn get_common(&mut self) -> &mut ListParams;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Sets the search term (server-side substring match).
    fn with_search(mut self, search: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().search = Some(search.to_string());
        self
    }

    /// Sets the sort direction (ascending or descending).
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_direction = sort_direction;
        self
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first).
    Asc = 0,
    /// Descending order (newest/largest first). This is the default.
    #[default]
    Desc = 1,
}
impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(SortDirection::Asc),
            "1" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

impl std::fmt::Debug for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Fields shared by all list queries. Together with the resource-specific
/// filters they form the query descriptor that fully determines one page of
/// results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListParams {
    /// Page number (1-indexed). Defaults to 1. The client never checks the
    /// page against the total; a page past the end comes back empty.
    pub page: i64,
    /// Results per page. `None` uses the API default.
    pub limit: Option<i64>,
    /// Search term matched server-side against resource fields.
    pub search: Option<String>,
    /// Sort direction. Defaults to descending.
    pub sort_direction: SortDirection,
}

impl Default for ListParams {
    fn default() -> ListParams {
        ListParams {
            page: 1,
            limit: None,
            search: None,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl ListParams {
    /// Appends the common pagination and search parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        if let Some(search) = &self.search {
            url.query_pairs_mut()
                .append_pair("searchTerm", search.as_str());
        };
        url
    }
}
