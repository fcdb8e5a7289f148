use std::str::FromStr;

use url::Url;

use crate::types::OrderStatus;

use super::common::{ListParams, Query, SortDirection};

#[derive(Default)]
pub struct OrderQuery {
    pub common: ListParams,
    pub statuses: Vec<OrderStatus>,
    pub sort_by: OrderSortBy,
}

impl Query for OrderQuery {
    fn get_common(&mut self) -> &mut ListParams {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        for status in self.statuses.iter() {
            url.query_pairs_mut()
                .append_pair("status", status.to_string().as_str());
        }

        url.query_pairs_mut().append_pair(
            "sortBy",
            format!(
                "{}{}",
                match self.common.sort_direction {
                    SortDirection::Asc => "",
                    SortDirection::Desc => "-",
                },
                &self.sort_by.to_string().as_str()
            )
            .as_str(),
        );

        url
    }
}

impl OrderQuery {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.statuses.push(status);
        self
    }
    pub fn with_statuses(mut self, statuses: &[OrderStatus]) -> Self {
        self.statuses.extend_from_slice(statuses);
        self
    }

    pub fn with_sort_by(mut self, sort_by: OrderSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[derive(Clone, Copy, Default)]
pub enum OrderSortBy {
    /// Order creation date. This is the default.
    #[default]
    CreatedAt,
    /// Order grand total.
    Total,
}
impl std::fmt::Display for OrderSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OrderSortBy::CreatedAt => "createdAt",
                OrderSortBy::Total => "total",
            }
        )
    }
}
impl FromStr for OrderSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created-at" | "createdAt" => Ok(OrderSortBy::CreatedAt),
            "total" => Ok(OrderSortBy::Total),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{
        query::{common::SortDirection, order::OrderSortBy, OrderQuery, Query},
        types::OrderStatus,
    };

    #[test]
    fn order_query_url_shapes() {
        let url = Url::parse("https://example.com").unwrap();

        let q = OrderQuery::default().add_to_url(&url).to_string();
        assert_eq!(q, "https://example.com/?page=1&sortBy=-createdAt");

        let q = OrderQuery::default()
            .with_page(3)
            .with_limit(25)
            .with_search("alice")
            .add_to_url(&url)
            .to_string();
        assert_eq!(
            q,
            "https://example.com/?page=3&limit=25&searchTerm=alice&sortBy=-createdAt"
        );

        let q = OrderQuery::default()
            .with_status(OrderStatus::Pending)
            .with_status(OrderStatus::Shipped)
            .with_sort_by(OrderSortBy::Total)
            .with_sort_direction(SortDirection::Asc)
            .add_to_url(&url)
            .to_string();
        assert_eq!(
            q,
            "https://example.com/?page=1&status=pending&status=shipped&sortBy=total"
        );
    }
}
