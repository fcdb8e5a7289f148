use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use storefront_lib::types::{Order, OrderStatus};
use storefront_lib::{
    CachedClient, ListBrowser, ListParams, OrderQuery, OrderSortBy, Query, SortDirection,
};

use crate::output::{self, OutputFormat};

use super::require_admin;

#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    action: OrdersAction,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders, one page at a time
    List(OrderListArgs),
    /// Move an order to a new fulfillment status
    SetStatus {
        /// Order ID
        id: i64,
        /// New status: pending, processing, shipped, delivered, or cancelled
        status: String,
    },
    /// Delete an order
    Delete {
        /// Order ID
        id: i64,
    },
    /// Export every page of matching orders
    Export(OrderListArgs),
}

#[derive(Args)]
struct OrderListArgs {
    /// Only include these statuses (repeatable)
    #[arg(long)]
    status: Vec<String>,

    /// Server-side search over customer email and order fields
    #[arg(long)]
    search: Option<String>,

    /// Page to show (1-indexed)
    #[arg(long, default_value_t = 1)]
    page: i64,

    /// Results per page
    #[arg(long, default_value_t = 20)]
    limit: i64,

    /// Sort key: created-at or total
    #[arg(long, default_value = "created-at")]
    sort_by: String,

    /// Sort ascending instead of the default descending
    #[arg(long)]
    asc: bool,
}

pub async fn run(
    args: &OrdersArgs,
    client: &CachedClient,
    admin: bool,
    format: &OutputFormat,
) -> Result<()> {
    match &args.action {
        OrdersAction::List(list) => run_list(list, client, format).await,
        OrdersAction::SetStatus { id, status } => {
            require_admin(admin)?;
            let status = parse_status(status)?;
            match client.set_order_status(*id, status).await {
                Ok(resp) => {
                    println!("Order {} is now {}", resp.data.order_id, resp.data.status);
                    Ok(())
                }
                Err(e) if e.is_validation() => {
                    eprintln!("Rejected: {}", e);
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        }
        OrdersAction::Delete { id } => {
            require_admin(admin)?;
            client.delete_order(*id).await?;
            println!("Order {} deleted", id);
            Ok(())
        }
        OrdersAction::Export(list) => run_export(list, client, format).await,
    }
}

async fn run_list(args: &OrderListArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let filters = parse_filters(args)?;

    let mut browser: ListBrowser<Order> = ListBrowser::new().with_limit(args.limit);
    if let Some(search) = &args.search {
        browser.set_search(search);
    }
    if args.page != 1 {
        browser.jump_to_page(args.page);
    }

    let ticket = browser.start_fetch();
    let query = build_query(&ticket.params, &filters);
    let outcome = client.get_orders(&query).await;
    if let Err(e) = &outcome {
        eprintln!("Fetch failed: {}", e);
    }
    browser.resolve(&ticket, outcome);

    match format {
        OutputFormat::Json => output::print_json(&browser.items()),
        OutputFormat::Csv => output::print_orders_csv(browser.items())?,
        OutputFormat::Table | OutputFormat::Markdown => {
            output::print_orders_table(
                browser.items(),
                matches!(format, OutputFormat::Markdown),
            );
            println!(
                "Page {}/{}   {}",
                browser.current_page(),
                browser.total_pages(),
                output::pager_footer(
                    &browser.window(),
                    browser.current_page(),
                    browser.has_prev(),
                    browser.has_next(),
                )
            );
        }
    }
    Ok(())
}

async fn run_export(
    args: &OrderListArgs,
    client: &CachedClient,
    format: &OutputFormat,
) -> Result<()> {
    let all = fetch_all_pages(args, client).await?;

    match format {
        OutputFormat::Json => output::print_json(&all),
        _ => output::print_orders_csv(&all)?,
    }
    Ok(())
}

/// Walks every page of the query and collects the rows. A failed page aborts
/// the whole export: an incomplete set must never be emitted as if it were
/// the full one.
async fn fetch_all_pages(args: &OrderListArgs, client: &CachedClient) -> Result<Vec<Order>> {
    let filters = parse_filters(args)?;

    let mut browser: ListBrowser<Order> = ListBrowser::new().with_limit(args.limit);
    if let Some(search) = &args.search {
        browser.set_search(search);
    }

    let ticket = browser.start_fetch();
    let outcome = client.get_orders(&build_query(&ticket.params, &filters)).await;
    if let Err(e) = &outcome {
        bail!("export aborted: fetching page {} failed: {}", ticket.params.page, e);
    }
    browser.resolve(&ticket, outcome);

    let mut all: Vec<Order> = browser.items().to_vec();
    let total = browser.total_pages();

    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>4}/{len:4} {msg}",
        )?
        .progress_chars("##-"),
    );
    bar.inc(1);

    while browser.next_page() {
        let ticket = browser.start_fetch();
        let outcome = client.get_orders(&build_query(&ticket.params, &filters)).await;
        if let Err(e) = &outcome {
            bar.abandon();
            bail!("export aborted: fetching page {} failed: {}", ticket.params.page, e);
        }
        browser.resolve(&ticket, outcome);
        all.extend_from_slice(browser.items());
        bar.inc(1);
    }
    bar.finish_with_message(format!("{} orders", all.len()));
    Ok(all)
}

struct OrderFilters {
    statuses: Vec<OrderStatus>,
    sort_by: OrderSortBy,
    asc: bool,
}

fn parse_filters(args: &OrderListArgs) -> Result<OrderFilters> {
    let statuses = args
        .status
        .iter()
        .map(|s| parse_status(s))
        .collect::<Result<Vec<_>>>()?;
    let sort_by = OrderSortBy::from_str(&args.sort_by)
        .map_err(|_| anyhow!("unknown sort key '{}'; use created-at or total", args.sort_by))?;
    Ok(OrderFilters {
        statuses,
        sort_by,
        asc: args.asc,
    })
}

fn parse_status(s: &str) -> Result<OrderStatus> {
    OrderStatus::from_str(s).map_err(|_| {
        anyhow!("unknown status '{s}'; use pending, processing, shipped, delivered, or cancelled")
    })
}

fn build_query(params: &ListParams, filters: &OrderFilters) -> OrderQuery {
    let mut query = OrderQuery::default()
        .with_statuses(&filters.statuses)
        .with_sort_by(filters.sort_by)
        .with_page(params.page);
    if let Some(limit) = params.limit {
        query = query.with_limit(limit);
    }
    if let Some(search) = &params.search {
        query = query.with_search(search);
    }
    if filters.asc {
        query = query.with_sort_direction(SortDirection::Asc);
    }
    query
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use storefront_lib::MemoryCache;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn list_args(limit: i64) -> OrderListArgs {
        OrderListArgs {
            status: vec![],
            search: None,
            page: 1,
            limit,
            sort_by: "created-at".to_string(),
            asc: false,
        }
    }

    fn order_page(ids: &[i64], total_pages: i64) -> String {
        let data: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "_orderId": id,
                    "email": format!("customer{}@example.com", id),
                    "status": "pending",
                    "total": 10.0,
                    "itemCount": 1,
                    "createdAt": "2024-03-01T12:00:00Z"
                })
            })
            .collect();
        serde_json::json!({ "data": data, "meta": { "totalPages": total_pages } }).to_string()
    }

    fn client_for(server: &MockServer) -> CachedClient {
        CachedClient::new(&server.uri(), MemoryCache::new(Duration::from_secs(60)))
    }

    #[tokio::test]
    async fn export_collects_every_page_exactly_once() {
        let mock_server = MockServer::start().await;
        for (page, ids) in [("1", [1, 2]), ("2", [3, 4]), ("3", [5, 6])] {
            Mock::given(method("GET"))
                .and(path("/orders"))
                .and(query_param("page", page))
                .respond_with(ResponseTemplate::new(200).set_body_string(order_page(&ids, 3)))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let all = fetch_all_pages(&list_args(2), &client_for(&mock_server))
            .await
            .unwrap();
        let ids: Vec<i64> = all.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn export_aborts_when_a_page_fails_mid_walk() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(order_page(&[1, 2], 3)))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/orders"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let err = fetch_all_pages(&list_args(2), &client_for(&mock_server))
            .await
            .unwrap_err();
        // The failed page is named; no partial or duplicated set leaks out.
        assert!(err.to_string().contains("page 2"));
    }

    #[tokio::test]
    async fn export_surfaces_a_failed_first_fetch() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let err = fetch_all_pages(&list_args(2), &client_for(&mock_server))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("page 1"));
    }
}
