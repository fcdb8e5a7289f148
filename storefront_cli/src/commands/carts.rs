use anyhow::Result;
use clap::{Args, Subcommand};
use storefront_lib::types::Cart;
use storefront_lib::{CachedClient, CartQuery, ListBrowser, ListParams, Query};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct CartsArgs {
    #[command(subcommand)]
    action: CartsAction,
}

#[derive(Subcommand)]
enum CartsAction {
    /// List customer carts, one page at a time
    List(CartListArgs),
}

#[derive(Args)]
struct CartListArgs {
    /// Server-side search over customer email
    #[arg(long)]
    search: Option<String>,

    /// Page to show (1-indexed)
    #[arg(long, default_value_t = 1)]
    page: i64,

    /// Results per page
    #[arg(long, default_value_t = 20)]
    limit: i64,
}

pub async fn run(args: &CartsArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let CartsAction::List(list) = &args.action;

    let mut browser: ListBrowser<Cart> = ListBrowser::new().with_limit(list.limit);
    if let Some(search) = &list.search {
        browser.set_search(search);
    }
    if list.page != 1 {
        browser.jump_to_page(list.page);
    }

    let ticket = browser.start_fetch();
    let query = build_query(&ticket.params);
    let outcome = client.get_carts(&query).await;
    if let Err(e) = &outcome {
        eprintln!("Fetch failed: {}", e);
    }
    browser.resolve(&ticket, outcome);

    match format {
        OutputFormat::Json => output::print_json(&browser.items()),
        OutputFormat::Csv => output::print_carts_csv(browser.items())?,
        OutputFormat::Table | OutputFormat::Markdown => {
            output::print_carts_table(browser.items(), matches!(format, OutputFormat::Markdown));
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

fn build_query(params: &ListParams) -> CartQuery {
    let mut query = CartQuery::default().with_page(params.page);
    if let Some(limit) = params.limit {
        query = query.with_limit(limit);
    }
    if let Some(search) = &params.search {
        query = query.with_search(search);
    }
    query
}
