use anyhow::Result;
use clap::{Args, Subcommand};
use storefront_lib::types::Wishlist;
use storefront_lib::{CachedClient, ListBrowser, ListParams, Query, WishlistQuery};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct WishlistsArgs {
    #[command(subcommand)]
    action: WishlistsAction,
}

#[derive(Subcommand)]
enum WishlistsAction {
    /// List customer wishlists, one page at a time
    List(WishlistListArgs),
}

#[derive(Args)]
struct WishlistListArgs {
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

pub async fn run(args: &WishlistsArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let WishlistsAction::List(list) = &args.action;

    let mut browser: ListBrowser<Wishlist> = ListBrowser::new().with_limit(list.limit);
    if let Some(search) = &list.search {
        browser.set_search(search);
    }
    if list.page != 1 {
        browser.jump_to_page(list.page);
    }

    let ticket = browser.start_fetch();
    let query = build_query(&ticket.params);
    let outcome = client.get_wishlists(&query).await;
    if let Err(e) = &outcome {
        eprintln!("Fetch failed: {}", e);
    }
    browser.resolve(&ticket, outcome);

    match format {
        OutputFormat::Json => output::print_json(&browser.items()),
        OutputFormat::Csv => output::print_wishlists_csv(browser.items())?,
        OutputFormat::Table | OutputFormat::Markdown => {
            output::print_wishlists_table(browser.items(), matches!(format, OutputFormat::Markdown));
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

fn build_query(params: &ListParams) -> WishlistQuery {
    let mut query = WishlistQuery::default().with_page(params.page);
    if let Some(limit) = params.limit {
        query = query.with_limit(limit);
    }
    if let Some(search) = &params.search {
        query = query.with_search(search);
    }
    query
}
