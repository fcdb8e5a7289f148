use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use storefront_lib::types::{User, UserRole};
use storefront_lib::{
    CachedClient, ListBrowser, ListParams, Query, SortDirection, UserQuery, UserSortBy,
};

use crate::output::{self, OutputFormat};

use super::require_admin;

#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    action: UsersAction,
}

#[derive(Subcommand)]
enum UsersAction {
    /// List user accounts, one page at a time
    List(UserListArgs),
    /// Change a user's role
    SetRole {
        /// User ID
        id: i64,
        /// New role: customer or admin
        role: String,
    },
    /// Delete a user account
    Delete {
        /// User ID
        id: i64,
    },
    /// Export every page of matching users
    Export(UserListArgs),
}

#[derive(Args)]
struct UserListArgs {
    /// Only include these roles (repeatable)
    #[arg(long)]
    role: Vec<String>,

    /// Server-side search over name and email
    #[arg(long)]
    search: Option<String>,

    /// Page to show (1-indexed)
    #[arg(long, default_value_t = 1)]
    page: i64,

    /// Results per page
    #[arg(long, default_value_t = 20)]
    limit: i64,

    /// Sort key: created-at or name
    #[arg(long, default_value = "created-at")]
    sort_by: String,

    /// Sort ascending instead of the default descending
    #[arg(long)]
    asc: bool,
}

pub async fn run(
    args: &UsersArgs,
    client: &CachedClient,
    admin: bool,
    format: &OutputFormat,
) -> Result<()> {
    match &args.action {
        UsersAction::List(list) => run_list(list, client, format).await,
        UsersAction::SetRole { id, role } => {
            require_admin(admin)?;
            let role = parse_role(role)?;
            match client.set_user_role(*id, role).await {
                Ok(resp) => {
                    println!("User {} is now {}", resp.data.user_id, resp.data.role);
                    Ok(())
                }
                Err(e) if e.is_validation() => {
                    eprintln!("Rejected: {}", e);
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        }
        UsersAction::Delete { id } => {
            require_admin(admin)?;
            client.delete_user(*id).await?;
            println!("User {} deleted", id);
            Ok(())
        }
        UsersAction::Export(list) => run_export(list, client, format).await,
    }
}

async fn run_list(args: &UserListArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let filters = parse_filters(args)?;

    let mut browser: ListBrowser<User> = ListBrowser::new().with_limit(args.limit);
    if let Some(search) = &args.search {
        browser.set_search(search);
    }
    if args.page != 1 {
        browser.jump_to_page(args.page);
    }

    let ticket = browser.start_fetch();
    let query = build_query(&ticket.params, &filters);
    let outcome = client.get_users(&query).await;
    if let Err(e) = &outcome {
        eprintln!("Fetch failed: {}", e);
    }
    browser.resolve(&ticket, outcome);

    match format {
        OutputFormat::Json => output::print_json(&browser.items()),
        OutputFormat::Csv => output::print_users_csv(browser.items())?,
        OutputFormat::Table | OutputFormat::Markdown => {
            output::print_users_table(
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
    args: &UserListArgs,
    client: &CachedClient,
    format: &OutputFormat,
) -> Result<()> {
    let all = fetch_all_pages(args, client).await?;

    match format {
        OutputFormat::Json => output::print_json(&all),
        _ => output::print_users_csv(&all)?,
    }
    Ok(())
}

/// Walks every page of the query and collects the rows. A failed page aborts
/// the whole export: an incomplete set must never be emitted as if it were
/// the full one.
async fn fetch_all_pages(args: &UserListArgs, client: &CachedClient) -> Result<Vec<User>> {
    let filters = parse_filters(args)?;

    let mut browser: ListBrowser<User> = ListBrowser::new().with_limit(args.limit);
    if let Some(search) = &args.search {
        browser.set_search(search);
    }

    let ticket = browser.start_fetch();
    let outcome = client.get_users(&build_query(&ticket.params, &filters)).await;
    if let Err(e) = &outcome {
        bail!("export aborted: fetching page {} failed: {}", ticket.params.page, e);
    }
    browser.resolve(&ticket, outcome);

    let mut all: Vec<User> = browser.items().to_vec();
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
        let outcome = client.get_users(&build_query(&ticket.params, &filters)).await;
        if let Err(e) = &outcome {
            bar.abandon();
            bail!("export aborted: fetching page {} failed: {}", ticket.params.page, e);
        }
        browser.resolve(&ticket, outcome);
        all.extend_from_slice(browser.items());
        bar.inc(1);
    }
    bar.finish_with_message(format!("{} users", all.len()));
    Ok(all)
}

struct UserFilters {
    roles: Vec<UserRole>,
    sort_by: UserSortBy,
    asc: bool,
}

fn parse_filters(args: &UserListArgs) -> Result<UserFilters> {
    let roles = args
        .role
        .iter()
        .map(|r| parse_role(r))
        .collect::<Result<Vec<_>>>()?;
    let sort_by = UserSortBy::from_str(&args.sort_by)
        .map_err(|_| anyhow!("unknown sort key '{}'; use created-at or name", args.sort_by))?;
    Ok(UserFilters {
        roles,
        sort_by,
        asc: args.asc,
    })
}

fn parse_role(s: &str) -> Result<UserRole> {
    UserRole::from_str(s).map_err(|_| anyhow!("unknown role '{s}'; use customer or admin"))
}

fn build_query(params: &ListParams, filters: &UserFilters) -> UserQuery {
    let mut query = UserQuery::default()
        .with_roles(&filters.roles)
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
