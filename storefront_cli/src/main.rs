mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_lib::cache::MemoryCache;
use storefront_lib::CachedClient;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse and manage storefront orders, users, carts, and wishlists")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base URL of the storefront admin API (overrides STOREFRONT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage orders
    Orders(commands::orders::OrdersArgs),
    /// Browse and manage user accounts
    Users(commands::users::UsersArgs),
    /// Inspect customer carts
    Carts(commands::carts::CartsArgs),
    /// Inspect customer wishlists
    Wishlists(commands::wishlists::WishlistsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let api_url = cli
        .api_url
        .clone()
        .or_else(|| std::env::var("STOREFRONT_API_URL").ok())
        .unwrap_or_else(|| "http://localhost:5000/api/v1".to_string());
    let token = std::env::var("STOREFRONT_ADMIN_TOKEN").ok();

    let cache = MemoryCache::new(Duration::from_secs(300));
    let client = match &token {
        Some(token) => CachedClient::with_token(&api_url, token, cache),
        None => CachedClient::new(&api_url, cache),
    };
    // The server is the real gate; the token's presence is the local signal.
    let admin = token.is_some();

    match &cli.command {
        Commands::Orders(args) => commands::orders::run(args, &client, admin, &format).await?,
        Commands::Users(args) => commands::users::run(args, &client, admin, &format).await?,
        Commands::Carts(args) => commands::carts::run(args, &client, &format).await?,
        Commands::Wishlists(args) => commands::wishlists::run(args, &client, &format).await?,
    }

    Ok(())
}
