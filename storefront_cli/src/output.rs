use anyhow::Result;
use serde::Serialize;
use storefront_lib::types::{Cart, Order, User, Wishlist};
use storefront_lib::PageItem;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct OrderRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Customer")]
    #[serde(rename = "Customer")]
    email: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Items")]
    #[serde(rename = "Items")]
    items: i64,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
    #[tabled(rename = "Placed")]
    #[serde(rename = "Placed")]
    placed: String,
}

#[derive(Tabled, Serialize)]
struct UserRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    #[serde(rename = "Role")]
    role: String,
    #[tabled(rename = "Joined")]
    #[serde(rename = "Joined")]
    joined: String,
}

#[derive(Tabled, Serialize)]
struct CartRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Customer")]
    #[serde(rename = "Customer")]
    email: String,
    #[tabled(rename = "Items")]
    #[serde(rename = "Items")]
    items: usize,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
}

#[derive(Tabled, Serialize)]
struct WishlistRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Customer")]
    #[serde(rename = "Customer")]
    email: String,
    #[tabled(rename = "Items")]
    #[serde(rename = "Items")]
    items: usize,
}

// -- Row builders --

fn build_order_rows(orders: &[Order]) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|o| OrderRow {
            id: o.order_id,
            email: o.email.clone(),
            status: o.status.to_string(),
            items: o.item_count,
            total: format_money(o.total),
            placed: o.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect()
}

fn build_user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.user_id,
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role.to_string(),
            joined: u.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect()
}

fn build_cart_rows(carts: &[Cart]) -> Vec<CartRow> {
    carts
        .iter()
        .map(|c| CartRow {
            id: c.cart_id,
            email: c.email.clone(),
            items: c.items.len(),
            total: format_money(c.total()),
        })
        .collect()
}

fn build_wishlist_rows(wishlists: &[Wishlist]) -> Vec<WishlistRow> {
    wishlists
        .iter()
        .map(|w| WishlistRow {
            id: w.wishlist_id,
            email: w.email.clone(),
            items: w.items.len(),
        })
        .collect()
}

// -- Table output --

fn print_table<R: Tabled>(rows: Vec<R>, markdown: bool) {
    if rows.is_empty() {
        println!("No results.");
        return;
    }
    let mut table = Table::new(rows);
    if markdown {
        table.with(Style::markdown());
    }
    println!("{}", table);
}

pub fn print_orders_table(orders: &[Order], markdown: bool) {
    print_table(build_order_rows(orders), markdown);
}

pub fn print_users_table(users: &[User], markdown: bool) {
    print_table(build_user_rows(users), markdown);
}

pub fn print_carts_table(carts: &[Cart], markdown: bool) {
    print_table(build_cart_rows(carts), markdown);
}

pub fn print_wishlists_table(wishlists: &[Wishlist], markdown: bool) {
    print_table(build_wishlist_rows(wishlists), markdown);
}

// -- CSV output --

fn print_csv<R: Serialize>(rows: &[R]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_orders_csv(orders: &[Order]) -> Result<()> {
    print_csv(&build_order_rows(orders))
}

pub fn print_users_csv(users: &[User]) -> Result<()> {
    print_csv(&build_user_rows(users))
}

pub fn print_carts_csv(carts: &[Cart]) -> Result<()> {
    print_csv(&build_cart_rows(carts))
}

pub fn print_wishlists_csv(wishlists: &[Wishlist]) -> Result<()> {
    print_csv(&build_wishlist_rows(wishlists))
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Pagination footer --

/// Renders the pagination control, e.g. `< 1 ... [4] 5 6 ... 10 >`. The
/// prev/next markers disappear at the boundaries instead of emitting
/// out-of-range transitions.
pub fn pager_footer(window: &[PageItem], current: i64, has_prev: bool, has_next: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    if has_prev {
        parts.push("<".to_string());
    }
    for item in window {
        match item {
            PageItem::Page(n) if *n == current => parts.push(format!("[{}]", n)),
            PageItem::Page(n) => parts.push(n.to_string()),
            PageItem::Ellipsis => parts.push("...".to_string()),
        }
    }
    if has_next {
        parts.push(">".to_string());
    }
    parts.join(" ")
}

fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}
