pub mod carts;
pub mod orders;
pub mod users;
pub mod wishlists;

use anyhow::{bail, Result};

/// Mutations are refused locally when no credential is configured. The server
/// enforces the real check; this just fails fast with a usable hint.
pub fn require_admin(admin: bool) -> Result<()> {
    if !admin {
        bail!("this command requires admin credentials; set STOREFRONT_ADMIN_TOKEN");
    }
    Ok(())
}
