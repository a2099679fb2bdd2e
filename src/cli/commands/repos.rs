//! repos command - List all configured repositories

use anyhow::{Context as _, Result};

use crate::core::paths;
use crate::core::registry::Registry;

/// List all configured repository names in registration order.
///
/// The listing is plain names on stdout, one per line, so it stays
/// script-friendly; quiet mode does not suppress it.
pub fn repos() -> Result<i32> {
    let registry_path = paths::registry_file().context("failed to locate registry file")?;
    let registry = Registry::load(registry_path)?;

    for name in registry.list() {
        println!("{}", name);
    }

    Ok(0)
}
