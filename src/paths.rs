//! XDG-style path resolution for the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for chronolingo.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/chronolingo` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/chronolingo` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join("chronolingo"));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join("chronolingo"))
}
