//! core::paths
//!
//! Registry file and home directory resolution.
//!
//! # Registry File Locations
//!
//! Searched in order:
//! 1. `$DOTGIT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/dotgit/repos.toml`
//! 3. `~/.config/dotgit/repos.toml` (canonical write location)
//!
//! The first existing file wins for reads. Writes always go to the path the
//! registry was loaded from, or to the canonical location when no file
//! existed yet.
//!
//! # Working Tree Default
//!
//! When a bootstrap command does not name a tree directory explicitly, the
//! working tree defaults to the user's home directory - the whole point of
//! the tool is overlaying a repository onto `$HOME`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Home directory could not be determined.
    #[error("home directory not found")]
    NoHomeDir,
}

/// Resolve the registry file path.
///
/// Follows the search order documented at module level: an explicit
/// `$DOTGIT_CONFIG` always wins (even if the file does not exist yet, so
/// bootstrap can create it there), then an existing XDG location, then the
/// canonical write location.
///
/// # Errors
///
/// Returns `PathError::NoHomeDir` if no candidate exists and the home
/// directory cannot be determined for the canonical fallback.
pub fn registry_file() -> Result<PathBuf, PathError> {
    if let Ok(path) = std::env::var("DOTGIT_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_home).join("dotgit/repos.toml");
        if path.exists() {
            return Ok(path);
        }
    }

    let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
    Ok(home.join(".config/dotgit/repos.toml"))
}

/// Resolve the default working tree directory (the user's home directory).
///
/// # Errors
///
/// Returns `PathError::NoHomeDir` if the home directory cannot be
/// determined.
pub fn default_tree_dir() -> Result<PathBuf, PathError> {
    dirs::home_dir().ok_or(PathError::NoHomeDir)
}
