//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RepoName`] - Validated registry key for a repository definition
//! - [`RepoDefinition`] - A fully formed repository/tree pair
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use dotgit::core::types::RepoName;
//!
//! let name = RepoName::new("primary").unwrap();
//! assert_eq!(name.as_str(), "primary");
//!
//! assert!(RepoName::new("").is_err());
//! assert!(RepoName::new("has space").is_err());
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid repository name: {0}")]
    InvalidRepoName(String),
}

/// A validated repository name.
///
/// Repository names key the registry and name a TOML table, so they must be:
/// - Non-empty
/// - Free of whitespace and `/`
/// - Not starting with `-` (would read as a CLI flag) or `.`
///
/// # Example
///
/// ```
/// use dotgit::core::types::RepoName;
///
/// let name = RepoName::new("work-laptop").unwrap();
/// assert_eq!(name.as_str(), "work-laptop");
///
/// assert!(RepoName::new("-flag").is_err());
/// assert!(RepoName::new("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoName(String);

impl RepoName {
    /// Create a new validated repository name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoName` if the name violates the rules
    /// above.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot be empty".into(),
            ));
        }
        if name.starts_with('-') {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot start with '-'".into(),
            ));
        }
        if name.starts_with('.') {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot start with '.'".into(),
            ));
        }
        if name.chars().any(|c| c.is_whitespace()) {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot contain whitespace".into(),
            ));
        }
        if name.contains('/') {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot contain '/'".into(),
            ));
        }
        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RepoName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepoName> for String {
    fn from(value: RepoName) -> Self {
        value.0
    }
}

/// A fully formed repository definition.
///
/// Pairs the metadata store directory (`repo_dir`) with the working tree it
/// overlays (`tree_dir`). Definitions are produced only by registry
/// resolution or a successful bootstrap; they are never constructed with
/// missing fields and then patched up later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDefinition {
    name: RepoName,
    repo_dir: PathBuf,
    tree_dir: PathBuf,
}

impl RepoDefinition {
    /// Create a definition from its parts.
    pub fn new(name: RepoName, repo_dir: impl Into<PathBuf>, tree_dir: impl Into<PathBuf>) -> Self {
        Self {
            name,
            repo_dir: repo_dir.into(),
            tree_dir: tree_dir.into(),
        }
    }

    /// The registry key for this definition.
    pub fn name(&self) -> &RepoName {
        &self.name
    }

    /// Path to the git metadata store.
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    /// Path to the working tree the repository overlays.
    pub fn tree_dir(&self) -> &Path {
        &self.tree_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_accepted() {
        for name in ["primary", "work-laptop", "repo_2", "a"] {
            assert!(RepoName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn invalid_names_rejected() {
        for name in ["", "-repo", ".repo", "a b", "a\tb", "a/b"] {
            assert!(RepoName::new(name).is_err(), "{name:?} should be invalid");
        }
    }

    #[test]
    fn name_round_trips_through_string() {
        let name = RepoName::new("primary").unwrap();
        let s: String = name.clone().into();
        assert_eq!(RepoName::try_from(s).unwrap(), name);
    }

    #[test]
    fn definition_exposes_parts() {
        let def = RepoDefinition::new(
            RepoName::new("primary").unwrap(),
            "/home/u/.dotrepo.git",
            "/home/u",
        );
        assert_eq!(def.name().as_str(), "primary");
        assert_eq!(def.repo_dir(), Path::new("/home/u/.dotrepo.git"));
        assert_eq!(def.tree_dir(), Path::new("/home/u"));
    }
}
