//! core::registry::schema
//!
//! On-disk schema for the repository registry.
//!
//! # Format
//!
//! One TOML table per repository definition:
//!
//! ```toml
//! [repos.primary]
//! repo_dir = "/home/user/.dotrepo.git"
//! tree_dir = "/home/user"
//! ```
//!
//! # Validation
//!
//! Table keys are validated as [`RepoName`]s at parse time, and unknown
//! fields are rejected so a typo in the file surfaces as a parse error
//! instead of being silently dropped.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::RepoName;

/// The whole registry document.
///
/// `IndexMap` preserves insertion order, which is the listing order the
/// `repos` command reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryFile {
    /// Named repository definitions, in registration order.
    pub repos: IndexMap<RepoName, RepoEntry>,
}

/// A single persisted repository definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RepoEntry {
    /// Path to the git metadata store.
    pub repo_dir: PathBuf,

    /// Path to the working tree the repository overlays.
    pub tree_dir: PathBuf,
}
