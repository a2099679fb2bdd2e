//! core::registry
//!
//! Named repository definitions, persisted as TOML.
//!
//! # Overview
//!
//! The registry maps a [`RepoName`] to the directory pair that defines a
//! repository. It is read at the start of every invocation, and written
//! exactly once per bootstrap, immediately after the bootstrap succeeds.
//!
//! # Default Selection
//!
//! When no `-r/--repo` name is given, resolution falls back to the fixed
//! sentinel name `primary`. This is the only default-selection convention
//! supported.
//!
//! # Concurrency
//!
//! Reads and writes are not locked. The write itself is atomic (temp file
//! plus rename), but two concurrent invocations registering different
//! repositories can still lose one of the updates. This is a documented
//! limitation: registry mutation happens only on explicit bootstrap
//! commands, which are not expected to race.
//!
//! # Example
//!
//! ```no_run
//! use dotgit::core::registry::Registry;
//! use dotgit::core::paths;
//!
//! let registry = Registry::load(paths::registry_file().unwrap()).unwrap();
//! for name in registry.list() {
//!     println!("{}", name);
//! }
//! ```

pub mod schema;

pub use schema::{RegistryFile, RepoEntry};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::{RepoDefinition, RepoName};

/// The fixed sentinel name used when no repository is named explicitly.
pub const DEFAULT_REPO: &str = "primary";

/// Errors from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse registry file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to write registry file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize registry: {0}")]
    Serialize(String),

    /// An explicitly named repository is not configured.
    #[error("no repository named '{name}' is configured (see 'dot repos')")]
    NotFound { name: RepoName },

    /// No name was given and the default repository is not configured.
    #[error("no '{DEFAULT_REPO}' repository configured; run 'dot init <repo-dir>' first")]
    DefaultNotFound,

    /// Bootstrap attempted against a name that is already registered.
    #[error("repository '{name}' already exists at {repo_dir}")]
    AlreadyExists { name: RepoName, repo_dir: PathBuf },
}

/// The repository registry.
///
/// Holds the parsed registry document together with the path it was loaded
/// from, so a later [`Registry::save`] writes back to the same file.
#[derive(Debug, Clone)]
pub struct Registry {
    file: RegistryFile,
    path: PathBuf,
}

impl Registry {
    /// Load the registry from `path`.
    ///
    /// A missing file yields an empty registry; only unreadable or
    /// malformed files are errors.
    pub fn load(path: PathBuf) -> Result<Self, RegistryError> {
        let file = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| RegistryError::Read {
                path: path.clone(),
                source: e,
            })?;
            toml::from_str(&contents).map_err(|e| RegistryError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?
        } else {
            RegistryFile::default()
        };

        Ok(Self { file, path })
    }

    /// The path this registry was loaded from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a requested name (or the default) to a full definition.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `name` is given and absent
    /// - `DefaultNotFound` if `name` is omitted and the `primary` sentinel
    ///   is not registered
    pub fn resolve(&self, name: Option<&RepoName>) -> Result<RepoDefinition, RegistryError> {
        match name {
            Some(name) => self
                .lookup(name)
                .ok_or_else(|| RegistryError::NotFound { name: name.clone() }),
            None => {
                let default = RepoName::new(DEFAULT_REPO).expect("sentinel name is valid");
                self.lookup(&default)
                    .ok_or(RegistryError::DefaultNotFound)
            }
        }
    }

    fn lookup(&self, name: &RepoName) -> Option<RepoDefinition> {
        self.file.repos.get(name).map(|entry| {
            RepoDefinition::new(name.clone(), entry.repo_dir.clone(), entry.tree_dir.clone())
        })
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &RepoName) -> bool {
        self.file.repos.contains_key(name)
    }

    /// Insert a new definition.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the name is present. Bootstrap must never
    /// silently overwrite an existing definition.
    pub fn register(&mut self, def: &RepoDefinition) -> Result<(), RegistryError> {
        if let Some(existing) = self.file.repos.get(def.name()) {
            return Err(RegistryError::AlreadyExists {
                name: def.name().clone(),
                repo_dir: existing.repo_dir.clone(),
            });
        }
        self.file.repos.insert(
            def.name().clone(),
            RepoEntry {
                repo_dir: def.repo_dir().to_path_buf(),
                tree_dir: def.tree_dir().to_path_buf(),
            },
        );
        Ok(())
    }

    /// All registered names, in registration order.
    pub fn list(&self) -> impl Iterator<Item = &RepoName> {
        self.file.repos.keys()
    }

    /// Persist the registry atomically.
    ///
    /// Creates parent directories if needed, then writes to a temp file in
    /// the same directory and renames it over the target so a crash never
    /// leaves a half-written registry behind.
    pub fn save(&self) -> Result<(), RegistryError> {
        let write_err = |source| RegistryError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = toml::to_string_pretty(&self.file)
            .map_err(|e| RegistryError::Serialize(e.to_string()))?;

        let temp_path = self.path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(write_err)?;
        file.write_all(contents.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
        fs::rename(&temp_path, &self.path).map_err(write_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn def(name: &str) -> RepoDefinition {
        RepoDefinition::new(
            RepoName::new(name).unwrap(),
            format!("/repos/{name}.git"),
            "/home/u",
        )
    }

    #[test]
    fn missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let registry = Registry::load(temp.path().join("repos.toml")).unwrap();
        assert_eq!(registry.list().count(), 0);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repos.toml");
        fs::write(&path, "[repos.primary\n").unwrap();
        assert!(matches!(
            Registry::load(path),
            Err(RegistryError::Parse { .. })
        ));
    }

    #[test]
    fn register_then_resolve() {
        let temp = TempDir::new().unwrap();
        let mut registry = Registry::load(temp.path().join("repos.toml")).unwrap();
        registry.register(&def("primary")).unwrap();

        let name = RepoName::new("primary").unwrap();
        let resolved = registry.resolve(Some(&name)).unwrap();
        assert_eq!(resolved, def("primary"));
    }

    #[test]
    fn register_duplicate_fails() {
        let temp = TempDir::new().unwrap();
        let mut registry = Registry::load(temp.path().join("repos.toml")).unwrap();
        registry.register(&def("primary")).unwrap();

        let err = registry.register(&def("primary")).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyExists { .. }));
        // refused outright, no mutation
        assert_eq!(registry.list().count(), 1);
    }

    #[test]
    fn resolve_missing_name_fails() {
        let temp = TempDir::new().unwrap();
        let registry = Registry::load(temp.path().join("repos.toml")).unwrap();
        let name = RepoName::new("missing").unwrap();
        assert!(matches!(
            registry.resolve(Some(&name)),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn resolve_default_on_empty_registry_names_the_sentinel() {
        let temp = TempDir::new().unwrap();
        let registry = Registry::load(temp.path().join("repos.toml")).unwrap();
        let err = registry.resolve(None).unwrap_err();
        assert!(matches!(err, RegistryError::DefaultNotFound));
        assert!(err.to_string().contains(DEFAULT_REPO));
    }

    #[test]
    fn resolve_default_finds_primary() {
        let temp = TempDir::new().unwrap();
        let mut registry = Registry::load(temp.path().join("repos.toml")).unwrap();
        registry.register(&def("primary")).unwrap();
        assert_eq!(registry.resolve(None).unwrap(), def("primary"));
    }

    #[test]
    fn save_round_trips_in_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("conf/repos.toml");

        let mut registry = Registry::load(path.clone()).unwrap();
        registry.register(&def("zeta")).unwrap();
        registry.register(&def("alpha")).unwrap();
        registry.save().unwrap();

        let reloaded = Registry::load(path).unwrap();
        let names: Vec<_> = reloaded.list().map(|n| n.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repos.toml");

        let mut registry = Registry::load(path.clone()).unwrap();
        registry.register(&def("primary")).unwrap();
        registry.save().unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
