//! engine::bootstrap
//!
//! Building a new tracking repository, or cloning one from a remote
//! origin, without disturbing the working tree.
//!
//! # The Ignore-Everything Policy
//!
//! A freshly built repository tracks exactly one file: a tree-root
//! `.gitignore` containing the single line `*`. Everything in the working
//! tree is ignored by default; only files explicitly force-added are ever
//! tracked. The translator's force-add injection keeps additions working
//! despite this blanket ignore.
//!
//! # The Local Branch
//!
//! Both entry points end on a machine-local branch named
//! `local_<user>_<host>`, so independent machines tracking the same
//! upstream never collide on a shared branch before an explicit merge.
//! The branch is switched to by re-pointing the symbolic HEAD ref directly,
//! never by checkout - the working tree already contains unrelated files
//! that a checkout could clobber.
//!
//! # Failure
//!
//! There is no partial-state rollback: a bootstrap that fails midway leaves
//! whatever it created on disk as-is, and nothing is registered.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::exec::{ExecError, Executor, Mode};
use crate::core::types::{RepoDefinition, RepoName};
use crate::git::{translate, GitInvocation};
use crate::ui::output::{self, Verbosity};

/// Errors from bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The target metadata store directory already exists.
    #[error("repository directory already exists: {path}")]
    RepoDirExists {
        /// The offending path
        path: PathBuf,
    },

    /// Filesystem step failed (directory creation, ignore-file write).
    #[error("failed to write '{path}': {source}")]
    Io {
        /// The path being written
        path: PathBuf,
        /// The underlying OS error
        source: std::io::Error,
    },

    /// A git step exited non-zero.
    #[error("git step failed with exit code {code}: {command}")]
    GitStep {
        /// The rendered invocation that failed
        command: String,
        /// Its exit code
        code: i32,
    },

    /// A git step could not be spawned at all.
    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// The deterministic machine-local branch name: `local_<user>_<host>`.
///
/// Stable for a given user/host pair, so re-running bootstrap on the same
/// machine lands on the same branch.
pub fn local_branch_name() -> String {
    let user = whoami::username();
    let host = whoami::fallible::hostname().unwrap_or_else(|_| "localhost".to_string());
    format!("local_{}_{}", user, host)
}

/// Build a new repository for the given directory pair.
///
/// Steps: refuse an existing `repo_dir`, create it, `git init` it as the
/// metadata store, install the ignore-everything policy, commit it, and
/// switch to the machine-local branch. In dry-run mode every step is
/// rendered instead of performed.
pub fn init(
    name: RepoName,
    repo_dir: PathBuf,
    tree_dir: PathBuf,
    executor: &Executor,
) -> Result<RepoDefinition, BootstrapError> {
    if repo_dir.exists() {
        return Err(BootstrapError::RepoDirExists { path: repo_dir });
    }

    let def = RepoDefinition::new(name, repo_dir, tree_dir);

    if executor.mode() == Mode::DryRun {
        println!("mkdir {}", def.repo_dir().display());
    } else {
        fs::create_dir(def.repo_dir()).map_err(|e| BootstrapError::Io {
            path: def.repo_dir().to_path_buf(),
            source: e,
        })?;
    }

    git_step(executor, &def, &["init", &path_arg(def.repo_dir())])?;

    let ignore_path = def.tree_dir().join(".gitignore");
    if executor.mode() == Mode::DryRun {
        println!("echo '*' > {}", ignore_path.display());
    } else {
        fs::write(&ignore_path, "*\n").map_err(|e| BootstrapError::Io {
            path: ignore_path.clone(),
            source: e,
        })?;
    }

    // translate() injects the -f; the blanket ignore would swallow a plain add
    git_step(executor, &def, &["add", &path_arg(&ignore_path)])?;
    git_step(
        executor,
        &def,
        &["commit", "-m", "initial commit (just gitignore)"],
    )?;

    switch_to_local_branch(executor, &def)?;

    Ok(def)
}

/// Set up a repository by cloning from a remote origin.
///
/// Clones bare so no checkout can fire against the populated working tree,
/// creates the machine-local branch, re-points HEAD to it, and only then
/// disables bareness and resets the index. The ordering is load-bearing.
pub fn clone(
    name: RepoName,
    repo_url: &str,
    repo_dir: PathBuf,
    tree_dir: PathBuf,
    executor: &Executor,
    verbosity: Verbosity,
) -> Result<RepoDefinition, BootstrapError> {
    if repo_dir.exists() {
        return Err(BootstrapError::RepoDirExists { path: repo_dir });
    }

    let def = RepoDefinition::new(name, repo_dir, tree_dir);

    // The store does not exist yet, so the clone itself runs without
    // injected context; every later step goes through the translator.
    raw_step(
        executor,
        &[
            "git",
            "clone",
            "--bare",
            repo_url,
            &path_arg(def.repo_dir()),
        ],
    )?;

    switch_to_local_branch(executor, &def)?;

    git_step(executor, &def, &["config", "--bool", "core.bare", "false"])?;
    git_step(executor, &def, &["reset"])?;

    if executor.mode() == Mode::Execute {
        output::print("Check state of the repository:", verbosity);
    }
    git_step(executor, &def, &["branch"])?;
    git_step(executor, &def, &["status", "-s"])?;

    Ok(def)
}

/// Create the machine-local branch and re-point the symbolic HEAD ref to
/// it, without a checkout.
fn switch_to_local_branch(executor: &Executor, def: &RepoDefinition) -> Result<(), BootstrapError> {
    let branch = local_branch_name();
    git_step(executor, def, &["branch", &branch])?;
    git_step(
        executor,
        def,
        &["symbolic-ref", "HEAD", &format!("refs/heads/{}", branch)],
    )
}

/// Run one translated git step, failing on a non-zero exit.
fn git_step(
    executor: &Executor,
    def: &RepoDefinition,
    args: &[&str],
) -> Result<(), BootstrapError> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    run_step(executor, translate(&args, def))
}

/// Run one verbatim step, failing on a non-zero exit.
fn raw_step(executor: &Executor, argv: &[&str]) -> Result<(), BootstrapError> {
    let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
    run_step(executor, GitInvocation::new(argv))
}

fn run_step(executor: &Executor, invocation: GitInvocation) -> Result<(), BootstrapError> {
    let code = executor.run(&invocation)?;
    if code != 0 {
        return Err(BootstrapError::GitStep {
            command: invocation.render(),
            code,
        });
    }
    Ok(())
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
