//! Dotgit - a git wrapper for tracking dotfiles in place
//!
//! Dotgit turns a home directory into a selectively tracked git working tree:
//! the repository's metadata store lives elsewhere (e.g. `~/.dotrepo.git`),
//! everything in the tree is ignored by default, and only files explicitly
//! force-added are ever tracked. The `dot` binary proxies arbitrary git
//! subcommands to the `git` binary with the right `--git-dir`/`--work-tree`
//! context injected, so tracked files never need symlinks or copies.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Execution context, process executor, bootstrap, repository
//! - [`core`] - Domain types, paths, and the persisted registry
//! - [`git`] - Single doorway for constructing git invocations
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. Only the executor spawns subprocesses; dry-run mode spawns none and
//!    mutates nothing
//! 2. Every git invocation carries explicit repository/tree context (or, for
//!    the submodule exception, an explicit working-directory override)
//! 3. Bootstrap never overwrites an existing metadata store or registry entry

pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
pub mod ui;
