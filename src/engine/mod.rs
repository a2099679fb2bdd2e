//! engine
//!
//! Execution context, process executor, bootstrap, and the repository
//! orchestrating value.
//!
//! # Architecture
//!
//! The engine is where commands actually happen. CLI handlers resolve a
//! repository definition, then hand an argument vector to a [`Repository`],
//! which translates it (see [`crate::git`]) and passes the resulting
//! invocation to the [`Executor`]. Bootstrap commands run their fixed step
//! sequences through the same executor, so dry-run previews cover them too.
//!
//! # Invariants
//!
//! - The executor is the only component that spawns subprocesses
//! - In dry-run mode nothing is spawned and nothing on disk changes
//! - Bootstrap refuses to reuse an existing metadata store directory

pub mod bootstrap;
pub mod exec;
pub mod repo;

pub use bootstrap::{clone, init, local_branch_name, BootstrapError};
pub use exec::{ExecError, Executor, Mode};
pub use repo::Repository;

use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command
/// behavior. Not persisted anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// Dry-run mode: render commands instead of executing them.
    pub dry_run: bool,

    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// The executor mode this context selects.
    pub fn mode(&self) -> Mode {
        if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Execute
        }
    }

    /// The output verbosity this context selects.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.dry_run)
    }
}
