//! engine::repo
//!
//! The repository orchestrating value.
//!
//! Composes a registry-resolved [`RepoDefinition`] with the translator and
//! the executor to carry out one user command. This is the pass-through
//! path: everything that is not a bootstrap or registry command ends up
//! here.

use super::exec::{ExecError, Executor};
use crate::core::types::RepoDefinition;
use crate::git::translate;

/// A resolved repository bound to an executor.
pub struct Repository<'a> {
    def: RepoDefinition,
    executor: &'a Executor,
}

impl<'a> Repository<'a> {
    /// Bind a definition to an executor.
    pub fn new(def: RepoDefinition, executor: &'a Executor) -> Self {
        Self { def, executor }
    }

    /// The definition this repository operates on.
    pub fn definition(&self) -> &RepoDefinition {
        &self.def
    }

    /// Translate and run one user command, returning git's exit code.
    ///
    /// An empty argument vector is a no-op success; the CLI layer never
    /// produces one, but the contract is total.
    pub fn wrap(&self, args: &[String]) -> Result<i32, ExecError> {
        if args.is_empty() {
            return Ok(0);
        }
        let invocation = translate(args, &self.def);
        self.executor.run(&invocation)
    }
}
