//! engine::exec
//!
//! The single process executor.
//!
//! # Executor Contract
//!
//! All subprocess spawning in dotgit flows through [`Executor::run`]. In
//! execute mode the child inherits stdio and the caller blocks until it
//! exits; the child's exit status is returned unchanged, because this tool
//! is deliberately transparent to git's own exit semantics. In dry-run mode
//! nothing is spawned and nothing on disk changes: the invocation is
//! rendered as a single printable line instead.
//!
//! Dry-run is the primary safety mechanism for previewing destructive
//! operations (bootstrap, force-add) before committing to them.

use std::process::Command;

use thiserror::Error;

use crate::git::GitInvocation;

/// Errors from execution.
///
/// A child that runs and exits non-zero is NOT an error here; its exit code
/// is the result. Only failing to run it at all is.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The argument vector was empty.
    #[error("cannot execute an empty argument vector")]
    EmptyArgv,

    /// The child process could not be spawned.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        /// The program that failed to start
        program: String,
        /// The underlying OS error
        source: std::io::Error,
    },
}

/// Execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Spawn the invocation and wait for it.
    Execute,
    /// Render the invocation to stdout; spawn nothing, mutate nothing.
    DryRun,
}

/// The process executor.
pub struct Executor {
    mode: Mode,
}

impl Executor {
    /// Create an executor in the given mode.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// The mode this executor runs in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Run (or render) an invocation, returning the exit code.
    ///
    /// Dry-run always returns 0. A child terminated by a signal maps to
    /// exit code 1.
    pub fn run(&self, invocation: &GitInvocation) -> Result<i32, ExecError> {
        match self.mode {
            Mode::DryRun => {
                if let Some(cwd) = &invocation.cwd {
                    println!("cd {}", cwd.display());
                }
                println!("{}", invocation.render());
                Ok(0)
            }
            Mode::Execute => {
                let (program, args) = invocation.argv.split_first().ok_or(ExecError::EmptyArgv)?;

                let mut command = Command::new(program);
                command.args(args);
                if let Some(cwd) = &invocation.cwd {
                    command.current_dir(cwd);
                }

                let status = command.status().map_err(|e| ExecError::Spawn {
                    program: program.clone(),
                    source: e,
                })?;

                Ok(status.code().unwrap_or(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_spawns_nothing() {
        // The program does not exist; dry-run must still succeed because it
        // never spawns.
        let executor = Executor::new(Mode::DryRun);
        let inv = GitInvocation::new(vec!["definitely-not-a-real-binary".into()]);
        assert_eq!(executor.run(&inv).unwrap(), 0);
    }

    #[test]
    fn execute_propagates_exit_code() {
        let executor = Executor::new(Mode::Execute);
        let inv = GitInvocation::new(vec!["sh".into(), "-c".into(), "exit 7".into()]);
        assert_eq!(executor.run(&inv).unwrap(), 7);
    }

    #[test]
    fn execute_reports_spawn_failure() {
        let executor = Executor::new(Mode::Execute);
        let inv = GitInvocation::new(vec!["definitely-not-a-real-binary".into()]);
        assert!(matches!(
            executor.run(&inv),
            Err(ExecError::Spawn { .. })
        ));
    }

    #[test]
    fn empty_argv_is_an_error() {
        let executor = Executor::new(Mode::Execute);
        let inv = GitInvocation::new(Vec::new());
        assert!(matches!(executor.run(&inv), Err(ExecError::EmptyArgv)));
    }

    #[test]
    fn execute_honors_cwd_override() {
        let temp = tempfile::TempDir::new().unwrap();
        let executor = Executor::new(Mode::Execute);
        let marker = "cwd-marker";
        let inv = GitInvocation::with_cwd(
            vec!["sh".into(), "-c".into(), format!("touch {marker}")],
            temp.path().to_path_buf(),
        );
        assert_eq!(executor.run(&inv).unwrap(), 0);
        assert!(temp.path().join(marker).exists());
    }
}
