//! cli
//!
//! Command-line interface layer for dotgit.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Map outcomes to process exit codes
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! the [`crate::engine`] for execution. Handlers never spawn subprocesses
//! or mutate the registry themselves.
//!
//! # Exit Codes
//!
//! - `0` - success (including `--help`/`--version`)
//! - `1` - usage error, missing or duplicate repository definition, or
//!   bootstrap failure
//! - anything else - a pass-through git command's own exit status,
//!   propagated unmodified

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};
use clap::error::ErrorKind;
use clap::CommandFactory;

use crate::core::types::RepoName;
use crate::engine::Context;

/// Run the CLI application, returning the process exit code.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<i32> {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(err) => return parse_error_code(err),
    };

    let ctx = Context {
        dry_run: cli.debug,
        quiet: cli.quiet,
    };

    let repo = cli
        .repo
        .as_deref()
        .map(RepoName::new)
        .transpose()
        .context("invalid -r/--repo value")?;

    commands::dispatch(cli.command, repo, &ctx)
}

/// Map a clap parse outcome to an exit code.
///
/// Help and version requests are successes; genuine usage errors exit 1
/// (never clap's default 2) so every failure of this tool looks the same
/// to scripts.
fn parse_error_code(err: clap::Error) -> Result<i32> {
    match err.kind() {
        // Bare `dot` prints help on stdout and succeeds.
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Cli::command()
                .print_help()
                .context("failed to render help")?;
            Ok(0)
        }
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print().context("failed to render help")?;
            Ok(0)
        }
        _ => {
            err.print().context("failed to render usage")?;
            Ok(1)
        }
    }
}
