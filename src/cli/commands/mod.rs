//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the engine to execute the command
//! 3. Formats and displays output, returning an exit code
//!
//! Handlers do NOT spawn subprocesses or touch the registry file directly;
//! the engine and registry modules do.

mod bootstrap_cmd;
mod completion;
mod passthrough;
mod repos;

pub use bootstrap_cmd::{clone, init};
pub use completion::completion;
pub use passthrough::passthrough;
pub use repos::repos;

use anyhow::Result;

use crate::cli::args::Command;
use crate::core::types::RepoName;
use crate::engine::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, repo: Option<RepoName>, ctx: &Context) -> Result<i32> {
    match command {
        Command::Init { repo_dir, tree_dir } => init(ctx, repo, repo_dir, tree_dir),
        Command::Clone {
            url,
            repo_dir,
            tree_dir,
        } => clone(ctx, repo, &url, repo_dir, tree_dir),
        Command::Repos => repos(),
        Command::Completion { shell } => {
            completion(shell)?;
            Ok(0)
        }
        Command::Git(args) => passthrough(ctx, repo, &args),
    }
}
