//! passthrough - forward any other git subcommand with injected context

use anyhow::{Context as _, Result};

use crate::core::paths;
use crate::core::registry::Registry;
use crate::core::types::RepoName;
use crate::engine::{Context, Executor, Repository};
use crate::ui::output;

/// Resolve the selected repository and run one git command against it.
///
/// Returns git's own exit code unchanged; this tool never interprets or
/// retries a pass-through failure.
pub fn passthrough(ctx: &Context, repo: Option<RepoName>, args: &[String]) -> Result<i32> {
    let registry_path = paths::registry_file().context("failed to locate registry file")?;
    let registry = Registry::load(registry_path)?;
    output::debug(
        format!("using registry file: {}", registry.path().display()),
        ctx.verbosity(),
    );

    let def = registry.resolve(repo.as_ref())?;

    let executor = Executor::new(ctx.mode());
    let repository = Repository::new(def, &executor);
    let code = repository.wrap(args)?;
    Ok(code)
}
