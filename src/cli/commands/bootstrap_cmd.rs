//! init / clone commands - bootstrap a tracking repository

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use crate::core::paths;
use crate::core::registry::{Registry, DEFAULT_REPO};
use crate::core::types::RepoName;
use crate::engine::{bootstrap, Context, Executor};
use crate::ui::output;

/// Create a new tracking repository and register it.
pub fn init(
    ctx: &Context,
    repo: Option<RepoName>,
    repo_dir: PathBuf,
    tree_dir: Option<PathBuf>,
) -> Result<i32> {
    let (name, mut registry) = prepare(ctx, repo)?;
    let tree_dir = resolve_tree_dir(tree_dir)?;

    let executor = Executor::new(ctx.mode());
    let def = bootstrap::init(name, repo_dir, tree_dir, &executor)
        .context("repository init failed")?;

    if !ctx.dry_run {
        registry.register(&def)?;
        registry.save()?;
        output::print(
            format!(
                "Repository '{}' registered in {}",
                def.name(),
                registry.path().display()
            ),
            ctx.verbosity(),
        );
    }

    Ok(0)
}

/// Clone a tracking repository from a remote origin and register it.
pub fn clone(
    ctx: &Context,
    repo: Option<RepoName>,
    url: &str,
    repo_dir: PathBuf,
    tree_dir: Option<PathBuf>,
) -> Result<i32> {
    let (name, mut registry) = prepare(ctx, repo)?;
    let tree_dir = resolve_tree_dir(tree_dir)?;

    let executor = Executor::new(ctx.mode());
    let def = bootstrap::clone(name, url, repo_dir, tree_dir, &executor, ctx.verbosity())
        .context("repository clone failed")?;

    if !ctx.dry_run {
        registry.register(&def)?;
        registry.save()?;
        output::print(
            format!(
                "Repository '{}' registered in {}",
                def.name(),
                registry.path().display()
            ),
            ctx.verbosity(),
        );
    }

    Ok(0)
}

/// Load the registry and refuse a name that is already taken.
///
/// The refusal happens before any bootstrap step runs, so a duplicate name
/// never mutates anything.
fn prepare(ctx: &Context, repo: Option<RepoName>) -> Result<(RepoName, Registry)> {
    let name =
        repo.unwrap_or_else(|| RepoName::new(DEFAULT_REPO).expect("sentinel name is valid"));

    let registry_path = paths::registry_file().context("failed to locate registry file")?;
    let registry = Registry::load(registry_path)?;
    output::debug(
        format!("using registry file: {}", registry.path().display()),
        ctx.verbosity(),
    );

    if registry.contains(&name) {
        bail!(
            "repository '{}' is already configured; refusing to overwrite (see 'dot repos')",
            name
        );
    }

    Ok((name, registry))
}

fn resolve_tree_dir(tree_dir: Option<PathBuf>) -> Result<PathBuf> {
    match tree_dir {
        Some(dir) => Ok(dir),
        None => paths::default_tree_dir().context("failed to resolve home directory"),
    }
}
