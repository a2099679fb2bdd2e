//! git::translate
//!
//! Translation of user-level argument vectors into git invocations.
//!
//! # Rules
//!
//! Applied in order:
//!
//! 1. **Alias resolution** - a first token matching a known alias replaces
//!    the entire argument vector with the alias template; trailing caller
//!    arguments are discarded (all-or-nothing substitution, not an append).
//! 2. **Force-add injection** - `add` gets `-f` inserted after it, so
//!    additions override the tree-wide ignore-everything policy.
//! 3. **Submodule exception** - `submodule add` gets `-f` after `add`; any
//!    other `submodule` subcommand runs with the child's working directory
//!    set to the tree dir and no `--work-tree` flag, because git's
//!    submodule machinery resolves relative paths from the process cwd
//!    rather than from an externally supplied work tree. Hard-coded to
//!    `submodule` only.
//! 4. **Context injection** - every invocation carries `--git-dir`, and all
//!    non-submodule invocations also carry `--work-tree`.

use std::borrow::Cow;

use crate::core::types::RepoDefinition;
use crate::git::command::GitInvocation;

/// Known command aliases.
///
/// A closed enumeration: anything that does not parse as an alias is
/// passed through to git untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alias {
    /// List all tracked files (`ls-tree` over the full tree at HEAD).
    Ls,
}

impl Alias {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "ls" => Some(Self::Ls),
            _ => None,
        }
    }

    fn template(self) -> &'static [&'static str] {
        match self {
            Self::Ls => &["ls-tree", "--full-tree", "--name-only", "-r", "HEAD"],
        }
    }
}

/// Apply alias resolution to a user argument vector.
///
/// On a match the entire vector is replaced by the alias template; any
/// trailing arguments the caller supplied are discarded.
pub fn resolve_alias(args: &[String]) -> Cow<'_, [String]> {
    match args.first().and_then(|t| Alias::parse(t)) {
        Some(alias) => Cow::Owned(alias.template().iter().map(|s| s.to_string()).collect()),
        None => Cow::Borrowed(args),
    }
}

/// Translate a user argument vector into a fully qualified git invocation
/// for the given repository definition.
pub fn translate(args: &[String], def: &RepoDefinition) -> GitInvocation {
    let mut args = resolve_alias(args).into_owned();

    let mut argv = vec![
        "git".to_string(),
        format!("--git-dir={}", def.repo_dir().display()),
    ];

    match args.first().map(String::as_str) {
        Some("submodule") => {
            if args.get(1).map(String::as_str) == Some("add") {
                args.insert(2, "-f".to_string());
            } else {
                // git submodule cds into the tree itself; an explicit
                // --work-tree would misresolve relative submodule paths.
                argv.extend(args);
                return GitInvocation::with_cwd(argv, def.tree_dir().to_path_buf());
            }
        }
        Some("add") => {
            args.insert(1, "-f".to_string());
            argv.push(format!("--work-tree={}", def.tree_dir().display()));
        }
        _ => {
            argv.push(format!("--work-tree={}", def.tree_dir().display()));
        }
    }

    argv.extend(args);
    GitInvocation::new(argv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RepoName;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn def() -> RepoDefinition {
        RepoDefinition::new(RepoName::new("primary").unwrap(), "/r.git", "/home/u")
    }

    #[test]
    fn alias_replaces_whole_vector() {
        let input = args(&["ls", "anything", "--else"]);
        let resolved = resolve_alias(&input);
        assert_eq!(
            resolved.as_ref(),
            args(&["ls-tree", "--full-tree", "--name-only", "-r", "HEAD"])
        );
    }

    #[test]
    fn non_alias_passes_through() {
        let input = args(&["status", "-s"]);
        let resolved = resolve_alias(&input);
        assert_eq!(resolved.as_ref(), input.as_slice());
    }

    #[test]
    fn alias_gets_full_context() {
        let inv = translate(&args(&["ls", "junk"]), &def());
        assert_eq!(
            inv.argv,
            args(&[
                "git",
                "--git-dir=/r.git",
                "--work-tree=/home/u",
                "ls-tree",
                "--full-tree",
                "--name-only",
                "-r",
                "HEAD",
            ])
        );
        assert_eq!(inv.cwd, None);
    }

    #[test]
    fn add_is_forced() {
        let inv = translate(&args(&["add", "f.txt"]), &def());
        assert_eq!(
            inv.argv,
            args(&[
                "git",
                "--git-dir=/r.git",
                "--work-tree=/home/u",
                "add",
                "-f",
                "f.txt",
            ])
        );
    }

    #[test]
    fn submodule_add_is_forced_without_work_tree() {
        let inv = translate(&args(&["submodule", "add", "p"]), &def());
        assert_eq!(
            inv.argv,
            args(&["git", "--git-dir=/r.git", "submodule", "add", "-f", "p"])
        );
        assert_eq!(inv.cwd, None);
    }

    #[test]
    fn submodule_update_runs_in_tree_dir() {
        let inv = translate(&args(&["submodule", "update"]), &def());
        assert_eq!(
            inv.argv,
            args(&["git", "--git-dir=/r.git", "submodule", "update"])
        );
        assert_eq!(inv.cwd.as_deref(), Some(std::path::Path::new("/home/u")));
        assert!(!inv.argv.iter().any(|t| t.starts_with("--work-tree")));
    }

    #[test]
    fn ordinary_commands_get_both_flags() {
        let inv = translate(&args(&["commit", "-m", "msg"]), &def());
        assert_eq!(
            inv.argv,
            args(&[
                "git",
                "--git-dir=/r.git",
                "--work-tree=/home/u",
                "commit",
                "-m",
                "msg",
            ])
        );
    }
}
