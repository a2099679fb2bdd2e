//! git::command
//!
//! Typed argument-vector abstraction for a single git invocation.
//!
//! # Design
//!
//! Invocations are carried as `Vec<String>` end to end; no shell is ever
//! involved in executing them. Quoting exists purely for the dry-run
//! rendering, and is isolated to [`quote`] so call sites never do inline
//! string formatting.

use std::borrow::Cow;
use std::path::PathBuf;

/// A fully qualified argument vector, ready to spawn or render.
///
/// `argv[0]` is the program (`git` for everything this tool produces).
/// `cwd` is the working-directory override required by the submodule
/// exception; it applies to the spawned child only, never to the wrapper
/// process itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInvocation {
    /// Program and arguments.
    pub argv: Vec<String>,

    /// Working directory for the child process, when overridden.
    pub cwd: Option<PathBuf>,
}

impl GitInvocation {
    /// Create an invocation with no working-directory override.
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv, cwd: None }
    }

    /// Create an invocation that runs with the given working directory.
    pub fn with_cwd(argv: Vec<String>, cwd: PathBuf) -> Self {
        Self {
            argv,
            cwd: Some(cwd),
        }
    }

    /// Render the invocation as a single copy-paste-friendly line.
    ///
    /// Tokens containing a space are wrapped in single quotes so the line
    /// can be pasted back into a shell.
    ///
    /// # Example
    ///
    /// ```
    /// use dotgit::git::GitInvocation;
    ///
    /// let inv = GitInvocation::new(vec![
    ///     "git".into(),
    ///     "commit".into(),
    ///     "-m".into(),
    ///     "initial commit".into(),
    /// ]);
    /// assert_eq!(inv.render(), "git commit -m 'initial commit'");
    /// ```
    pub fn render(&self) -> String {
        self.argv
            .iter()
            .map(|token| quote(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote a single token for rendering.
///
/// Only tokens containing a space are quoted; everything else passes
/// through untouched.
fn quote(token: &str) -> Cow<'_, str> {
    if token.contains(' ') {
        Cow::Owned(format!("'{}'", token))
    } else {
        Cow::Borrowed(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn renders_plain_tokens_verbatim() {
        let inv = GitInvocation::new(
            ["git", "--git-dir=/r", "--work-tree=/t", "status", "-s"]
                .map(String::from)
                .to_vec(),
        );
        assert_eq!(inv.render(), "git --git-dir=/r --work-tree=/t status -s");
    }

    #[test]
    fn quotes_spaced_tokens_only() {
        let inv = GitInvocation::new(
            ["git", "commit", "-m", "initial commit (just gitignore)"]
                .map(String::from)
                .to_vec(),
        );
        assert_eq!(
            inv.render(),
            "git commit -m 'initial commit (just gitignore)'"
        );
    }

    #[test]
    fn cwd_does_not_change_rendering() {
        let argv = ["git", "submodule", "update"].map(String::from).to_vec();
        let with = GitInvocation::with_cwd(argv.clone(), PathBuf::from("/home/u"));
        let without = GitInvocation::new(argv);
        assert_eq!(with.render(), without.render());
    }

    proptest! {
        // A rendered line of space-free tokens splits back into the
        // original argv.
        #[test]
        fn space_free_tokens_round_trip(argv in proptest::collection::vec("[!-~]{1,12}", 1..6)) {
            let inv = GitInvocation::new(argv.clone());
            let rendered = inv.render();
            let split: Vec<&str> = rendered.split(' ').collect();
            prop_assert_eq!(split, argv.iter().map(String::as_str).collect::<Vec<_>>());
        }

        // Any token containing a space comes back wrapped in single quotes.
        #[test]
        fn spaced_tokens_are_quoted(prefix in "[a-z]{1,5}", suffix in "[a-z]{1,5}") {
            let token = format!("{prefix} {suffix}");
            let inv = GitInvocation::new(vec!["git".into(), token.clone()]);
            prop_assert_eq!(inv.render(), format!("git '{}'", token));
        }
    }
}
