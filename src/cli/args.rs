//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! Flags go before the command (anything after a pass-through command
//! belongs to git, not to this tool):
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `-d/--debug`: Dry-run mode - print commands instead of executing them
//! - `-r/--repo NAME`: Select a repository other than the primary one
//! - `-q/--quiet`: Minimal output
//!
//! # Pass-Through
//!
//! Any first token that is not a built-in subcommand is forwarded to git
//! with repository context injected, so `dot add ~/.vimrc`, `dot commit`,
//! `dot push` and the rest work without being declared here.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dotgit - track dotfiles in place with git
#[derive(Parser, Debug)]
#[command(name = "dot")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "\
TYPICAL SESSION:
    # Create the tracking repository (metadata lives outside $HOME)
    dot init ~/.dotrepo.git

    # Start tracking a file (force-added past the ignore-everything policy)
    dot add ~/.gitconfig
    dot commit -m 'initial git configuration'

    # See exactly what any command would run
    dot -d add ~/.vimrc

    # List tracked files / known repositories
    dot ls
    dot repos")]
pub struct Cli {
    /// Dry-run: print each command instead of executing it
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Use this repository instead of the primary one
    #[arg(short = 'r', long = "repo", value_name = "NAME")]
    pub repo: Option<String>,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments, returning any parse error to the
    /// caller instead of exiting.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new tracking repository
    #[command(
        name = "init",
        long_about = "Create a new tracking repository.\n\n\
            Builds a git metadata store at REPO_DIR overlaying TREE_DIR \
            (your home directory unless given), installs a tree-root \
            .gitignore containing '*' so nothing is tracked by accident, \
            commits it, and switches to a machine-local branch. The working \
            tree itself is never checked out or otherwise disturbed.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Track dotfiles in your home directory
    dot init ~/.dotrepo.git

    # Preview every step first
    dot -d init ~/.dotrepo.git

    # A second, independent repository for another tree
    dot -r work init ~/work/.dotrepo.git ~/work"
    )]
    Init {
        /// Path for the new metadata store (e.g. ~/.dotrepo.git)
        repo_dir: PathBuf,

        /// Working tree to overlay (defaults to your home directory)
        tree_dir: Option<PathBuf>,
    },

    /// Clone a tracking repository from a remote origin
    #[command(
        name = "clone",
        long_about = "Clone a tracking repository from a remote origin.\n\n\
            Clones bare so nothing is checked out over your existing files, \
            creates a machine-local branch, re-points HEAD to it, and only \
            then re-enables the working tree and resets the index. Finishes \
            by printing the branch list and a short status for inspection.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bring your dotfiles to a new machine
    dot clone git@example.com:me/dotfiles.git ~/.dotrepo.git

    # Then materialize tracked files deliberately, e.g.
    dot checkout -- ~/.gitconfig"
    )]
    Clone {
        /// URL of the origin repository
        url: String,

        /// Path for the local metadata store
        repo_dir: PathBuf,

        /// Working tree to overlay (defaults to your home directory)
        tree_dir: Option<PathBuf>,
    },

    /// List all configured repositories
    #[command(
        name = "repos",
        long_about = "List all configured repositories in registration order.\n\n\
            Names come from the registry file; pass one to -r/--repo to \
            address a repository other than the primary one."
    )]
    Repos,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the \
            output to your shell's configuration to enable tab-completion.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    dot completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    dot completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Any other git subcommand, run against the selected repository
    #[command(external_subcommand)]
    Git(Vec<String>),
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
