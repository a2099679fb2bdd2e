//! dot - git wrapper for tracking dotfiles in place

use std::process;

fn main() {
    match dotgit::cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            dotgit::ui::output::error(format!("{:#}", err));
            process::exit(1);
        }
    }
}
