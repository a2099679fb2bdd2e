//! ui
//!
//! User-facing output utilities.
//!
//! # Design
//!
//! All informational output flows through [`output`] so quiet mode and
//! debug output behave consistently everywhere. Git's own output is not
//! touched: pass-through children inherit stdio directly.

pub mod output;
