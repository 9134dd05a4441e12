//! vgrep - interactive regex filter for the terminal
//!
//! Reads lines from stdin or a file, lets the user type a pattern while
//! matching lines are highlighted live, and prints the matched lines (or the
//! pattern) once the user confirms.

pub mod cli;
pub mod constants;
pub mod dependencies;
pub mod error;
pub mod input;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod tui;
pub mod validation;

pub use cli::Cli;
pub use error::{MatchError, Result, VgrepError};
