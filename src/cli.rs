//! Command Line Interface module
//!
//! Handles command-line argument parsing using clap. Everything after `--` is
//! handed to the external grep untouched.

use crate::constants::DEFAULT_GREP_PROGRAM;
use crate::tui::render::Layout;
use clap::Parser;
use std::path::PathBuf;

/// vgrep - interactive regex filter for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "vgrep",
    about = "Interactive regex filter: type a pattern, watch matching lines light up",
    long_about = "vgrep - reads lines from stdin or a file, filters them live while you type a pattern
and prints the matching lines (or the pattern) on Enter.

    EXAMPLES:
        cat log.txt | vgrep                # Filter stdin with a Rust regex
        vgrep src/main.rs                  # Filter a file
        vgrep -d access.log                # Unmatched | matched side by side
        vgrep -p data.csv                  # Print the pattern instead of the lines
        vgrep -g data.txt -- -i -E         # Delegate matching to grep -i -E

    KEYS:
        type to edit the pattern, Enter to accept, Esc / Ctrl-C to cancel,
        arrows / PgUp / PgDn / Home / End to scroll
    "
)]
#[command(version)]
pub struct Cli {
    /// File to read when stdin is not piped
    #[arg(help = "Input file (ignored when stdin is piped)")]
    pub file: Option<PathBuf>,

    /// Dual column layout
    #[arg(short, long, help = "Show unmatched and matched lines in two columns")]
    pub dual: bool,

    /// Print the pattern instead of the matches
    #[arg(short, long, help = "Print the final pattern instead of the matched lines")]
    pub print_pattern: bool,

    /// Use the external grep for matching
    #[arg(short, long, help = "Match with an external grep instead of the built-in regex engine")]
    pub grep: bool,

    /// Program used by the delegated matcher
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_GREP_PROGRAM, help = "grep-compatible program used with --grep")]
    pub grep_cmd: String,

    /// debug mode
    #[arg(long, help = "Debug mode (logging to temp file with timestamps)")]
    pub debug: bool,

    /// Extra arguments for the external grep
    #[arg(last = true, value_name = "GREP_ARGS", help = "Arguments passed through to grep (implies --grep)")]
    pub grep_args: Vec<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate command line arguments
    pub fn validate(&self) -> bool {
        if self.matcher_kind() == MatcherKind::Grep && self.grep_cmd.trim().is_empty() {
            eprintln!("Error: --grep-cmd cannot be empty");
            return false;
        }

        if let Some(file) = &self.file {
            if file.as_os_str().is_empty() {
                eprintln!("Error: Input file path cannot be empty");
                return false;
            }
            if file.is_dir() {
                eprintln!("Error: Input path must be a file, not a directory");
                return false;
            }
        }

        true
    }

    /// Which matching strategy the session uses
    pub fn matcher_kind(&self) -> MatcherKind {
        if self.grep || !self.grep_args.is_empty() {
            MatcherKind::Grep
        } else {
            MatcherKind::Regex
        }
    }

    /// Layout fixed for the whole session
    pub fn layout(&self) -> Layout {
        if self.dual {
            Layout::Dual
        } else {
            Layout::Single
        }
    }
}

/// Matching strategies supported by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    Regex,
    Grep,
}

impl MatcherKind {
    /// Get the matcher kind as a string
    pub fn name(&self) -> &'static str {
        match self {
            MatcherKind::Regex => "regex",
            MatcherKind::Grep => "grep",
        }
    }

    /// Get the matcher kind description
    pub fn description(&self) -> &'static str {
        match self {
            MatcherKind::Regex => "Built-in regular expression engine (default)",
            MatcherKind::Grep => "External grep with passthrough arguments",
        }
    }
}
