//! Constants used throughout the application.
//!
//! This module provides constants used throughout the application.

pub const PATTERN_MAX_LENGTH: usize = 1000;
pub const MAX_PATH_LENGTH: usize = 4096;

/// Separator drawn between the unmatched and matched columns
pub const DUAL_SEPARATOR: &str = " │ ";
/// Terminals narrower than this use `FALLBACK_TERMINAL_WIDTH` for dual layout
pub const MIN_DUAL_WIDTH: usize = 20;
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// Rows taken by the status/prompt line below the viewport
pub const STATUS_HEIGHT: u16 = 1;
pub const MOUSE_SCROLL_LINES: usize = 3;
pub const EVENT_POLL_MS: u64 = 250;

pub const NO_INPUT_PLACEHOLDER: &str = "(no input, pipe data or pass a file)";
pub const PATTERN_PLACEHOLDER: &str = "^[.*]$";
pub const PROMPT: &str = "> ";

pub const DEFAULT_GREP_PROGRAM: &str = "grep";
/// grep exits with 1 when nothing matched
pub const GREP_NO_MATCH_EXIT_CODE: i32 = 1;

pub const DEBUG_LOG_FILE: &str = "vgrep-debug.log";
