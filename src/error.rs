//! Error handling.
//!
//! `MatchError` is what a matcher reports back to the interaction loop and is
//! printed as-is in the status line; it never ends the session. `VgrepError`
//! is the application level error that ends the process and gets printed to
//! stderr.

use colored::*;
use std::fmt;

/// Result type alias for the application.
pub type Result<T> = std::result::Result<T, VgrepError>;

/// Failure to turn a pattern into a match set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Pattern did not compile or was rejected by validation.
    InvalidPattern { pattern: String, reason: String },

    /// External search tool could not be run or exited abnormally.
    ToolFailure(String),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidPattern { reason, .. } => write!(f, "regex error: {}", reason),
            MatchError::ToolFailure(msg) => write!(f, "grep error: {}", msg),
        }
    }
}

impl std::error::Error for MatchError {}

impl MatchError {
    /// Create a invalid pattern error
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        MatchError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Main error type for the application.
#[derive(Debug)]
pub enum VgrepError {
    /// Missing required dependency.
    MissingDependency {
        tool: String,
        install_instructions: String,
    },

    /// IO error.
    IoError(std::io::Error),

    /// TUI rendering error.
    TuiError(String),

    /// Input validation error.
    InvalidInput(String),

    /// Input file could not be opened or read.
    InputUnavailable { path: String, reason: String },

    /// Terminal related error.
    TerminalError(String),
}

impl fmt::Display for VgrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warn_msg = match self {
            VgrepError::MissingDependency {
                tool,
                install_instructions,
            } => format!(
                "Missing dependency: {}\n Install instructions: {}",
                tool, install_instructions
            ),
            VgrepError::IoError(err) => format!("IO error: {}", err),
            VgrepError::TuiError(err) => format!("TUI error: {}", err),
            VgrepError::InvalidInput(err) => format!("Invalid input: {}", err),
            VgrepError::InputUnavailable { path, reason } => {
                format!("Cannot read input: Path: {}\n Reason: {}", path, reason)
            }
            VgrepError::TerminalError(err) => format!(
                "Terminal error: {}\n Try running in a proper terminal.",
                err
            ),
        };
        write!(f, "{}", warn_msg.red().bold())
    }
}

impl std::error::Error for VgrepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VgrepError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VgrepError {
    fn from(err: std::io::Error) -> Self {
        VgrepError::IoError(err)
    }
}

impl VgrepError {
    /// Create a terminal error with context
    pub fn terminal_error(err: &str) -> Self {
        VgrepError::TerminalError(err.to_string())
    }

    /// Create an input error for a file that could not be read
    pub fn input_unavailable(path: &str, reason: &str) -> Self {
        VgrepError::InputUnavailable {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            VgrepError::InvalidInput(_) => true,
            VgrepError::InputUnavailable { .. } => false,
            VgrepError::MissingDependency { .. } => false,
            VgrepError::TerminalError(_) => false,
            VgrepError::IoError(_) => false,
            VgrepError::TuiError(_) => false,
        }
    }

    /// Get user-friendly recovery suggestion
    pub fn get_recovery_suggestion(&self) -> Option<String> {
        match self {
            VgrepError::InvalidInput(..) => {
                Some("Please check your input and try again.".to_string())
            }
            VgrepError::InputUnavailable { .. } => {
                Some("Check that the file exists and is readable.".to_string())
            }
            VgrepError::MissingDependency {
                install_instructions,
                ..
            } => Some(install_instructions.clone()),
            _ => None,
        }
    }
}
