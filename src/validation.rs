//! Input validation.
//!
//! Provides validation for typed patterns and the input file path

use crate::constants::*;
use crate::error::MatchError;
use crate::{Result, VgrepError};

/// Input validator for search patterns and user inputs
pub struct InputValidator;

impl InputValidator {
    /// Validates a typed pattern before it reaches a matcher.
    /// An empty pattern is valid and means "match nothing".
    pub fn validate_pattern(pattern: &str) -> std::result::Result<(), MatchError> {
        if pattern.len() > PATTERN_MAX_LENGTH {
            return Err(MatchError::invalid_pattern(
                pattern,
                &format!(
                    "pattern cannot be longer than {} characters",
                    PATTERN_MAX_LENGTH
                ),
            ));
        }

        // Cannot be passed as a process argument
        if pattern.contains('\0') {
            return Err(MatchError::invalid_pattern(
                pattern,
                "pattern contains a null byte",
            ));
        }

        Ok(())
    }

    /// Validates file path
    pub fn validate_file_path(path: &str) -> Result<String> {
        let trimmed = path.trim();

        if trimmed.is_empty() {
            return Err(VgrepError::InvalidInput(
                "File path cannot be empty".to_string(),
            ));
        }

        if trimmed.contains('\0') {
            return Err(VgrepError::InvalidInput(
                "File path contains null bytes".to_string(),
            ));
        }

        if trimmed.len() > MAX_PATH_LENGTH {
            return Err(VgrepError::InvalidInput(format!(
                "File path is too long (max length is {} characters)",
                MAX_PATH_LENGTH
            )));
        }

        Ok(trimmed.to_string())
    }
}
