//! External dependency management.
//!
//! Checks that the external grep used by the delegated matcher can be started
//! and provides installation instructions when it cannot.

use crate::{Result, VgrepError};
use log::debug;
use std::process::Command;

/// External tool dependencies required by the delegated matcher.
#[derive(Debug)]
pub struct Dependencies {
    pub program: String,
    pub grep: bool,
}

impl Dependencies {
    /// Check that the given grep program starts, failing with install instructions if it is missing.
    pub fn check(program: &str) -> Result<Self> {
        let deps = Dependencies {
            program: program.to_string(),
            grep: check_tool(program),
        };

        if !deps.all_present() {
            return Err(VgrepError::MissingDependency {
                tool: deps.missing_tools().join(", "),
                install_instructions: deps.install_instructions(),
            });
        }
        debug!("Found external matcher: {}", program);
        Ok(deps)
    }

    /// Check if all required dependencies are installed.
    pub fn all_present(&self) -> bool {
        self.grep
    }

    /// Get list of missing dependencies.
    pub fn missing_tools(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if !self.grep {
            missing.push(self.program.clone());
        }
        missing
    }

    /// Get installation instructions.
    pub fn install_instructions(&self) -> String {
        let mut install = String::new();
        if !self.grep {
            install.push_str(&get_grep_install_instructions(&self.program));
        }
        install
    }
}

/// A tool is present when it can be spawned at all; the exit status is irrelevant.
fn check_tool(tool_name: &str) -> bool {
    Command::new(tool_name).arg("--version").output().is_ok()
}

fn get_grep_install_instructions(program: &str) -> String {
    format!(
        "`{}` could not be started.\n\
         Install GNU grep with your package manager, point --grep-cmd at a\n\
         grep-compatible program, or drop --grep to use the built-in regex engine.\n",
        program
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_reports_instructions() {
        let err = Dependencies::check("vgrep-definitely-not-a-real-program").unwrap_err();
        match err {
            VgrepError::MissingDependency {
                tool,
                install_instructions,
            } => {
                assert_eq!(tool, "vgrep-definitely-not-a-real-program");
                assert!(install_instructions.contains("--grep-cmd"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_present_tool_has_no_instructions() {
        let deps = Dependencies {
            program: "grep".to_string(),
            grep: true,
        };
        assert!(deps.all_present());
        assert!(deps.missing_tools().is_empty());
        assert!(deps.install_instructions().is_empty());
    }
}
