//! Delegated matching through an external grep.
//!
//! The input lines are fed to the tool on stdin and its `-n` output
//! (`<line>:<content>`) is parsed back into line indices. grep decides which
//! lines match; highlights come from mirroring the pattern in-process.

use super::posix::{self, Flavor};
use super::{find_spans, Highlight, MatchState, Matcher};
use crate::cli::MatcherKind;
use crate::constants::GREP_NO_MATCH_EXIT_CODE;
use crate::error::MatchError;
use crate::input::LineSet;
use log::{debug, error, warn};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

/// Matcher that shells out to grep with user supplied extra arguments
#[derive(Debug, Clone)]
pub struct GrepMatcher {
    pub program: String,
    pub extra_args: Vec<String>,
}

impl GrepMatcher {
    pub fn new(program: &str, extra_args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            extra_args,
        }
    }

    /// Arguments for one invocation; the pattern always comes last
    pub fn generate_grep_args(&self, pattern: &str) -> Vec<String> {
        debug!("Generating grep args for pattern: {}", pattern);
        // -a: a NUL byte in any line must not turn the output into
        // "Binary file matches"
        let mut args = vec!["-n".to_string(), "-a".to_string()];
        args.extend(self.extra_args.iter().cloned());
        // -h after the user's args so -H cannot prefix "(standard input):"
        args.push("-h".to_string());
        // -e keeps patterns starting with '-' from being read as options
        args.push("-e".to_string());
        args.push(pattern.to_string());
        args
    }

    /// Run the tool over `lines` and return its stdout
    fn run(&self, pattern: &str, lines: &LineSet) -> Result<String, MatchError> {
        let args = self.generate_grep_args(pattern);
        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                MatchError::ToolFailure(format!("failed to start {}: {}", self.program, e))
            })?;

        let mut input = String::new();
        for line in lines.iter() {
            input.push_str(line);
            input.push('\n');
        }

        // Fed from another thread so a full stdout pipe cannot block the write
        let writer = child.stdin.take().map(|mut stdin| {
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child.wait_with_output().map_err(|e| {
            MatchError::ToolFailure(format!("failed to wait for {}: {}", self.program, e))
        })?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(Ok(())) => {}
                // grep may exit before reading everything (e.g. -m, -q)
                Ok(Err(e)) => warn!("Writing to grep stdin: {}", e),
                Err(_) => error!("grep stdin writer panicked"),
            }
        }

        match output.status.code() {
            Some(0) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
            Some(GREP_NO_MATCH_EXIT_CODE) => Ok(String::new()),
            Some(code) => Err(MatchError::ToolFailure(format!(
                "{} exited with status {}: {}",
                self.program,
                code,
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
            None => Err(MatchError::ToolFailure(format!(
                "{} was terminated by a signal",
                self.program
            ))),
        }
    }

    /// Regex used only to place highlights inside lines grep reported.
    /// Follows the syntax, case and anchoring options among the extra
    /// arguments. `None` when the pattern cannot be mirrored in-process.
    fn highlight_regex(&self, pattern: &str) -> Option<Regex> {
        let mut syntax = Syntax::Basic;
        let mut ignore_case = false;
        let mut word = false;
        let mut whole_line = false;

        for arg in &self.extra_args {
            match arg.as_str() {
                "--ignore-case" => ignore_case = true,
                "--no-ignore-case" => ignore_case = false,
                "--basic-regexp" => syntax = Syntax::Basic,
                "--extended-regexp" => syntax = Syntax::Extended,
                "--fixed-strings" => syntax = Syntax::Fixed,
                "--perl-regexp" => syntax = Syntax::Perl,
                "--word-regexp" => word = true,
                "--line-regexp" => whole_line = true,
                "--invert-match" => return None,
                short if short.starts_with('-') && !short.starts_with("--") => {
                    for flag in short[1..].chars() {
                        match flag {
                            'v' => return None,
                            'i' | 'y' => ignore_case = true,
                            'G' => syntax = Syntax::Basic,
                            'E' => syntax = Syntax::Extended,
                            'F' => syntax = Syntax::Fixed,
                            'P' => syntax = Syntax::Perl,
                            'w' => word = true,
                            'x' => whole_line = true,
                            // The rest of the cluster is this option's value
                            'A' | 'B' | 'C' | 'D' | 'd' | 'e' | 'f' | 'm' => break,
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }

        let body = match syntax {
            Syntax::Basic => posix::translate(pattern, Flavor::Basic)?,
            Syntax::Extended => posix::translate(pattern, Flavor::Extended)?,
            Syntax::Fixed => regex::escape(pattern),
            Syntax::Perl => pattern.to_string(),
        };
        let source = if whole_line {
            format!("^(?:{})$", body)
        } else if word {
            format!(r"\b(?:{})\b", body)
        } else {
            body
        };

        RegexBuilder::new(&source)
            .case_insensitive(ignore_case)
            .build()
            .ok()
    }
}

/// Pattern syntax selected by the extra arguments; the last one given wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Basic,
    Extended,
    Fixed,
    Perl,
}

impl Matcher for GrepMatcher {
    fn find_matches(&self, pattern: &str, lines: &LineSet) -> Result<MatchState, MatchError> {
        if pattern.is_empty() {
            return Ok(MatchState::unmatched(lines.len()));
        }

        let stdout = self.run(pattern, lines)?;
        let matched: HashSet<usize> = parse_numbered_output(&stdout, lines.len())
            .into_iter()
            .collect();
        // e.g. -c or -l among the extra args
        if matched.is_empty() && !stdout.trim().is_empty() {
            let first = stdout.lines().next().unwrap_or_default();
            warn!("Unparseable grep output: {:?}", first);
            return Err(MatchError::ToolFailure(format!(
                "unexpected output {:?}, expected <line>:<text>",
                first
            )));
        }
        let highlighter = self.highlight_regex(pattern);

        let per_line: Vec<Option<Vec<Highlight>>> = lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                if !matched.contains(&idx) {
                    return None;
                }
                let spans = match &highlighter {
                    Some(re) => find_spans(re, line).unwrap_or_default(),
                    None if line.is_empty() => Vec::new(),
                    None => vec![0..line.len()],
                };
                Some(spans)
            })
            .collect();

        let state = MatchState::from_lines(per_line);
        debug!("grep matched {} of {} lines", state.count(), state.len());
        Ok(state)
    }

    fn kind(&self) -> MatcherKind {
        MatcherKind::Grep
    }
}

/// Parse `<1-based line>:<content>` lines into 0-based indices.
/// Lines without a leading number, and numbers outside `0..line_count`, are skipped.
pub fn parse_numbered_output(output: &str, line_count: usize) -> Vec<usize> {
    output
        .lines()
        .filter_map(|line| line.split_once(':'))
        .filter_map(|(number, _)| number.parse::<usize>().ok())
        .filter(|&number| number >= 1 && number <= line_count)
        .map(|number| number - 1)
        .collect()
}
