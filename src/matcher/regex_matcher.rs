//! In-process matching with the `regex` crate.

use super::{find_spans, MatchState, Matcher};
use crate::cli::MatcherKind;
use crate::error::MatchError;
use crate::input::LineSet;
use log::debug;
use regex::Regex;

/// Matches lines with a Rust regular expression
#[derive(Debug, Clone, Default)]
pub struct RegexMatcher;

impl RegexMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for RegexMatcher {
    fn find_matches(&self, pattern: &str, lines: &LineSet) -> Result<MatchState, MatchError> {
        if pattern.is_empty() {
            return Ok(MatchState::unmatched(lines.len()));
        }

        let re = Regex::new(pattern)
            .map_err(|e| MatchError::invalid_pattern(pattern, &summarize(&e)))?;

        let state = MatchState::from_lines(lines.iter().map(|line| find_spans(&re, line)).collect());
        debug!(
            "Pattern {:?} matched {} of {} lines",
            pattern,
            state.count(),
            state.len()
        );
        Ok(state)
    }

    fn kind(&self) -> MatcherKind {
        MatcherKind::Regex
    }
}

/// Syntax errors render as several lines with a caret; the status line needs one
fn summarize(err: &regex::Error) -> String {
    let msg = err.to_string();
    msg.lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.strip_prefix("error: ").unwrap_or(line).to_string())
        .unwrap_or(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> LineSet {
        LineSet::from(vec!["apple", "banana", "cherry"])
    }

    #[test]
    fn test_substring_match() {
        let state = RegexMatcher::new().find_matches("an", &fruits()).unwrap();
        assert_eq!(state.count(), 1);
        assert_eq!(state.matched_indices().collect::<Vec<_>>(), vec![1]);
        assert_eq!(state.highlights(1), &[1..3, 3..5]);
    }

    #[test]
    fn test_empty_pattern_matches_nothing() {
        let state = RegexMatcher::new().find_matches("", &fruits()).unwrap();
        assert_eq!(state.len(), 3);
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexMatcher::new().find_matches("a(", &fruits()).unwrap_err();
        match err {
            MatchError::InvalidPattern { pattern, reason } => {
                assert_eq!(pattern, "a(");
                assert!(!reason.is_empty());
                assert!(!reason.contains('\n'));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_zero_length_match_counts_without_span() {
        let lines = LineSet::from(vec!["abc", ""]);
        let state = RegexMatcher::new().find_matches("x*", &lines).unwrap();
        assert_eq!(state.count(), 2);
        assert!(state.highlights(0).is_empty());
    }

    #[test]
    fn test_non_overlapping_occurrences() {
        let lines = LineSet::from(vec!["aaaaa"]);
        let state = RegexMatcher::new().find_matches("aa", &lines).unwrap();
        assert_eq!(state.highlights(0), &[0..2, 2..4]);
    }

    #[test]
    fn test_count_equals_lines_satisfying_predicate() {
        let lines = LineSet::from(vec![
            "fn main() {",
            "    let x = 1;",
            "    println!(\"{}\", x);",
            "}",
            "",
            "// trailing comment",
        ]);
        for pattern in ["x", "^\\s+", "[{}]", "^$", "\\d", "main|comment", "nothing here"] {
            let re = Regex::new(pattern).unwrap();
            let expected = lines.iter().filter(|line| re.is_match(line)).count();
            let state = RegexMatcher::new().find_matches(pattern, &lines).unwrap();
            assert_eq!(state.count(), expected, "pattern {:?}", pattern);
            assert_eq!(state.len(), lines.len());
        }
    }

    #[test]
    fn test_idempotent() {
        let matcher = RegexMatcher::new();
        let first = matcher.find_matches("e.", &fruits()).unwrap();
        let second = matcher.find_matches("e.", &fruits()).unwrap();
        assert_eq!(first, second);
    }
}
