//! Matching strategies.
//!
//! A `Matcher` turns a pattern and the input lines into a `MatchState`. Two
//! strategies exist: the built-in regex engine and an external grep. The
//! strategy is picked once at startup from the command line.

pub mod grep;
mod posix;
pub mod regex_matcher;

pub use grep::GrepMatcher;
pub use regex_matcher::RegexMatcher;

use crate::cli::{Cli, MatcherKind};
use crate::error::MatchError;
use crate::input::LineSet;
use log::info;
use regex::Regex;
use std::ops::Range;

/// Byte range of a highlighted occurrence within a line
pub type Highlight = Range<usize>;

/// Per-line match flags and highlight spans for one pattern.
///
/// Always has exactly one entry per input line. Built wholesale by a matcher,
/// never patched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchState {
    matched: Vec<bool>,
    highlights: Vec<Vec<Highlight>>,
}

impl MatchState {
    /// Every line unmatched
    pub fn unmatched(len: usize) -> Self {
        Self {
            matched: vec![false; len],
            highlights: vec![Vec::new(); len],
        }
    }

    /// Build from one optional span list per line; `None` means unmatched
    pub fn from_lines(per_line: Vec<Option<Vec<Highlight>>>) -> Self {
        let mut state = Self::unmatched(0);
        for spans in per_line {
            state.matched.push(spans.is_some());
            state.highlights.push(spans.unwrap_or_default());
        }
        state
    }

    pub fn len(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    pub fn highlights(&self, index: usize) -> &[Highlight] {
        self.highlights.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of matched lines
    pub fn count(&self) -> usize {
        self.matched.iter().filter(|&&m| m).count()
    }

    pub fn matched_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.matched
            .iter()
            .enumerate()
            .filter_map(|(idx, &m)| m.then_some(idx))
    }

    /// Split line indices into (unmatched, matched), both in input order
    pub fn partition(&self) -> (Vec<usize>, Vec<usize>) {
        (0..self.len()).partition(|&idx| !self.matched[idx])
    }

    /// Share of matched lines in percent, 0 for empty input
    pub fn match_percent(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.count() as f64 / self.len() as f64 * 100.0
    }
}

/// A strategy for deciding which lines match a pattern
pub trait Matcher {
    /// Evaluate `pattern` against every line. An empty pattern matches nothing.
    fn find_matches(&self, pattern: &str, lines: &LineSet) -> Result<MatchState, MatchError>;

    fn kind(&self) -> MatcherKind;
}

/// Pick the matching strategy for the session
pub fn from_cli(cli: &Cli) -> Box<dyn Matcher> {
    let kind = cli.matcher_kind();
    info!("Using {} matcher: {}", kind.name(), kind.description());
    match kind {
        MatcherKind::Regex => Box::new(RegexMatcher::new()),
        MatcherKind::Grep => Box::new(GrepMatcher::new(&cli.grep_cmd, cli.grep_args.clone())),
    }
}

/// Non-overlapping occurrences of `re` in `line`.
///
/// `None` when there is no occurrence at all. Zero-length occurrences make the
/// line match but add no span.
pub(crate) fn find_spans(re: &Regex, line: &str) -> Option<Vec<Highlight>> {
    let mut found = false;
    let mut spans = Vec::new();
    for m in re.find_iter(line) {
        found = true;
        if !m.is_empty() {
            spans.push(m.range());
        }
    }
    found.then_some(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_GREP_PROGRAM;

    fn sample_state() -> MatchState {
        MatchState::from_lines(vec![None, Some(vec![1..3]), None, Some(vec![])])
    }

    #[test]
    fn test_unmatched_state() {
        let state = MatchState::unmatched(3);
        assert_eq!(state.len(), 3);
        assert_eq!(state.count(), 0);
        assert!((0..3).all(|idx| !state.is_matched(idx)));
        assert_eq!(state.match_percent(), 0.0);
    }

    #[test]
    fn test_state_accessors() {
        let state = sample_state();
        assert_eq!(state.len(), 4);
        assert_eq!(state.count(), 2);
        assert!(state.is_matched(1));
        assert!(!state.is_matched(2));
        assert!(!state.is_matched(99));
        assert_eq!(state.highlights(1), &[1..3]);
        assert!(state.highlights(3).is_empty());
        assert!(state.highlights(99).is_empty());
        assert_eq!(state.matched_indices().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(state.match_percent(), 50.0);
    }

    #[test]
    fn test_partition_keeps_order_and_covers_all_lines() {
        let state = sample_state();
        let (left, right) = state.partition();
        assert_eq!(left, vec![0, 2]);
        assert_eq!(right, vec![1, 3]);
        assert_eq!(left.len() + right.len(), state.len());
    }

    #[test]
    fn test_empty_state_percent() {
        assert_eq!(MatchState::default().match_percent(), 0.0);
    }

    #[test]
    fn test_find_spans() {
        let re = Regex::new("an").unwrap();
        assert_eq!(find_spans(&re, "banana"), Some(vec![1..3, 3..5]));
        assert_eq!(find_spans(&re, "cherry"), None);

        let re = Regex::new("x*").unwrap();
        assert_eq!(find_spans(&re, "abc"), Some(vec![]));
    }

    #[test]
    fn test_from_cli_picks_strategy() {
        let mut cli = Cli {
            file: None,
            dual: false,
            print_pattern: false,
            grep: false,
            grep_cmd: DEFAULT_GREP_PROGRAM.to_string(),
            debug: false,
            grep_args: vec![],
        };
        assert_eq!(from_cli(&cli).kind(), MatcherKind::Regex);

        cli.grep_args = vec!["-i".to_string()];
        assert_eq!(from_cli(&cli).kind(), MatcherKind::Grep);
    }
}
