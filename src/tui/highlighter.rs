//! Match highlighting
//!
//! Turns a line and its highlight byte ranges into styled ratatui spans.

use crate::matcher::Highlight;
use crate::tui::theme::Theme;
use ratatui::style::Style;
use ratatui::text::Span;

/// Styled spans for one line.
///
/// Unmatched lines are dimmed as a whole. Matched lines keep the default style
/// with every highlight range drawn in the match style.
pub fn highlight_line(
    line: &str,
    highlights: &[Highlight],
    matched: bool,
    theme: &Theme,
) -> Vec<Span<'static>> {
    if !matched {
        return vec![Span::styled(line.to_string(), theme.dim)];
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    for range in highlights {
        if range.start < cursor || range.is_empty() {
            continue;
        }
        let (Some(before), Some(hit)) = (line.get(cursor..range.start), line.get(range.clone()))
        else {
            continue;
        };
        if !before.is_empty() {
            spans.push(Span::styled(before.to_string(), Style::default()));
        }
        spans.push(Span::styled(hit.to_string(), theme.matched));
        cursor = range.end;
    }

    if let Some(rest) = line.get(cursor..) {
        if !rest.is_empty() {
            spans.push(Span::styled(rest.to_string(), Style::default()));
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(spans: &[Span<'_>]) -> Vec<(String, Style)> {
        spans
            .iter()
            .map(|s| (s.content.to_string(), s.style))
            .collect()
    }

    #[test]
    fn test_unmatched_line_is_dimmed() {
        let theme = Theme::default();
        let spans = highlight_line("cherry", &[], false, &theme);
        assert_eq!(contents(&spans), vec![("cherry".to_string(), theme.dim)]);
    }

    #[test]
    fn test_every_occurrence_highlighted() {
        let theme = Theme::default();
        let spans = highlight_line("banana", &[1..3, 3..5], true, &theme);
        assert_eq!(
            contents(&spans),
            vec![
                ("b".to_string(), Style::default()),
                ("an".to_string(), theme.matched),
                ("an".to_string(), theme.matched),
                ("a".to_string(), Style::default()),
            ]
        );
    }

    #[test]
    fn test_matched_without_spans_is_plain() {
        let theme = Theme::default();
        let spans = highlight_line("abc", &[], true, &theme);
        assert_eq!(contents(&spans), vec![("abc".to_string(), Style::default())]);
    }

    #[test]
    fn test_bad_ranges_are_skipped() {
        let theme = Theme::default();
        // 1..2 splits the two-byte 'é'
        let spans = highlight_line("é!", &[1..2, 2..3, 9..12], true, &theme);
        assert_eq!(
            contents(&spans),
            vec![
                ("é".to_string(), Style::default()),
                ("!".to_string(), theme.matched),
            ]
        );
    }

    #[test]
    fn test_empty_line() {
        let theme = Theme::default();
        assert!(highlight_line("", &[], true, &theme).is_empty());
    }
}
