//! Layout of the match results.
//!
//! Pure functions from (lines, match state, layout, width, theme) to the rows
//! shown in the viewport. Called again from scratch on every pattern change and
//! every resize.

use crate::constants::{DUAL_SEPARATOR, FALLBACK_TERMINAL_WIDTH, MIN_DUAL_WIDTH};
use crate::input::LineSet;
use crate::matcher::MatchState;
use crate::tui::highlighter::highlight_line;
use crate::tui::theme::Theme;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// How results are laid out, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One column with a line-number gutter
    #[default]
    Single,
    /// Unmatched lines on the left, matched lines on the right
    Dual,
}

/// Render every row of the viewport content
pub fn render(
    lines: &LineSet,
    state: &MatchState,
    layout: Layout,
    terminal_width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    match layout {
        Layout::Single => render_single(lines, state, theme),
        Layout::Dual => render_dual(lines, state, terminal_width, theme),
    }
}

/// Gutter width: one more than the digit count of the total line count
pub fn gutter_width(total_lines: usize) -> usize {
    1 + total_lines.to_string().len()
}

pub fn render_single(lines: &LineSet, state: &MatchState, theme: &Theme) -> Vec<Line<'static>> {
    let width = gutter_width(lines.len());
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:>width$} | ", idx + 1, width = width),
                theme.gutter,
            )];
            spans.extend(highlight_line(
                line,
                state.highlights(idx),
                state.is_matched(idx),
                theme,
            ));
            Line::from(spans)
        })
        .collect()
}

/// Width of each dual-layout column for a terminal `terminal_width` cells wide.
/// Widths under `MIN_DUAL_WIDTH` (including the 0 seen before the first
/// resize) are treated as `FALLBACK_TERMINAL_WIDTH`.
pub fn dual_column_width(terminal_width: usize) -> usize {
    let width = if terminal_width < MIN_DUAL_WIDTH {
        FALLBACK_TERMINAL_WIDTH
    } else {
        terminal_width
    };
    (width.saturating_sub(DUAL_SEPARATOR.width()) / 2).max(1)
}

/// Unmatched and matched lines as two compacted, width-fitted columns.
/// Columns are not padded to equal height here.
pub fn split_columns(
    lines: &LineSet,
    state: &MatchState,
    column_width: usize,
    theme: &Theme,
) -> (Vec<Line<'static>>, Vec<Line<'static>>) {
    let (unmatched, matched) = state.partition();
    let cell = |idx: usize| {
        let line = lines.get(idx).unwrap_or_default();
        let spans = highlight_line(line, state.highlights(idx), state.is_matched(idx), theme);
        Line::from(fit_to_width(spans, column_width))
    };
    (
        unmatched.into_iter().map(cell).collect(),
        matched.into_iter().map(cell).collect(),
    )
}

pub fn render_dual(
    lines: &LineSet,
    state: &MatchState,
    terminal_width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let column_width = dual_column_width(terminal_width);
    let (left, right) = split_columns(lines, state, column_width, theme);
    let rows = left.len().max(right.len());
    let blank = Line::from(" ".repeat(column_width));

    (0..rows)
        .map(|row| {
            let mut spans = left.get(row).unwrap_or(&blank).spans.clone();
            spans.push(Span::styled(DUAL_SEPARATOR, theme.separator));
            spans.extend(right.get(row).unwrap_or(&blank).spans.iter().cloned());
            Line::from(spans)
        })
        .collect()
}

/// Truncate styled spans to `width` display cells and pad with spaces to exactly `width`
fn fit_to_width(spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let mut used = 0;
    let mut fitted = Vec::with_capacity(spans.len() + 1);

    'spans: for span in spans {
        let mut text = String::new();
        for ch in span.content.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > width {
                if !text.is_empty() {
                    fitted.push(Span::styled(text, span.style));
                }
                break 'spans;
            }
            used += ch_width;
            text.push(ch);
        }
        if !text.is_empty() {
            fitted.push(Span::styled(text, span.style));
        }
    }

    if used < width {
        fitted.push(Span::raw(" ".repeat(width - used)));
    }
    fitted
}
