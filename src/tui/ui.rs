//! UI rendering and layout module

use crate::constants::{PATTERN_PLACEHOLDER, PROMPT, STATUS_HEIGHT};
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Layout, Position},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the results viewport and the status/prompt line below it
pub fn draw(frame: &mut Frame, app: &App) {
    let [results_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)])
            .areas(frame.area());

    let results = Paragraph::new(Text::from(app.visible_lines().to_vec()));
    frame.render_widget(results, results_area);

    let (status_line, cursor_offset) = status_line(app);
    frame.render_widget(Paragraph::new(status_line), status_area);

    let cursor_x = status_area
        .x
        .saturating_add(cursor_offset as u16)
        .min(status_area.right().saturating_sub(1));
    frame.set_cursor_position(Position::new(cursor_x, status_area.y));
}

/// Status text, prompt and pattern; also returns the cursor column
fn status_line(app: &App) -> (Line<'static>, usize) {
    let theme = app.theme();
    let status_style = if app.last_error().is_some() {
        theme.error
    } else {
        theme.status
    };
    let status = app.status_message();

    let mut spans = vec![
        Span::styled(status.clone(), status_style),
        Span::raw(" "),
        Span::styled(PROMPT, theme.prompt),
    ];
    let cursor = status.width() + 1 + PROMPT.width() + app.pattern().width();

    if app.pattern().is_empty() {
        spans.push(Span::styled(PATTERN_PLACEHOLDER, theme.placeholder));
    } else {
        spans.push(Span::raw(app.pattern().to_string()));
    }

    (Line::from(spans), cursor)
}
