//! Final output.
//!
//! Writes the result of a finished session to stdout (or any writer).

use crate::tui::{App, AppState};
use log::{debug, info};
use std::io::{self, Write};

/// Writes matched lines, or the pattern, once the session is confirmed
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputWriter {
    /// Print the final pattern instead of the matched lines
    pub print_pattern: bool,
}

impl OutputWriter {
    pub fn new(print_pattern: bool) -> Self {
        Self { print_pattern }
    }

    /// Write the session result and return the number of lines written.
    /// Nothing is written unless the session was confirmed.
    pub fn write<W: Write>(&self, out: &mut W, app: &App) -> io::Result<usize> {
        if app.state() != AppState::Confirmed {
            debug!("Session not confirmed, no output");
            return Ok(0);
        }

        if self.print_pattern {
            writeln!(out, "{}", app.pattern())?;
            out.flush()?;
            return Ok(1);
        }

        let mut written = 0;
        for idx in app.match_state().matched_indices() {
            if let Some(line) = app.lines().get(idx) {
                writeln!(out, "{}", line)?;
                written += 1;
            }
        }
        out.flush()?;
        info!("Wrote {} matched lines", written);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LineSet;
    use crate::matcher::RegexMatcher;
    use crate::tui::events::KeyAction;
    use crate::tui::{AppEvent, Layout, Theme};

    fn session(lines: Vec<&str>, keys: &str, finish: KeyAction) -> App {
        let mut app = App::new(
            LineSet::from(lines),
            Box::new(RegexMatcher::new()),
            Layout::Single,
            Theme::default(),
        );
        for c in keys.chars() {
            app.handle_event(AppEvent::Key(KeyAction::InputChar(c)));
        }
        app.handle_event(AppEvent::Key(finish));
        app
    }

    fn output_of(writer: OutputWriter, app: &App) -> String {
        let mut buf = Vec::new();
        writer.write(&mut buf, app).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_confirm_prints_matched_lines_in_order() {
        let app = session(
            vec!["apple", "banana", "cherry", "avocado"],
            "^a",
            KeyAction::Confirm,
        );
        assert_eq!(output_of(OutputWriter::new(false), &app), "apple\navocado\n");
    }

    #[test]
    fn test_print_pattern_mode() {
        let app = session(vec!["apple", "banana", "cherry"], "^a", KeyAction::Confirm);
        assert_eq!(output_of(OutputWriter::new(true), &app), "^a\n");
    }

    #[test]
    fn test_cancel_prints_nothing() {
        for print_pattern in [false, true] {
            let app = session(vec!["apple", "banana"], "a", KeyAction::Cancel);
            let mut buf = Vec::new();
            let written = OutputWriter::new(print_pattern).write(&mut buf, &app).unwrap();
            assert_eq!(written, 0);
            assert!(buf.is_empty());
        }
    }

    #[test]
    fn test_unfinished_session_prints_nothing() {
        let app = session(vec!["apple"], "a", KeyAction::None);
        assert_eq!(app.state(), AppState::Editing);
        assert_eq!(output_of(OutputWriter::default(), &app), "");
    }

    #[test]
    fn test_confirm_with_empty_pattern_prints_nothing() {
        let app = session(vec!["apple", "banana"], "", KeyAction::Confirm);
        assert_eq!(output_of(OutputWriter::new(false), &app), "");
    }

    #[test]
    fn test_confirm_after_invalid_pattern_uses_last_valid_matches() {
        let app = session(vec!["apple", "banana", "cherry"], "an(", KeyAction::Confirm);
        assert_eq!(output_of(OutputWriter::new(false), &app), "banana\n");
        assert_eq!(output_of(OutputWriter::new(true), &app), "an(\n");
    }
}
