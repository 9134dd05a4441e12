//! TUI application state and event handling
//!
//! `App` is a small state machine: it starts in `Editing` and ends in either
//! `Confirmed` or `Cancelled`. Every pattern edit re-runs the matcher and the
//! renderer over the whole input before the next event is looked at.

use crate::constants::{MOUSE_SCROLL_LINES, STATUS_HEIGHT};
use crate::error::MatchError;
use crate::input::LineSet;
use crate::matcher::{MatchState, Matcher};
use crate::tui::events::{KeyAction, MouseAction};
use crate::tui::render::{self, Layout};
use crate::tui::theme::Theme;
use crate::validation::InputValidator;
use log::{debug, info};
use ratatui::text::Line;

/// Lifecycle of an interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Pattern is being typed
    Editing,
    /// Enter pressed; the result should be printed
    Confirmed,
    /// Esc / Ctrl-C pressed; nothing is printed
    Cancelled,
}

/// Input understood by the application, independent of the terminal library
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    Key(KeyAction),
    Mouse(MouseAction),
    Resize(u16, u16),
}

/// Main TUI application state
pub struct App {
    /// Input lines, fixed for the session
    lines: LineSet,

    /// Strategy chosen at startup
    matcher: Box<dyn Matcher>,

    layout: Layout,

    theme: Theme,

    /// Current pattern text, possibly invalid
    pattern: String,

    /// Result of the last pattern that matched successfully
    match_state: MatchState,

    /// Viewport rows derived from `match_state`
    rendered: Vec<Line<'static>>,

    /// Error of the last attempt, shown instead of the percentage
    last_error: Option<MatchError>,

    /// Index of the first visible row
    scroll: usize,

    width: u16,
    height: u16,

    state: AppState,
}

impl App {
    /// Create new application instance
    pub fn new(lines: LineSet, matcher: Box<dyn Matcher>, layout: Layout, theme: Theme) -> Self {
        let match_state = MatchState::unmatched(lines.len());
        let mut app = Self {
            lines,
            matcher,
            layout,
            theme,
            pattern: String::new(),
            match_state,
            rendered: Vec::new(),
            last_error: None,
            scroll: 0,
            width: 0,
            height: 0,
            state: AppState::Editing,
        };
        app.rerender();
        app
    }

    /// Process one event. Ignored once the session has ended.
    pub fn handle_event(&mut self, event: AppEvent) {
        if self.is_finished() {
            return;
        }
        match event {
            AppEvent::Key(action) => self.handle_key(action),
            AppEvent::Mouse(MouseAction::ScrollUp) => self.scroll_by(-(MOUSE_SCROLL_LINES as isize)),
            AppEvent::Mouse(MouseAction::ScrollDown) => self.scroll_by(MOUSE_SCROLL_LINES as isize),
            AppEvent::Mouse(MouseAction::None) => {}
            AppEvent::Resize(width, height) => self.resize(width, height),
        }
    }

    fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Confirm => {
                info!("Confirmed pattern: {:?}", self.pattern);
                self.state = AppState::Confirmed;
            }
            KeyAction::Cancel => {
                info!("Cancelled");
                self.match_state = MatchState::unmatched(self.lines.len());
                self.state = AppState::Cancelled;
            }
            KeyAction::InputChar(c) => {
                self.pattern.push(c);
                self.apply_pattern();
            }
            KeyAction::DeleteChar => {
                if self.pattern.pop().is_some() {
                    self.apply_pattern();
                }
            }
            KeyAction::ClearPattern => {
                if !self.pattern.is_empty() {
                    self.pattern.clear();
                    self.apply_pattern();
                }
            }
            KeyAction::ScrollUp => self.scroll_by(-1),
            KeyAction::ScrollDown => self.scroll_by(1),
            KeyAction::HalfPageUp => self.scroll_by(-(self.half_page() as isize)),
            KeyAction::HalfPageDown => self.scroll_by(self.half_page() as isize),
            KeyAction::ScrollTop => self.scroll = 0,
            KeyAction::ScrollBottom => self.scroll = self.max_scroll(),
            KeyAction::None => {}
        }
    }

    /// Replace the pattern and re-run matching
    pub fn set_pattern(&mut self, pattern: &str) {
        self.pattern = pattern.to_string();
        self.apply_pattern();
    }

    /// Match the current pattern against every line.
    /// On failure the previous match state stays on screen.
    fn apply_pattern(&mut self) {
        let result = InputValidator::validate_pattern(&self.pattern)
            .and_then(|()| self.matcher.find_matches(&self.pattern, &self.lines));

        match result {
            Ok(state) => {
                self.match_state = state;
                self.last_error = None;
                self.rerender();
            }
            Err(err) => {
                debug!("Pattern {:?} rejected: {}", self.pattern, err);
                self.last_error = Some(err);
            }
        }
    }

    /// Rebuild the viewport rows from the current match state and size
    fn rerender(&mut self) {
        self.rendered = render::render(
            &self.lines,
            &self.match_state,
            self.layout,
            self.width as usize,
            &self.theme,
        );
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        debug!("Resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.rerender();
    }

    fn scroll_by(&mut self, delta: isize) {
        let target = self.scroll.saturating_add_signed(delta);
        self.scroll = target.min(self.max_scroll());
    }

    /// Rows available for results, below which sits the status line
    pub fn viewport_height(&self) -> usize {
        self.height.saturating_sub(STATUS_HEIGHT) as usize
    }

    fn half_page(&self) -> usize {
        (self.viewport_height() / 2).max(1)
    }

    fn max_scroll(&self) -> usize {
        self.rendered.len().saturating_sub(self.viewport_height())
    }

    /// Rows currently inside the viewport
    pub fn visible_lines(&self) -> &[Line<'static>] {
        let end = (self.scroll + self.viewport_height()).min(self.rendered.len());
        &self.rendered[self.scroll.min(end)..end]
    }

    /// Percentage of matched lines, or the last error
    pub fn status_message(&self) -> String {
        match &self.last_error {
            Some(err) => err.to_string(),
            None => format!("{:6.2}%", self.match_state.match_percent()),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state != AppState::Editing
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    pub fn rendered(&self) -> &[Line<'static>] {
        &self.rendered
    }

    pub fn last_error(&self) -> Option<&MatchError> {
        self.last_error.as_ref()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
