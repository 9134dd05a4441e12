//! Terminal User Interface module
//!
//! Runs the interactive session on stderr so that stdout stays free for the
//! final output.

pub mod app;
pub mod events;
pub mod highlighter;
pub mod render;
pub mod theme;
pub mod ui;

pub use app::{App, AppEvent, AppState};
pub use render::Layout;
pub use theme::Theme;

use crate::constants::EVENT_POLL_MS;
use crate::{Result, VgrepError};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use events::EventHandler;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Stderr};
use std::time::Duration;

/// Run the interactive session until the user confirms or cancels
pub fn run(app: &mut App) -> Result<()> {
    let events = EventHandler::new();

    enable_raw_mode()
        .map_err(|e| VgrepError::terminal_error(&format!("Failed to enable raw mode: {}", e)))?;

    let mut stderr = io::stderr();
    if let Err(e) = execute!(stderr, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(VgrepError::terminal_error(&format!(
            "Failed to enter alternate screen: {}",
            e
        )));
    }

    let mut terminal = match Terminal::new(CrosstermBackend::new(stderr)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
            return Err(VgrepError::TuiError(format!("Failed to create terminal: {}", e)));
        }
    };

    let result = event_loop(&mut terminal, app, &events);
    let restored = restore_terminal(&mut terminal);

    result?;
    restored
}

/// Draw, wait for one event, apply it; until the session ends
pub fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    let size = terminal
        .size()
        .map_err(|e| VgrepError::TuiError(format!("Failed to read terminal size: {}", e)))?;
    app.handle_event(AppEvent::Resize(size.width, size.height));

    while !app.is_finished() {
        terminal
            .draw(|frame| ui::draw(frame, app))
            .map_err(|e| VgrepError::TuiError(format!("Failed to draw: {}", e)))?;

        if let Some(event) = events.next_event(Duration::from_millis(EVENT_POLL_MS))? {
            if let Some(app_event) = events.translate(event) {
                app.handle_event(app_event);
            }
        }
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
    disable_raw_mode()
        .map_err(|e| VgrepError::terminal_error(&format!("Failed to disable raw mode: {}", e)))?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| VgrepError::terminal_error(&format!("Failed to leave alternate screen: {}", e)))?;
    terminal
        .show_cursor()
        .map_err(|e| VgrepError::TuiError(format!("Failed to show cursor: {}", e)))?;
    Ok(())
}
