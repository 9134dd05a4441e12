//! Event handling for keyboard, mouse and resize input

use crate::tui::app::AppEvent;
use crate::{Result, VgrepError};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Event handler for TUI input
#[derive(Debug, Default, Clone, Copy)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Poll for the next event with timeout
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)
            .map_err(|e| VgrepError::TuiError(format!("Event polling failed: {}", e)))?
        {
            let event = event::read()
                .map_err(|e| VgrepError::TuiError(format!("Event reading failed: {}", e)))?;
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    /// Translate a terminal event into an application event
    pub fn translate(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match self.handle_key_event(key) {
                    KeyAction::None => None,
                    action => Some(AppEvent::Key(action)),
                }
            }
            Event::Mouse(mouse) => match self.handle_mouse_event(mouse) {
                MouseAction::None => None,
                action => Some(AppEvent::Mouse(action)),
            },
            Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
            _ => None,
        }
    }

    /// Handle a mouse event and return the action to take
    pub fn handle_mouse_event(&self, event: MouseEvent) -> MouseAction {
        match event.kind {
            MouseEventKind::ScrollUp => MouseAction::ScrollUp,
            MouseEventKind::ScrollDown => MouseAction::ScrollDown,
            _ => MouseAction::None,
        }
    }

    /// Handle a key event and return the action to take
    pub fn handle_key_event(&self, event: KeyEvent) -> KeyAction {
        match event {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => KeyAction::Cancel,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => KeyAction::Cancel,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => KeyAction::Confirm,
            KeyEvent {
                code: KeyCode::Up, ..
            } => KeyAction::ScrollUp,
            KeyEvent {
                code: KeyCode::Down,
                ..
            } => KeyAction::ScrollDown,
            KeyEvent {
                code: KeyCode::PageUp,
                ..
            } => KeyAction::HalfPageUp,
            KeyEvent {
                code: KeyCode::PageDown,
                ..
            } => KeyAction::HalfPageDown,
            KeyEvent {
                code: KeyCode::Home,
                ..
            } => KeyAction::ScrollTop,
            KeyEvent {
                code: KeyCode::End, ..
            } => KeyAction::ScrollBottom,
            KeyEvent {
                code: KeyCode::Char('u'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => KeyAction::ClearPattern,
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } => KeyAction::InputChar(c),
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => KeyAction::DeleteChar,
            _ => KeyAction::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Cancel,
    Confirm,
    ScrollUp,
    ScrollDown,
    HalfPageUp,
    HalfPageDown,
    ScrollTop,
    ScrollBottom,
    ClearPattern,
    InputChar(char),
    DeleteChar,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseAction {
    None,
    ScrollUp,
    ScrollDown,
}
