//! Styles used by the renderer and the status line.
//!
//! Passed explicitly into rendering; there is no global style state.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Matched substrings
    pub matched: Style,
    /// Unmatched lines
    pub dim: Style,
    /// Line-number gutter
    pub gutter: Style,
    /// Dual layout column separator
    pub separator: Style,
    /// Match percentage
    pub status: Style,
    /// Status line when the last pattern failed
    pub error: Style,
    pub prompt: Style,
    pub placeholder: Style,
}

impl Theme {
    pub fn colored() -> Self {
        let dim = Style::default().fg(Color::Indexed(8));
        Self {
            matched: Style::default().bg(Color::Indexed(1)).fg(Color::Indexed(15)),
            dim,
            gutter: dim,
            separator: dim,
            status: Style::default().fg(Color::Indexed(10)),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            prompt: Style::default().fg(Color::Cyan),
            placeholder: dim,
        }
    }

    /// Modifier-only styles for NO_COLOR terminals
    pub fn monochrome() -> Self {
        let dim = Style::default().add_modifier(Modifier::DIM);
        Self {
            matched: Style::default().add_modifier(Modifier::REVERSED),
            dim,
            gutter: dim,
            separator: dim,
            status: Style::default(),
            error: Style::default().add_modifier(Modifier::BOLD),
            prompt: Style::default().add_modifier(Modifier::BOLD),
            placeholder: dim,
        }
    }

    /// Honour the NO_COLOR convention
    pub fn from_env() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if no_color {
            Self::monochrome()
        } else {
            Self::colored()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_style_differs_from_dim() {
        for theme in [Theme::colored(), Theme::monochrome()] {
            assert_ne!(theme.matched, theme.dim);
            assert_ne!(theme.matched, Style::default());
        }
    }

    #[test]
    fn test_default_is_colored() {
        assert_eq!(Theme::default(), Theme::colored());
    }
}
