// Theme system for the TUI
//
// Two built-in themes selected by name from config ("dark", "light").
// Each theme defines colors for all UI elements.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub highlight: Color,
    pub status_bar: Color,

    // Selection
    pub selection: Color,
    pub selection_fg: Color,

    // Buttons
    pub button_primary: Color,
    pub button_danger: Color,
    pub button_fg: Color,

    // Animal cards
    pub card_border: Color,
    pub card_kind: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Resolve a theme by config name, falling back to dark
    pub fn by_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!("Unknown theme {:?}, using dark", other);
                Self::dark()
            }
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark",

            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            highlight: Color::Yellow,
            status_bar: Color::Green,

            selection: Color::DarkGray,
            selection_fg: Color::Yellow,

            button_primary: Color::Rgb(0, 148, 136),
            button_danger: Color::Rgb(204, 51, 51),
            button_fg: Color::White,

            card_border: Color::Gray,
            card_kind: Color::LightCyan,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light",

            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_type: BorderType::Rounded,

            title: Color::Blue,
            highlight: Color::Rgb(184, 134, 11), // Dark goldenrod
            status_bar: Color::DarkGray,

            selection: Color::LightBlue,
            selection_fg: Color::Black,

            button_primary: Color::Rgb(0, 121, 107),
            button_danger: Color::Rgb(183, 28, 28),
            button_fg: Color::White,

            card_border: Color::DarkGray,
            card_kind: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// Bold title style
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }
}
