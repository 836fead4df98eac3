// Button component
//
// A key-hinted label rendered as a filled span, e.g. ` f Filtrar `.

use crate::tui::theme::Theme;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Fill style, mirrors the web client's button variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    /// "red-filled"
    Danger,
}

impl ButtonStyle {
    fn fill(&self, theme: &Theme) -> Color {
        match self {
            ButtonStyle::Primary => theme.button_primary,
            ButtonStyle::Danger => theme.button_danger,
        }
    }
}

/// Spans for one button: key hint then label
pub fn spans(key: &str, label: &str, style: ButtonStyle, theme: &Theme) -> Vec<Span<'static>> {
    let fill = Style::default().bg(style.fill(theme)).fg(theme.button_fg);
    vec![
        Span::styled(format!(" {key} "), fill.add_modifier(Modifier::BOLD)),
        Span::styled(format!("{label} "), fill),
    ]
}

/// Display width of a button built by [`spans`]
pub fn width(key: &str, label: &str) -> u16 {
    use unicode_width::UnicodeWidthStr;
    (key.width() + label.width() + 3) as u16
}
