// Filter dialog rendering
//
// "Filtros" overlay with one selector row per field. State and key handling
// live in `listing::dialog`; this only draws it.

use super::modal::centered_rect;
use crate::listing::dialog::{option_label, DialogField, FilterDialog};
use crate::tui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, dialog: &FilterDialog, theme: &Theme) {
    let area = centered_rect(40, 9, f.area());
    f.render_widget(Clear, area);

    let row = |field: DialogField, value: Option<&str>| -> Line {
        let focused = dialog.focus() == field;
        let marker = if focused { "▸ " } else { "  " };
        let value_style = if focused {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };
        Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.highlight)),
            Span::styled(
                format!("{:<8}", field.label()),
                Style::default().fg(theme.muted),
            ),
            Span::styled(format!("◀ {} ▶", option_label(value)), value_style),
        ])
    };

    let lines = vec![
        Line::raw(""),
        row(DialogField::Type, dialog.selected_type()),
        Line::raw(""),
        row(DialogField::Gender, dialog.selected_gender()),
        Line::raw(""),
        Line::styled(
            "  Enter aplicar  ·  Esc fechar",
            Style::default().fg(theme.muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.highlight))
                .title(Span::styled(" Filtros ", theme.title_style())),
        );

    f.render_widget(paragraph, area);
}
