// Animal card component
//
// One bordered card per animal: name in the title, type and gender, breed,
// and as much of the description as fits.

use super::formatters::truncate_to_width;
use crate::animals::Animal;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows one card occupies, borders included
pub const CARD_HEIGHT: u16 = 6;

pub fn render(f: &mut Frame, area: Rect, animal: &Animal, selected: bool, theme: &Theme) {
    let inner_width = area.width.saturating_sub(4) as usize;

    let border_style = if selected {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.card_border)
    };

    let title = format!(" {} ", truncate_to_width(&animal.name, inner_width));

    let mut lines = vec![Line::from(vec![
        Span::styled(
            animal.kind.clone(),
            Style::default()
                .fg(theme.card_kind)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · ", Style::default().fg(theme.muted)),
        Span::styled(animal.gender.clone(), Style::default().fg(theme.foreground)),
    ])];

    if !animal.breed.trim().is_empty() {
        lines.push(Line::styled(
            truncate_to_width(&animal.breed, inner_width),
            Style::default().fg(theme.muted),
        ));
    }

    if !animal.description.trim().is_empty() {
        lines.push(Line::styled(
            animal.description.clone(),
            Style::default().fg(theme.foreground),
        ));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(border_style)
            .title(Span::styled(title, border_style)),
    );

    f.render_widget(card, area);
}
