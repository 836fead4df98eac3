// Empty state component
//
// Shown in place of the card grid when a page has nothing to list.

use crate::animals::PageContext;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Headline and hint for each page
pub fn messages(page: PageContext) -> (&'static str, &'static str) {
    match page {
        PageContext::AnimalsAvailableToAdopt => (
            "Nenhum animal disponível para adoção",
            "Volte mais tarde ou ajuste os filtros.",
        ),
        PageContext::MyAnimals => (
            "Você ainda não cadastrou nenhum animal",
            "Cadastre um animal para que ele apareça aqui.",
        ),
    }
}

pub fn render(f: &mut Frame, area: Rect, page: PageContext, theme: &Theme) {
    let (headline, hint) = messages(page);

    // Vertically centered when there is room
    let top_padding = area.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::raw("")).collect();
    lines.push(Line::styled(
        headline,
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::raw(""));
    lines.push(Line::styled(hint, Style::default().fg(theme.muted)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
