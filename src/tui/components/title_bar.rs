// Title bar component
//
// Renders the app name with a loading indicator and the data source.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let indicator = if app.page.is_loading() {
        format!(" {} carregando", app.spinner_char())
    } else {
        String::new()
    };

    let title_text = format!(" 🐾 adota{} ──── {}", indicator, app.page.source());

    let title = Paragraph::new(title_text)
        .style(app.theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
