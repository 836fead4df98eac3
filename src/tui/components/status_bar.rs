// Status bar component
//
// Renders session info at the bottom: uptime, card count, active filter and
// the keys that currently do something.

use crate::listing::ListingView;
use crate::tui::app::App;
use crate::tui::layout::StatusDensity;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: key hints included
/// - Narrow: counts only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let state = app.page.state();

    let count = match state.view() {
        ListingView::Loading => "…".to_string(),
        ListingView::Populated(animals) => animals.len().to_string(),
        ListingView::Empty(_) => "0".to_string(),
    };

    let filter = app
        .page
        .filter()
        .map(|f| f.describe())
        .unwrap_or_else(|| "nenhum".to_string());

    let mut text = format!(" {} │ 🐾 {} │ filtro: {}", app.uptime(), count, filter);

    if StatusDensity::for_width(area.width) == StatusDensity::WithHints {
        let affordances = state.affordances();
        let mut hints = vec!["r recarregar"];
        if affordances.filter {
            hints.push("f filtrar");
        }
        if affordances.clear {
            hints.push("c limpar");
        }
        hints.push("? ajuda");
        hints.push("q sair");
        text.push_str(" │ ");
        text.push_str(&hints.join("  "));
    }

    let status = Paragraph::new(text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
