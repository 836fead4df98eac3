// Views module - screen-level rendering logic
//
// Shell: title bar, page content, logs panel, status bar. Overlays (modal,
// filter dialog) are drawn last, on top of everything.

mod filter_dialog;
mod listing;
mod modal;

#[cfg(test)]
mod tests;

pub use listing::PAGE_TITLE;

use super::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the footer logs panel, borders included
const LOGS_HEIGHT: u16 = 6;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(LOGS_HEIGHT),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);
    listing::render(f, chunks[1], app);
    components::render_logs_panel(f, chunks[2], app);
    components::render_status(f, chunks[3], app);

    if let Some(modal_state) = &app.modal {
        modal::render(f, modal_state, app);
    }

    if app.page.dialog.is_open() {
        filter_dialog::render(f, &app.page.dialog, &app.theme);
    }
}
