// Components module - reusable UI building blocks
//
// Shell components are rendered around every page:
// - Title bar: App name, loading indicator, data source
// - Status bar: Uptime, card count, active filter, key hints
// - Logs panel: Recent log records
//
// Presentation primitives render resolved data only:
// - Animal card, empty state, button
//
// Each component is a focused, single-responsibility module.

pub mod animal_card;
pub mod button;
pub mod empty_state;
pub mod formatters;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the logs panel (convenience wrapper)
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}
