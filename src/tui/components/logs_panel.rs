//! Logs panel component
//!
//! Footer panel showing the most recent log records, newest at the bottom.
//! Failed fetches surface here through the diagnostic sink.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(height);
    let theme = &app.theme;

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme)))
        .collect();

    let title = format!(" Logs ({}) ", app.log_buffer.len());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(title),
    );

    f.render_widget(list, area);
}

/// Format a log entry for display
///
/// Diagnostics carry their own target so they stand out from chatter.
fn format_log_entry(entry: &LogEntry) -> String {
    let source = entry
        .target
        .rsplit("::")
        .next()
        .unwrap_or(entry.target.as_str());
    format!(
        "[{}] {:5} {:<11} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        source,
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug => Style::default().fg(theme.log_debug),
        LogLevel::Trace => Style::default().fg(theme.log_trace),
    }
}
