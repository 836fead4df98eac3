// TUI application state
//
// Wraps the listing controller with what only the terminal needs: card
// selection, the modal slot, theme, log buffer and the spinner frame.

use super::modal::Modal;
use super::theme::Theme;
use crate::animals::Animal;
use crate::listing::{AvailableAnimalsPage, ListingView};
use crate::logging::LogBuffer;
use std::time::Instant;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Main application state for the TUI
pub struct App {
    /// Listing controller; owns filter, loading and the filter dialog
    pub page: AvailableAnimalsPage,

    /// Active modal overlay (help, animal detail)
    pub modal: Option<Modal>,

    /// Index of the highlighted card
    pub selected: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Log buffer for the footer panel
    pub log_buffer: LogBuffer,

    /// Current color theme
    pub theme: Theme,

    /// Spinner animation frame
    frame: usize,
}

impl App {
    pub fn new(page: AvailableAnimalsPage, log_buffer: LogBuffer, theme: Theme) -> Self {
        Self {
            page,
            modal: None,
            selected: 0,
            should_quit: false,
            start_time: Instant::now(),
            log_buffer,
            theme,
            frame: 0,
        }
    }

    /// Advance animation frame for spinners
    pub fn tick_animation(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }

    /// Number of cards currently rendered
    fn card_count(&self) -> usize {
        match self.page.state().view() {
            ListingView::Populated(animals) => animals.len(),
            _ => 0,
        }
    }

    /// Selection clamped to the current list
    pub fn selected_index(&self) -> Option<usize> {
        let count = self.card_count();
        (count > 0).then(|| self.selected.min(count - 1))
    }

    pub fn selected_animal(&self) -> Option<Animal> {
        let idx = self.selected_index()?;
        match self.page.state().view() {
            ListingView::Populated(animals) => animals.get(idx).cloned(),
            _ => None,
        }
    }

    pub fn select_next(&mut self) {
        if let Some(idx) = self.selected_index() {
            self.selected = (idx + 1).min(self.card_count() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(idx) = self.selected_index() {
            self.selected = idx.saturating_sub(1);
        }
    }

    /// "Filtrar": only reachable while the button is shown
    pub fn open_filter_dialog(&mut self) -> bool {
        if !self.page.state().affordances().filter {
            return false;
        }
        self.page.dialog.set_open(true);
        true
    }

    /// "Limpar filtros": only reachable while the button is shown
    pub fn clear_filters(&mut self) -> bool {
        if !self.page.state().affordances().clear {
            return false;
        }
        self.page.handle_remove_filters();
        self.selected = 0;
        true
    }

    pub fn open_detail(&mut self) {
        if let Some(animal) = self.selected_animal() {
            self.modal = Some(Modal::detail(animal));
        }
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}
