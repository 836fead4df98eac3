// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, fetch outcomes)
// - Rendering the UI
// - Routing keys to the filter dialog, modals and the listing page

pub mod app;
pub mod components;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

use crate::listing::{
    AvailableAnimalsPage, DialogAction, FetchOutcome, OutcomeReceiver, PageDeps,
};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use theme::Theme;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, mounts the listing page, runs the event loop and
/// restores the terminal when done.
pub async fn run_tui(deps: PageDeps, log_buffer: LogBuffer, theme: Theme) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let mut page = AvailableAnimalsPage::new(deps, outcome_tx);
    page.mount();
    let mut app = App::new(page, log_buffer, theme);

    let result = run_event_loop(&mut terminal, &mut app, &mut outcome_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard input (for navigation and commands)
/// 2. Timer ticks (spinner animation, uptime)
/// 3. Fetch outcomes (committed or dropped by the page)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    outcome_rx: &mut OutcomeReceiver,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(120));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(outcome) = outcome_rx.recv() => {
                handle_outcome(app, outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Hand a finished request to the page
fn handle_outcome(app: &mut App, outcome: FetchOutcome) {
    if app.page.apply_outcome(outcome) && app.selected_index().is_none() {
        app.selected = 0;
    }
}

/// Handle keyboard input
/// Layered dispatch: Filter dialog → Modal → Global → Page
pub(crate) fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Only presses act; release/repeat events are ignored everywhere
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C always quits, even from an overlay
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Filter dialog captures all input while open
    if app.page.dialog.is_open() {
        handle_dialog_input(app, key_event.code);
        return;
    }

    // Layer 2: Modal captures all input when active
    if handle_modal_input(app, key_event.code) {
        return;
    }

    // Layer 3: Global keys
    if handle_global_keys(app, key_event.code) {
        return;
    }

    // Layer 4: Listing page
    handle_page_keys(app, key_event.code);
}

fn handle_dialog_input(app: &mut App, key: KeyCode) {
    match app.page.dialog.handle_input(key) {
        DialogAction::None | DialogAction::Closed => {}
        DialogAction::Submit(filter) => {
            app.page.handle_filter_available_animals(filter);
            app.selected = 0;
        }
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key: KeyCode) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
    }

    true
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('?') => {
            app.modal = Some(Modal::help());
            true
        }
        _ => false,
    }
}

fn handle_page_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('f') => {
            app.open_filter_dialog();
        }
        KeyCode::Char('c') => {
            app.clear_filters();
        }
        KeyCode::Char('r') => {
            app.page.refresh();
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
            app.select_next()
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
            app.select_previous()
        }
        KeyCode::Enter => app.open_detail(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{apply_current, loaded_app};
    use super::*;
    use crate::animals::{animal, AnimalFilter};
    use crate::api::ApiResponse;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn test_filter_key_ignored_without_affordance() {
        let mut app = loaded_app(Vec::new(), None);
        press(&mut app, KeyCode::Char('f'));
        assert!(!app.page.dialog.is_open());
    }

    #[tokio::test]
    async fn test_filter_flow_through_keys() {
        let mut app = loaded_app(
            vec![
                animal("1", "Linux", "Cachorro", "Macho"),
                animal("2", "Mia", "Gato", "Fêmea"),
            ],
            None,
        );
        let before = app.page.generation();

        press(&mut app, KeyCode::Char('f'));
        assert!(app.page.dialog.is_open());

        // Tipo -> Gato, then submit
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert!(!app.page.dialog.is_open());
        assert_eq!(
            app.page.filter(),
            AnimalFilter::new(Some("Gato".into()), None).as_ref()
        );
        assert!(app.page.is_loading());
        assert_eq!(app.page.generation(), before + 1);
    }

    #[tokio::test]
    async fn test_page_keys_do_not_leak_while_dialog_open() {
        let mut app = loaded_app(vec![animal("1", "Linux", "Cachorro", "Macho")], None);
        press(&mut app, KeyCode::Char('f'));

        // 'q' inside the dialog is not quit
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert!(app.page.dialog.is_open());

        press(&mut app, KeyCode::Esc);
        assert!(!app.page.dialog.is_open());
        assert!(app.page.filter().is_none());
    }

    #[tokio::test]
    async fn test_clear_key_only_with_active_filter() {
        let mut app = loaded_app(vec![animal("1", "Linux", "Cachorro", "Macho")], None);
        let before = app.page.generation();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.page.generation(), before);

        let filtered = AnimalFilter::new(None, Some("Macho".into()));
        let mut app = loaded_app(vec![animal("1", "Linux", "Cachorro", "Macho")], filtered);
        press(&mut app, KeyCode::Char('c'));
        assert!(app.page.filter().is_none());
        assert!(app.page.is_loading());
    }

    #[tokio::test]
    async fn test_selection_and_detail() {
        let mut app = loaded_app(
            vec![
                animal("1", "Linux", "Cachorro", "Macho"),
                animal("2", "Mia", "Gato", "Fêmea"),
            ],
            None,
        );

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index(), Some(1));

        press(&mut app, KeyCode::Enter);
        match &app.modal {
            Some(Modal::AnimalDetail(a)) => assert_eq!(a.name, "Mia"),
            other => panic!("Expected detail modal, got {:?}", other),
        }

        // Modal swallows page keys
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_index(), Some(1));

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[tokio::test]
    async fn test_selection_clamps_when_list_shrinks() {
        let mut app = loaded_app(
            vec![
                animal("1", "Linux", "Cachorro", "Macho"),
                animal("2", "Mia", "Gato", "Fêmea"),
                animal("3", "Thor", "Cachorro", "Macho"),
            ],
            None,
        );
        app.selected = 2;

        app.page.refresh();
        apply_current(
            &mut app,
            Ok(ApiResponse::ok(vec![animal("2", "Mia", "Gato", "Fêmea")])),
        );
        assert_eq!(app.selected_index(), Some(0));
        assert_eq!(app.selected_animal().map(|a| a.name), Some("Mia".into()));
    }

    #[tokio::test]
    async fn test_quit_and_help() {
        let mut app = loaded_app(Vec::new(), None);
        press(&mut app, KeyCode::Char('?'));
        assert!(matches!(app.modal, Some(Modal::Help)));
        press(&mut app, KeyCode::Char('?'));
        assert!(app.modal.is_none());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
