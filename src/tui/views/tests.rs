//! Render tests on a ratatui `TestBackend`

use super::listing::{LOADING_TEXT, PAGE_TITLE};
use super::*;
use crate::animals::{animal, AnimalFilter, PageContext};
use crate::api::FetchError;
use crate::tui::components::empty_state;
use crate::tui::testing::{apply_current, loaded_app, loading_app};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Draw one frame and return the screen as text, one line per row
fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

fn gato() -> AnimalFilter {
    AnimalFilter::new(Some("Gato".into()), None).unwrap()
}

#[tokio::test]
async fn test_loading_hides_list_and_buttons() {
    let app = loading_app(None);
    let screen = render(&app, 100, 30);

    assert!(screen.contains(PAGE_TITLE));
    assert!(screen.contains(LOADING_TEXT));
    assert!(!screen.contains("Filtrar"));
    assert!(!screen.contains("Limpar filtros"));
}

#[tokio::test]
async fn test_populated_list_renders_cards_and_filter_button() {
    let app = loaded_app(
        vec![
            animal("1", "Linux", "Cachorro", "Macho"),
            animal("2", "Mia", "Gato", "Fêmea"),
        ],
        None,
    );
    let screen = render(&app, 100, 30);

    assert!(screen.contains("Linux"));
    assert!(screen.contains("Mia"));
    assert!(screen.contains("Filtrar"));
    assert!(!screen.contains("Limpar filtros"));
    assert!(!screen.contains(LOADING_TEXT));
}

#[tokio::test]
async fn test_empty_unfiltered_shows_empty_state_without_buttons() {
    let app = loaded_app(Vec::new(), None);
    let screen = render(&app, 100, 30);

    let (headline, _) = empty_state::messages(PageContext::AnimalsAvailableToAdopt);
    assert!(screen.contains(headline));
    assert!(!screen.contains("Filtrar"));
    assert!(!screen.contains("Limpar filtros"));
}

#[tokio::test]
async fn test_empty_filtered_keeps_both_buttons() {
    let app = loaded_app(Vec::new(), Some(gato()));
    let screen = render(&app, 100, 30);

    let (headline, _) = empty_state::messages(PageContext::AnimalsAvailableToAdopt);
    assert!(screen.contains(headline));
    assert!(screen.contains("Filtrar"));
    assert!(screen.contains("Limpar filtros"));
    assert!(screen.contains("filtro: Gato"));
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_cards() {
    let mut app = loaded_app(vec![animal("1", "Linux", "Cachorro", "Macho")], None);
    app.page.refresh();
    apply_current(&mut app, Err(FetchError::Timeout));

    let screen = render(&app, 100, 30);
    assert!(screen.contains("Linux"));
    assert!(!screen.contains(LOADING_TEXT));
}

#[tokio::test]
async fn test_filter_dialog_overlay() {
    let mut app = loaded_app(vec![animal("1", "Linux", "Cachorro", "Macho")], None);
    assert!(app.open_filter_dialog());

    let screen = render(&app, 100, 30);
    assert!(screen.contains("Filtros"));
    assert!(screen.contains("Tipo"));
    assert!(screen.contains("Gênero"));
    assert!(screen.contains("Todos"));
}

#[tokio::test]
async fn test_detail_modal_shows_animal() {
    let mut app = loaded_app(vec![animal("7", "Frajola", "Gato", "Macho")], None);
    app.open_detail();

    let screen = render(&app, 100, 30);
    assert!(screen.contains("Frajola"));
    assert!(screen.contains("Raça"));
}

#[tokio::test]
async fn test_narrow_terminal_still_renders() {
    let app = loaded_app(
        vec![
            animal("1", "Linux", "Cachorro", "Macho"),
            animal("2", "Mia", "Gato", "Fêmea"),
        ],
        None,
    );
    let screen = render(&app, 40, 24);
    assert!(screen.contains("Linux"));
}
