// Available-animals page
//
// Header with the page title and the filter buttons, then exactly one of:
// loading text, card grid, empty state.

use crate::animals::Animal;
use crate::listing::{FilterAffordances, ListingView};
use crate::tui::app::App;
use crate::tui::components::animal_card::{self, CARD_HEIGHT};
use crate::tui::components::button::{self, ButtonStyle};
use crate::tui::components::empty_state;
use crate::tui::layout::CardGrid;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const PAGE_TITLE: &str = "Animais disponíveis para adoção";
pub const LOADING_TEXT: &str = "Carregando...";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let state = app.page.state();
    render_header(f, chunks[0], state.affordances(), &app.theme);

    match state.view() {
        ListingView::Loading => {
            let text = format!(" {} {}", app.spinner_char(), LOADING_TEXT);
            f.render_widget(
                Paragraph::new(text).style(Style::default().fg(app.theme.muted)),
                chunks[1],
            );
        }
        ListingView::Populated(animals) => {
            let selected = app.selected_index().unwrap_or(0);
            render_grid(f, chunks[1], animals, selected, &app.theme);
        }
        ListingView::Empty(page) => empty_state::render(f, chunks[1], page, &app.theme),
    }
}

/// Page title on the left, buttons on the right
fn render_header(f: &mut Frame, area: Rect, affordances: FilterAffordances, theme: &Theme) {
    let mut buttons: Vec<Span> = Vec::new();
    let mut buttons_width = 0;
    if affordances.clear {
        buttons.extend(button::spans("c", "Limpar filtros", ButtonStyle::Danger, theme));
        buttons.push(Span::raw(" "));
        buttons_width += button::width("c", "Limpar filtros") + 1;
    }
    if affordances.filter {
        buttons.extend(button::spans("f", "Filtrar", ButtonStyle::Primary, theme));
        buttons_width += button::width("f", "Filtrar");
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(buttons_width + 1)])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::styled(format!(" {}", PAGE_TITLE), theme.title_style())),
        cols[0],
    );
    if !buttons.is_empty() {
        f.render_widget(Paragraph::new(Line::from(buttons)), cols[1]);
    }
}

/// Cards in rows, scrolled so the selected card stays visible
fn render_grid(f: &mut Frame, area: Rect, animals: &[Animal], selected: usize, theme: &Theme) {
    let grid = CardGrid::new(area.width, area.height, CARD_HEIGHT);
    let first_row = grid.first_row(selected);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); grid.rows])
        .split(area);

    for (slot, row_area) in row_areas.iter().enumerate() {
        let cards = grid.row_cards(first_row, slot, animals.len());
        if cards.is_empty() {
            break;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, grid.columns as u32); grid.columns])
            .split(*row_area);

        for (cell, idx) in cells.iter().zip(cards) {
            animal_card::render(f, *cell, &animals[idx], idx == selected, theme);
        }
    }
}
