// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current config
// - Detail modal: one animal's full record

use crate::animals::Animal;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::AnimalDetail(animal) => render_detail(f, app, animal),
    }
}

/// Calculate centered rect for modal dialog
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.title);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Listagem", header_style)),
        kb("↑/↓, j/k", "Selecionar animal"),
        kb("Enter", "Ver detalhes"),
        kb("f", "Filtrar"),
        kb("c", "Limpar filtros"),
        kb("r", "Recarregar"),
        Line::raw(""),
        Line::from(Span::styled("  Filtros", header_style)),
        kb("↑/↓", "Trocar campo"),
        kb("←/→", "Trocar opção"),
        kb("Enter", "Aplicar"),
        kb("Esc", "Fechar"),
        Line::raw(""),
        Line::from(Span::styled("  Geral", header_style)),
        kb("?", "Esta ajuda"),
        kb("q", "Sair"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Tema: ", desc_style),
            Span::styled(app.theme.name, key_style),
            Span::styled("  |  Fonte: ", desc_style),
            Span::styled(app.page.source(), key_style),
        ]),
    ]);

    let area = centered_rect(44, 24, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Ajuda ")
                .title_bottom(Line::from(" ? ou Esc para fechar ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the animal detail overlay
fn render_detail(f: &mut Frame, app: &App, animal: &Animal) {
    let label_style = Style::default()
        .fg(app.theme.muted)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(app.theme.foreground);

    let field = |label: &str, value: &str| -> Line {
        Line::from(vec![
            Span::styled(format!("  {:<10}", label), label_style),
            Span::styled(value.to_string(), value_style),
        ])
    };

    let mut lines = vec![
        Line::raw(""),
        field("Tipo", &animal.kind),
        field("Gênero", &animal.gender),
        field("Raça", &animal.breed),
    ];
    if !animal.photo.is_empty() {
        lines.push(field("Foto", &animal.photo));
    }
    lines.push(Line::raw(""));
    if animal.description.trim().is_empty() {
        lines.push(Line::styled("  Sem descrição.", label_style));
    } else {
        lines.push(Line::styled(format!("  {}", animal.description), value_style));
    }

    let frame_area = f.area();
    let width = (frame_area.width * 6 / 10).max(40);
    let height = (frame_area.height / 2).max(12);
    let area = centered_rect(width, height, frame_area);

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(format!(" {} ", animal.name))
                .title_bottom(Line::from(" Esc para fechar ").centered()),
        );

    f.render_widget(paragraph, area);
}
