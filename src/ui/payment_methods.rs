// ============================================================================
// Écran : moyens de paiement
// ============================================================================
// Liste des moyens configurés (les moyens par défaut sont marqués) et rappel
// des règles de gestion
// ============================================================================

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::widgets::{content_block, create_layout, render_footer, render_header, shortcuts_line};

pub fn render_payment_methods(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, chunks[0], "Squadbook", "Payment Methods");

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(chunks[1]);

    render_method_list(frame, app, content[0]);
    render_info(frame, content[1]);

    let shortcuts = shortcuts_line(&[
        ("[Esc]", " Back  ", Color::Yellow),
        ("[↑↓ / j k]", " Navigate  ", Color::Yellow),
        ("[a]", " Add  ", Color::Green),
        ("[r]", " Rename  ", Color::Green),
        ("[d]", " Delete", Color::Red),
    ]);
    let target = app
        .selected_payment_method()
        .map(|method| method.name.as_str())
        .unwrap_or("?");
    render_footer(frame, app, chunks[2], shortcuts, target);
}

fn render_method_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .store
        .payment_methods()
        .iter()
        .enumerate()
        .map(|(index, method)| {
            let mut spans = vec![Span::styled(
                format!(" {:<24}", method.name),
                Style::default().fg(Color::White),
            )];
            if method.is_default {
                spans.push(Span::styled("Default", Style::default().fg(Color::Cyan)));
            } else {
                spans.push(Span::styled("Custom", Style::default().fg(Color::Gray)));
            }

            let item = ListItem::new(Line::from(spans));
            if index == app.selected_method {
                item.style(Style::default().add_modifier(Modifier::BOLD).add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();

    let title = format!("Configured Methods ({})", app.store.payment_methods().len());
    frame.render_widget(List::new(items).block(content_block(&title)), area);
}

fn render_info(frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(Span::styled("• Default payment methods cannot be deleted", style)),
        Line::from(Span::styled("• Custom payment methods can be edited or removed", style)),
        Line::from(Span::styled("• Players can use any configured payment method", style)),
    ];
    frame.render_widget(Paragraph::new(lines).block(content_block("Info")), area);
}
