// ============================================================================
// Écran principal : toutes les équipes
// ============================================================================
// Résumé financier global, liste des équipes avec leur propre résumé et
// quelques statistiques rapides
//
// CONCEPT RATATUI : List widget
// - ListItem : une ou plusieurs lignes par élément
// - L'élément sélectionné est affiché en REVERSED
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::{format_money, Team};
use crate::ui::widgets::{
    balance_style, content_block, create_layout, render_financial_card, render_footer,
    render_header, shortcuts_line,
};

/// Dessine l'écran "Soccer Teams"
pub fn render_all_teams(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, chunks[0], "Squadbook", "Soccer Teams");

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Résumé global
            Constraint::Min(0),    // Liste des équipes
            Constraint::Length(3), // Quick stats
        ])
        .split(chunks[1]);

    let summary = app.store.all_teams_financials();
    render_financial_card(frame, content[0], "Overall Financial Summary", &summary);
    render_team_list(frame, app, content[1]);
    render_quick_stats(frame, app, content[2]);

    let shortcuts = shortcuts_line(&[
        ("[q]", " Quit  ", Color::Yellow),
        ("[↑↓ / j k]", " Navigate  ", Color::Yellow),
        ("[Enter]", " Open  ", Color::Yellow),
        ("[n]", " New team  ", Color::Green),
        ("[a]", " Add player  ", Color::Green),
        ("[p]", " Payment methods", Color::Magenta),
    ]);
    render_footer(frame, app, chunks[2], shortcuts, "");
}

/// Ligne de résumé d'une équipe : "Lions U12   6 players • 4-4-2"
fn team_lines(app: &App, team: &Team) -> Vec<Line<'static>> {
    let players = app.store.team_players(team.id).len();
    let summary = app.store.team_financials(team.id);
    let label = Style::default().fg(Color::Gray);

    vec![
        Line::from(vec![
            Span::styled(
                format!(" {:<24}", team.name),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{} players • {}", players, team.formation.label()), label),
        ]),
        Line::from(vec![
            Span::styled("   Collected ", label),
            Span::raw(format!("{:<10}", format_money(summary.total_collected))),
            Span::styled("Owed ", label),
            Span::raw(format!("{:<10}", format_money(summary.total_owed))),
            Span::styled("Balance ", label),
            Span::styled(
                format!("{} {}", format_money(summary.balance.abs()), summary.status_label()),
                balance_style(&summary),
            ),
        ]),
    ]
}

fn render_team_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = content_block("Teams");

    if app.store.teams().is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No teams yet. Create your first team!",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .teams()
        .iter()
        .enumerate()
        .map(|(index, team)| {
            let item = ListItem::new(team_lines(app, team));
            if index == app.selected_team {
                item.style(Style::default().add_modifier(Modifier::BOLD).add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_quick_stats(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.store.all_teams_financials();
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled("Total Players ", label),
        Span::styled(app.store.players().len().to_string(), value),
        Span::raw("    "),
        Span::styled("Active Teams ", label),
        Span::styled(app.store.teams().len().to_string(), value),
        Span::raw("    "),
        Span::styled("Total Collected ", label),
        Span::styled(format_money(summary.total_collected), value),
    ]);

    let paragraph = Paragraph::new(line)
        .block(content_block("Quick Stats"))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
