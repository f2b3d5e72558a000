// ============================================================================
// Écran de détail d'une équipe
// ============================================================================
// Trois onglets :
// - Details : carte financière de l'équipe + liste des joueurs (éditable
//   quand les détails sont affichés)
// - Roster : joueurs regroupés par poste
// - Game Day : formation + joueurs disponibles ET éligibles
// ============================================================================

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, TeamTab};
use crate::models::{format_money, EligibilityStatus, Player, PlayerPosition, Team, TeamId};
use crate::ui::widgets::{
    content_block, create_layout, financial_lines, render_footer, render_header, shortcuts_line,
};

/// Dessine le détail de l'équipe `team_id`
pub fn render_team_detail(frame: &mut Frame, app: &App, team_id: TeamId) {
    let chunks = create_layout(frame.size());

    let Some(team) = app.store.team(team_id) else {
        render_header(frame, chunks[0], "Squadbook", "Team not found");
        let shortcuts = shortcuts_line(&[("[Esc]", " Back", Color::Yellow)]);
        render_footer(frame, app, chunks[2], shortcuts, "");
        return;
    };

    render_header(frame, chunks[0], "Squadbook", &team.name);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(chunks[1]);

    render_tabs(frame, app, content[0]);

    let roster = app.store.team_players(team_id);
    match app.current_tab {
        TeamTab::Details => render_details_tab(frame, app, team, &roster, content[1]),
        TeamTab::Roster => render_roster_tab(frame, &roster, content[1]),
        TeamTab::GameDay => render_game_day_tab(frame, team, &roster, content[1]),
    }

    render_footer(frame, app, chunks[2], footer_shortcuts(app), "");
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<&str> = TeamTab::all().iter().map(|tab| tab.label()).collect();
    let selected = TeamTab::all()
        .iter()
        .position(|tab| *tab == app.current_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(content_block("Tab ↹"))
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider("|");

    frame.render_widget(tabs, area);
}

fn footer_shortcuts(app: &App) -> Line<'static> {
    match app.current_tab {
        TeamTab::Details if app.show_player_details => shortcuts_line(&[
            ("[Esc]", " Back  ", Color::Yellow),
            ("[v]", " Hide details  ", Color::Yellow),
            ("[e/E]", " Eligibility  ", Color::Green),
            ("[u]", " Availability  ", Color::Green),
            ("[m]", " Method  ", Color::Green),
            ("[$]", " Amount  ", Color::Green),
            ("[o]", " Owed", Color::Magenta),
        ]),
        TeamTab::Details => shortcuts_line(&[
            ("[Esc]", " Back  ", Color::Yellow),
            ("[Tab]", " Tabs  ", Color::Yellow),
            ("[v]", " Show details  ", Color::Yellow),
            ("[a]", " Add player  ", Color::Green),
            ("[o]", " Edit owed  ", Color::Magenta),
            ("[p]", " Payment methods", Color::Magenta),
        ]),
        TeamTab::Roster | TeamTab::GameDay => shortcuts_line(&[
            ("[Esc]", " Back  ", Color::Yellow),
            ("[Tab]", " Tabs  ", Color::Yellow),
            ("[a]", " Add player  ", Color::Green),
            ("[q]", " Quit", Color::Yellow),
        ]),
    }
}

// ============================================================================
// Onglet Details
// ============================================================================

fn render_details_tab(frame: &mut Frame, app: &App, team: &Team, roster: &[&Player], area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    // Carte financière + infos de l'équipe
    let summary = app.store.team_financials(team.id);
    let mut lines = financial_lines(&summary);
    lines.push(Line::from(vec![
        Span::styled("Formation        ", Style::default().fg(Color::Gray)),
        Span::raw(team.formation.label()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Created          ", Style::default().fg(Color::Gray)),
        Span::raw(team.created_label()),
    ]));
    frame.render_widget(
        Paragraph::new(lines).block(content_block("Financial Summary")),
        chunks[0],
    );

    let block = content_block(&format!("Players ({})", roster.len()));
    if roster.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No players in this team yet", Style::default().fg(Color::Gray))),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let today = Local::now().date_naive();
    let items: Vec<ListItem> = roster
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!(" {:<22}", player.name),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<12}", player.position.label()), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format_money(player.amount_paid),
                    if player.has_paid() {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::Gray)
                    },
                ),
            ])];

            if app.show_player_details {
                lines.push(player_detail_line(player, today));
            }

            let item = ListItem::new(lines);
            if index == app.selected_player {
                item.style(Style::default().add_modifier(Modifier::BOLD).add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), chunks[1]);
}

/// Ligne de détail : âge, moyen de paiement, disponibilité, éligibilité
fn player_detail_line(player: &Player, today: chrono::NaiveDate) -> Line<'static> {
    let label = Style::default().fg(Color::Gray);
    let (availability, availability_style) = if player.is_available {
        ("Available", Style::default().fg(Color::Green))
    } else {
        ("Unavailable", Style::default().fg(Color::Red))
    };

    Line::from(vec![
        Span::styled(format!("   Age {:<4}", player.age_on(today)), label),
        Span::styled(format!("Paid via {:<10}", player.payment_method), label),
        Span::styled(format!("{:<13}", availability), availability_style),
        Span::styled(player.eligibility.label(), eligibility_style(player.eligibility)),
    ])
}

fn eligibility_style(status: EligibilityStatus) -> Style {
    match status {
        EligibilityStatus::Eligible => Style::default().fg(Color::Green),
        EligibilityStatus::Ineligible => Style::default().fg(Color::Red),
        EligibilityStatus::Suspended => Style::default().fg(Color::Yellow),
        EligibilityStatus::Injured => Style::default().fg(Color::Magenta),
    }
}

// ============================================================================
// Onglet Roster
// ============================================================================

/// Titre de section par poste ("Goalkeepers")
fn position_heading(position: PlayerPosition) -> &'static str {
    match position {
        PlayerPosition::Goalkeeper => "Goalkeepers",
        PlayerPosition::Defender => "Defenders",
        PlayerPosition::Midfielder => "Midfielders",
        PlayerPosition::Forward => "Forwards",
    }
}

fn render_roster_tab(frame: &mut Frame, roster: &[&Player], area: Rect) {
    let mut lines = Vec::new();

    for position in PlayerPosition::all() {
        let players: Vec<&&Player> = roster.iter().filter(|p| p.position == position).collect();
        let heading = position_heading(position);

        lines.push(Line::from(Span::styled(
            format!("{} ({})", heading, players.len()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));

        if players.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  No {} assigned", heading.to_lowercase()),
                Style::default().fg(Color::Gray),
            )));
        }
        for player in players {
            lines.push(Line::from(vec![
                Span::raw(format!("  • {:<22}", player.name)),
                Span::styled(player.eligibility.label(), eligibility_style(player.eligibility)),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(content_block("Roster")), area);
}

// ============================================================================
// Onglet Game Day
// ============================================================================

fn render_game_day_tab(frame: &mut Frame, team: &Team, roster: &[&Player], area: Rect) {
    let selectable: Vec<&&Player> = roster.iter().filter(|p| p.is_selectable()).collect();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Formation: ", Style::default().fg(Color::Gray)),
            Span::styled(
                team.formation.label(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} of {} players available and eligible", selectable.len(), roster.len()),
            Style::default().fg(Color::Gray),
        )),
        status_counts_line(roster),
        Line::from(""),
    ];

    if selectable.is_empty() {
        lines.push(Line::from(Span::styled(
            "No players available for game day",
            Style::default().fg(Color::Gray),
        )));
    }
    for player in selectable {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", player.position.label()), Style::default().fg(Color::Cyan)),
            Span::raw(player.name.clone()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(content_block("Game Day")), area);
}

/// "Eligible 4  Ineligible 0  Suspended 1  Injured 0"
fn status_counts_line(roster: &[&Player]) -> Line<'static> {
    let spans: Vec<Span<'static>> = EligibilityStatus::all()
        .into_iter()
        .flat_map(|status| {
            let count = roster.iter().filter(|p| p.eligibility == status).count();
            [
                Span::styled(format!("{} ", status.label()), eligibility_style(status)),
                Span::raw(format!("{}  ", count)),
            ]
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_headings() {
        assert_eq!(position_heading(PlayerPosition::Goalkeeper), "Goalkeepers");
        assert_eq!(
            PlayerPosition::all().map(position_heading),
            ["Goalkeepers", "Defenders", "Midfielders", "Forwards"]
        );
    }

    #[test]
    fn test_status_counts_line() {
        use crate::models::NewPlayer;
        use chrono::NaiveDate;

        let dob = NaiveDate::from_ymd_opt(2012, 5, 1).unwrap();
        let a = Player::from_new(
            crate::models::PlayerId::new(),
            NewPlayer::new("A", dob).eligibility(EligibilityStatus::Injured),
        );
        let b = Player::from_new(crate::models::PlayerId::new(), NewPlayer::new("B", dob));

        let line = status_counts_line(&[&a, &b]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Eligible 1  Ineligible 0  Suspended 0  Injured 1  ");
    }
}
