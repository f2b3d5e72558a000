// ============================================================================
// Widgets partagés entre les écrans
// ============================================================================
// Layout commun (header / contenu / footer), carte financière, footer avec
// confirmations, ligne d'input et popup d'alerte
//
// CONCEPTS RATATUI :
// 1. Layout : découpage de l'espace en zones
// 2. Clear : efface une zone avant de dessiner une modale par-dessus
// 3. Span / Line : texte multi-couleurs
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputKind};
use crate::models::{format_money, FinancialSummary};

/// Crée le layout principal (header, content, footer)
///
/// CONCEPT RUST : Rc<[T]> vs Vec<T>
/// - Layout::split() retourne Rc<[Rect]>
/// - On le convertit en Vec avec .to_vec() pour simplifier
pub fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header : 3 lignes
            Constraint::Min(0),    // Content : tout le reste
            Constraint::Length(3), // Footer : 3 lignes
        ])
        .split(area)
        .to_vec()
}

/// Dessine le header : titre de l'écran + sous-titre
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center);

    let text = Line::from(Span::styled(
        subtitle.to_string(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Style d'un bloc de contenu standard
pub fn content_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", title))
}

/// Vert pour un surplus, rouge pour un déficit
pub fn balance_style(summary: &FinancialSummary) -> Style {
    if summary.is_surplus() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}

/// Lignes "Collected / Owed / Balance" d'une carte financière
pub fn financial_lines(summary: &FinancialSummary) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let balance = balance_style(summary).add_modifier(Modifier::BOLD);

    vec![
        Line::from(vec![
            Span::styled("Total Collected  ", label),
            Span::styled(format_money(summary.total_collected), value),
        ]),
        Line::from(vec![
            Span::styled("Total Owed       ", label),
            Span::styled(format_money(summary.total_owed), value),
        ]),
        Line::from(vec![
            Span::styled("Balance          ", label),
            Span::styled(summary.signed_balance(), balance),
            Span::raw("  "),
            Span::styled(format!("({})", summary.status_label()), balance_style(summary)),
        ]),
    ]
}

/// Carte financière encadrée
pub fn render_financial_card(frame: &mut Frame, area: Rect, title: &str, summary: &FinancialSummary) {
    let paragraph = Paragraph::new(financial_lines(summary)).block(content_block(title));
    frame.render_widget(paragraph, area);
}

/// Paire "[touche] Action" pour les footers
pub fn shortcut(key: &'static str, action: &'static str, color: Color) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(action),
    ]
}

/// Construit une ligne de raccourcis à partir de paires
pub fn shortcuts_line(pairs: &[(&'static str, &'static str, Color)]) -> Line<'static> {
    let spans: Vec<Span<'static>> = pairs
        .iter()
        .flat_map(|(key, action, color)| shortcut(key, action, *color))
        .collect();
    Line::from(spans)
}

// ============================================================================
// Footer : raccourcis, confirmations ou ligne de saisie
// ============================================================================

/// Dessine le footer de l'écran courant
///
/// Priorité : saisie en cours > confirmation de suppression > confirmation
/// de quit > raccourcis de l'écran
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect, shortcuts: Line<'static>, delete_target: &str) {
    if app.is_in_input_mode() {
        render_input_footer(frame, app, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let warning = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let blinking = Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
        .add_modifier(Modifier::SLOW_BLINK);

    let line = if app.is_awaiting_delete_confirmation() {
        Line::from(vec![
            Span::styled("⚠  Press ", warning),
            Span::styled("[d]", blinking),
            Span::styled(format!(" again to delete {}, any other key to cancel ⚠", delete_target), warning),
        ])
    } else if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled("⚠  Press ", warning),
            Span::styled("[q]", blinking),
            Span::styled(" again to quit, any other key to cancel ⚠", warning),
        ])
    } else {
        shortcuts
    };

    let paragraph = Paragraph::new(vec![line]).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Footer en mode input : prompt + buffer + curseur
fn render_input_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green)) // Vert pour indiquer mode input
        .title(" [Enter] Confirm  [Esc] Cancel ");

    let mut spans = vec![
        Span::styled(
            app.input_prompt.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.input_buffer.clone(), Style::default().fg(Color::White)),
        Span::styled(
            "█", // Curseur
            Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK),
        ),
    ];

    // Nouvelle équipe : la formation se choisit avec ←/→ pendant la saisie
    if let Some(InputKind::AddTeam { formation }) = app.input {
        spans.push(Span::raw("   Formation: "));
        spans.push(Span::styled(
            format!("◀ {} ▶", formation.label()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Modales
// ============================================================================

/// Rectangle centré occupant un pourcentage de `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Popup d'alerte : toute touche la ferme
pub fn render_alert(frame: &mut Frame, app: &App) {
    let Some(alert) = &app.alert else {
        return;
    };

    let area = centered_rect(50, 25, frame.size());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(format!(" {} ", alert.title))
        .title_alignment(Alignment::Center);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            alert.message.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key", Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
