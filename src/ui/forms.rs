// ============================================================================
// Formulaire modal : Add New Player
// ============================================================================
// Modale centrée dessinée par-dessus l'écran courant
//
// - Tab / Shift+Tab : champ suivant / précédent
// - Champs texte : saisie clavier, Backspace
// - Sélecteurs (poste, moyen de paiement) : ←/→
// - Enter : valider, ESC : annuler
// ============================================================================

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, FormField, PlayerForm};
use crate::ui::widgets::{centered_rect, shortcuts_line};

pub fn render_player_form(frame: &mut Frame, app: &App) {
    let Some(form) = &app.player_form else {
        return;
    };

    let area = centered_rect(60, 60, frame.size());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Add New Player ")
        .title_alignment(Alignment::Center);

    let mut lines = vec![Line::from("")];

    // Équipe pré-assignée
    if let Some(team) = form.team_id.and_then(|id| app.store.team(id)) {
        lines.push(Line::from(vec![
            Span::styled("  Team: ", Style::default().fg(Color::Gray)),
            Span::styled(team.name.clone(), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(""));
    }

    for field in FormField::all() {
        lines.push(field_line(form, field));
    }

    lines.push(Line::from(""));
    lines.push(shortcuts_line(&[
        ("[Tab]", " Next field  ", Color::Yellow),
        ("[←→]", " Change  ", Color::Yellow),
        ("[Enter]", " Add Player  ", Color::Green),
        ("[Esc]", " Cancel", Color::Red),
    ]));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Une ligne "Label : valeur", mise en évidence si le champ a le focus
fn field_line(form: &PlayerForm, field: FormField) -> Line<'static> {
    let focused = form.focus == field;

    let value = match field {
        FormField::Name => form.name.clone(),
        FormField::DateOfBirth => form.date_of_birth.clone(),
        FormField::Position => format!("◀ {} ▶", form.position.label()),
        FormField::PaymentMethod => format!("◀ {} ▶", form.payment_method),
        FormField::Amount => form.amount.clone(),
    };

    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(if focused { "> " } else { "  " }, label_style),
        Span::styled(format!("{:<18}", field.label()), label_style),
        Span::styled(value, Style::default().fg(Color::White)),
    ];
    if focused && field.is_text() {
        spans.push(Span::styled(
            "█",
            Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    if field == FormField::DateOfBirth {
        spans.push(Span::styled("  (YYYY-MM-DD)", Style::default().fg(Color::DarkGray)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_field_line_marks_focus() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let mut form = PlayerForm::new(None, today);
        form.name = "Zoe".to_string();

        let name = text(&field_line(&form, FormField::Name));
        assert!(name.starts_with("> "));
        assert!(name.contains("Zoe█"));

        let dob = text(&field_line(&form, FormField::DateOfBirth));
        assert!(dob.starts_with("  "));
        assert!(dob.contains("2024-03-04"));

        let position = text(&field_line(&form, FormField::Position));
        assert!(position.contains("◀ Forward ▶"));
    }
}
