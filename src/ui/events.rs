// ============================================================================
// Gestion des événements
// ============================================================================
// Lit les événements clavier (crossterm) et les traduit en Event
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Polling avec timeout : la boucle principale reste réactive
// 3. Error handling avec Result
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Tick régulier (aucune touche pendant le timeout)
    Tick,
}

/// Gestionnaire d'événements (sans état)
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
        }
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// CONCEPT : Non-blocking I/O avec timeout
    /// - poll(timeout) attend au plus tick_rate
    /// - Si pas d'événement, retourne Ok(Event::Tick)
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        match event::read()? {
            // Sur certains OS, on reçoit Press ET Release : on garde Press
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),

            // Resize, souris, release... : simple redessin
            _ => Ok(Event::Tick),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers : Convertir un Event en action
// ============================================================================
// CONCEPT RUST : Pattern matching avec matches!
// - Une fonction par action, la boucle principale reste lisible
// ============================================================================

/// Code de touche d'un événement clavier
fn key_code(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) => Some(key.code),
        Event::Tick => None,
    }
}

/// Vérifie si l'événement est une touche (tout sauf Tick)
pub fn is_key_event(event: &Event) -> bool {
    matches!(event, Event::Key(_))
}

/// 'q' : quitter (confirmation en deux temps)
pub fn is_quit_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('q') | KeyCode::Char('Q')))
}

/// Échap : retour / annulation
pub fn is_escape_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Esc))
}

pub fn is_enter_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Enter))
}

/// Flèche vers le haut ou 'k' (vim)
pub fn is_up_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K')))
}

/// Flèche vers le bas ou 'j' (vim)
pub fn is_down_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J')))
}

/// Flèche gauche (sélecteurs : poste, moyen de paiement, formation)
pub fn is_left_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Left))
}

pub fn is_right_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Right))
}

/// Tab : onglet suivant / champ suivant du formulaire
pub fn is_tab_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Tab))
}

/// Shift+Tab : champ précédent
pub fn is_backtab_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::BackTab))
}

pub fn is_backspace_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Backspace))
}

/// 'a' : ajouter (joueur, ou moyen de paiement sur l'écran dédié)
pub fn is_add_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('a') | KeyCode::Char('A')))
}

/// 'n' : nouvelle équipe
pub fn is_new_team_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('n') | KeyCode::Char('N')))
}

/// 'd' : supprimer (confirmation en deux temps)
pub fn is_delete_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('d') | KeyCode::Char('D')))
}

/// 'r' : renommer le moyen de paiement sélectionné
pub fn is_rename_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('r') | KeyCode::Char('R')))
}

/// 'p' : écran des moyens de paiement
pub fn is_payment_methods_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('p') | KeyCode::Char('P')))
}

/// 'o' : modifier la dette (money owed) de l'équipe
pub fn is_edit_debt_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('o') | KeyCode::Char('O')))
}

/// 'v' : afficher / masquer les détails des joueurs
pub fn is_toggle_details_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('v') | KeyCode::Char('V')))
}

/// 'e' : statut d'éligibilité suivant
pub fn is_eligibility_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('e')))
}

/// 'E' (Shift+e) : statut d'éligibilité précédent
pub fn is_previous_eligibility_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('E')))
}

/// 'u' : disponible / indisponible
pub fn is_availability_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('u') | KeyCode::Char('U')))
}

/// 'm' : moyen de paiement suivant pour le joueur
pub fn is_payment_method_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('m') | KeyCode::Char('M')))
}

/// '$' : modifier le montant payé par le joueur
pub fn is_edit_amount_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('$')))
}

/// Extrait le caractère d'un événement clavier si c'est un caractère
pub fn get_char_from_event(event: &Event) -> Option<char> {
    match key_code(event) {
        Some(KeyCode::Char(c)) => Some(c),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_is_quit_event() {
        assert!(is_quit_event(&key(KeyCode::Char('q'))));
        assert!(!is_quit_event(&key(KeyCode::Char('a'))));
        assert!(!is_quit_event(&Event::Tick));
    }

    #[test]
    fn test_navigation_keys() {
        assert!(is_up_event(&key(KeyCode::Up)));
        assert!(is_up_event(&key(KeyCode::Char('k'))));
        assert!(is_down_event(&key(KeyCode::Char('j'))));
        assert!(is_tab_event(&key(KeyCode::Tab)));
        assert!(is_backtab_event(&key(KeyCode::BackTab)));
        assert!(!is_left_event(&key(KeyCode::Char('h'))));
    }

    #[test]
    fn test_player_action_keys() {
        assert!(is_eligibility_event(&key(KeyCode::Char('e'))));
        assert!(!is_eligibility_event(&key(KeyCode::Char('E'))));
        assert!(is_previous_eligibility_event(&key(KeyCode::Char('E'))));
        assert!(is_availability_event(&key(KeyCode::Char('u'))));
        assert!(is_payment_method_event(&key(KeyCode::Char('m'))));
        assert!(is_edit_amount_event(&key(KeyCode::Char('$'))));
        assert!(is_toggle_details_event(&key(KeyCode::Char('v'))));
    }

    #[test]
    fn test_get_char_from_event() {
        assert_eq!(get_char_from_event(&key(KeyCode::Char('7'))), Some('7'));
        assert_eq!(get_char_from_event(&key(KeyCode::Enter)), None);
        assert_eq!(get_char_from_event(&Event::Tick), None);
        assert!(!is_key_event(&Event::Tick));
    }
}
