// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;          // Gestion des événements clavier
pub mod forms;           // Formulaire modal d'ajout de joueur
pub mod payment_methods; // Écran des moyens de paiement
pub mod team_detail;     // Écran de détail d'une équipe
pub mod teams;           // Écran principal (toutes les équipes)
pub mod widgets;         // Layout et widgets partagés

use ratatui::Frame;

use crate::app::{App, Screen};

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Pattern matching sur app.current_screen
/// - Le compilateur garantit l'exhaustivité (tous les cas gérés)
/// - Les modales (formulaire, alerte) sont dessinées par-dessus, l'alerte
///   en dernier
pub fn render(frame: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::AllTeams => teams::render_all_teams(frame, app),
        Screen::PaymentMethods => payment_methods::render_payment_methods(frame, app),
        Screen::TeamDetail(team_id) => team_detail::render_team_detail(frame, app, team_id),
    }

    forms::render_player_form(frame, app);
    widgets::render_alert(frame, app);
}
