// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application :
// joueurs, équipes, moyens de paiement et résumés financiers
// ============================================================================

pub mod financials;     // Résumé financier dérivé
pub mod ids;            // Identifiants typés (newtypes sur Uuid)
pub mod payment_method; // Moyens de paiement configurables
pub mod player;         // Joueur, poste, éligibilité
pub mod team;           // Équipe et formation

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use squadbook::models::player::Player;
// On peut faire : use squadbook::models::Player;
pub use financials::{format_money, FinancialSummary};
pub use ids::{PaymentMethodId, PlayerId, TeamId};
pub use payment_method::PaymentMethodConfig;
pub use player::{EligibilityStatus, NewPlayer, Player, PlayerPosition};
pub use team::{Formation, NewTeam, Team};
