// ============================================================================
// Squadbook - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod app;        // État de l'application
pub mod config;     // Configuration (variables d'environnement)
pub mod models;     // Structures de données
pub mod store;      // Store en mémoire (équipes, joueurs, paiements)
pub mod ui;         // Interface utilisateur
pub mod validation; // Validation de la saisie
