// ============================================================================
// Structure : PaymentMethodConfig
// ============================================================================
// Un moyen de paiement configurable (Cash, Card, Venmo, ...)
//
// Les moyens "par défaut" sont créés au démarrage et ne peuvent jamais
// être supprimés. Les noms sont uniques sans tenir compte de la casse.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::PaymentMethodId;

/// Moyens de paiement semés au démarrage : (nom, protégé ?)
pub const DEFAULT_PAYMENT_METHODS: [(&str, bool); 5] = [
    ("Cash", true),
    ("Card", true),
    ("Transfer", true),
    ("Venmo", false),
    ("Check", false),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodConfig {
    pub id: PaymentMethodId,

    /// Nom affiché, unique (insensible à la casse)
    pub name: String,

    /// true : protégé contre la suppression
    pub is_default: bool,
}

impl PaymentMethodConfig {
    /// Moyen de paiement ajouté par l'utilisateur (jamais protégé)
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            id: PaymentMethodId::new(),
            name: name.into(),
            is_default: false,
        }
    }

    /// Liste semée au démarrage
    pub fn defaults() -> Vec<PaymentMethodConfig> {
        DEFAULT_PAYMENT_METHODS
            .iter()
            .map(|&(name, is_default)| PaymentMethodConfig {
                id: PaymentMethodId::new(),
                name: name.to_string(),
                is_default,
            })
            .collect()
    }

    /// Compare les noms sans tenir compte de la casse
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}
