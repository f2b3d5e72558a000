// ============================================================================
// Identifiants typés
// ============================================================================
// Un newtype par entité : impossible de passer un TeamId là où un PlayerId
// est attendu, le compilateur refuse.
//
// CONCEPT RUST : Newtype pattern
// - struct PlayerId(Uuid) : zéro coût à l'exécution
// - Copy + Hash : utilisable comme clé et passé par valeur
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Génère un nouvel identifiant aléatoire (UUID v4)
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifiant d'un joueur
    PlayerId
);
entity_id!(
    /// Identifiant d'une équipe
    TeamId
);
entity_id!(
    /// Identifiant d'un moyen de paiement configuré
    PaymentMethodId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = PlayerId::new();
        let b = PlayerId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serializes_as_plain_uuid() {
        let id = TeamId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
