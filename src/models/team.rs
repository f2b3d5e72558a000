// ============================================================================
// Structure : Team
// ============================================================================
// Une équipe, sa dette (montant dû) et sa formation tactique
//
// Note : la dette (total_owed) est saisie à la main, elle n'est PAS
// calculée à partir des joueurs.
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{PlayerId, TeamId};

/// Formation tactique
///
/// CONCEPT SERDE : #[serde(rename = "...")]
/// - Le variant F442 est sérialisé en "4-4-2"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "4-2-3-1")]
    F4231,
    #[serde(rename = "5-3-2")]
    F532,
}

impl Formation {
    pub fn all() -> [Formation; 5] {
        [
            Formation::F442,
            Formation::F433,
            Formation::F352,
            Formation::F4231,
            Formation::F532,
        ]
    }

    /// Libellé tactique ("4-4-2", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
            Formation::F4231 => "4-2-3-1",
            Formation::F532 => "5-3-2",
        }
    }

    /// Formation suivante (cycle)
    pub fn next(&self) -> Formation {
        match self {
            Formation::F442 => Formation::F433,
            Formation::F433 => Formation::F352,
            Formation::F352 => Formation::F4231,
            Formation::F4231 => Formation::F532,
            Formation::F532 => Formation::F442, // Boucle
        }
    }

    /// Formation précédente (cycle)
    pub fn previous(&self) -> Formation {
        match self {
            Formation::F442 => Formation::F532, // Boucle
            Formation::F433 => Formation::F442,
            Formation::F352 => Formation::F433,
            Formation::F4231 => Formation::F352,
            Formation::F532 => Formation::F4231,
        }
    }
}

impl Default for Formation {
    fn default() -> Self {
        Formation::F442
    }
}

/// Une équipe enregistrée
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,

    pub name: String,

    /// Présent pour compatibilité, mais ne fait PAS foi :
    /// le roster se calcule depuis Player::team_ids
    pub player_ids: Vec<PlayerId>,

    /// Montant dû par l'équipe, toujours >= 0
    pub total_owed: f64,

    pub formation: Formation,

    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn from_new(id: TeamId, created_at: DateTime<Utc>, new: NewTeam) -> Self {
        Self {
            id,
            name: new.name,
            player_ids: new.player_ids,
            total_owed: new.total_owed,
            formation: new.formation,
            created_at,
        }
    }

    /// Date de création au format long ("March 4, 2024")
    pub fn created_label(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }
}

/// Équipe pas encore enregistrée (ni id, ni date de création)
#[derive(Debug, Clone, PartialEq)]
pub struct NewTeam {
    pub name: String,
    pub player_ids: Vec<PlayerId>,
    pub total_owed: f64,
    pub formation: Formation,
}

impl NewTeam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            player_ids: Vec::new(),
            total_owed: 0.0,
            formation: Formation::default(),
        }
    }

    pub fn formation(mut self, formation: Formation) -> Self {
        self.formation = formation;
        self
    }

    pub fn total_owed(mut self, total_owed: f64) -> Self {
        self.total_owed = total_owed;
        self
    }
}
