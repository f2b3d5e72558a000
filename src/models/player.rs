// ============================================================================
// Structure : Player
// ============================================================================
// Représente un joueur avec sa situation de paiement et d'éligibilité
//
// CONCEPTS RUST :
// 1. Enums fermés : position et éligibilité ne peuvent pas prendre
//    d'autres valeurs que celles listées
// 2. NaiveDate : date sans fuseau horaire (une date de naissance n'en a pas)
// 3. Builder : NewPlayer décrit un joueur pas encore enregistré (sans id)
// ============================================================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{PlayerId, TeamId};

/// Poste d'un joueur sur le terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPosition {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPosition {
    /// Tous les postes, dans l'ordre d'affichage du roster
    pub fn all() -> [PlayerPosition; 4] {
        [
            PlayerPosition::Goalkeeper,
            PlayerPosition::Defender,
            PlayerPosition::Midfielder,
            PlayerPosition::Forward,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "Goalkeeper",
            PlayerPosition::Defender => "Defender",
            PlayerPosition::Midfielder => "Midfielder",
            PlayerPosition::Forward => "Forward",
        }
    }

    /// Poste suivant (cycle)
    pub fn next(&self) -> PlayerPosition {
        match self {
            PlayerPosition::Goalkeeper => PlayerPosition::Defender,
            PlayerPosition::Defender => PlayerPosition::Midfielder,
            PlayerPosition::Midfielder => PlayerPosition::Forward,
            PlayerPosition::Forward => PlayerPosition::Goalkeeper, // Boucle
        }
    }

    /// Poste précédent (cycle)
    pub fn previous(&self) -> PlayerPosition {
        match self {
            PlayerPosition::Goalkeeper => PlayerPosition::Forward, // Boucle
            PlayerPosition::Defender => PlayerPosition::Goalkeeper,
            PlayerPosition::Midfielder => PlayerPosition::Defender,
            PlayerPosition::Forward => PlayerPosition::Midfielder,
        }
    }
}

impl Default for PlayerPosition {
    /// Le formulaire d'ajout propose "Forward" par défaut
    fn default() -> Self {
        PlayerPosition::Forward
    }
}

/// Statut d'éligibilité d'un joueur
///
/// CONCEPT : Cycle d'états
/// - Eligible → Ineligible → Suspended → Injured → Eligible
/// - Utilisé par la touche 'e' sur la fiche joueur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EligibilityStatus {
    Eligible,
    Ineligible,
    Suspended,
    Injured,
}

impl EligibilityStatus {
    pub fn all() -> [EligibilityStatus; 4] {
        [
            EligibilityStatus::Eligible,
            EligibilityStatus::Ineligible,
            EligibilityStatus::Suspended,
            EligibilityStatus::Injured,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EligibilityStatus::Eligible => "Eligible",
            EligibilityStatus::Ineligible => "Ineligible",
            EligibilityStatus::Suspended => "Suspended",
            EligibilityStatus::Injured => "Injured",
        }
    }

    /// Statut suivant (cycle)
    pub fn next(&self) -> EligibilityStatus {
        match self {
            EligibilityStatus::Eligible => EligibilityStatus::Ineligible,
            EligibilityStatus::Ineligible => EligibilityStatus::Suspended,
            EligibilityStatus::Suspended => EligibilityStatus::Injured,
            EligibilityStatus::Injured => EligibilityStatus::Eligible, // Boucle
        }
    }

    /// Statut précédent (cycle inverse)
    pub fn previous(&self) -> EligibilityStatus {
        match self {
            EligibilityStatus::Eligible => EligibilityStatus::Injured, // Boucle
            EligibilityStatus::Ineligible => EligibilityStatus::Eligible,
            EligibilityStatus::Suspended => EligibilityStatus::Ineligible,
            EligibilityStatus::Injured => EligibilityStatus::Suspended,
        }
    }
}

impl Default for EligibilityStatus {
    fn default() -> Self {
        EligibilityStatus::Eligible
    }
}

/// Un joueur enregistré
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    pub name: String,

    pub date_of_birth: NaiveDate,

    pub position: PlayerPosition,

    /// Nom du moyen de paiement utilisé (référence par nom vers la config)
    pub payment_method: String,

    /// Montant déjà payé, toujours >= 0
    pub amount_paid: f64,

    /// Équipes du joueur (many-to-many)
    /// C'est cette liste qui fait foi pour calculer un roster
    pub team_ids: Vec<TeamId>,

    pub is_available: bool,

    pub eligibility: EligibilityStatus,
}

impl Player {
    /// Construit le joueur à partir d'un NewPlayer et d'un id fraîchement généré
    pub fn from_new(id: PlayerId, new: NewPlayer) -> Self {
        Self {
            id,
            name: new.name,
            date_of_birth: new.date_of_birth,
            position: new.position,
            payment_method: new.payment_method,
            amount_paid: new.amount_paid,
            team_ids: new.team_ids,
            is_available: new.is_available,
            eligibility: new.eligibility,
        }
    }

    /// Âge en années révolues à la date donnée
    ///
    /// Si l'anniversaire n'est pas encore passé cette année, on retire 1
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.date_of_birth.year();
        if (today.month(), today.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            age -= 1;
        }
        age
    }

    /// Vrai si le joueur appartient à l'équipe
    pub fn plays_for(&self, team_id: TeamId) -> bool {
        self.team_ids.contains(&team_id)
    }

    /// Vrai si le joueur peut être aligné (disponible ET éligible)
    pub fn is_selectable(&self) -> bool {
        self.is_available && self.eligibility == EligibilityStatus::Eligible
    }

    pub fn has_paid(&self) -> bool {
        self.amount_paid > 0.0
    }
}

/// Joueur pas encore enregistré (pas d'id)
///
/// CONCEPT RUST : Builder pattern
/// - Chaque méthode consomme self et retourne Self
/// - Les champs non fournis gardent des valeurs par défaut sensées
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub position: PlayerPosition,
    pub payment_method: String,
    pub amount_paid: f64,
    pub team_ids: Vec<TeamId>,
    pub is_available: bool,
    pub eligibility: EligibilityStatus,
}

impl NewPlayer {
    /// Nouveau joueur : disponible, éligible, rien payé, aucune équipe
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            position: PlayerPosition::default(),
            payment_method: "Card".to_string(),
            amount_paid: 0.0,
            team_ids: Vec::new(),
            is_available: true,
            eligibility: EligibilityStatus::default(),
        }
    }

    pub fn position(mut self, position: PlayerPosition) -> Self {
        self.position = position;
        self
    }

    pub fn payment(mut self, method: impl Into<String>, amount: f64) -> Self {
        self.payment_method = method.into();
        self.amount_paid = amount;
        self
    }

    /// Ajoute une équipe (ignorée si déjà présente)
    pub fn team(mut self, team_id: TeamId) -> Self {
        if !self.team_ids.contains(&team_id) {
            self.team_ids.push(team_id);
        }
        self
    }

    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn eligibility(mut self, eligibility: EligibilityStatus) -> Self {
        self.eligibility = eligibility;
        self
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_eligibility_full_cycle() {
        let mut status = EligibilityStatus::Eligible;
        for _ in 0..4 {
            status = status.next();
        }
        assert_eq!(status, EligibilityStatus::Eligible);
        assert_eq!(EligibilityStatus::Injured.next(), EligibilityStatus::Eligible); // Boucle

        assert_eq!(EligibilityStatus::Eligible.previous(), EligibilityStatus::Injured);
        for status in EligibilityStatus::all() {
            assert_eq!(status.next().previous(), status);
        }
    }

    #[test]
    fn test_position_cycle() {
        assert_eq!(PlayerPosition::Forward.next(), PlayerPosition::Goalkeeper);
        assert_eq!(PlayerPosition::Goalkeeper.previous(), PlayerPosition::Forward);
        for position in PlayerPosition::all() {
            assert_eq!(position.next().previous(), position);
        }
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let player = Player::from_new(PlayerId::new(), NewPlayer::new("Sam", date(2010, 6, 15)));

        assert_eq!(player.age_on(date(2024, 6, 14)), 13);
        assert_eq!(player.age_on(date(2024, 6, 15)), 14);
        assert_eq!(player.age_on(date(2024, 12, 1)), 14);
    }

    #[test]
    fn test_new_player_defaults() {
        let new = NewPlayer::new("Alex", date(2012, 1, 1));
        assert!(new.is_available);
        assert_eq!(new.eligibility, EligibilityStatus::Eligible);
        assert_eq!(new.amount_paid, 0.0);
        assert!(new.team_ids.is_empty());
    }

    #[test]
    fn test_builder_team_is_deduplicated() {
        let team = TeamId::new();
        let new = NewPlayer::new("Alex", date(2012, 1, 1)).team(team).team(team);
        assert_eq!(new.team_ids, vec![team]);
    }

    #[test]
    fn test_is_selectable() {
        let new = NewPlayer::new("Alex", date(2012, 1, 1));
        let player = Player::from_new(PlayerId::new(), new.clone());
        assert!(player.is_selectable());

        let injured = Player::from_new(PlayerId::new(), new.clone().eligibility(EligibilityStatus::Injured));
        assert!(!injured.is_selectable());

        let away = Player::from_new(PlayerId::new(), new.available(false));
        assert!(!away.is_selectable());
    }
}
