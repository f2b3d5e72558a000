// ============================================================================
// Structure : TeamStore
// ============================================================================
// Détient les trois collections en mémoire (joueurs, équipes, moyens de
// paiement) et expose la seule surface de lecture/modification autorisée.
//
// CONCEPTS RUST :
// 1. Ownership explicite : le store est créé par main() puis donné à App,
//    pas de singleton global
// 2. iter_mut().find() : modification en place, les autres entrées ne
//    bougent pas
// 3. Store "confiant" : aucune validation ici, c'est l'appelant (App)
//    qui valide la saisie. Seule exception : un moyen de paiement par
//    défaut ne peut jamais être supprimé.
//
// Les ids inconnus ne sont jamais une erreur : no-op ou résultat vide.
// ============================================================================

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument, warn};

use crate::models::{
    EligibilityStatus, FinancialSummary, Formation, NewPlayer, NewTeam, PaymentMethodConfig,
    PaymentMethodId, Player, PlayerId, PlayerPosition, Team, TeamId,
};

/// Store en mémoire de l'application
#[derive(Debug, Clone)]
pub struct TeamStore {
    players: Vec<Player>,
    teams: Vec<Team>,
    payment_methods: Vec<PaymentMethodConfig>,
}

impl TeamStore {
    /// Store vide, avec uniquement les moyens de paiement par défaut
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            teams: Vec::new(),
            payment_methods: PaymentMethodConfig::defaults(),
        }
    }

    /// Store pré-rempli avec deux équipes et quelques joueurs de démo
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();

        let lions = store.add_team(NewTeam::new("Lions U12").formation(Formation::F442).total_owed(120.0));
        let eagles = store.add_team(NewTeam::new("Eagles U14").formation(Formation::F433).total_owed(80.0));

        // (nom, date de naissance, poste, moyen, montant, équipes)
        let demo = [
            ("Liam Carter", (2012, 4, 12), PlayerPosition::Goalkeeper, "Cash", 40.0, vec![lions]),
            ("Noah Brooks", (2012, 9, 3), PlayerPosition::Defender, "Card", 40.0, vec![lions]),
            ("Mia Lopez", (2013, 1, 22), PlayerPosition::Midfielder, "Venmo", 20.0, vec![lions]),
            ("Ethan Reed", (2010, 11, 30), PlayerPosition::Forward, "Transfer", 50.0, vec![eagles]),
            ("Ava Chen", (2011, 6, 8), PlayerPosition::Midfielder, "Card", 0.0, vec![eagles]),
            ("Lucas Moreau", (2011, 2, 17), PlayerPosition::Defender, "Check", 30.0, vec![lions, eagles]),
        ];

        for (name, (y, m, d), position, method, amount, teams) in demo {
            let Some(date_of_birth) = NaiveDate::from_ymd_opt(y, m, d) else {
                continue;
            };
            let mut new = NewPlayer::new(name, date_of_birth)
                .position(position)
                .payment(method, amount);
            for team_id in teams {
                new = new.team(team_id);
            }
            store.add_player(new);
        }

        info!(
            teams = store.teams.len(),
            players = store.players.len(),
            "Demo data loaded"
        );
        store
    }

    // ========================================================================
    // Lecture
    // ========================================================================

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn payment_methods(&self) -> &[PaymentMethodConfig] {
        &self.payment_methods
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn payment_method(&self, id: PaymentMethodId) -> Option<&PaymentMethodConfig> {
        self.payment_methods.iter().find(|m| m.id == id)
    }

    /// Noms des moyens de paiement, dans l'ordre de configuration
    pub fn payment_method_names(&self) -> Vec<&str> {
        self.payment_methods.iter().map(|m| m.name.as_str()).collect()
    }

    // ========================================================================
    // Création
    // ========================================================================

    /// Ajoute un joueur et retourne son nouvel id
    ///
    /// Aucune re-validation : nom non vide et montant >= 0 sont vérifiés
    /// par l'appelant.
    #[instrument(skip(self, player), fields(name = %player.name))]
    pub fn add_player(&mut self, player: NewPlayer) -> PlayerId {
        let id = PlayerId::new();
        self.players.push(Player::from_new(id, player));
        info!(%id, "Added new player");
        id
    }

    /// Ajoute une équipe : l'id et la date de création sont attribués ici
    #[instrument(skip(self, team), fields(name = %team.name))]
    pub fn add_team(&mut self, team: NewTeam) -> TeamId {
        let id = TeamId::new();
        self.teams.push(Team::from_new(id, Utc::now(), team));
        info!(%id, "Added new team");
        id
    }

    // ========================================================================
    // Requêtes financières
    // ========================================================================

    /// Joueurs de l'équipe (filtrés via Player::team_ids)
    ///
    /// Retourne une liste vide si l'équipe n'existe pas
    pub fn team_players(&self, team_id: TeamId) -> Vec<&Player> {
        if self.team(team_id).is_none() {
            return Vec::new();
        }
        self.players.iter().filter(|p| p.plays_for(team_id)).collect()
    }

    /// Résumé financier d'une équipe
    ///
    /// - encaissé : somme des montants payés par ses joueurs
    /// - dû : la dette saisie pour l'équipe (0 si inconnue)
    pub fn team_financials(&self, team_id: TeamId) -> FinancialSummary {
        let total_collected = self
            .team_players(team_id)
            .iter()
            .fold(0.0, |total, p| total + p.amount_paid);
        let total_owed = self.team(team_id).map(|t| t.total_owed).unwrap_or(0.0);

        FinancialSummary::new(total_collected, total_owed)
    }

    /// Résumé financier global (tous les joueurs, toutes les équipes)
    ///
    /// Note : un joueur dans deux équipes n'est compté qu'une fois ici,
    /// alors qu'il apparaît dans le résumé de chacune de ses équipes.
    pub fn all_teams_financials(&self) -> FinancialSummary {
        // Somme vide : 0 (jamais -0)
        let total_collected = self.players.iter().fold(0.0, |total, p| total + p.amount_paid);
        let total_owed = self.teams.iter().fold(0.0, |total, t| total + t.total_owed);

        FinancialSummary::new(total_collected, total_owed)
    }

    // ========================================================================
    // Mise à jour des joueurs
    // ========================================================================
    // CONCEPT : une méthode par ensemble de champs modifiés
    // - Pas de "spread" dynamique : les champs touchés sont fixés à la
    //   compilation
    // - Id inconnu : no-op silencieux (tracé en debug)
    // ========================================================================

    fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        let player = self.players.iter_mut().find(|p| p.id == id);
        if player.is_none() {
            debug!(%id, "Unknown player id, ignoring update");
        }
        player
    }

    /// Remplace montant payé ET moyen de paiement
    #[instrument(skip(self, method))]
    pub fn update_player_payment(&mut self, id: PlayerId, amount: f64, method: &str) {
        if let Some(player) = self.player_mut(id) {
            player.amount_paid = amount;
            player.payment_method = method.to_string();
            info!(method, "Updated player payment");
        }
    }

    #[instrument(skip(self))]
    pub fn update_player_payment_method(&mut self, id: PlayerId, method: &str) {
        if let Some(player) = self.player_mut(id) {
            player.payment_method = method.to_string();
            info!("Updated player payment method");
        }
    }

    #[instrument(skip(self))]
    pub fn update_player_amount(&mut self, id: PlayerId, amount: f64) {
        if let Some(player) = self.player_mut(id) {
            player.amount_paid = amount;
            info!("Updated player amount");
        }
    }

    #[instrument(skip(self))]
    pub fn update_player_eligibility(&mut self, id: PlayerId, eligibility: EligibilityStatus) {
        if let Some(player) = self.player_mut(id) {
            player.eligibility = eligibility;
            info!(eligibility = eligibility.label(), "Updated player eligibility");
        }
    }

    /// Passe au statut d'éligibilité suivant (Injured → Eligible)
    ///
    /// Retourne le nouveau statut, None si le joueur est inconnu
    pub fn cycle_player_eligibility(&mut self, id: PlayerId) -> Option<EligibilityStatus> {
        let next = self.player(id)?.eligibility.next();
        self.update_player_eligibility(id, next);
        Some(next)
    }

    /// Inverse la disponibilité ; retourne la nouvelle valeur
    #[instrument(skip(self))]
    pub fn toggle_player_availability(&mut self, id: PlayerId) -> Option<bool> {
        let player = self.player_mut(id)?;
        player.is_available = !player.is_available;
        let is_available = player.is_available;
        info!(is_available, "Toggled player availability");
        Some(is_available)
    }

    // ========================================================================
    // Mise à jour des équipes
    // ========================================================================

    /// Remplace la dette de l'équipe
    ///
    /// L'appelant garantit total_owed >= 0
    #[instrument(skip(self))]
    pub fn update_team_debt(&mut self, team_id: TeamId, total_owed: f64) {
        match self.teams.iter_mut().find(|t| t.id == team_id) {
            Some(team) => {
                team.total_owed = total_owed;
                info!("Updated team debt");
            }
            None => debug!("Unknown team id, ignoring debt update"),
        }
    }

    // ========================================================================
    // Moyens de paiement
    // ========================================================================

    /// Ajoute un moyen de paiement personnalisé (jamais protégé)
    ///
    /// Nom non vide et unicité vérifiés par l'appelant
    #[instrument(skip(self))]
    pub fn add_payment_method(&mut self, name: &str) -> PaymentMethodId {
        let method = PaymentMethodConfig::custom(name);
        let id = method.id;
        self.payment_methods.push(method);
        info!(%id, "Added payment method");
        id
    }

    /// Renomme un moyen de paiement
    ///
    /// Les joueurs référencent leur moyen par nom : l'ancien nom reste tel
    /// quel sur les joueurs existants.
    #[instrument(skip(self))]
    pub fn update_payment_method(&mut self, id: PaymentMethodId, name: &str) {
        match self.payment_methods.iter_mut().find(|m| m.id == id) {
            Some(method) => {
                method.name = name.to_string();
                info!("Updated payment method");
            }
            None => debug!("Unknown payment method id, ignoring rename"),
        }
    }

    /// Supprime un moyen de paiement
    ///
    /// Retourne false (et ne touche à rien) si le moyen est protégé
    #[instrument(skip(self))]
    pub fn delete_payment_method(&mut self, id: PaymentMethodId) -> bool {
        if self.payment_method(id).is_some_and(|m| m.is_default) {
            warn!("Cannot delete default payment method");
            return false;
        }

        self.payment_methods.retain(|m| m.id != id);
        info!("Deleted payment method");
        true
    }
}

impl Default for TeamStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(2012, 5, 1).unwrap()
    }

    /// Équipe T (dette 50), joueurs A (30) et B (20) dans T
    fn scenario_store() -> (TeamStore, TeamId, PlayerId, PlayerId) {
        let mut store = TeamStore::new();
        let team = store.add_team(NewTeam::new("T").total_owed(50.0));
        let a = store.add_player(NewPlayer::new("A", dob()).payment("Cash", 30.0).team(team));
        let b = store.add_player(NewPlayer::new("B", dob()).payment("Card", 20.0).team(team));
        (store, team, a, b)
    }

    #[test]
    fn test_new_store_has_default_methods_only() {
        let store = TeamStore::new();
        assert!(store.players().is_empty());
        assert!(store.teams().is_empty());
        assert_eq!(
            store.payment_method_names(),
            vec!["Cash", "Card", "Transfer", "Venmo", "Check"]
        );
    }

    #[test]
    fn test_add_player_assigns_unique_ids() {
        let mut store = TeamStore::with_demo_data();
        let before = store.players().len();

        let id = store.add_player(NewPlayer::new("Zoe", dob()));

        assert_eq!(store.players().len(), before + 1);
        let ids: HashSet<PlayerId> = store.players().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), store.players().len());
        assert_eq!(store.player(id).unwrap().name, "Zoe");
    }

    #[test]
    fn test_add_team_sets_timestamp() {
        let mut store = TeamStore::new();
        let before = Utc::now();
        let id = store.add_team(NewTeam::new("Lions"));
        let team = store.team(id).unwrap();
        assert!(team.created_at >= before);
        assert_eq!(team.total_owed, 0.0);
    }

    #[test]
    fn test_team_financials_scenario() {
        let (store, team, _, _) = scenario_store();
        assert_eq!(store.team_financials(team), FinancialSummary::new(50.0, 50.0));
        assert_eq!(store.team_financials(team).balance, 0.0);
    }

    #[test]
    fn test_unknown_team_is_empty() {
        let (store, _, _, _) = scenario_store();
        let unknown = TeamId::new();

        assert!(store.team_players(unknown).is_empty());
        let summary = store.team_financials(unknown);
        assert_eq!(summary.total_collected, 0.0);
        assert_eq!(summary.total_owed, 0.0);
        assert_eq!(summary.balance, summary.total_collected - summary.total_owed);
    }

    #[test]
    fn test_roster_uses_player_team_ids() {
        let (mut store, team, a, _) = scenario_store();
        let other = store.add_team(NewTeam::new("Other"));
        store.add_player(NewPlayer::new("C", dob()).team(other));

        // Team::player_ids n'est jamais rempli, le roster vient des joueurs
        assert!(store.team(team).unwrap().player_ids.is_empty());
        let roster: Vec<PlayerId> = store.team_players(team).iter().map(|p| p.id).collect();
        assert_eq!(roster.len(), 2);
        assert!(roster.contains(&a));
    }

    #[test]
    fn test_all_teams_financials_tracks_updates() {
        let (mut store, team, a, b) = scenario_store();
        let other = store.add_team(NewTeam::new("Other").total_owed(10.0));
        store.add_player(NewPlayer::new("C", dob()).payment("Cash", 5.0));

        store.update_player_amount(a, 12.5);
        store.update_player_payment(b, 7.5, "Venmo");
        store.update_team_debt(team, 20.0);

        let expected: f64 = store.players().iter().map(|p| p.amount_paid).sum();
        let summary = store.all_teams_financials();
        assert_eq!(summary.total_collected, expected);
        assert_eq!(summary.total_collected, 25.0);
        assert_eq!(summary.total_owed, 30.0);
        assert_eq!(summary.balance, -5.0);
        assert_eq!(store.team(other).unwrap().total_owed, 10.0);
    }

    #[test]
    fn test_updates_on_unknown_player_are_noops() {
        let (mut store, _, _, _) = scenario_store();
        let snapshot = store.players().to_vec();

        let ghost = PlayerId::new();
        store.update_player_amount(ghost, 99.0);
        store.update_player_payment_method(ghost, "Cash");
        store.update_player_eligibility(ghost, EligibilityStatus::Injured);
        assert_eq!(store.cycle_player_eligibility(ghost), None);
        assert_eq!(store.toggle_player_availability(ghost), None);

        assert_eq!(store.players(), snapshot.as_slice());
    }

    #[test]
    fn test_updates_on_unknown_team_or_method_are_noops() {
        let (mut store, _, _, _) = scenario_store();
        let teams = serde_json::to_string(store.teams()).unwrap();
        let methods = serde_json::to_string(store.payment_methods()).unwrap();

        store.update_team_debt(TeamId::new(), 99.0);
        store.update_payment_method(PaymentMethodId::new(), "Bitcoin");
        // Rien à supprimer : pas un refus, donc true
        assert!(store.delete_payment_method(PaymentMethodId::new()));

        assert_eq!(serde_json::to_string(store.teams()).unwrap(), teams);
        assert_eq!(serde_json::to_string(store.payment_methods()).unwrap(), methods);
    }

    #[test]
    fn test_empty_totals_are_positive_zero() {
        let mut store = TeamStore::new();
        let empty = store.add_team(NewTeam::new("Empty"));

        let team = store.team_financials(empty);
        assert!(team.total_collected.is_sign_positive());
        assert_eq!(crate::models::format_money(team.total_collected), "$0");

        let overall = TeamStore::new().all_teams_financials();
        assert!(overall.total_collected.is_sign_positive());
        assert!(overall.total_owed.is_sign_positive());
        assert_eq!(crate::models::format_money(overall.total_collected), "$0");
    }

    #[test]
    fn test_update_only_touches_target() {
        let (mut store, _, a, b) = scenario_store();
        let before_b = store.player(b).unwrap().clone();

        store.update_player_payment_method(a, "Transfer");

        assert_eq!(store.player(a).unwrap().payment_method, "Transfer");
        assert_eq!(store.player(a).unwrap().amount_paid, 30.0);
        assert_eq!(store.player(b).unwrap(), &before_b);
    }

    #[test]
    fn test_cycle_eligibility_four_times() {
        let (mut store, _, a, _) = scenario_store();
        for _ in 0..4 {
            store.cycle_player_eligibility(a);
        }
        assert_eq!(store.player(a).unwrap().eligibility, EligibilityStatus::Eligible);

        assert_eq!(store.cycle_player_eligibility(a), Some(EligibilityStatus::Ineligible));
    }

    #[test]
    fn test_toggle_availability() {
        let (mut store, _, a, _) = scenario_store();
        assert_eq!(store.toggle_player_availability(a), Some(false));
        assert!(!store.player(a).unwrap().is_available);
        assert_eq!(store.toggle_player_availability(a), Some(true));
    }

    #[test]
    fn test_delete_default_method_is_refused() {
        let mut store = TeamStore::new();
        let cash = store.payment_methods()[0].clone();
        assert!(cash.is_default);
        let before = store.payment_methods().to_vec();

        assert!(!store.delete_payment_method(cash.id));
        assert_eq!(store.payment_methods(), before.as_slice());
    }

    #[test]
    fn test_delete_custom_method() {
        let mut store = TeamStore::new();
        let id = store.add_payment_method("PayPal");
        assert!(!store.payment_method(id).unwrap().is_default);

        assert!(store.delete_payment_method(id));
        assert!(store.payment_method(id).is_none());
        assert_eq!(store.payment_methods().len(), 5);
    }

    #[test]
    fn test_rename_payment_method() {
        let mut store = TeamStore::new();
        let id = store.add_payment_method("Paypal");
        store.update_payment_method(id, "PayPal");
        assert_eq!(store.payment_method(id).unwrap().name, "PayPal");
    }

    #[test]
    fn test_demo_data_is_consistent() {
        let store = TeamStore::with_demo_data();
        assert_eq!(store.teams().len(), 2);
        assert_eq!(store.players().len(), 6);

        // Un joueur dans deux équipes compte dans les deux résumés
        let per_team: f64 = store
            .teams()
            .iter()
            .map(|t| store.team_financials(t.id).total_collected)
            .sum();
        assert!(per_team > store.all_teams_financials().total_collected);
    }
}
