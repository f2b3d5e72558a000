// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Injection : App reçoit son TeamStore à la construction
// 3. Result<_, ValidationError> : toute saisie est validée ICI avant
//    d'appeler le store ; en cas d'erreur une popup est affichée et le
//    store n'est pas modifié
//
// PATTERN : Cette structure suit le pattern "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
// ============================================================================

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::models::{
    Formation, NewPlayer, NewTeam, PaymentMethodConfig, PaymentMethodId, Player, PlayerId,
    PlayerPosition, Team, TeamId,
};
use crate::store::TeamStore;
use crate::validation::{
    check_unique_payment_method, parse_amount, parse_date_of_birth, parse_debt, require_name,
    ValidationError,
};

// ============================================================================
// Enum : Screen
// ============================================================================
// CONCEPT RUST : Enums pour state machines
// - Un seul écran actif à la fois
// - TeamDetail porte l'id de l'équipe affichée (écran paramétré)
// ============================================================================

/// Écrans de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Vue principale : toutes les équipes + résumé global
    AllTeams,

    /// Gestion des moyens de paiement
    PaymentMethods,

    /// Détail d'une équipe
    TeamDetail(TeamId),
}

/// Onglets de l'écran de détail d'une équipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamTab {
    #[default]
    Details,
    Roster,
    GameDay,
}

impl TeamTab {
    pub fn all() -> [TeamTab; 3] {
        [TeamTab::Details, TeamTab::Roster, TeamTab::GameDay]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamTab::Details => "Details",
            TeamTab::Roster => "Roster",
            TeamTab::GameDay => "Game Day",
        }
    }

    /// Onglet suivant (cycle)
    pub fn next(&self) -> TeamTab {
        match self {
            TeamTab::Details => TeamTab::Roster,
            TeamTab::Roster => TeamTab::GameDay,
            TeamTab::GameDay => TeamTab::Details, // Boucle
        }
    }
}

/// Saisie sur une ligne en cours (ligne d'input en bas de l'écran)
///
/// CONCEPT : Modal input (Vim-like)
/// - Le texte va dans App::input_buffer
/// - Enter valide, ESC annule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Nouvelle équipe : le nom est saisi, la formation choisie avec ←/→
    AddTeam { formation: Formation },

    /// Nouvelle dette pour l'équipe
    TeamDebt(TeamId),

    /// Nouveau montant payé par le joueur
    PlayerAmount(PlayerId),

    AddPaymentMethod,

    RenamePaymentMethod(PaymentMethodId),
}

/// Champs du formulaire d'ajout de joueur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    DateOfBirth,
    Position,
    PaymentMethod,
    Amount,
}

impl FormField {
    pub fn all() -> [FormField; 5] {
        [
            FormField::Name,
            FormField::DateOfBirth,
            FormField::Position,
            FormField::PaymentMethod,
            FormField::Amount,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Player Name",
            FormField::DateOfBirth => "Date of Birth",
            FormField::Position => "Position",
            FormField::PaymentMethod => "Payment Method",
            FormField::Amount => "Amount Paid ($)",
        }
    }

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::DateOfBirth,
            FormField::DateOfBirth => FormField::Position,
            FormField::Position => FormField::PaymentMethod,
            FormField::PaymentMethod => FormField::Amount,
            FormField::Amount => FormField::Name,
        }
    }

    pub fn previous(&self) -> FormField {
        match self {
            FormField::Name => FormField::Amount,
            FormField::DateOfBirth => FormField::Name,
            FormField::Position => FormField::DateOfBirth,
            FormField::PaymentMethod => FormField::Position,
            FormField::Amount => FormField::PaymentMethod,
        }
    }

    /// Champ texte (saisie clavier) ou sélecteur (←/→)
    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Name | FormField::DateOfBirth | FormField::Amount)
    }
}

/// État local du formulaire "Add New Player"
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerForm {
    pub name: String,
    /// Saisie brute, format YYYY-MM-DD
    pub date_of_birth: String,
    pub position: PlayerPosition,
    pub payment_method: String,
    /// Saisie brute du montant
    pub amount: String,
    /// Équipe pré-assignée (formulaire ouvert depuis le détail d'une équipe)
    pub team_id: Option<TeamId>,
    pub focus: FormField,
}

impl PlayerForm {
    pub fn new(team_id: Option<TeamId>, today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            date_of_birth: today.format("%Y-%m-%d").to_string(),
            position: PlayerPosition::default(),
            payment_method: "Card".to_string(),
            amount: "0".to_string(),
            team_id,
            focus: FormField::Name,
        }
    }

    /// Buffer du champ texte actif (None pour un sélecteur)
    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::DateOfBirth => Some(&mut self.date_of_birth),
            FormField::Amount => Some(&mut self.amount),
            FormField::Position | FormField::PaymentMethod => None,
        }
    }
}

/// Popup bloquante (équivalent d'une alerte mobile)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Données : seule source de vérité
    pub store: TeamStore,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    /// Écrans précédents (pile de navigation, ESC dépile)
    pub history: Vec<Screen>,

    /// Index de l'équipe sélectionnée (écran AllTeams)
    pub selected_team: usize,

    /// Index du joueur sélectionné (écran TeamDetail)
    pub selected_player: usize,

    /// Index du moyen de paiement sélectionné
    pub selected_method: usize,

    pub current_tab: TeamTab,

    /// "Show Details" : affiche les détails des joueurs et autorise l'édition
    pub show_player_details: bool,

    /// Saisie sur une ligne en cours
    pub input: Option<InputKind>,

    /// Buffer de saisie pour la ligne d'input
    pub input_buffer: String,

    /// Prompt affiché en mode input
    pub input_prompt: String,

    /// Formulaire d'ajout de joueur ouvert (modale centrée)
    pub player_form: Option<PlayerForm>,

    /// Popup bloquante : toute touche la ferme
    pub alert: Option<Alert>,

    /// Two-step quit
    pub confirm_quit: bool,

    /// Two-step delete (moyens de paiement)
    pub confirm_delete: bool,
}

impl App {
    /// Crée une App sur un store vide (moyens de paiement par défaut seulement)
    pub fn new() -> Self {
        Self::with_store(TeamStore::new())
    }

    /// Crée une App autour d'un store fourni par l'appelant
    pub fn with_store(store: TeamStore) -> Self {
        Self {
            running: true,
            store,
            current_screen: Screen::AllTeams,
            history: Vec::new(),
            selected_team: 0,
            selected_player: 0,
            selected_method: 0,
            current_tab: TeamTab::default(),
            show_player_details: false,
            input: None,
            input_buffer: String::new(),
            input_prompt: String::new(),
            player_form: None,
            alert: None,
            confirm_quit: false,
            confirm_delete: false,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick : appelé à chaque itération de la boucle
    ///
    /// Recale les sélections si une liste a rétréci (suppression)
    pub fn tick(&mut self) {
        self.clamp_selections();
    }

    fn clamp_selections(&mut self) {
        self.selected_team = self.selected_team.min(self.store.teams().len().saturating_sub(1));
        self.selected_method = self
            .selected_method
            .min(self.store.payment_methods().len().saturating_sub(1));
        let roster_len = self.current_roster().len();
        self.selected_player = self.selected_player.min(roster_len.saturating_sub(1));
    }

    // ========================================================================
    // Navigation entre écrans
    // ========================================================================

    /// Change d'écran en empilant l'écran courant
    fn push_screen(&mut self, screen: Screen) {
        if self.current_screen != screen {
            self.history.push(self.current_screen);
            self.current_screen = screen;
        }
    }

    /// Retour à l'écran précédent (AllTeams si la pile est vide)
    pub fn go_back(&mut self) {
        self.current_screen = self.history.pop().unwrap_or(Screen::AllTeams);
        self.cancel_delete();
        debug!(screen = ?self.current_screen, "Navigated back");
    }

    /// Ouvre le détail de l'équipe sélectionnée
    pub fn open_selected_team(&mut self) {
        if let Some(team_id) = self.selected_team_id() {
            self.open_team(team_id);
        }
    }

    pub fn open_team(&mut self, team_id: TeamId) {
        self.push_screen(Screen::TeamDetail(team_id));
        self.current_tab = TeamTab::Details;
        self.selected_player = 0;
        info!(%team_id, "Opened team detail");
    }

    pub fn open_payment_methods(&mut self) {
        self.push_screen(Screen::PaymentMethods);
        info!("Opened payment methods");
    }

    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    pub fn toggle_player_details(&mut self) {
        self.show_player_details = !self.show_player_details;
    }

    pub fn is_on_all_teams(&self) -> bool {
        self.current_screen == Screen::AllTeams
    }

    pub fn is_on_payment_methods(&self) -> bool {
        self.current_screen == Screen::PaymentMethods
    }

    /// Id de l'équipe affichée (None hors de l'écran de détail)
    pub fn current_team_id(&self) -> Option<TeamId> {
        match self.current_screen {
            Screen::TeamDetail(team_id) => Some(team_id),
            _ => None,
        }
    }

    pub fn current_team(&self) -> Option<&Team> {
        self.store.team(self.current_team_id()?)
    }

    /// Joueurs de l'équipe affichée
    pub fn current_roster(&self) -> Vec<&Player> {
        self.current_team_id()
            .map(|team_id| self.store.team_players(team_id))
            .unwrap_or_default()
    }

    // ========================================================================
    // Sélection dans les listes
    // ========================================================================
    // CONCEPT RUST : Saturating arithmetic
    // - saturating_sub() ne descend pas en dessous de 0
    // - min(len - 1) borne par le haut
    // ========================================================================

    pub fn navigate_up(&mut self) {
        match self.current_screen {
            Screen::AllTeams => self.selected_team = self.selected_team.saturating_sub(1),
            Screen::PaymentMethods => self.selected_method = self.selected_method.saturating_sub(1),
            Screen::TeamDetail(_) => self.selected_player = self.selected_player.saturating_sub(1),
        }
    }

    pub fn navigate_down(&mut self) {
        match self.current_screen {
            Screen::AllTeams => {
                let max_index = self.store.teams().len().saturating_sub(1);
                self.selected_team = (self.selected_team + 1).min(max_index);
            }
            Screen::PaymentMethods => {
                let max_index = self.store.payment_methods().len().saturating_sub(1);
                self.selected_method = (self.selected_method + 1).min(max_index);
            }
            Screen::TeamDetail(_) => {
                let max_index = self.current_roster().len().saturating_sub(1);
                self.selected_player = (self.selected_player + 1).min(max_index);
            }
        }
    }

    pub fn selected_team_id(&self) -> Option<TeamId> {
        self.store.teams().get(self.selected_team).map(|t| t.id)
    }

    pub fn selected_player_id(&self) -> Option<PlayerId> {
        self.current_roster().get(self.selected_player).map(|p| p.id)
    }

    pub fn selected_payment_method(&self) -> Option<&PaymentMethodConfig> {
        self.store.payment_methods().get(self.selected_method)
    }

    // ========================================================================
    // Popup d'alerte
    // ========================================================================

    /// Affiche une erreur de validation et la retourne (pour le `?` / tests)
    fn reject(&mut self, error: ValidationError) -> ValidationError {
        warn!(error = %error, "Input rejected");
        self.alert = Some(Alert {
            title: "Error".to_string(),
            message: error.to_string(),
        });
        error
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    // ========================================================================
    // Mode input (une ligne)
    // ========================================================================

    fn start_input(&mut self, kind: InputKind, prompt: &str, initial: String) {
        self.input = Some(kind);
        self.input_prompt = prompt.to_string();
        self.input_buffer = initial;
        self.cancel_quit();
        self.cancel_delete();
    }

    /// Ouvre la saisie d'une nouvelle équipe
    pub fn start_add_team(&mut self) {
        self.start_input(
            InputKind::AddTeam { formation: Formation::default() },
            "Team name: ",
            String::new(),
        );
    }

    /// Ouvre l'édition de la dette de l'équipe affichée
    pub fn start_edit_team_debt(&mut self) {
        if let Some(team) = self.current_team() {
            let (id, current) = (team.id, team.total_owed);
            self.start_input(InputKind::TeamDebt(id), "Money owed: $", current.to_string());
        }
    }

    /// Ouvre l'édition du montant payé par le joueur sélectionné
    pub fn start_edit_player_amount(&mut self) {
        let Some(player_id) = self.selected_player_id() else {
            return;
        };
        let current = self
            .store
            .player(player_id)
            .map(|p| p.amount_paid)
            .unwrap_or(0.0);
        self.start_input(InputKind::PlayerAmount(player_id), "Amount paid: $", current.to_string());
    }

    pub fn start_add_payment_method(&mut self) {
        self.start_input(InputKind::AddPaymentMethod, "Method name: ", String::new());
    }

    /// Ouvre le renommage du moyen de paiement sélectionné
    pub fn start_rename_payment_method(&mut self) {
        if let Some(method) = self.selected_payment_method() {
            let (id, name) = (method.id, method.name.clone());
            self.start_input(InputKind::RenamePaymentMethod(id), "Rename to: ", name);
        }
    }

    pub fn cancel_input(&mut self) {
        self.input = None;
        self.input_buffer.clear();
        self.input_prompt.clear();
    }

    pub fn append_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn is_in_input_mode(&self) -> bool {
        self.input.is_some()
    }

    /// ←/→ pendant la saisie : change la formation d'une nouvelle équipe
    pub fn cycle_input_option(&mut self, forward: bool) {
        if let Some(InputKind::AddTeam { formation }) = self.input {
            let formation = if forward { formation.next() } else { formation.previous() };
            self.input = Some(InputKind::AddTeam { formation });
        }
    }

    /// Valide la ligne d'input
    ///
    /// - Ok : la saisie est appliquée et le mode input se ferme
    /// - Err : popup d'erreur, la saisie reste ouverte, store inchangé
    pub fn submit_input(&mut self) -> Result<(), ValidationError> {
        let Some(kind) = self.input else {
            return Ok(());
        };
        let value = self.input_buffer.clone();

        let result = match kind {
            InputKind::AddTeam { formation } => self.add_team(&value, formation).map(|_| ()),
            InputKind::TeamDebt(team_id) => self.set_team_debt(team_id, &value),
            InputKind::PlayerAmount(player_id) => self.set_player_amount(player_id, &value),
            InputKind::AddPaymentMethod => self.add_payment_method(&value).map(|_| ()),
            InputKind::RenamePaymentMethod(id) => self.rename_payment_method(id, &value),
        };

        if result.is_ok() {
            self.cancel_input();
        }
        result
    }

    // ========================================================================
    // Actions validées (appelées par la saisie, utilisables directement)
    // ========================================================================

    /// Crée une équipe après validation du nom
    pub fn add_team(&mut self, name: &str, formation: Formation) -> Result<TeamId, ValidationError> {
        let name = require_name("team name", name).map_err(|e| self.reject(e))?;
        let team_id = self.store.add_team(NewTeam::new(name).formation(formation));
        self.selected_team = self.store.teams().len().saturating_sub(1);
        Ok(team_id)
    }

    /// Met à jour la dette d'une équipe (refusée si négative)
    pub fn set_team_debt(&mut self, team_id: TeamId, input: &str) -> Result<(), ValidationError> {
        if self.store.team(team_id).is_none() {
            return Err(self.reject(ValidationError::UnknownTeam));
        }
        let amount = parse_debt(input).map_err(|e| self.reject(e))?;
        self.store.update_team_debt(team_id, amount);
        Ok(())
    }

    /// Met à jour le montant payé par un joueur (refusé si négatif)
    pub fn set_player_amount(&mut self, player_id: PlayerId, input: &str) -> Result<(), ValidationError> {
        let amount = parse_amount(input).map_err(|e| self.reject(e))?;
        self.store.update_player_amount(player_id, amount);
        Ok(())
    }

    /// Ajoute un moyen de paiement (nom non vide et unique, casse ignorée)
    pub fn add_payment_method(&mut self, name: &str) -> Result<PaymentMethodId, ValidationError> {
        let name = require_name("payment method name", name).map_err(|e| self.reject(e))?;
        check_unique_payment_method(self.store.payment_methods(), &name, None)
            .map_err(|e| self.reject(e))?;
        Ok(self.store.add_payment_method(&name))
    }

    /// Renomme un moyen de paiement (unicité vérifiée sans lui-même)
    pub fn rename_payment_method(&mut self, id: PaymentMethodId, name: &str) -> Result<(), ValidationError> {
        let name = require_name("valid name", name).map_err(|e| self.reject(e))?;
        check_unique_payment_method(self.store.payment_methods(), &name, Some(id))
            .map_err(|e| self.reject(e))?;
        self.store.update_payment_method(id, &name);
        Ok(())
    }

    // ========================================================================
    // Actions sur le joueur sélectionné
    // ========================================================================
    // Comme sur la fiche joueur d'origine : l'édition n'est possible que
    // lorsque les détails sont affichés.
    // ========================================================================

    pub fn can_edit_players(&self) -> bool {
        self.show_player_details && self.current_tab == TeamTab::Details
    }

    /// Éligibilité suivante pour le joueur sélectionné
    pub fn cycle_selected_eligibility(&mut self) {
        if !self.can_edit_players() {
            return;
        }
        if let Some(player_id) = self.selected_player_id() {
            self.store.cycle_player_eligibility(player_id);
        }
    }

    /// Éligibilité précédente (Shift+E)
    pub fn cycle_selected_eligibility_back(&mut self) {
        if !self.can_edit_players() {
            return;
        }
        let Some(player_id) = self.selected_player_id() else {
            return;
        };
        if let Some(current) = self.store.player(player_id).map(|p| p.eligibility) {
            self.store.update_player_eligibility(player_id, current.previous());
        }
    }

    pub fn toggle_selected_availability(&mut self) {
        if !self.can_edit_players() {
            return;
        }
        if let Some(player_id) = self.selected_player_id() {
            self.store.toggle_player_availability(player_id);
        }
    }

    /// Passe le joueur sélectionné au moyen de paiement configuré suivant
    ///
    /// Si son moyen actuel n'existe plus (renommé/supprimé), on repart du
    /// premier de la liste.
    pub fn cycle_selected_payment_method(&mut self) {
        if !self.can_edit_players() {
            return;
        }
        let Some(player_id) = self.selected_player_id() else {
            return;
        };
        let Some(current) = self.store.player(player_id).map(|p| p.payment_method.clone()) else {
            return;
        };

        let names = self.store.payment_method_names();
        let next = match names.iter().position(|name| *name == current) {
            Some(index) => names.get((index + 1) % names.len()),
            None => names.first(),
        }
        .map(|name| name.to_string());

        if let Some(next) = next {
            self.store.update_player_payment_method(player_id, &next);
        }
    }

    // ========================================================================
    // Formulaire d'ajout de joueur
    // ========================================================================

    /// Ouvre le formulaire ; depuis le détail d'une équipe, le joueur y
    /// sera rattaché
    pub fn start_add_player(&mut self) {
        let today = Local::now().date_naive();
        let mut form = PlayerForm::new(self.current_team_id(), today);
        if !self.store.payment_method_names().contains(&form.payment_method.as_str()) {
            if let Some(first) = self.store.payment_method_names().first() {
                form.payment_method = first.to_string();
            }
        }
        self.player_form = Some(form);
        self.cancel_quit();
        self.cancel_delete();
        info!("Opened add player form");
    }

    pub fn cancel_player_form(&mut self) {
        self.player_form = None;
    }

    pub fn is_in_player_form(&self) -> bool {
        self.player_form.is_some()
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = self.player_form.as_mut() {
            form.focus = form.focus.next();
        }
    }

    pub fn form_previous_field(&mut self) {
        if let Some(form) = self.player_form.as_mut() {
            form.focus = form.focus.previous();
        }
    }

    pub fn form_append_char(&mut self, c: char) {
        if let Some(text) = self.player_form.as_mut().and_then(|f| f.focused_text_mut()) {
            text.push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(text) = self.player_form.as_mut().and_then(|f| f.focused_text_mut()) {
            text.pop();
        }
    }

    /// ←/→ sur un sélecteur : poste ou moyen de paiement
    pub fn form_cycle_option(&mut self, forward: bool) {
        let names: Vec<String> = self
            .store
            .payment_method_names()
            .into_iter()
            .map(String::from)
            .collect();
        let Some(form) = self.player_form.as_mut() else {
            return;
        };

        match form.focus {
            FormField::Position => {
                form.position = if forward { form.position.next() } else { form.position.previous() };
            }
            FormField::PaymentMethod if !names.is_empty() => {
                let len = names.len();
                let index = names.iter().position(|n| *n == form.payment_method);
                let next = match (index, forward) {
                    (Some(i), true) => (i + 1) % len,
                    (Some(i), false) => (i + len - 1) % len,
                    (None, _) => 0,
                };
                form.payment_method = names[next].clone();
            }
            _ => {}
        }
    }

    /// Valide le formulaire et ajoute le joueur
    ///
    /// Le formulaire reste ouvert si la saisie est refusée
    pub fn submit_player_form(&mut self) -> Result<PlayerId, ValidationError> {
        let Some(form) = self.player_form.clone() else {
            return Err(self.reject(ValidationError::EmptyName("player name")));
        };

        let name = require_name("player name", &form.name).map_err(|e| self.reject(e))?;
        let today = Local::now().date_naive();
        let date_of_birth =
            parse_date_of_birth(&form.date_of_birth, today).map_err(|e| self.reject(e))?;
        let amount = parse_amount(&form.amount).map_err(|e| self.reject(e))?;

        let mut new = NewPlayer::new(name, date_of_birth)
            .position(form.position)
            .payment(form.payment_method, amount);
        if let Some(team_id) = form.team_id {
            new = new.team(team_id);
        }

        let player_id = self.store.add_player(new);
        self.player_form = None;
        info!(%player_id, "Player added successfully");
        Ok(player_id)
    }

    // ========================================================================
    // Quit / Delete : confirmations en deux temps
    // ========================================================================

    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    pub fn request_delete(&mut self) {
        self.confirm_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    pub fn is_awaiting_delete_confirmation(&self) -> bool {
        self.confirm_delete
    }

    /// Supprime le moyen de paiement sélectionné
    ///
    /// Le store refuse les moyens par défaut : on affiche alors l'erreur
    pub fn delete_selected_payment_method(&mut self) -> Result<(), ValidationError> {
        self.confirm_delete = false;
        let Some(method) = self.selected_payment_method().cloned() else {
            return Ok(());
        };

        if !self.store.delete_payment_method(method.id) {
            return Err(self.reject(ValidationError::DefaultPaymentMethod(method.name)));
        }

        // Ajuste l'index si on a supprimé le dernier élément
        if self.selected_method >= self.store.payment_methods().len() && self.selected_method > 0 {
            self.selected_method -= 1;
        }
        Ok(())
    }
}

impl Default for App {
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
    use crate::models::EligibilityStatus;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(2012, 5, 1).unwrap()
    }

    fn methods_snapshot(app: &App) -> String {
        serde_json::to_string(app.store.payment_methods()).unwrap()
    }

    /// App sur l'écran de détail d'une équipe avec un joueur, détails visibles
    fn app_on_team() -> (App, TeamId, PlayerId) {
        let mut store = TeamStore::new();
        let team = store.add_team(NewTeam::new("T").total_owed(50.0));
        let player = store.add_player(NewPlayer::new("A", dob()).payment("Cash", 30.0).team(team));
        let mut app = App::with_store(store);
        app.open_team(team);
        app.toggle_player_details();
        (app, team, player)
    }

    #[test]
    fn test_app_creation() {
        let app = App::new();
        assert!(app.is_running());
        assert!(app.is_on_all_teams());
        assert!(app.store.teams().is_empty());
        assert_eq!(app.store.payment_methods().len(), 5);
    }

    #[test]
    fn test_app_quit() {
        let mut app = App::new();
        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_navigation_between_screens() {
        let mut app = App::with_store(TeamStore::with_demo_data());

        app.navigate_down();
        assert_eq!(app.selected_team, 1);
        app.navigate_down();
        assert_eq!(app.selected_team, 1); // Reste au max

        let team_id = app.selected_team_id().unwrap();
        app.open_selected_team();
        assert_eq!(app.current_screen, Screen::TeamDetail(team_id));

        app.open_payment_methods();
        assert!(app.is_on_payment_methods());

        app.go_back();
        assert_eq!(app.current_screen, Screen::TeamDetail(team_id));
        app.go_back();
        assert!(app.is_on_all_teams());
        app.go_back();
        assert!(app.is_on_all_teams());
    }

    #[test]
    fn test_tabs_cycle() {
        let (mut app, _, _) = app_on_team();
        app.next_tab();
        assert_eq!(app.current_tab, TeamTab::Roster);
        app.next_tab();
        app.next_tab();
        assert_eq!(app.current_tab, TeamTab::Details);
    }

    #[test]
    fn test_duplicate_payment_method_is_rejected() {
        let mut app = App::new();
        let before = app.store.payment_methods().len();

        app.add_payment_method("PayPal").unwrap();
        assert_eq!(app.store.payment_methods().len(), before + 1);

        let err = app.add_payment_method("paypal").unwrap_err();
        assert_eq!(err, ValidationError::DuplicatePaymentMethod("paypal".to_string()));
        assert_eq!(app.store.payment_methods().len(), before + 1);
        assert!(app.has_alert());
    }

    #[test]
    fn test_venmo_scenario() {
        // Venmo n'est pas protégé : on le retire puis on rejoue le scénario
        let mut app = App::new();
        let venmo = app
            .store
            .payment_methods()
            .iter()
            .find(|m| m.name == "Venmo")
            .map(|m| m.id)
            .unwrap();
        assert!(app.store.delete_payment_method(venmo));

        let id = app.add_payment_method("Venmo").unwrap();
        assert!(!app.store.payment_method(id).unwrap().is_default);
        let size = app.store.payment_methods().len();

        assert!(app.add_payment_method("venmo").is_err());
        assert_eq!(app.store.payment_methods().len(), size);
    }

    #[test]
    fn test_empty_payment_method_name_is_rejected() {
        let mut app = App::new();
        let err = app.add_payment_method("   ").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a payment method name");
        assert_eq!(app.store.payment_methods().len(), 5);
    }

    #[test]
    fn test_rejected_rename_leaves_methods_unchanged() {
        let mut app = App::new();
        let check = app.store.payment_methods()[4].id;
        let before = methods_snapshot(&app);

        assert!(app.rename_payment_method(check, "CASH").is_err());
        assert_eq!(methods_snapshot(&app), before);

        // Changer seulement la casse de son propre nom est accepté
        app.rename_payment_method(check, "CHECK").unwrap();
        assert_eq!(app.store.payment_method(check).unwrap().name, "CHECK");
    }

    #[test]
    fn test_negative_debt_is_rejected() {
        let (mut app, team, _) = app_on_team();

        app.start_edit_team_debt();
        app.input_buffer = "-10".to_string();
        assert_eq!(app.submit_input(), Err(ValidationError::NegativeDebt));

        assert_eq!(app.store.team(team).unwrap().total_owed, 50.0);
        assert!(app.is_in_input_mode()); // La saisie reste ouverte
        assert_eq!(app.alert.as_ref().unwrap().message, "Debt amount cannot be negative");

        app.dismiss_alert();
        app.input_buffer = "75".to_string();
        app.submit_input().unwrap();
        assert_eq!(app.store.team(team).unwrap().total_owed, 75.0);
        assert!(!app.is_in_input_mode());
    }

    #[test]
    fn test_player_amount_edit() {
        let (mut app, _, player) = app_on_team();

        app.start_edit_player_amount();
        assert_eq!(app.input_buffer, "30");
        app.input_buffer = "-1".to_string();
        assert_eq!(app.submit_input(), Err(ValidationError::NegativeAmount));
        assert_eq!(app.alert.as_ref().unwrap().message, "Amount cannot be negative");
        app.dismiss_alert();
        assert_eq!(app.store.player(player).unwrap().amount_paid, 30.0);

        app.input_buffer = "45.5".to_string();
        app.submit_input().unwrap();
        assert_eq!(app.store.player(player).unwrap().amount_paid, 45.5);
    }

    #[test]
    fn test_delete_default_method_shows_error() {
        let mut app = App::new();
        app.open_payment_methods();
        let before = methods_snapshot(&app);

        app.request_delete();
        let err = app.delete_selected_payment_method().unwrap_err();
        assert_eq!(err.to_string(), "Cannot delete default payment methods");
        assert_eq!(methods_snapshot(&app), before);
        assert!(!app.is_awaiting_delete_confirmation());
    }

    #[test]
    fn test_delete_last_custom_method_moves_selection() {
        let mut app = App::new();
        app.open_payment_methods();
        for _ in 0..4 {
            app.navigate_down();
        }
        assert_eq!(app.selected_payment_method().unwrap().name, "Check");

        app.delete_selected_payment_method().unwrap();
        assert_eq!(app.store.payment_methods().len(), 4);
        assert_eq!(app.selected_method, 3);
    }

    #[test]
    fn test_player_edits_require_details() {
        let (mut app, _, player) = app_on_team();
        app.toggle_player_details(); // masque les détails

        app.cycle_selected_eligibility();
        assert_eq!(app.store.player(player).unwrap().eligibility, EligibilityStatus::Eligible);

        app.toggle_player_details();
        for _ in 0..4 {
            app.cycle_selected_eligibility();
        }
        assert_eq!(app.store.player(player).unwrap().eligibility, EligibilityStatus::Eligible);

        app.toggle_selected_availability();
        assert!(!app.store.player(player).unwrap().is_available);
    }

    #[test]
    fn test_cycle_payment_method_follows_configuration() {
        let (mut app, _, player) = app_on_team();

        app.cycle_selected_payment_method();
        assert_eq!(app.store.player(player).unwrap().payment_method, "Card");

        // Moyen inconnu (renommé entre-temps) : retour au premier
        app.store.update_player_payment_method(player, "Bitcoin");
        app.cycle_selected_payment_method();
        assert_eq!(app.store.player(player).unwrap().payment_method, "Cash");
    }

    #[test]
    fn test_add_player_form_from_team() {
        let (mut app, team, _) = app_on_team();

        app.start_add_player();
        for c in "Zoe".chars() {
            app.form_append_char(c);
        }
        app.form_next_field();
        app.player_form.as_mut().unwrap().date_of_birth = "2013-02-03".to_string();
        app.form_next_field();
        app.form_cycle_option(false); // Forward -> Midfielder
        app.form_next_field();
        app.form_cycle_option(true); // Card -> Transfer
        app.form_next_field();
        app.form_backspace();
        for c in "25".chars() {
            app.form_append_char(c);
        }

        let id = app.submit_player_form().unwrap();
        let player = app.store.player(id).unwrap();
        assert_eq!(player.name, "Zoe");
        assert_eq!(player.position, PlayerPosition::Midfielder);
        assert_eq!(player.payment_method, "Transfer");
        assert_eq!(player.amount_paid, 25.0);
        assert_eq!(player.team_ids, vec![team]);
        assert!(!app.is_in_player_form());
        assert_eq!(app.store.team_financials(team).total_collected, 55.0);
    }

    #[test]
    fn test_add_player_form_rejects_bad_input() {
        let mut app = App::new();
        app.start_add_player();

        assert!(app.submit_player_form().is_err());
        assert!(app.is_in_player_form());

        app.form_append_char('Z');
        app.player_form.as_mut().unwrap().amount = "-5".to_string();
        assert_eq!(app.submit_player_form(), Err(ValidationError::NegativeAmount));
        assert!(app.store.players().is_empty());

        // Depuis l'écran global : aucune équipe rattachée
        app.player_form.as_mut().unwrap().amount = "0".to_string();
        let id = app.submit_player_form().unwrap();
        assert!(app.store.player(id).unwrap().team_ids.is_empty());
    }

    #[test]
    fn test_add_team_with_formation() {
        let mut app = App::new();
        app.start_add_team();
        app.cycle_input_option(true);
        for c in "Lions".chars() {
            app.append_char(c);
        }
        app.submit_input().unwrap();

        let team = &app.store.teams()[0];
        assert_eq!(team.name, "Lions");
        assert_eq!(team.formation, Formation::F433);
    }

    #[test]
    fn test_debt_on_unknown_team() {
        let mut app = App::new();
        let err = app.set_team_debt(TeamId::new(), "10").unwrap_err();
        assert_eq!(err, ValidationError::UnknownTeam);
    }

    #[test]
    fn test_future_date_of_birth_is_rejected() {
        let mut app = App::new();
        app.start_add_player();
        app.form_append_char('Z');
        app.player_form.as_mut().unwrap().date_of_birth = "2999-01-01".to_string();

        let err = app.submit_player_form().unwrap_err();
        assert!(matches!(err, ValidationError::FutureDate(_)));
        assert!(app.store.players().is_empty());
        assert!(app.is_in_player_form());
    }

    #[test]
    fn test_negative_zero_amount_is_stored_as_zero() {
        let mut app = App::new();
        app.start_add_player();
        app.form_append_char('Z');
        app.player_form.as_mut().unwrap().amount = "-0".to_string();

        let id = app.submit_player_form().unwrap();
        let amount = app.store.player(id).unwrap().amount_paid;
        assert!(amount.is_sign_positive());
        assert_eq!(crate::models::format_money(amount), "$0");
    }

    #[test]
    fn test_eligibility_cycles_both_ways() {
        let (mut app, _, player) = app_on_team();

        app.cycle_selected_eligibility_back();
        assert_eq!(app.store.player(player).unwrap().eligibility, EligibilityStatus::Injured);
        app.cycle_selected_eligibility();
        assert_eq!(app.store.player(player).unwrap().eligibility, EligibilityStatus::Eligible);
    }
}
