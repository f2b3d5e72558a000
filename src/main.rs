// ============================================================================
// Squadbook : suivi des équipes, joueurs et paiements
// ============================================================================
// Programme TUI : équipes de foot, roster, cotisations des joueurs et
// dettes des équipes, le tout en mémoire
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle qui gère événements et rendering
// 3. Ownership : main() crée le store et le donne à App, pas de global
// 4. Restauration du terminal même en cas d'erreur
// ============================================================================

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use squadbook::app::App;
use squadbook::config::Config;
use squadbook::store::TeamStore;
use squadbook::ui::{events::EventHandler, render};

// ============================================================================
// Logging
// ============================================================================
// L'UI occupe le terminal : les logs partent dans un fichier
// - Rotation quotidienne automatique des logs
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// CONCEPT RUST : Tracing subscriber
/// - Registry : point central des logs
/// - Layer : transforme et route les logs
/// - EnvFilter : filtre par niveau (config.log_filter, issu de RUST_LOG)
/// - RollingFileAppender : rotation automatique
///
/// # Utilisation
/// ```bash
/// # Voir les logs en temps réel
/// tail -f ~/.local/share/squadbook/logs/squadbook.log.*
///
/// # Contrôler le niveau de log
/// RUST_LOG=squadbook=trace cargo run
/// ```
fn init_logging(config: &Config) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory {}", config.log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "squadbook.log");

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid log filter '{}'", config.log_filter))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    info!(log_dir = ?config.log_dir, "Logging initialised");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging avant tout le reste ; en cas d'échec on continue sans
    init_logging(&config).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(demo_data = config.demo_data, "Squadbook starting up");

    let store = if config.demo_data {
        TeamStore::with_demo_data()
    } else {
        TeamStore::new()
    };
    let mut app = App::with_store(store);

    debug!("Setting up terminal");
    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event loop
// ============================================================================
// 1. RENDER : dessine l'interface
// 2. INPUT : attend un événement (max 250ms)
// 3. UPDATE : tick
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while app.is_running() {
        terminal.draw(|frame| render(frame, app))?;

        let event = events.next().context("Failed to read terminal event")?;
        handle_event(app, event);

        app.tick();
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================
// Ordre de priorité :
// 1. Popup d'alerte : toute touche la ferme
// 2. Formulaire d'ajout de joueur
// 3. Ligne de saisie
// 4. Confirmations en deux temps (quit, delete)
// 5. Raccourcis de l'écran courant
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
///
/// CONCEPT RUST : Pattern matching avec guards
/// - Guard clauses (if) pour filtrer les événements
/// - Navigation contextuelle selon l'écran actuel
fn handle_event(app: &mut App, event: squadbook::ui::events::Event) {
    use squadbook::ui::events::{is_key_event, Event};

    if !is_key_event(&event) {
        return;
    }

    if app.has_alert() {
        app.dismiss_alert();
        return;
    }

    if app.is_in_player_form() {
        handle_player_form_event(app, &event);
        return;
    }

    if app.is_in_input_mode() {
        handle_input_event(app, &event);
        return;
    }

    if let Event::Key(key) = &event {
        debug!(key = ?key.code, screen = ?app.current_screen, "Key pressed");
    }
    handle_screen_event(app, &event);
}

/// Formulaire modal : Tab pour changer de champ, ←/→ pour les sélecteurs
fn handle_player_form_event(app: &mut App, event: &squadbook::ui::events::Event) {
    use squadbook::ui::events::{
        get_char_from_event, is_backspace_event, is_backtab_event, is_enter_event,
        is_escape_event, is_left_event, is_right_event, is_tab_event,
    };

    if is_escape_event(event) {
        app.cancel_player_form();
    } else if is_enter_event(event) {
        // En cas d'erreur, l'alerte est déjà affichée et le formulaire reste ouvert
        let _ = app.submit_player_form();
    } else if is_tab_event(event) {
        app.form_next_field();
    } else if is_backtab_event(event) {
        app.form_previous_field();
    } else if is_left_event(event) {
        app.form_cycle_option(false);
    } else if is_right_event(event) {
        app.form_cycle_option(true);
    } else if is_backspace_event(event) {
        app.form_backspace();
    } else if let Some(c) = get_char_from_event(event) {
        app.form_append_char(c);
    }
}

/// Ligne de saisie : texte libre, Enter valide, ESC annule
fn handle_input_event(app: &mut App, event: &squadbook::ui::events::Event) {
    use squadbook::ui::events::{
        get_char_from_event, is_backspace_event, is_enter_event, is_escape_event,
        is_left_event, is_right_event,
    };

    if is_escape_event(event) {
        app.cancel_input();
    } else if is_enter_event(event) {
        // La saisie reste ouverte si elle est refusée
        let _ = app.submit_input();
    } else if is_backspace_event(event) {
        app.backspace();
    } else if is_left_event(event) {
        app.cycle_input_option(false);
    } else if is_right_event(event) {
        app.cycle_input_option(true);
    } else if let Some(c) = get_char_from_event(event) {
        app.append_char(c);
    }
}

fn handle_screen_event(app: &mut App, event: &squadbook::ui::events::Event) {
    use squadbook::app::Screen;
    use squadbook::ui::events::{
        is_add_event, is_availability_event, is_delete_event, is_down_event,
        is_edit_amount_event, is_edit_debt_event, is_eligibility_event, is_enter_event,
        is_escape_event, is_new_team_event, is_payment_method_event, is_payment_methods_event,
        is_previous_eligibility_event, is_quit_event, is_rename_event, is_tab_event,
        is_toggle_details_event, is_up_event,
    };

    // Quit : confirmation en deux temps
    if is_quit_event(event) {
        if app.is_awaiting_quit_confirmation() {
            info!("Quit confirmed");
            app.quit();
        } else {
            app.request_quit();
        }
        return;
    }
    app.cancel_quit();

    // Delete : confirmation en deux temps (moyens de paiement)
    if app.is_awaiting_delete_confirmation() {
        if is_delete_event(event) {
            // En cas de refus, l'alerte est déjà affichée
            let _ = app.delete_selected_payment_method();
        } else {
            app.cancel_delete();
        }
        return;
    }

    if is_up_event(event) {
        app.navigate_up();
        return;
    }
    if is_down_event(event) {
        app.navigate_down();
        return;
    }

    match app.current_screen {
        Screen::AllTeams => {
            if is_enter_event(event) {
                app.open_selected_team();
            } else if is_new_team_event(event) {
                app.start_add_team();
            } else if is_add_event(event) {
                app.start_add_player();
            } else if is_payment_methods_event(event) {
                app.open_payment_methods();
            }
        }

        Screen::PaymentMethods => {
            if is_escape_event(event) {
                app.go_back();
            } else if is_add_event(event) {
                app.start_add_payment_method();
            } else if is_rename_event(event) {
                app.start_rename_payment_method();
            } else if is_delete_event(event) {
                app.request_delete();
            }
        }

        Screen::TeamDetail(_) => {
            if is_escape_event(event) {
                app.go_back();
            } else if is_tab_event(event) {
                app.next_tab();
            } else if is_toggle_details_event(event) {
                app.toggle_player_details();
            } else if is_add_event(event) {
                app.start_add_player();
            } else if is_edit_debt_event(event) {
                app.start_edit_team_debt();
            } else if is_payment_methods_event(event) {
                app.open_payment_methods();
            } else if is_eligibility_event(event) {
                app.cycle_selected_eligibility();
            } else if is_previous_eligibility_event(event) {
                app.cycle_selected_eligibility_back();
            } else if is_availability_event(event) {
                app.toggle_selected_availability();
            } else if is_payment_method_event(event) {
                app.cycle_selected_payment_method();
            } else if is_edit_amount_event(event) && app.can_edit_players() {
                app.start_edit_player_amount();
            }
        }
    }
}

// ============================================================================
// Terminal
// ============================================================================

/// Configure le terminal en mode TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    // Alternate screen : l'écran précédent est restauré en sortie
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}
