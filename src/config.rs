// ============================================================================
// Configuration
// ============================================================================
// Paramètres de démarrage lus depuis l'environnement, avec des valeurs par
// défaut raisonnables :
//
// - SQUADBOOK_LOG_DIR : répertoire des logs
//   (défaut : ~/.local/share/squadbook/logs sur Linux, ./logs en secours)
// - RUST_LOG : filtre tracing (défaut : "squadbook=debug,info")
// - SQUADBOOK_DEMO : "0" ou "false" pour démarrer sans données de démo
// ============================================================================

use std::path::PathBuf;

/// Filtre de logs par défaut : debug pour squadbook, info pour le reste
pub const DEFAULT_LOG_FILTER: &str = "squadbook=debug,info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_dir: PathBuf,
    pub log_filter: String,
    pub demo_data: bool,
}

impl Config {
    /// Lit la configuration depuis les variables d'environnement du process
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construit la configuration à partir d'une fonction de lookup
    ///
    /// CONCEPT RUST : Injection via closure
    /// - from_env() passe std::env::var
    /// - Les tests passent une closure sur une table, sans toucher à l'env
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_dir = lookup("SQUADBOOK_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        let log_filter = lookup("RUST_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let demo_data = lookup("SQUADBOOK_DEMO")
            .map(|value| !matches!(value.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        Self {
            log_dir,
            log_filter,
            demo_data,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Répertoire de logs par défaut, propre à la plateforme
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("squadbook").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}
