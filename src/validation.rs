// ============================================================================
// Validation de la saisie utilisateur
// ============================================================================
// Le store ne valide rien : c'est ici que l'appelant (App) vérifie la saisie
// AVANT d'appeler une mutation. Une erreur est affichée à l'utilisateur
// (popup bloquante) et le store n'est pas touché.
//
// CONCEPT RUST : thiserror
// - #[derive(Error)] génère l'impl std::error::Error
// - #[error("...")] fournit le message Display affiché dans la popup
// ============================================================================

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{PaymentMethodConfig, PaymentMethodId};

/// Saisie refusée
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter a {0}")]
    EmptyName(&'static str),

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Debt amount cannot be negative")]
    NegativeDebt,

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Date of birth {0} is in the future")]
    FutureDate(NaiveDate),

    #[error("A payment method named '{0}' already exists")]
    DuplicatePaymentMethod(String),

    #[error("Cannot delete default payment methods")]
    DefaultPaymentMethod(String),

    #[error("Team not found")]
    UnknownTeam,
}

/// Vérifie qu'un nom est non vide ; retourne le nom nettoyé (trim)
///
/// `field` sert au message : "Please enter a player name"
pub fn require_name(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName(field));
    }
    Ok(name.to_string())
}

/// Convertit la saisie en montant
///
/// - vide : 0
/// - non numérique ou infini : InvalidAmount
/// - négatif : NegativeAmount
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let amount: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;

    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount(trimmed.to_string()));
    }
    if amount < 0.0 {
        return Err(ValidationError::NegativeAmount);
    }
    // "-0" est accepté mais stocké comme 0
    Ok(if amount == 0.0 { 0.0 } else { amount })
}

/// Parse une date de naissance au format YYYY-MM-DD
///
/// `today` borne la date : une naissance après aujourd'hui est refusée
pub fn parse_date_of_birth(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))?;

    if date > today {
        return Err(ValidationError::FutureDate(date));
    }
    Ok(date)
}

/// Montant de dette : même règles que parse_amount, message propre à la dette
pub fn parse_debt(input: &str) -> Result<f64, ValidationError> {
    parse_amount(input).map_err(|e| match e {
        ValidationError::NegativeAmount => ValidationError::NegativeDebt,
        other => other,
    })
}

/// Vérifie qu'aucun autre moyen de paiement ne porte déjà ce nom
///
/// `exclude` : le moyen en cours de renommage (il peut garder son nom ou
/// changer de casse)
pub fn check_unique_payment_method(
    methods: &[PaymentMethodConfig],
    name: &str,
    exclude: Option<PaymentMethodId>,
) -> Result<(), ValidationError> {
    let duplicate = methods
        .iter()
        .filter(|m| Some(m.id) != exclude)
        .any(|m| m.has_name(name));

    if duplicate {
        return Err(ValidationError::DuplicatePaymentMethod(name.trim().to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_name() {
        assert_eq!(require_name("player name", "  Mia "), Ok("Mia".to_string()));
        assert_eq!(
            require_name("player name", "   "),
            Err(ValidationError::EmptyName("player name"))
        );
        assert_eq!(
            ValidationError::EmptyName("player name").to_string(),
            "Please enter a player name"
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), Ok(0.0));
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        assert_eq!(parse_amount("-10"), Err(ValidationError::NegativeAmount));
        assert_eq!(
            parse_amount("abc"),
            Err(ValidationError::InvalidAmount("abc".to_string()))
        );
        assert!(parse_amount("inf").is_err());

        let zero = parse_amount("-0").unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn test_parse_debt() {
        assert_eq!(parse_debt("120"), Ok(120.0));
        assert_eq!(parse_debt("-10"), Err(ValidationError::NegativeDebt));
        assert_eq!(
            ValidationError::NegativeDebt.to_string(),
            "Debt amount cannot be negative"
        );
        assert!(matches!(parse_debt("ten"), Err(ValidationError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_date_of_birth() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(
            parse_date_of_birth("2012-04-30", today),
            Ok(NaiveDate::from_ymd_opt(2012, 4, 30).unwrap())
        );
        assert!(parse_date_of_birth("2012-02-30", today).is_err());
        assert!(parse_date_of_birth("30/04/2012", today).is_err());
    }

    #[test]
    fn test_date_of_birth_not_after_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(parse_date_of_birth("2024-03-04", today), Ok(today));
        assert_eq!(
            parse_date_of_birth("2024-03-05", today),
            Err(ValidationError::FutureDate(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()))
        );
        assert!(parse_date_of_birth("2999-01-01", today).is_err());
    }

    #[test]
    fn test_unique_payment_method() {
        let methods = PaymentMethodConfig::defaults();
        assert!(check_unique_payment_method(&methods, "PayPal", None).is_ok());
        assert_eq!(
            check_unique_payment_method(&methods, "venmo", None),
            Err(ValidationError::DuplicatePaymentMethod("venmo".to_string()))
        );

        // Renommer Venmo en "VENMO" : pas un doublon de lui-même
        let venmo = methods.iter().find(|m| m.name == "Venmo").unwrap().id;
        assert!(check_unique_payment_method(&methods, "VENMO", Some(venmo)).is_ok());
        assert!(check_unique_payment_method(&methods, "cash", Some(venmo)).is_err());
    }
}
