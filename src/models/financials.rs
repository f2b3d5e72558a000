// ============================================================================
// Structure : FinancialSummary
// ============================================================================
// Triplet dérivé (encaissé, dû, solde), calculé à la demande, jamais stocké
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_collected: f64,
    pub total_owed: f64,
    /// total_collected - total_owed
    pub balance: f64,
}

impl FinancialSummary {
    /// Construit le résumé ; le solde est toujours dérivé, jamais fourni
    pub fn new(total_collected: f64, total_owed: f64) -> Self {
        Self {
            total_collected,
            total_owed,
            balance: total_collected - total_owed,
        }
    }

    /// Solde positif ou nul
    pub fn is_surplus(&self) -> bool {
        self.balance >= 0.0
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_surplus() {
            "Surplus"
        } else {
            "Deficit"
        }
    }

    /// Solde signé pour l'affichage : "+$20", "-$15", "$0"
    pub fn signed_balance(&self) -> String {
        if self.balance > 0.0 {
            format!("+{}", format_money(self.balance))
        } else if self.balance < 0.0 {
            format!("-{}", format_money(self.balance.abs()))
        } else {
            format_money(0.0)
        }
    }
}

/// Formate un montant : "$50" pour un entier, "$12.50" sinon
///
/// -0.0 (somme vide, saisie "-0") s'affiche "$0"
pub fn format_money(amount: f64) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount };
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_is_derived() {
        let summary = FinancialSummary::new(50.0, 50.0);
        assert_eq!(summary.balance, 0.0);
        assert!(summary.is_surplus());

        let summary = FinancialSummary::new(30.0, 45.0);
        assert_eq!(summary.balance, -15.0);
        assert_eq!(summary.status_label(), "Deficit");
    }

    #[test]
    fn test_signed_balance() {
        assert_eq!(FinancialSummary::new(70.0, 50.0).signed_balance(), "+$20");
        assert_eq!(FinancialSummary::new(35.0, 50.0).signed_balance(), "-$15");
        assert_eq!(FinancialSummary::default().signed_balance(), "$0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(50.0), "$50");
        assert_eq!(format_money(12.5), "$12.50");
        assert_eq!(format_money(-0.0), "$0");
    }
}
