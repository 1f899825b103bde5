//! Reporting institution profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Balance-sheet headline for the bank the dashboard reports on.
///
/// Monetary fields are whole USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    /// Legal name
    pub name: String,
    /// Institution type, e.g. "Commercial Bank"
    #[serde(rename = "type")]
    pub kind: String,
    /// Total assets
    pub total_assets: u64,
    /// Tier 1 capital
    pub tier1_capital: u64,
    /// Gross loan book
    pub total_loans: u64,
    /// Customer deposits
    pub total_deposits: u64,
    /// Applicable capital framework
    pub regulatory_framework: String,
    /// As-of timestamp of the data set
    pub last_updated: DateTime<Utc>,
}

impl Institution {
    /// Loans as a percentage of deposits.
    pub fn loan_to_deposit_ratio(&self) -> f64 {
        if self.total_deposits == 0 {
            return 0.0;
        }
        self.total_loans as f64 / self.total_deposits as f64 * 100.0
    }

    /// Tier 1 capital as a percentage of total assets.
    pub fn leverage_ratio(&self) -> f64 {
        if self.total_assets == 0 {
            return 0.0;
        }
        self.tier1_capital as f64 / self.total_assets as f64 * 100.0
    }
}
