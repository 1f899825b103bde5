//! Credit portfolio records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::CreditRating;

/// Exposure in one rating grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRatingBucket {
    /// Rating grade
    pub rating: CreditRating,
    /// Exposure in USD
    pub exposure: u64,
    /// Share of the rated portfolio, percent
    pub percentage: f64,
    /// Probability of default, percent
    pub pd: f64,
    /// Number of obligors
    pub count: u32,
}

/// Exposure to one industry sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorExposure {
    /// Sector name
    pub sector: String,
    /// Exposure in USD
    pub exposure: u64,
    /// Share of the portfolio, percent
    pub percentage: f64,
    /// Average notched rating, e.g. "BBB+"
    pub avg_rating: String,
    /// Non-performing loan ratio, percent
    pub npl: f64,
}

/// A single-name concentration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopExposure {
    /// Obligor name
    pub name: String,
    /// Sector short name
    pub sector: String,
    /// Exposure in USD
    pub exposure: u64,
    /// Notched rating, e.g. "BBB-"
    pub rating: String,
    /// Whether the obligor is on the watchlist
    pub watchlist: bool,
    /// Probability of default, percent
    pub pd: f64,
}

/// Portfolio-level loss figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditMetrics {
    /// Expected loss, USD
    pub expected_loss: u64,
    /// Unexpected loss, USD
    pub unexpected_loss: u64,
    /// Economic capital, USD
    pub economic_capital: u64,
    /// Provisions over expected loss, percent
    pub provision_coverage: f64,
    /// Non-performing loan ratio, percent
    pub npl_ratio: f64,
    /// Watchlisted loan balance, USD
    pub watchlist_loans: u64,
    /// Write-offs year to date, USD
    #[serde(rename = "writeOffsYTD")]
    pub write_offs_ytd: u64,
    /// Recovery rate on defaults, percent
    pub recovery_rate: f64,
}

/// Rating migration counts for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationDay {
    /// Calendar day
    pub date: NaiveDate,
    /// Obligors upgraded
    pub upgrades: u32,
    /// Obligors downgraded
    pub downgrades: u32,
    /// Obligors defaulted
    pub defaults: u32,
}

impl MigrationDay {
    /// Upgrades minus downgrades.
    pub fn net_migration(&self) -> i64 {
        i64::from(self.upgrades) - i64::from(self.downgrades)
    }
}
