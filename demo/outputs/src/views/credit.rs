//! Credit risk page.

use demo_inputs::RiskSnapshot;
use risk_core::model::TopExposure;
use risk_core::presentation::{format_currency, format_percent, DEFAULT_PERCENT_DECIMALS};
use serde::Serialize;

use super::{CardTone, MetricCard};

/// NPL ratio above which the card is flagged, percent.
pub const NPL_WARNING_THRESHOLD: f64 = 1.5;

/// Credit portfolio summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditView {
    /// Expected loss, NPL, provision coverage, watchlist
    pub cards: Vec<MetricCard>,
    /// Sum of exposure across rating grades
    pub total_rated_exposure: u64,
    /// Watchlist share of total loans, percent
    pub watchlist_share: f64,
    /// Top names currently on the watchlist
    pub watchlisted: Vec<TopExposure>,
    /// Upgrades minus downgrades over the migration window
    pub net_migration: i64,
    /// Defaults over the migration window
    pub defaults: u32,
}

impl CreditView {
    /// Build from a snapshot.
    pub fn from_snapshot(snapshot: &RiskSnapshot) -> Self {
        let credit = &snapshot.credit;
        let metrics = &credit.metrics;

        let total_loans = snapshot.institution.total_loans;
        let watchlist_share = if total_loans == 0 {
            0.0
        } else {
            metrics.watchlist_loans as f64 / total_loans as f64 * 100.0
        };

        let cards = vec![
            MetricCard::new("Expected Loss", format_currency(metrics.expected_loss as f64, true))
                .with_subtext("Annual estimate"),
            MetricCard::new(
                "NPL Ratio",
                format_percent(metrics.npl_ratio, DEFAULT_PERCENT_DECIMALS),
            )
            .with_subtext("Non-performing loans")
            .with_tone(CardTone::warning_if(metrics.npl_ratio > NPL_WARNING_THRESHOLD)),
            MetricCard::new("Provision Coverage", format_percent(metrics.provision_coverage, 0))
                .with_subtext("of expected loss"),
            MetricCard::new(
                "Watchlist Loans",
                format_currency(metrics.watchlist_loans as f64, true),
            )
            .with_subtext(format!(
                "{} of portfolio",
                format_percent(watchlist_share, DEFAULT_PERCENT_DECIMALS)
            ))
            .with_tone(CardTone::Warning),
        ];

        Self {
            cards,
            total_rated_exposure: credit.by_rating.iter().map(|b| b.exposure).sum(),
            watchlist_share,
            watchlisted: credit
                .top_exposures
                .iter()
                .filter(|e| e.watchlist)
                .cloned()
                .collect(),
            net_migration: credit.migration_trend.iter().map(|d| d.net_migration()).sum(),
            defaults: credit.migration_trend.iter().map(|d| d.defaults).sum(),
        }
    }
}
