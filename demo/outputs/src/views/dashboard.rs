//! Overview page.

use demo_inputs::RiskSnapshot;
use risk_core::model::{ActivityLogEntry, Alert};
use risk_core::presentation::{format_currency, format_percent, DEFAULT_PERCENT_DECIMALS};
use serde::Serialize;

use super::{CardTone, MetricCard, RiskGauge};

/// Alerts shown in the overview feed.
pub const RECENT_ALERT_COUNT: usize = 4;

/// Activity entries shown in the overview feed.
pub const RECENT_ACTIVITY_COUNT: usize = 6;

/// Overview of the whole book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Institution name
    pub institution: String,
    /// Overall, credit, market and liquidity gauges
    pub gauges: Vec<RiskGauge>,
    /// Alerts not yet acknowledged
    pub unresolved_alerts: usize,
    /// Newest alerts
    pub recent_alerts: Vec<Alert>,
    /// Agents currently running
    pub active_agents: usize,
    /// Newest agent activity
    pub recent_activity: Vec<ActivityLogEntry>,
    /// Balance-sheet headline cards
    pub key_metrics: Vec<MetricCard>,
}

impl DashboardView {
    /// Build from the snapshot's own alert feed.
    pub fn from_snapshot(snapshot: &RiskSnapshot) -> Self {
        Self::with_alerts(snapshot, &snapshot.alerts)
    }

    /// Build with an alert feed that may have moved on since generation.
    pub fn with_alerts(snapshot: &RiskSnapshot, alerts: &[Alert]) -> Self {
        let scores = &snapshot.risk_scores;
        let gauges = vec![
            RiskGauge::new("Overall Risk", scores.overall),
            RiskGauge::new("Credit Risk", scores.credit),
            RiskGauge::new("Market Risk", scores.market),
            RiskGauge::new("Liquidity Risk", scores.liquidity),
        ];

        Self {
            institution: snapshot.institution.name.clone(),
            gauges,
            unresolved_alerts: alerts.iter().filter(|a| a.is_open()).count(),
            recent_alerts: alerts.iter().take(RECENT_ALERT_COUNT).cloned().collect(),
            active_agents: snapshot.agents.iter().filter(|a| a.is_active()).count(),
            recent_activity: snapshot
                .activity_log
                .iter()
                .take(RECENT_ACTIVITY_COUNT)
                .cloned()
                .collect(),
            key_metrics: key_metrics(snapshot),
        }
    }
}

fn key_metrics(snapshot: &RiskSnapshot) -> Vec<MetricCard> {
    let inst = &snapshot.institution;
    let npl = snapshot.credit.metrics.npl_ratio;
    vec![
        MetricCard::new("Total Assets", format_currency(inst.total_assets as f64, true)),
        MetricCard::new("Tier 1 Capital", format_currency(inst.tier1_capital as f64, true)),
        MetricCard::new("Total Loans", format_currency(inst.total_loans as f64, true)),
        MetricCard::new("Total Deposits", format_currency(inst.total_deposits as f64, true)),
        MetricCard::new(
            "Loan / Deposit",
            format_percent(inst.loan_to_deposit_ratio(), DEFAULT_PERCENT_DECIMALS),
        ),
        MetricCard::new("NPL Ratio", format_percent(npl, DEFAULT_PERCENT_DECIMALS))
            .with_tone(CardTone::warning_if(npl > super::credit::NPL_WARNING_THRESHOLD)),
        MetricCard::new(
            "Leverage Ratio",
            format_percent(inst.leverage_ratio(), DEFAULT_PERCENT_DECIMALS),
        )
        .with_subtext("Tier 1 / total assets"),
    ]
}
