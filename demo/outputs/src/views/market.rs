//! Market risk page.

use demo_inputs::RiskSnapshot;
use risk_core::presentation::{format_currency, format_percent, DEFAULT_PERCENT_DECIMALS};
use serde::Serialize;

use super::{CardTone, MetricCard};

/// Sign of a sensitivity's P&L impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactDirection {
    /// Zero or positive impact
    Gain,
    /// Negative impact
    Loss,
}

/// One factor sensitivity ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensitivityRow {
    /// Risk factor and bump
    pub factor: String,
    /// Sensitivity measure
    pub unit: String,
    /// Gain or loss
    pub direction: ImpactDirection,
    /// Compact absolute impact, e.g. `"$142K"`
    pub impact: String,
}

/// Market risk summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketView {
    /// 1D VaR, limit utilisation, expected shortfall, 10D VaR
    pub cards: Vec<MetricCard>,
    /// Days in the VaR series with negative P&L
    pub loss_days: usize,
    /// Days where the loss exceeded 99% VaR
    pub backtest_exceptions: usize,
    /// Factor sensitivities
    pub sensitivities: Vec<SensitivityRow>,
    /// Scenario with the largest loss
    pub worst_scenario: Option<String>,
}

impl MarketView {
    /// Build from a snapshot.
    pub fn from_snapshot(snapshot: &RiskSnapshot) -> Self {
        let market = &snapshot.market;
        let var = &market.var_summary;
        let breach = CardTone::breach_if(var.is_limit_breached());

        let breaches = match var.breach_count {
            1 => "1 active breach".to_string(),
            n => format!("{} active breaches", n),
        };

        let cards = vec![
            MetricCard::new("1D VaR (99%)", format_currency(var.var_1d_99 as f64, true))
                .with_subtext(format!("Limit: {}", format_currency(var.limit_1d_99 as f64, true)))
                .with_tone(breach),
            MetricCard::new(
                "Limit Utilization",
                format_percent(var.limit_utilization(), DEFAULT_PERCENT_DECIMALS),
            )
            .with_subtext(breaches)
            .with_tone(breach),
            MetricCard::new(
                "Expected Shortfall",
                format_currency(var.expected_shortfall_99 as f64, true),
            )
            .with_subtext("99% confidence"),
            MetricCard::new("10D VaR (99%)", format_currency(var.var_10d_99 as f64, true))
                .with_subtext("Regulatory horizon"),
        ];

        let sensitivities = market
            .sensitivities
            .iter()
            .map(|s| SensitivityRow {
                factor: s.factor.clone(),
                unit: s.unit.clone(),
                direction: if s.impact >= 0 {
                    ImpactDirection::Gain
                } else {
                    ImpactDirection::Loss
                },
                impact: format_currency(s.impact.unsigned_abs() as f64, true),
            })
            .collect();

        Self {
            cards,
            loss_days: market.var_time_series.iter().filter(|d| d.pnl < 0.0).count(),
            backtest_exceptions: market
                .var_time_series
                .iter()
                .filter(|d| d.is_backtest_exception())
                .count(),
            sensitivities,
            worst_scenario: market
                .stress_scenarios
                .iter()
                .min_by_key(|s| s.pnl_impact)
                .map(|s| s.name.clone()),
        }
    }
}
