//! Liquidity risk page.

use demo_inputs::RiskSnapshot;
use risk_core::model::CashFlowBucket;
use risk_core::presentation::format_currency;
use risk_core::types::{ComplianceStatus, FundingStability};
use serde::Serialize;

/// Full-scale value of a ratio gauge, percent.
pub const GAUGE_SCALE: f64 = 150.0;

/// Headroom over the minimum above which a compliant ratio shows green.
pub const COMFORT_MULTIPLE: f64 = 1.15;

/// Horizontal bar for a regulatory ratio against its floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioGauge {
    /// Ratio name
    pub name: String,
    /// Current value, percent
    pub value: f64,
    /// Regulatory minimum, percent
    pub minimum: f64,
    /// Bar fill, percent of the gauge width, capped at 100
    pub fill_pct: f64,
    /// Position of the minimum marker, percent of the gauge width
    pub minimum_pct: f64,
    /// Compliant or in breach
    pub status: ComplianceStatus,
    /// Bar colour
    pub color: &'static str,
}

impl RatioGauge {
    /// Gauge for `value` against `minimum`.
    pub fn new(name: impl Into<String>, value: f64, minimum: f64) -> Self {
        let status = ComplianceStatus::assess(value, minimum);
        let color = if status.is_breach() {
            "#ef4444"
        } else if value > minimum * COMFORT_MULTIPLE {
            "#10b981"
        } else {
            "#f59e0b"
        };
        Self {
            name: name.into(),
            value,
            minimum,
            fill_pct: (value / GAUGE_SCALE * 100.0).min(100.0),
            minimum_pct: minimum / GAUGE_SCALE * 100.0,
            status,
            color,
        }
    }
}

/// Liquidity stress outcome with its breach flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressOutcome {
    /// Scenario name
    pub scenario: String,
    /// LCR under stress, percent
    pub lcr: f64,
    /// Days until the buffer runs out
    pub survival_days: u32,
    /// HQLA consumed, percent
    pub hqla_drawdown: f64,
    /// Stressed LCR below the floor
    pub breach: bool,
}

/// Liquidity risk summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidityView {
    /// LCR and NSFR gauges
    pub gauges: Vec<RatioGauge>,
    /// Sum of the HQLA buffer
    pub total_hqla: u64,
    /// `total_hqla` in compact form
    pub total_hqla_label: String,
    /// Share of funding from high-stability sources, percent
    pub stable_funding_share: f64,
    /// Stress outcomes, mildest first
    pub stress: Vec<StressOutcome>,
    /// Ladder bucket with the most negative cumulative position, if any is negative
    pub deepest_gap: Option<CashFlowBucket>,
}

impl LiquidityView {
    /// Build from a snapshot.
    pub fn from_snapshot(snapshot: &RiskSnapshot) -> Self {
        let liquidity = &snapshot.liquidity;
        let ratios = &liquidity.ratios;

        let gauges = vec![
            RatioGauge::new(
                "Liquidity Coverage Ratio (LCR)",
                f64::from(ratios.lcr),
                f64::from(ratios.lcr_min),
            ),
            RatioGauge::new(
                "Net Stable Funding Ratio (NSFR)",
                f64::from(ratios.nsfr),
                f64::from(ratios.nsfr_min),
            ),
        ];

        let total_hqla = liquidity.hqla_composition.iter().map(|h| h.amount).sum();

        let stress = liquidity
            .stress_scenarios
            .iter()
            .map(|s| StressOutcome {
                scenario: s.scenario.clone(),
                lcr: s.lcr_impact,
                survival_days: s.survival_days,
                hqla_drawdown: s.hqla_drawdown,
                breach: s.is_breach(),
            })
            .collect();

        Self {
            gauges,
            total_hqla,
            total_hqla_label: format_currency(total_hqla as f64, true),
            stable_funding_share: liquidity
                .funding_sources
                .iter()
                .filter(|f| f.stability == FundingStability::High)
                .map(|f| f.percentage)
                .sum(),
            stress,
            deepest_gap: liquidity
                .cash_flow_ladder
                .iter()
                .filter(|b| b.is_gap())
                .min_by_key(|b| b.cumulative)
                .cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ratio_gauges() {
        let view = LiquidityView::from_snapshot(&RiskSnapshot::default());
        let lcr = &view.gauges[0];
        assert_eq!(lcr.status, ComplianceStatus::Compliant);
        assert_eq!(lcr.color, "#10b981");
        assert_relative_eq!(lcr.fill_pct, 118.0 / 150.0 * 100.0);
        assert_relative_eq!(lcr.minimum_pct, 100.0 / 150.0 * 100.0);

        let nsfr = &view.gauges[1];
        assert_eq!(nsfr.status, ComplianceStatus::Compliant);
        assert_eq!(nsfr.color, "#f59e0b");
    }

    #[test]
    fn test_gauge_caps_and_breach() {
        let full = RatioGauge::new("LCR", 180.0, 100.0);
        assert_relative_eq!(full.fill_pct, 100.0);

        let breach = RatioGauge::new("LCR", 92.0, 100.0);
        assert_eq!(breach.status, ComplianceStatus::Breach);
        assert_eq!(breach.color, "#ef4444");

        let at_floor = RatioGauge::new("LCR", 100.0, 100.0);
        assert_eq!(at_floor.status, ComplianceStatus::Compliant);
    }

    #[test]
    fn test_liquidity_summary() {
        let view = LiquidityView::from_snapshot(&RiskSnapshot::default());
        assert_eq!(view.total_hqla, 7_600_000_000);
        assert_eq!(view.total_hqla_label, "$7.6B");
        assert_relative_eq!(view.stable_funding_share, 57.2, epsilon = 1e-9);

        let breaches: Vec<&str> = view
            .stress
            .iter()
            .filter(|s| s.breach)
            .map(|s| s.scenario.as_str())
            .collect();
        assert_eq!(breaches, vec!["Severe Stress", "Combined Crisis"]);

        let gap = view.deepest_gap.unwrap();
        assert_eq!(gap.bucket, "31-60 Days");
        assert_eq!(gap.cumulative, -440_000_000);
    }
}
