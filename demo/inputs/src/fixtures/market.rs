//! Market risk fixtures.

use chrono::NaiveDate;
use risk_core::model::{AssetClassPosition, Sensitivity, StressScenario, VarSeriesDay, VarSummary};
use risk_core::types::{ScenarioCategory, ScenarioProbability};

use crate::generator::{date_window, SyntheticRng};

/// 1-day 99% VaR limit, USD.
pub const VAR_LIMIT_1D_99: u64 = 12_400_000;

/// Headline VaR, currently over its limit.
pub fn var_summary() -> VarSummary {
    VarSummary::new(13_800_000, 9_200_000, 43_600_000, VAR_LIMIT_1D_99, 1, 18_500_000)
}

/// VaR versus P&L, ramping over the last days of the window.
///
/// Both confidence levels share the day's base draw; P&L uses its own draw.
pub fn var_time_series(rng: &mut SyntheticRng, reference_date: NaiveDate, days: usize) -> Vec<VarSeriesDay> {
    date_window(reference_date, days)
        .enumerate()
        .map(|(i, date)| {
            let base = 9_000_000.0 + rng.gaussian() * 2_000_000.0;
            let spike = if i > 25 { (i - 25) as f64 * 1_200_000.0 } else { 0.0 };
            VarSeriesDay {
                date,
                var99: (base + 3_000_000.0 + spike).max(5_000_000.0),
                var95: (base + spike * 0.7).max(3_000_000.0),
                limit: VAR_LIMIT_1D_99 as f64,
                pnl: rng.gaussian() * 4_000_000.0,
            }
        })
        .collect()
}

/// Trading positions by asset class.
pub fn market_portfolio() -> Vec<AssetClassPosition> {
    let rows: [(&str, u64, u64, i64, i64); 6] = [
        ("Government Bonds", 12_400_000_000, 3_200_000, -450_000, 280_000),
        ("Corporate Bonds", 8_700_000_000, 4_100_000, -320_000, -510_000),
        ("Interest Rate Swaps", 15_200_000_000, 2_800_000, 180_000, 120_000),
        ("FX Forwards", 3_600_000_000, 1_900_000, -89_000, -230_000),
        ("Equity Derivatives", 2_100_000_000, 1_400_000, 210_000, 340_000),
        ("Credit Default Swaps", 4_500_000_000, 2_200_000, -140_000, -180_000),
    ];
    rows.into_iter()
        .map(|(asset_class, notional, var99, delta, pnl_daily)| AssetClassPosition {
            asset_class: asset_class.to_string(),
            notional,
            var99,
            delta,
            pnl_daily,
        })
        .collect()
}

/// Historical, hypothetical and generated stress scenarios.
pub fn stress_scenarios() -> Vec<StressScenario> {
    use ScenarioCategory::*;
    use ScenarioProbability::*;

    let rows: [(&str, &str, i64, f64, ScenarioProbability, ScenarioCategory); 6] = [
        (
            "2008 Financial Crisis Replay",
            "Equity -40%, credit spreads +300bp, rates -200bp, USD +15%",
            -2_340_000_000,
            -4.8,
            Tail,
            Historical,
        ),
        (
            "COVID-19 Market Shock",
            "Equity -30%, credit spreads +200bp, rates -150bp, oil -50%",
            -1_870_000_000,
            -3.9,
            Tail,
            Historical,
        ),
        (
            "Rapid Rate Rise (+300bp)",
            "Parallel shift +300bp across yield curve over 3 months",
            -890_000_000,
            -1.8,
            Moderate,
            Hypothetical,
        ),
        (
            "Stagflation Scenario",
            "GDP -2%, inflation +4%, rates +200bp, equity -20%",
            -1_450_000_000,
            -3.0,
            Elevated,
            AiGenerated,
        ),
        (
            "CRE Market Correction",
            "CRE values -25%, cap rates +150bp, vacancy +8%",
            -1_680_000_000,
            -3.5,
            Elevated,
            AiGenerated,
        ),
        (
            "Sovereign Debt Crisis",
            "EM sovereign spreads +500bp, DM spreads +100bp, flight to quality",
            -720_000_000,
            -1.5,
            Low,
            Hypothetical,
        ),
    ];
    rows.into_iter()
        .map(|(name, description, pnl_impact, capital_impact, probability, category)| StressScenario {
            name: name.to_string(),
            description: description.to_string(),
            pnl_impact,
            capital_impact,
            probability,
            category,
        })
        .collect()
}

/// First-order factor sensitivities.
pub fn sensitivities() -> Vec<Sensitivity> {
    let rows: [(&str, i64, &str); 6] = [
        ("Interest Rates (+1bp)", -142_000, "DV01"),
        ("Credit Spreads (+1bp)", -89_000, "CS01"),
        ("Equity Index (+1%)", 320_000, "Equity Delta"),
        ("USD/EUR (+1%)", -210_000, "FX Delta"),
        ("Implied Vol (+1%)", 180_000, "Vega"),
        ("Yield Curve Twist (2s10s +1bp)", -56_000, "Curve Risk"),
    ];
    rows.into_iter()
        .map(|(factor, impact, unit)| Sensitivity {
            factor: factor.to_string(),
            impact,
            unit: unit.to_string(),
        })
        .collect()
}
