//! Liquidity risk fixtures.

use chrono::NaiveDate;
use risk_core::model::{
    CashFlowBucket, CashFlowInput, FundingSource, HqlaComponent, LcrTrendDay, LiquidityRatios,
    LiquidityStressScenario,
};
use risk_core::types::FundingStability;

use crate::generator::{
    build_cash_flow_ladder, flat, generate_daily_series, linear, SeriesSpec, SyntheticRng,
};

/// Regulatory floor for both ratios, percent.
pub const RATIO_FLOOR: u32 = 100;

/// LCR trend: declining 0.3 points a day from 125, floored at the minimum.
pub const LCR_TREND_SPEC: SeriesSpec = SeriesSpec {
    baseline: 125.0,
    volatility: 3.0,
    floor: RATIO_FLOOR as f64,
    ceiling: f64::INFINITY,
};

/// NSFR trend around 112, floored at the minimum.
pub const NSFR_TREND_SPEC: SeriesSpec = SeriesSpec {
    baseline: 112.0,
    volatility: 2.0,
    floor: RATIO_FLOOR as f64,
    ceiling: f64::INFINITY,
};

/// Current ratios with their generated trend.
pub fn liquidity_ratios(rng: &mut SyntheticRng, reference_date: NaiveDate, days: usize) -> LiquidityRatios {
    let lcr = generate_daily_series(rng, reference_date, days, &LCR_TREND_SPEC, linear(-0.3));
    let nsfr = generate_daily_series(rng, reference_date, days, &NSFR_TREND_SPEC, flat);

    let lcr_trend = lcr
        .iter()
        .zip(&nsfr)
        .map(|(l, n)| LcrTrendDay {
            date: l.date,
            lcr: l.value,
            nsfr: n.value,
            minimum: f64::from(RATIO_FLOOR),
        })
        .collect();

    LiquidityRatios {
        lcr: 118,
        lcr_min: RATIO_FLOOR,
        nsfr: 108,
        nsfr_min: RATIO_FLOOR,
        lcr_trend,
    }
}

/// Contractual flows per maturity bucket, shortest first.
pub fn cash_flow_inputs() -> Vec<CashFlowInput> {
    vec![
        CashFlowInput::new("Overnight", 2_100_000_000, 1_800_000_000),
        CashFlowInput::new("2-7 Days", 1_400_000_000, 1_600_000_000),
        CashFlowInput::new("8-14 Days", 980_000_000, 1_100_000_000),
        CashFlowInput::new("15-30 Days", 1_200_000_000, 1_340_000_000),
        CashFlowInput::new("31-60 Days", 1_800_000_000, 2_080_000_000),
        CashFlowInput::new("61-90 Days", 2_200_000_000, 1_900_000_000),
        CashFlowInput::new("91-180 Days", 3_400_000_000, 2_800_000_000),
        CashFlowInput::new("181-365 Days", 4_200_000_000, 3_600_000_000),
    ]
}

/// Maturity ladder with derived net and cumulative positions.
pub fn cash_flow_ladder() -> Vec<CashFlowBucket> {
    build_cash_flow_ladder(&cash_flow_inputs())
}

/// Liability funding mix.
pub fn funding_sources() -> Vec<FundingSource> {
    use FundingStability::*;

    let rows: [(&str, u64, f64, FundingStability, f64); 7] = [
        ("Retail Deposits", 22_400_000_000, 46.2, High, 3.2),
        ("Commercial Deposits", 10_800_000_000, 22.3, Medium, 3.8),
        ("Wholesale Funding", 6_200_000_000, 12.8, Low, 4.5),
        ("Interbank Borrowing", 3_800_000_000, 7.8, Low, 4.8),
        ("Senior Unsecured Bonds", 3_200_000_000, 6.6, High, 4.2),
        ("Subordinated Debt", 1_100_000_000, 2.3, High, 5.6),
        ("Central Bank Facility", 1_000_000_000, 2.1, High, 4.0),
    ];
    rows.into_iter()
        .map(|(source, amount, percentage, stability, cost)| FundingSource {
            source: source.to_string(),
            amount,
            percentage,
            stability,
            cost,
        })
        .collect()
}

/// Liquid asset buffer by HQLA level.
pub fn hqla_composition() -> Vec<HqlaComponent> {
    let rows: [(&str, u64, f64); 4] = [
        ("Level 1: Cash & Central Bank Reserves", 3_200_000_000, 42.1),
        ("Level 1: Government Securities", 2_800_000_000, 36.8),
        ("Level 2A: Agency MBS", 1_100_000_000, 14.5),
        ("Level 2B: Corporate Bonds (A-)", 500_000_000, 6.6),
    ];
    rows.into_iter()
        .map(|(kind, amount, percentage)| HqlaComponent {
            kind: kind.to_string(),
            amount,
            percentage,
        })
        .collect()
}

/// Liquidity stress ladder from baseline to combined crisis.
pub fn liquidity_stress_scenarios() -> Vec<LiquidityStressScenario> {
    let rows: [(&str, f64, u32, f64); 4] = [
        ("Baseline", 118.0, 90, 0.0),
        ("Moderate Stress", 105.0, 62, 22.0),
        ("Severe Stress", 87.0, 34, 48.0),
        ("Combined Crisis", 72.0, 21, 65.0),
    ];
    rows.into_iter()
        .map(|(scenario, lcr_impact, survival_days, hqla_drawdown)| LiquidityStressScenario {
            scenario: scenario.to_string(),
            lcr_impact,
            survival_days,
            hqla_drawdown,
        })
        .collect()
}
