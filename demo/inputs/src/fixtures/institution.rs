//! Institution profile and headline risk scores.

use chrono::{NaiveDate, NaiveTime};
use risk_core::model::Institution;
use risk_core::types::{RiskScore, RiskScoreSet, ScoreHistoryDay};

use crate::generator::{flat, generate_daily_series, ramp_after, SeriesSpec, SyntheticRng};

/// Overall composite band.
pub const OVERALL_SPEC: SeriesSpec = SeriesSpec {
    baseline: 32.0,
    volatility: 4.0,
    floor: 15.0,
    ceiling: 60.0,
};

/// Credit component band.
pub const CREDIT_SPEC: SeriesSpec = SeriesSpec {
    baseline: 35.0,
    volatility: 5.0,
    floor: 15.0,
    ceiling: 65.0,
};

/// Market component band.
pub const MARKET_SPEC: SeriesSpec = SeriesSpec {
    baseline: 28.0,
    volatility: 6.0,
    floor: 10.0,
    ceiling: 55.0,
};

/// Liquidity component band.
pub const LIQUIDITY_SPEC: SeriesSpec = SeriesSpec {
    baseline: 30.0,
    volatility: 3.0,
    floor: 10.0,
    ceiling: 50.0,
};

/// Atlantic Federal Bank, as of midnight UTC on the reference date.
pub fn institution(reference_date: NaiveDate) -> Institution {
    Institution {
        name: "Atlantic Federal Bank".to_string(),
        kind: "Commercial Bank".to_string(),
        total_assets: 48_700_000_000,
        tier1_capital: 4_200_000_000,
        total_loans: 31_200_000_000,
        total_deposits: 38_500_000_000,
        regulatory_framework: "Basel III".to_string(),
        last_updated: reference_date.and_time(NaiveTime::default()).and_utc(),
    }
}

/// Headline scores with a generated history.
///
/// Overall and credit drift upward over the last days of the window.
pub fn risk_scores(rng: &mut SyntheticRng, reference_date: NaiveDate, days: usize) -> RiskScoreSet {
    let overall = generate_daily_series(rng, reference_date, days, &OVERALL_SPEC, ramp_after(20, 0.3));
    let credit = generate_daily_series(rng, reference_date, days, &CREDIT_SPEC, ramp_after(22, 0.4));
    let market = generate_daily_series(rng, reference_date, days, &MARKET_SPEC, flat);
    let liquidity = generate_daily_series(rng, reference_date, days, &LIQUIDITY_SPEC, flat);

    let history = overall
        .iter()
        .zip(&credit)
        .zip(&market)
        .zip(&liquidity)
        .map(|(((o, c), m), l)| ScoreHistoryDay {
            date: o.date,
            overall: o.value,
            credit: c.value,
            market: m.value,
            liquidity: l.value,
        })
        .collect();

    RiskScoreSet {
        overall: RiskScore::from_literal(34),
        credit: RiskScore::from_literal(38),
        market: RiskScore::from_literal(29),
        liquidity: RiskScore::from_literal(31),
        operational: RiskScore::from_literal(22),
        history,
    }
}
