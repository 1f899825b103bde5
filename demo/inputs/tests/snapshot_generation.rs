//! Integration tests for snapshot generation and its invariants.

use std::collections::HashSet;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use chrono::Duration;
use demo_inputs::fixtures::{institution, liquidity};
use demo_inputs::prelude::*;
use proptest::prelude::*;
use risk_core::model::CashFlowInput;
use risk_core::types::{AgentStatus, CreditRating, Severity};

#[test]
fn test_same_seed_same_snapshot() {
    let config = SyntheticConfig::default().with_seed(11);
    assert_eq!(RiskSnapshot::generate(&config), RiskSnapshot::generate(&config));
}

#[test]
fn test_different_seeds_differ() {
    let a = RiskSnapshot::generate(&SyntheticConfig::default().with_seed(1));
    let b = RiskSnapshot::generate(&SyntheticConfig::default().with_seed(2));
    assert_ne!(a.risk_scores.history, b.risk_scores.history);
    assert_eq!(a.alerts, b.alerts);
}

#[test]
fn test_series_dates_contiguous_and_end_at_reference() {
    let snapshot = RiskSnapshot::default();
    let reference = snapshot.config.reference_date;

    let history: Vec<_> = snapshot.risk_scores.history.iter().map(|d| d.date).collect();
    let migration: Vec<_> = snapshot.credit.migration_trend.iter().map(|d| d.date).collect();
    let var: Vec<_> = snapshot.market.var_time_series.iter().map(|d| d.date).collect();
    let lcr: Vec<_> = snapshot.liquidity.ratios.lcr_trend.iter().map(|d| d.date).collect();

    for dates in [&history, &migration, &var, &lcr] {
        assert_eq!(dates.len(), 30);
        assert_eq!(*dates.last().unwrap(), reference);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }
    assert_eq!(history, var);
}

#[test]
fn test_cash_flow_ladder_fixture() {
    let ladder = liquidity::cash_flow_ladder();
    let nets: Vec<i64> = ladder.iter().map(|b| b.net / 1_000_000).collect();
    let cumulative: Vec<i64> = ladder.iter().map(|b| b.cumulative / 1_000_000).collect();
    assert_eq!(nets, vec![300, -200, -120, -140, -280, 300, 600, 600]);
    assert_eq!(cumulative, vec![300, 100, -20, -160, -440, -140, 460, 1060]);
    assert_eq!(ladder[0].bucket, "Overnight");
    assert_eq!(ladder[7].bucket, "181-365 Days");
}

#[test]
fn test_alert_fixture() {
    let snapshot = RiskSnapshot::default();
    let ids: HashSet<_> = snapshot.alerts.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), snapshot.alerts.len());
    assert_eq!(snapshot.alerts.len(), 7);

    let open: Vec<u32> = snapshot.unacknowledged_alerts().map(|a| a.id.0).collect();
    assert_eq!(open, vec![1, 2, 3]);
    assert_eq!(snapshot.alerts[0].severity, Severity::Critical);
    assert_eq!(
        snapshot.alerts[0].timestamp.to_rfc3339(),
        "2026-02-12T09:15:00+00:00"
    );
    assert_eq!(
        snapshot.alerts[6].timestamp.to_rfc3339(),
        "2026-02-10T09:30:00+00:00"
    );
}

#[test]
fn test_agent_roster() {
    let snapshot = RiskSnapshot::default();
    let ids: HashSet<_> = snapshot.agents.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids.len(), 6);
    let idle: Vec<_> = snapshot
        .agents
        .iter()
        .filter(|a| a.status == AgentStatus::Idle)
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(idle, vec!["stress-architect"]);
    assert_eq!(snapshot.activity_log.len(), 10);
    assert_eq!(snapshot.activity_log[9].agent, "All Agents");
}

#[test]
fn test_credit_tables_ordered() {
    let snapshot = RiskSnapshot::default();
    let ratings: Vec<_> = snapshot.credit.by_rating.iter().map(|b| b.rating).collect();
    assert_eq!(ratings, CreditRating::ALL.to_vec());
    for pair in snapshot.credit.top_exposures.windows(2) {
        assert!(pair[0].exposure >= pair[1].exposure);
    }
    let sector_pct: f64 = snapshot.credit.by_sector.iter().map(|s| s.percentage).sum();
    assert_abs_diff_eq!(sector_pct, 100.0, epsilon = 0.5);
}

#[test]
fn test_liquidity_percentages_sum_near_hundred() {
    let snapshot = RiskSnapshot::default();
    let funding: f64 = snapshot.liquidity.funding_sources.iter().map(|f| f.percentage).sum();
    let hqla: f64 = snapshot.liquidity.hqla_composition.iter().map(|h| h.percentage).sum();
    assert_abs_diff_eq!(funding, 100.0, epsilon = 0.5);
    assert_abs_diff_eq!(hqla, 100.0, epsilon = 0.5);
}

#[test]
fn test_var_summary_utilization_derived() {
    let snapshot = RiskSnapshot::default();
    let summary = &snapshot.market.var_summary;
    let expected = 13_800_000.0 / 12_400_000.0 * 100.0;
    assert_relative_eq!(summary.limit_utilization(), expected, epsilon = 1e-9);
    assert!(summary.is_limit_breached());
    for day in &snapshot.market.var_time_series {
        assert_eq!(day.limit, 12_400_000.0);
        assert!(day.var99 >= 5_000_000.0);
        assert!(day.var95 >= 3_000_000.0);
    }
}

#[test]
fn test_snapshot_json_contract() {
    let snapshot = RiskSnapshot::default();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["institution"]["type"], "Commercial Bank");
    assert_eq!(json["institution"]["tier1Capital"], 4_200_000_000u64);
    assert_eq!(json["market"]["varSummary"]["var1d99"], 13_800_000u64);
    assert_eq!(json["credit"]["metrics"]["writeOffsYTD"], 89_000_000u64);
    assert_eq!(json["credit"]["byRating"][6]["rating"], "CCC+");
    assert_eq!(json["market"]["stressScenarios"][3]["category"], "AI-Generated");
    assert_eq!(json["agents"][0]["dataSourcesConnected"][0], "Loan Management System");
    assert_eq!(json["riskScores"]["overall"], 34);

    let back: RiskSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back.alerts, snapshot.alerts);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_history_within_bands(seed in any::<u64>()) {
        let snapshot = RiskSnapshot::generate(&SyntheticConfig::default().with_seed(seed));
        for day in &snapshot.risk_scores.history {
            prop_assert!((15.0..=60.0).contains(&day.overall));
            prop_assert!((15.0..=65.0).contains(&day.credit));
            prop_assert!((10.0..=55.0).contains(&day.market));
            prop_assert!((10.0..=50.0).contains(&day.liquidity));
        }
        for day in &snapshot.liquidity.ratios.lcr_trend {
            prop_assert!(day.lcr >= 100.0);
            prop_assert!(day.nsfr >= 100.0);
        }
        for (i, day) in snapshot.credit.migration_trend.iter().enumerate() {
            prop_assert!((2..=8).contains(&day.upgrades));
            prop_assert!((3..=16).contains(&day.downgrades));
            let max_defaults = if i > 25 { 2 } else { 1 };
            prop_assert!(day.defaults <= max_defaults);
        }
    }

    #[test]
    fn test_series_length_and_end(days in 0usize..120, seed in any::<u64>()) {
        let reference = demo_inputs::snapshot::default_reference_date();
        let mut rng = SyntheticRng::seeded(seed);
        let series = generate_daily_series(&mut rng, reference, days, &institution::OVERALL_SPEC, |_| 0.0);
        prop_assert_eq!(series.len(), days);
        if let Some(last) = series.last() {
            prop_assert_eq!(last.date, reference);
        }
    }

    #[test]
    fn test_ladder_cumulative_is_running_sum(
        flows in proptest::collection::vec((0i64..5_000_000_000, 0i64..5_000_000_000), 0..16)
    ) {
        let inputs: Vec<_> = flows
            .iter()
            .enumerate()
            .map(|(i, (inflow, outflow))| CashFlowInput::new(format!("B{}", i), *inflow, *outflow))
            .collect();
        let ladder = build_cash_flow_ladder(&inputs);
        prop_assert_eq!(ladder.len(), inputs.len());
        let mut running = 0i64;
        for (bucket, input) in ladder.iter().zip(&inputs) {
            prop_assert_eq!(bucket.net, input.inflows - input.outflows);
            running += bucket.net;
            prop_assert_eq!(bucket.cumulative, running);
            prop_assert_eq!(&bucket.bucket, &input.bucket);
        }
    }
}
