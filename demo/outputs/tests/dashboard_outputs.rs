//! Integration tests across the alert board, view models and export.

use std::sync::{Arc, RwLock};
use std::thread;

use demo_inputs::prelude::*;
use demo_outputs::prelude::*;
use risk_core::model::AlertId;
use risk_core::types::{ComplianceStatus, Severity};
use tempfile::TempDir;

#[test]
fn test_acknowledging_updates_dashboard_counts() {
    let snapshot = RiskSnapshot::default();
    let mut board = AlertBoard::from_snapshot(&snapshot);

    assert_eq!(DashboardView::with_alerts(&snapshot, board.alerts()).unresolved_alerts, 3);

    for id in [1, 2, 3] {
        board.acknowledge(AlertId(id)).unwrap();
    }
    let view = DashboardView::with_alerts(&snapshot, board.alerts());
    assert_eq!(view.unresolved_alerts, 0);

    // The snapshot itself is untouched.
    assert_eq!(snapshot.unacknowledged_alerts().count(), 3);
}

#[test]
fn test_raised_alert_leads_recent_feed() {
    let snapshot = RiskSnapshot::default();
    let mut board = AlertBoard::from_snapshot(&snapshot);
    let id = board.raise(NewAlert::new(
        Severity::Critical,
        "Market",
        "Limit Breach: FX Desk",
        "FX delta exceeded desk limit",
        "Market Watcher",
    ))
    .unwrap();
    assert_eq!(id, AlertId(8));

    let view = DashboardView::with_alerts(&snapshot, board.alerts());
    assert_eq!(view.recent_alerts[0].id, id);
    assert_eq!(view.unresolved_alerts, 4);
    assert_eq!(board.statistics().total, 8);
}

#[test]
fn test_shared_board_single_writer() {
    let board = Arc::new(RwLock::new(AlertBoard::from_snapshot(&RiskSnapshot::default())));

    let handles: Vec<_> = (1..=3)
        .map(|id| {
            let board = Arc::clone(&board);
            thread::spawn(move || {
                board.write().unwrap().acknowledge(AlertId(id)).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(board.read().unwrap().unacknowledged().count(), 0);
}

#[test]
fn test_headline_strings() {
    let snapshot = RiskSnapshot::default();

    let market = MarketView::from_snapshot(&snapshot);
    assert_eq!(market.cards[1].value, "111.3%");

    let credit = CreditView::from_snapshot(&snapshot);
    assert_eq!(credit.cards[3].subtext.as_deref(), Some("15.4% of portfolio"));

    let liquidity = LiquidityView::from_snapshot(&snapshot);
    assert_eq!(liquidity.gauges[0].status, ComplianceStatus::Compliant);
    assert_eq!(liquidity.gauges[0].value, 118.0);
    assert_eq!(liquidity.gauges[0].minimum, 100.0);
}

#[test]
fn test_views_are_seed_independent_where_fixtures_are_static() {
    let a = RiskSnapshot::generate(&SyntheticConfig::default().with_seed(3));
    let b = RiskSnapshot::generate(&SyntheticConfig::default().with_seed(4));
    assert_eq!(CreditView::from_snapshot(&a).cards, CreditView::from_snapshot(&b).cards);
    assert_eq!(LiquidityView::from_snapshot(&a), LiquidityView::from_snapshot(&b));
    assert_eq!(AgentsView::from_snapshot(&a), AgentsView::from_snapshot(&b));
}

#[test]
fn test_export_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let snapshot = RiskSnapshot::default();

    let written = SnapshotWriter::pretty().write_to_dir(dir.path(), &snapshot).unwrap();
    assert!(written.path.ends_with("risk_snapshot_20260212.json"));

    let text = std::fs::read_to_string(&written.path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["alerts"][0]["severity"], "critical");
    assert_eq!(json["market"]["varSummary"]["limit1d99"], 12_400_000u64);
    assert_eq!(json["liquidity"]["cashFlowLadder"][4]["cumulative"], -440_000_000i64);

    let back: RiskSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back.alerts, snapshot.alerts);
    assert_eq!(back.liquidity.cash_flow_ladder, snapshot.liquidity.cash_flow_ladder);
    assert_eq!(back.config, snapshot.config);
}
