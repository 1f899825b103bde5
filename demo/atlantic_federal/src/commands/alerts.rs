//! Alerts command implementation
//!
//! Acknowledgements apply to this run's alert board only; the next run
//! starts again from the generated feed.

use std::io::Write;

use demo_inputs::RiskSnapshot;
use demo_outputs::alert_board::AlertBoard;
use risk_core::model::AlertId;
use tracing::info;

use super::heading;
use crate::Result;

/// Run the alerts command
pub fn run(
    snapshot: &RiskSnapshot,
    unacknowledged_only: bool,
    acknowledge: &[u32],
    out: &mut impl Write,
) -> Result<()> {
    let mut board = AlertBoard::from_snapshot(snapshot);

    for id in acknowledge {
        board.acknowledge(AlertId(*id))?;
    }
    if !acknowledge.is_empty() {
        info!(count = acknowledge.len(), "Acknowledged alerts");
    }

    let stats = board.statistics();
    heading(
        out,
        &format!("Alerts ({} of {} unresolved)", stats.unacknowledged, stats.total),
    )?;

    let alerts: Vec<_> = if unacknowledged_only {
        board.unacknowledged().collect()
    } else {
        board.alerts().iter().collect()
    };

    for alert in alerts {
        let state = if alert.acknowledged { "ack" } else { "open" };
        writeln!(
            out,
            "  #{:<3} {:<4} {:<9} {:<10} {}",
            alert.id, state, alert.severity, alert.category, alert.title
        )?;
        writeln!(
            out,
            "       {} | {}",
            alert.agent,
            alert.timestamp.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(out, "       {}", alert.message)?;
    }

    if !stats.open_by_severity.is_empty() {
        let breakdown: Vec<String> = stats
            .open_by_severity
            .iter()
            .map(|(severity, count)| format!("{} {}", count, severity))
            .collect();
        writeln!(out)?;
        writeln!(out, "Open: {}", breakdown.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use demo_outputs::DashboardError;

    fn render(unacknowledged_only: bool, ack: &[u32]) -> Result<String> {
        let mut out = Vec::new();
        run(&RiskSnapshot::default(), unacknowledged_only, ack, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_all() {
        let text = render(false, &[]).unwrap();
        assert!(text.contains("Alerts (3 of 7 unresolved)"));
        assert_eq!(text.matches("  #").count(), 7);
    }

    #[test]
    fn test_unacknowledged_only() {
        let text = render(true, &[]).unwrap();
        assert_eq!(text.matches("  #").count(), 3);
        assert!(!text.contains(" ack "));
    }

    #[test]
    fn test_acknowledge_ids() {
        let text = render(true, &[1, 2, 2]).unwrap();
        assert!(text.contains("Alerts (1 of 7 unresolved)"));
        assert_eq!(text.matches("  #").count(), 1);
    }

    #[test]
    fn test_acknowledge_unknown_id() {
        let err = render(false, &[40]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Dashboard(DashboardError::UnknownAlert(AlertId(40)))
        ));
    }
}
