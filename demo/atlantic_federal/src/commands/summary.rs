//! Summary command implementation
//!
//! Prints the overview page: gauges, key metrics, alerts and agent activity.

use std::io::Write;

use demo_inputs::RiskSnapshot;
use demo_outputs::views::DashboardView;

use super::{heading, write_cards};
use crate::Result;

/// Run the summary command
pub fn run(snapshot: &RiskSnapshot, out: &mut impl Write) -> Result<()> {
    let view = DashboardView::from_snapshot(snapshot);
    let seed = snapshot
        .config
        .seed
        .map_or_else(|| "entropy".to_string(), |s| s.to_string());

    writeln!(
        out,
        "{} | as of {} | seed {}",
        view.institution, snapshot.config.reference_date, seed
    )?;

    heading(out, "Risk Scores")?;
    for gauge in &view.gauges {
        writeln!(out, "  {:<16} {:>3}  {}", gauge.label, gauge.score, gauge.level)?;
    }

    heading(out, "Key Metrics")?;
    write_cards(out, &view.key_metrics)?;

    heading(out, &format!("Alerts ({} unresolved)", view.unresolved_alerts))?;
    for alert in &view.recent_alerts {
        writeln!(
            out,
            "  #{:<3} {:<9} {}  [{}, {}]",
            alert.id,
            alert.severity,
            alert.title,
            alert.agent,
            alert.timestamp.format("%Y-%m-%d %H:%M")
        )?;
    }

    heading(out, &format!("Agent Activity ({} agents active)", view.active_agents))?;
    for entry in &view.recent_activity {
        writeln!(
            out,
            "  {:<9} {:<20} {}: {}",
            entry.timestamp, entry.agent, entry.action, entry.detail
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_output() {
        let mut out = Vec::new();
        run(&RiskSnapshot::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Atlantic Federal Bank | as of 2026-02-12 | seed 20260212"));
        assert!(text.contains("Alerts (3 unresolved)"));
        assert!(text.contains("Overall Risk"));
        assert!(text.contains("$48.7B"));
        assert!(text.contains("5 agents active"));
    }
}
