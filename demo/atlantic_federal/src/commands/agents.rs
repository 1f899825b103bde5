//! Agents command implementation

use std::io::Write;

use demo_inputs::RiskSnapshot;
use demo_outputs::views::AgentsView;
use risk_core::presentation::format_percent;

use super::heading;
use crate::Result;

/// Run the agents command
pub fn run(snapshot: &RiskSnapshot, out: &mut impl Write) -> Result<()> {
    let view = AgentsView::from_snapshot(snapshot);

    heading(
        out,
        &format!("Monitoring Agents ({} active, {} idle)", view.active, view.idle),
    )?;
    for row in &view.rows {
        writeln!(
            out,
            "  {:<20} {:<6} findings {:>2}  accuracy {:>6}  TPR {:>6}  response {}",
            row.name,
            row.status,
            row.findings_today,
            row.accuracy,
            row.true_positive_rate,
            row.avg_response_time
        )?;
        writeln!(out, "      {}", row.current_task)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Mean accuracy {} | {} findings today",
        format_percent(view.mean_accuracy, 1),
        view.total_findings
    )?;
    Ok(())
}
