//! Liquidity command implementation

use std::io::Write;

use demo_inputs::RiskSnapshot;
use demo_outputs::views::LiquidityView;
use risk_core::presentation::{format_currency, format_percent};

use super::heading;
use crate::Result;

/// Run the liquidity command
pub fn run(snapshot: &RiskSnapshot, out: &mut impl Write) -> Result<()> {
    let view = LiquidityView::from_snapshot(snapshot);
    let liquidity = &snapshot.liquidity;

    heading(out, "Regulatory Ratios")?;
    for gauge in &view.gauges {
        writeln!(
            out,
            "  {:<32} {:>4}%  min {:>3}%  {}",
            gauge.name, gauge.value, gauge.minimum, gauge.status
        )?;
    }

    heading(out, "Cash Flow Ladder")?;
    for bucket in &liquidity.cash_flow_ladder {
        let gap = if bucket.is_gap() { "  gap" } else { "" };
        writeln!(
            out,
            "  {:<13} in {:>7}  out {:>7}  net {:>8}  cumulative {:>8}{}",
            bucket.bucket,
            format_currency(bucket.inflows as f64, true),
            format_currency(bucket.outflows as f64, true),
            format_currency(bucket.net as f64, true),
            format_currency(bucket.cumulative as f64, true),
            gap
        )?;
    }
    if let Some(gap) = &view.deepest_gap {
        writeln!(
            out,
            "  Deepest gap: {} at {}",
            format_currency(gap.cumulative as f64, true),
            gap.bucket
        )?;
    }

    heading(out, "Funding Sources")?;
    for source in &liquidity.funding_sources {
        writeln!(
            out,
            "  {:<24} {:>8} {:>7}  {:<6} cost {}",
            source.source,
            format_currency(source.amount as f64, true),
            format_percent(source.percentage, 1),
            source.stability,
            format_percent(source.cost, 1)
        )?;
    }
    writeln!(
        out,
        "  Stable funding share: {}",
        format_percent(view.stable_funding_share, 1)
    )?;

    heading(out, &format!("HQLA ({})", view.total_hqla_label))?;
    for component in &liquidity.hqla_composition {
        writeln!(
            out,
            "  {:<40} {:>7} {:>7}",
            component.kind,
            format_currency(component.amount as f64, true),
            format_percent(component.percentage, 1)
        )?;
    }

    heading(out, "Stress Scenarios")?;
    for outcome in &view.stress {
        let flag = if outcome.breach { "  [BREACH]" } else { "" };
        writeln!(
            out,
            "  {:<16} LCR {:>7}  survival {:>3} days  HQLA drawdown {:>5}{}",
            outcome.scenario,
            format_percent(outcome.lcr, 0),
            outcome.survival_days,
            format_percent(outcome.hqla_drawdown, 0),
            flag
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liquidity_output() {
        let mut out = Vec::new();
        run(&RiskSnapshot::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Compliant"));
        assert!(text.contains("Deepest gap: $-440.0M at 31-60 Days"));
        assert!(text.contains("HQLA ($7.6B)"));
        assert_eq!(text.matches("[BREACH]").count(), 2);
    }
}
