//! Market command implementation

use std::io::Write;

use demo_inputs::RiskSnapshot;
use demo_outputs::views::market::ImpactDirection;
use demo_outputs::views::MarketView;
use risk_core::presentation::{format_currency, format_percent};

use super::{heading, write_cards};
use crate::Result;

/// Run the market command
pub fn run(snapshot: &RiskSnapshot, out: &mut impl Write) -> Result<()> {
    let view = MarketView::from_snapshot(snapshot);
    let market = &snapshot.market;

    heading(out, "Market Risk")?;
    write_cards(out, &view.cards)?;
    writeln!(
        out,
        "  {} loss days and {} backtest exceptions in {} days",
        view.loss_days,
        view.backtest_exceptions,
        market.var_time_series.len()
    )?;

    heading(out, "Portfolio by Asset Class")?;
    for position in &market.portfolio {
        writeln!(
            out,
            "  {:<16} notional {:>8}  VaR {:>8}  P&L {:>8}",
            position.asset_class,
            format_currency(position.notional as f64, true),
            format_currency(position.var99 as f64, true),
            format_currency(position.pnl_daily as f64, true)
        )?;
    }

    heading(out, "Stress Scenarios")?;
    for scenario in &market.stress_scenarios {
        writeln!(
            out,
            "  {:<30} {:>8} {:>7}  {:<8} {}",
            scenario.name,
            format_currency(scenario.pnl_impact as f64, true),
            format_percent(scenario.capital_impact, 1),
            scenario.probability,
            scenario.category
        )?;
    }
    if let Some(worst) = &view.worst_scenario {
        writeln!(out, "  Worst case: {}", worst)?;
    }

    heading(out, "Key Sensitivities")?;
    for row in &view.sensitivities {
        let arrow = match row.direction {
            ImpactDirection::Gain => "+",
            ImpactDirection::Loss => "-",
        };
        writeln!(out, "  {:<32} {:<12} {}{}", row.factor, row.unit, arrow, row.impact)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_output() {
        let mut out = Vec::new();
        run(&RiskSnapshot::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("111.3%"));
        assert!(text.contains("[BREACH]"));
        assert!(text.contains("-$142K"));
        assert!(text.contains("+$320K"));
        assert!(text.contains("Worst case: 2008 Financial Crisis Replay"));
    }
}
