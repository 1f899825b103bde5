//! Credit command implementation

use std::io::Write;

use demo_inputs::RiskSnapshot;
use demo_outputs::views::CreditView;
use risk_core::presentation::{format_currency, format_percent};

use super::{heading, write_cards};
use crate::Result;

/// Run the credit command
pub fn run(snapshot: &RiskSnapshot, out: &mut impl Write) -> Result<()> {
    let view = CreditView::from_snapshot(snapshot);
    let credit = &snapshot.credit;

    heading(out, "Credit Risk")?;
    write_cards(out, &view.cards)?;

    heading(out, "Exposure by Rating")?;
    for bucket in &credit.by_rating {
        writeln!(
            out,
            "  {:<5} {:>8} {:>7}  PD {:>6}  {:>5} obligors",
            bucket.rating,
            format_currency(bucket.exposure as f64, true),
            format_percent(bucket.percentage, 1),
            format_percent(bucket.pd, 2),
            bucket.count
        )?;
    }
    writeln!(
        out,
        "  Total {:>8}",
        format_currency(view.total_rated_exposure as f64, true)
    )?;

    heading(out, "Exposure by Sector")?;
    for sector in &credit.by_sector {
        writeln!(
            out,
            "  {:<22} {:>8} {:>7}  avg {:<5} NPL {}",
            sector.sector,
            format_currency(sector.exposure as f64, true),
            format_percent(sector.percentage, 1),
            sector.avg_rating,
            format_percent(sector.npl, 1)
        )?;
    }

    heading(out, "Watchlist")?;
    for exposure in &view.watchlisted {
        writeln!(
            out,
            "  {:<28} {:<14} {:>8}  {:<5} PD {}",
            exposure.name,
            exposure.sector,
            format_currency(exposure.exposure as f64, true),
            exposure.rating,
            format_percent(exposure.pd, 1)
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Rating migration over {} days: net {:+}, {} defaults",
        credit.migration_trend.len(),
        view.net_migration,
        view.defaults
    )?;
    Ok(())
}
