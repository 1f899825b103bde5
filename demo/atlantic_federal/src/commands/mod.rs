//! CLI command implementations
//!
//! Each submodule renders one view of the snapshot as plain text. Commands
//! take the writer to print to, so tests can capture their output.

use std::io::Write;

use demo_outputs::views::{CardTone, MetricCard};

pub mod agents;
pub mod alerts;
pub mod check;
pub mod credit;
pub mod export;
pub mod liquidity;
pub mod market;
pub mod summary;

fn heading(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.len()))
}

fn write_cards(out: &mut impl Write, cards: &[MetricCard]) -> std::io::Result<()> {
    for card in cards {
        let flag = match card.tone {
            CardTone::Normal => "",
            CardTone::Warning => "  [warning]",
            CardTone::Breach => "  [BREACH]",
        };
        match &card.subtext {
            Some(subtext) => writeln!(
                out,
                "  {:<22} {:>10}  {}{}",
                card.label, card.value, subtext, flag
            )?,
            None => writeln!(out, "  {:<22} {:>10}{}", card.label, card.value, flag)?,
        }
    }
    Ok(())
}
