//! FinRisk CLI
//!
//! Prints the Atlantic Federal Bank risk dashboard from a synthetic snapshot.
//!
//! # Commands
//!
//! - `finrisk summary` - Overview gauges, key metrics, alerts, activity
//! - `finrisk credit | market | liquidity | agents` - Per-page tables
//! - `finrisk alerts [--unacknowledged] [--ack <id>...]` - Alert feed
//! - `finrisk export [--output <path>] [--compact]` - JSON snapshot
//! - `finrisk check` - Validate and print the resolved configuration

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use atlantic_federal::commands;
use atlantic_federal::prelude::*;
use clap::{Parser, Subcommand};
use demo_inputs::RiskSnapshot;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Atlantic Federal Bank FinRisk dashboard
#[derive(Parser)]
#[command(name = "finrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: finrisk.toml if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Generator seed, overriding config and environment
    #[arg(long, global = true, conflicts_with = "fresh")]
    seed: Option<u64>,

    /// Seed the generator from OS entropy
    #[arg(long, global = true)]
    fresh: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overview gauges, key metrics, recent alerts and agent activity
    Summary,

    /// Credit portfolio, watchlist and rating migration
    Credit,

    /// VaR, stress scenarios and sensitivities
    Market,

    /// Regulatory ratios, cash-flow ladder, funding and HQLA
    Liquidity,

    /// Monitoring agent roster
    Agents,

    /// Alert feed
    Alerts {
        /// Only show alerts not yet acknowledged
        #[arg(short, long)]
        unacknowledged: bool,

        /// Acknowledge alerts by id before listing
        #[arg(long = "ack", value_name = "ID")]
        ack: Vec<u32>,
    },

    /// Write the snapshot as JSON
    Export {
        /// Output file, or `-` for stdout [default: <export_dir>/risk_snapshot_<date>.json]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Validate configuration and print the resolved values
    Check,
}

fn resolve_config(cli: &Cli) -> Result<FinRiskConfig> {
    let overrides = CliOverrides {
        seed: cli.seed,
        fresh: cli.fresh,
        verbose: cli.verbose,
    };
    FinRiskConfig::load_with_env_and_validate(cli.config.as_deref(), &overrides)
        .context("Failed to resolve configuration")
}

fn init_tracing(log_level: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn generate_snapshot(config: &FinRiskConfig) -> RiskSnapshot {
    let snapshot = RiskSnapshot::generate(&config.synthetic_config());
    info!(
        institution = %snapshot.institution.name,
        reference_date = %snapshot.config.reference_date,
        seed = ?snapshot.config.seed,
        "Snapshot generated"
    );
    snapshot
}

/// Every command but `check` reads one freshly generated snapshot.
fn run_command(command: Commands, config: &FinRiskConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Check => commands::check::run(config, out)?,
        Commands::Summary => commands::summary::run(&generate_snapshot(config), out)?,
        Commands::Credit => commands::credit::run(&generate_snapshot(config), out)?,
        Commands::Market => commands::market::run(&generate_snapshot(config), out)?,
        Commands::Liquidity => commands::liquidity::run(&generate_snapshot(config), out)?,
        Commands::Agents => commands::agents::run(&generate_snapshot(config), out)?,
        Commands::Alerts {
            unacknowledged,
            ack,
        } => commands::alerts::run(&generate_snapshot(config), unacknowledged, &ack, out)?,
        Commands::Export { output, compact } => {
            let target = ExportTarget::resolve(output.as_deref(), &config.export_dir);
            commands::export::run(&generate_snapshot(config), target, compact, out)?
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    init_tracing(&config.log_level);

    debug!(?config, "Configuration resolved");

    let mut out = std::io::stdout().lock();
    run_command(cli.command, &config, &mut out)
}
