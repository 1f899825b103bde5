//! One-shot assembly of the full risk data set.
//!
//! A [`RiskSnapshot`] is built once at startup and handed by reference to
//! every consumer. Nothing in it changes after construction.

use chrono::NaiveDate;
use risk_core::model::{
    ActivityLogEntry, Agent, Alert, AssetClassPosition, CashFlowBucket, CreditMetrics,
    CreditRatingBucket, FundingSource, HqlaComponent, Institution, LiquidityRatios,
    LiquidityStressScenario, MigrationDay, SectorExposure, Sensitivity, StressScenario,
    TopExposure, VarSeriesDay, VarSummary,
};
use risk_core::types::RiskScoreSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fixtures::{agents, alerts, credit, institution, liquidity, market};
use crate::generator::SyntheticRng;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 20_260_212;

/// Length of every generated series unless configured otherwise.
pub const DEFAULT_HISTORY_DAYS: usize = 30;

/// The as-of date of the demo book, 2026-02-12.
pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 12).unwrap_or_default()
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticConfig {
    /// Seed for the random source; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Last day of every generated series
    pub reference_date: NaiveDate,
    /// Number of days in every generated series
    pub history_days: usize,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seed: Some(DEFAULT_SEED),
            reference_date: default_reference_date(),
            history_days: DEFAULT_HISTORY_DAYS,
        }
    }
}

impl SyntheticConfig {
    /// Use `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw the seed from OS entropy.
    pub fn with_entropy(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Anchor series on `reference_date`.
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    /// Generate `days` of history.
    pub fn with_history_days(mut self, days: usize) -> Self {
        self.history_days = days;
        self
    }
}

/// Credit portfolio section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditBook {
    /// Exposure by rating grade
    pub by_rating: Vec<CreditRatingBucket>,
    /// Exposure by sector
    pub by_sector: Vec<SectorExposure>,
    /// Largest single names
    pub top_exposures: Vec<TopExposure>,
    /// Loss metrics
    pub metrics: CreditMetrics,
    /// Daily migration counts
    pub migration_trend: Vec<MigrationDay>,
}

/// Market risk section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketBook {
    /// Headline VaR
    pub var_summary: VarSummary,
    /// VaR versus P&L series
    pub var_time_series: Vec<VarSeriesDay>,
    /// Positions by asset class
    pub portfolio: Vec<AssetClassPosition>,
    /// Stress scenarios
    pub stress_scenarios: Vec<StressScenario>,
    /// Factor sensitivities
    pub sensitivities: Vec<Sensitivity>,
}

/// Liquidity risk section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityBook {
    /// LCR and NSFR with trend
    pub ratios: LiquidityRatios,
    /// Maturity ladder
    pub cash_flow_ladder: Vec<CashFlowBucket>,
    /// Funding mix
    pub funding_sources: Vec<FundingSource>,
    /// Liquid asset buffer
    pub hqla_composition: Vec<HqlaComponent>,
    /// Stress outcomes
    pub stress_scenarios: Vec<LiquidityStressScenario>,
}

/// Every record the dashboard reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSnapshot {
    /// Parameters the snapshot was generated with
    pub config: SyntheticConfig,
    /// Reporting institution
    pub institution: Institution,
    /// Composite scores and history
    pub risk_scores: RiskScoreSet,
    /// Alert feed
    pub alerts: Vec<Alert>,
    /// Agent roster
    pub agents: Vec<Agent>,
    /// Agent activity, newest first
    pub activity_log: Vec<ActivityLogEntry>,
    /// Credit section
    pub credit: CreditBook,
    /// Market section
    pub market: MarketBook,
    /// Liquidity section
    pub liquidity: LiquidityBook,
}

impl RiskSnapshot {
    /// Generate the full data set.
    ///
    /// With a seed the result is identical across runs. Without one the
    /// generated series differ on every call.
    pub fn generate(config: &SyntheticConfig) -> Self {
        let mut rng = SyntheticRng::from_seed_option(config.seed);
        let date = config.reference_date;
        let days = config.history_days;

        debug!(seed = ?config.seed, reference_date = %date, days, "Generating risk snapshot");

        let risk_scores = institution::risk_scores(&mut rng, date, days);
        let migration_trend = credit::migration_trend(&mut rng, date, days);
        let var_time_series = market::var_time_series(&mut rng, date, days);
        let ratios = liquidity::liquidity_ratios(&mut rng, date, days);

        let snapshot = Self {
            config: config.clone(),
            institution: institution::institution(date),
            risk_scores,
            alerts: alerts::alerts(date),
            agents: agents::agents(),
            activity_log: alerts::activity_log(),
            credit: CreditBook {
                by_rating: credit::portfolio_by_rating(),
                by_sector: credit::portfolio_by_sector(),
                top_exposures: credit::top_exposures(),
                metrics: credit::credit_metrics(),
                migration_trend,
            },
            market: MarketBook {
                var_summary: market::var_summary(),
                var_time_series,
                portfolio: market::market_portfolio(),
                stress_scenarios: market::stress_scenarios(),
                sensitivities: market::sensitivities(),
            },
            liquidity: LiquidityBook {
                ratios,
                cash_flow_ladder: liquidity::cash_flow_ladder(),
                funding_sources: liquidity::funding_sources(),
                hqla_composition: liquidity::hqla_composition(),
                stress_scenarios: liquidity::liquidity_stress_scenarios(),
            },
        };

        debug!(
            alerts = snapshot.alerts.len(),
            agents = snapshot.agents.len(),
            "Risk snapshot ready"
        );
        snapshot
    }

    /// Find an agent by display name.
    pub fn agent_by_name(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name == name)
    }

    /// Alerts not yet acknowledged, in feed order.
    pub fn unacknowledged_alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| a.is_open())
    }
}

impl Default for RiskSnapshot {
    fn default() -> Self {
        Self::generate(&SyntheticConfig::default())
    }
}
