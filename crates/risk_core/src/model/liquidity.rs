//! Liquidity risk records: regulatory ratios, cash-flow ladder, funding, HQLA.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ComplianceStatus, FundingStability};

/// One day of the LCR/NSFR trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcrTrendDay {
    /// Calendar day
    pub date: NaiveDate,
    /// Liquidity coverage ratio, percent
    pub lcr: f64,
    /// Net stable funding ratio, percent
    pub nsfr: f64,
    /// Regulatory floor, percent
    pub minimum: f64,
}

/// Regulatory liquidity ratios and their trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityRatios {
    /// Current LCR, percent
    pub lcr: u32,
    /// LCR floor, percent
    pub lcr_min: u32,
    /// Current NSFR, percent
    pub nsfr: u32,
    /// NSFR floor, percent
    pub nsfr_min: u32,
    /// Daily trend, oldest first
    pub lcr_trend: Vec<LcrTrendDay>,
}

impl LiquidityRatios {
    /// LCR against its floor.
    pub fn lcr_status(&self) -> ComplianceStatus {
        ComplianceStatus::assess(f64::from(self.lcr), f64::from(self.lcr_min))
    }

    /// NSFR against its floor.
    pub fn nsfr_status(&self) -> ComplianceStatus {
        ComplianceStatus::assess(f64::from(self.nsfr), f64::from(self.nsfr_min))
    }
}

/// Raw flows for one maturity bucket, before net and cumulative are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowInput {
    /// Maturity label
    pub bucket: String,
    /// Contractual inflows, USD
    pub inflows: i64,
    /// Contractual outflows, USD
    pub outflows: i64,
}

impl CashFlowInput {
    /// Create a bucket input.
    pub fn new(bucket: impl Into<String>, inflows: i64, outflows: i64) -> Self {
        Self {
            bucket: bucket.into(),
            inflows,
            outflows,
        }
    }
}

/// A maturity bucket of the cash-flow ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowBucket {
    /// Maturity label
    pub bucket: String,
    /// Contractual inflows, USD
    pub inflows: i64,
    /// Contractual outflows, USD
    pub outflows: i64,
    /// `inflows - outflows`
    pub net: i64,
    /// Running sum of `net` up to and including this bucket
    pub cumulative: i64,
}

impl CashFlowBucket {
    /// Whether the cumulative position is a funding gap.
    pub fn is_gap(&self) -> bool {
        self.cumulative < 0
    }
}

/// A liability funding source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingSource {
    /// Source name
    pub source: String,
    /// Balance, USD
    pub amount: u64,
    /// Share of total funding, percent
    pub percentage: f64,
    /// Behavioural stability
    pub stability: FundingStability,
    /// Cost of funds, percent
    pub cost: f64,
}

/// A slice of the high-quality liquid asset buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HqlaComponent {
    /// Tier and asset type, e.g. "Level 2A: Agency MBS"
    #[serde(rename = "type")]
    pub kind: String,
    /// Market value, USD
    pub amount: u64,
    /// Share of the buffer, percent
    pub percentage: f64,
}

/// Liquidity stress test outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityStressScenario {
    /// Scenario name
    pub scenario: String,
    /// Stressed LCR, percent
    pub lcr_impact: f64,
    /// Days until the buffer is exhausted
    pub survival_days: u32,
    /// Buffer consumed, percent
    pub hqla_drawdown: f64,
}

impl LiquidityStressScenario {
    /// Regulatory LCR floor used for the breach test.
    pub const LCR_FLOOR: f64 = 100.0;

    /// Whether the stressed LCR falls below the floor.
    pub fn is_breach(&self) -> bool {
        self.lcr_impact < Self::LCR_FLOOR
    }
}
