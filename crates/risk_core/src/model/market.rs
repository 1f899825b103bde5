//! Market risk records: VaR, positions, stress tests, sensitivities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{RiskCoreError, ScenarioCategory, ScenarioProbability};

/// Largest gap between a stored and a derived limit utilization, in
/// percentage points, accepted when reading a summary back.
pub const UTILIZATION_TOLERANCE: f64 = 1e-6;

/// Headline VaR figures, USD.
///
/// `limit_utilization` is derived from `var_1d_99 / limit_1d_99` when the
/// summary is built and is never stored independently. Deserializing
/// recomputes it; a serialized value that disagrees is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "VarSummaryRecord")]
pub struct VarSummary {
    /// 1-day 99% VaR
    pub var_1d_99: u64,
    /// 1-day 95% VaR
    pub var_1d_95: u64,
    /// 10-day 99% VaR
    pub var_10d_99: u64,
    /// 1-day 99% VaR limit
    pub limit_1d_99: u64,
    limit_utilization: f64,
    /// Limit breaches in the period
    pub breach_count: u32,
    /// 99% expected shortfall
    pub expected_shortfall_99: u64,
}

impl VarSummary {
    /// Build a summary, deriving limit utilization.
    pub fn new(
        var_1d_99: u64,
        var_1d_95: u64,
        var_10d_99: u64,
        limit_1d_99: u64,
        breach_count: u32,
        expected_shortfall_99: u64,
    ) -> Self {
        let limit_utilization = if limit_1d_99 == 0 {
            0.0
        } else {
            var_1d_99 as f64 / limit_1d_99 as f64 * 100.0
        };
        Self {
            var_1d_99,
            var_1d_95,
            var_10d_99,
            limit_1d_99,
            limit_utilization,
            breach_count,
            expected_shortfall_99,
        }
    }

    /// 1-day 99% VaR as a percentage of its limit.
    pub fn limit_utilization(&self) -> f64 {
        self.limit_utilization
    }

    /// Whether VaR is over its limit.
    pub fn is_limit_breached(&self) -> bool {
        self.limit_utilization > 100.0
    }
}

/// Wire form of [`VarSummary`]; utilization is optional on input.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VarSummaryRecord {
    var_1d_99: u64,
    var_1d_95: u64,
    var_10d_99: u64,
    limit_1d_99: u64,
    #[serde(default)]
    limit_utilization: Option<f64>,
    breach_count: u32,
    expected_shortfall_99: u64,
}

impl TryFrom<VarSummaryRecord> for VarSummary {
    type Error = RiskCoreError;

    fn try_from(record: VarSummaryRecord) -> Result<Self, Self::Error> {
        let summary = VarSummary::new(
            record.var_1d_99,
            record.var_1d_95,
            record.var_10d_99,
            record.limit_1d_99,
            record.breach_count,
            record.expected_shortfall_99,
        );
        match record.limit_utilization {
            None => Ok(summary),
            Some(stored) if (stored - summary.limit_utilization).abs() <= UTILIZATION_TOLERANCE => {
                Ok(summary)
            }
            Some(stored) => Err(RiskCoreError::UtilizationMismatch {
                stored,
                derived: summary.limit_utilization,
            }),
        }
    }
}

/// One day of the VaR backtest series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarSeriesDay {
    /// Calendar day
    pub date: NaiveDate,
    /// 99% VaR
    pub var99: f64,
    /// 95% VaR
    pub var95: f64,
    /// 99% limit, constant across the series
    pub limit: f64,
    /// Realised P&L, signed
    pub pnl: f64,
}

impl VarSeriesDay {
    /// Whether the day's loss exceeded 99% VaR.
    pub fn is_backtest_exception(&self) -> bool {
        -self.pnl > self.var99
    }
}

/// Trading book position by asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassPosition {
    /// Asset class name
    pub asset_class: String,
    /// Gross notional, USD
    pub notional: u64,
    /// 99% VaR contribution, USD
    pub var99: u64,
    /// Delta, signed USD
    pub delta: i64,
    /// Daily P&L, signed USD
    pub pnl_daily: i64,
}

/// Market stress scenario result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressScenario {
    /// Scenario name
    pub name: String,
    /// Shock description
    pub description: String,
    /// P&L impact, negative USD
    pub pnl_impact: i64,
    /// Capital ratio impact, negative percentage points
    pub capital_impact: f64,
    /// Qualitative likelihood
    pub probability: ScenarioProbability,
    /// Scenario origin
    pub category: ScenarioCategory,
}

/// First-order sensitivity to a market factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensitivity {
    /// Factor and bump size
    pub factor: String,
    /// P&L impact of the bump, signed USD
    pub impact: i64,
    /// Measure label, e.g. "DV01"
    pub unit: String,
}
