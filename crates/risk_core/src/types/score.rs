//! Composite risk scores on the 0-100 scale (lower is better).

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::RiskCoreError;
use super::RiskLevel;
use crate::presentation::{risk_color, RiskColor};

/// A headline risk score in `0..=100`.
///
/// # Examples
/// ```
/// use risk_core::types::{RiskLevel, RiskScore};
///
/// let score = RiskScore::new(34).unwrap();
/// assert_eq!(score.level(), RiskLevel::Moderate);
/// assert!(RiskScore::new(101).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RiskScore(u8);

impl RiskScore {
    /// Upper end of the scale.
    pub const MAX: u32 = 100;

    /// Create a score, rejecting anything above 100.
    pub fn new(value: u32) -> Result<Self, RiskCoreError> {
        if value > Self::MAX {
            return Err(RiskCoreError::ScoreOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Create a score from a literal. Out-of-range values fail const evaluation.
    pub const fn from_literal(value: u8) -> Self {
        assert!(value <= 100, "risk score must be within 0..=100");
        Self(value)
    }

    /// Raw score value.
    pub fn value(&self) -> u32 {
        u32::from(self.0)
    }

    /// Colour band for this score.
    pub fn color(&self) -> RiskColor {
        risk_color(f64::from(self.0))
    }

    /// Risk tier for this score.
    pub fn level(&self) -> RiskLevel {
        self.color().label
    }
}

impl TryFrom<u32> for RiskScore {
    type Error = RiskCoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RiskScore> for u32 {
    fn from(score: RiskScore) -> Self {
        score.value()
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One day of the composite score history. Values are unrounded draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistoryDay {
    /// Calendar day
    pub date: NaiveDate,
    /// Overall composite
    pub overall: f64,
    /// Credit component
    pub credit: f64,
    /// Market component
    pub market: f64,
    /// Liquidity component
    pub liquidity: f64,
}

/// Headline scores plus their daily history, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScoreSet {
    /// Overall composite score
    pub overall: RiskScore,
    /// Credit risk score
    pub credit: RiskScore,
    /// Market risk score
    pub market: RiskScore,
    /// Liquidity risk score
    pub liquidity: RiskScore,
    /// Operational risk score
    pub operational: RiskScore,
    /// Daily history, contiguous and ordered oldest to newest
    pub history: Vec<ScoreHistoryDay>,
}

/// A single dated value in a generated series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Value for the day
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert_eq!(RiskScore::new(0).unwrap().value(), 0);
        assert_eq!(RiskScore::new(100).unwrap().value(), 100);
        assert_eq!(RiskScore::new(101), Err(RiskCoreError::ScoreOutOfRange(101)));
    }

    #[test]
    fn test_score_serde_rejects_out_of_range() {
        let score: RiskScore = serde_json::from_str("38").unwrap();
        assert_eq!(score.value(), 38);
        assert_eq!(serde_json::to_string(&score).unwrap(), "38");
        assert!(serde_json::from_str::<RiskScore>("250").is_err());
    }

    #[test]
    fn test_score_level() {
        assert_eq!(RiskScore::new(22).unwrap().level(), RiskLevel::Moderate);
        assert_eq!(RiskScore::new(20).unwrap().level(), RiskLevel::Low);
        assert_eq!(RiskScore::new(81).unwrap().level(), RiskLevel::Critical);
    }
}
