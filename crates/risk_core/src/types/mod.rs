//! Shared value types: closed enums, bounded scores, errors.

mod enums;
mod error;
mod score;

pub use enums::{
    AgentStatus, ComplianceStatus, CreditRating, FundingStability, LogSeverity, RiskLevel,
    ScenarioCategory, ScenarioProbability, Severity,
};
pub use error::{ParseError, RiskCoreError};
pub use score::{DailyPoint, RiskScore, RiskScoreSet, ScoreHistoryDay};
