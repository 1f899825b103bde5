//! Closed label sets used across the data model.
//!
//! Each enum round-trips through its display label (`"critical"`, `"CCC+"`,
//! `"AI-Generated"`) for both `FromStr` and serde, so the JSON contract keeps
//! the original string values while invalid labels are rejected up front.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;
use crate::presentation::{severity_color, SeverityStyle};

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label used by the data contract.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(ParseError::new($kind, s)),
                }
            }
        }
    };
}

closed_enum! {
    /// Alert severity, most severe first.
    Severity, "severity" {
        /// Immediate action required
        Critical => "critical",
        /// Limit or threshold breached
        High => "high",
        /// Deteriorating trend
        Medium => "medium",
        /// Informational drift
        Low => "low",
    }
}

closed_enum! {
    /// Severity tag on agent activity entries. Adds `info` for routine work.
    LogSeverity, "log severity" {
        /// Immediate action required
        Critical => "critical",
        /// Limit or threshold breached
        High => "high",
        /// Deteriorating trend
        Medium => "medium",
        /// Informational drift
        Low => "low",
        /// Routine activity
        Info => "info",
    }
}

closed_enum! {
    /// Agent run state.
    AgentStatus, "agent status" {
        /// Currently processing
        Active => "active",
        /// Waiting for the next scheduled run
        Idle => "idle",
    }
}

closed_enum! {
    /// Rating grade of a portfolio bucket, best first.
    CreditRating, "credit rating" {
        /// Prime
        AAA => "AAA",
        /// High grade
        AA => "AA",
        /// Upper medium grade
        A => "A",
        /// Lower medium grade
        BBB => "BBB",
        /// Non-investment grade
        BB => "BB",
        /// Highly speculative
        B => "B",
        /// Substantial risk, upper notch
        CccPlus => "CCC+",
        /// Substantial risk, lower notch
        CccMinus => "CCC-",
    }
}

closed_enum! {
    /// Qualitative likelihood of a market stress scenario.
    ScenarioProbability, "scenario probability" {
        /// Tail event
        Tail => "Tail",
        /// Elevated likelihood
        Elevated => "Elevated",
        /// Moderate likelihood
        Moderate => "Moderate",
        /// Low likelihood
        Low => "Low",
    }
}

closed_enum! {
    /// Origin of a market stress scenario.
    ScenarioCategory, "scenario category" {
        /// Replay of a past crisis
        Historical => "Historical",
        /// Expert-designed shock
        Hypothetical => "Hypothetical",
        /// Produced by the scenario generation agent
        AiGenerated => "AI-Generated",
    }
}

closed_enum! {
    /// Behavioural stability of a funding source.
    FundingStability, "funding stability" {
        /// Sticky funding
        High => "High",
        /// Partially rate sensitive
        Medium => "Medium",
        /// Flighty funding
        Low => "Low",
    }
}

closed_enum! {
    /// Five-tier band of a 0-100 risk score.
    RiskLevel, "risk level" {
        /// Score up to 20
        Low => "Low",
        /// Score up to 40
        Moderate => "Moderate",
        /// Score up to 60
        Elevated => "Elevated",
        /// Score up to 80
        High => "High",
        /// Score above 80
        Critical => "Critical",
    }
}

closed_enum! {
    /// Regulatory ratio status against its minimum.
    ComplianceStatus, "compliance status" {
        /// Ratio at or above the minimum
        Compliant => "Compliant",
        /// Ratio below the minimum
        Breach => "Breach",
    }
}

impl Severity {
    /// Style tokens for this severity.
    pub fn style(&self) -> SeverityStyle {
        severity_color(self.as_str())
    }
}

impl LogSeverity {
    /// Style tokens for this severity. `Info` uses the default bucket.
    pub fn style(&self) -> SeverityStyle {
        severity_color(self.as_str())
    }
}

impl From<Severity> for LogSeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => LogSeverity::Critical,
            Severity::High => LogSeverity::High,
            Severity::Medium => LogSeverity::Medium,
            Severity::Low => LogSeverity::Low,
        }
    }
}

impl ComplianceStatus {
    /// `Compliant` when `value >= minimum`.
    pub fn assess(value: f64, minimum: f64) -> Self {
        if value >= minimum {
            ComplianceStatus::Compliant
        } else {
            ComplianceStatus::Breach
        }
    }

    /// Whether the ratio is below its minimum.
    pub fn is_breach(&self) -> bool {
        matches!(self, ComplianceStatus::Breach)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_round_trip_labels() {
        for severity in Severity::ALL {
            let parsed: Severity = severity.as_str().parse().unwrap();
            assert_eq!(parsed, *severity);
        }
        assert!("Critical".parse::<Severity>().is_err());
    }

    #[test]
    fn test_rating_order_best_to_worst() {
        let mut ratings = vec![CreditRating::B, CreditRating::AAA, CreditRating::CccMinus, CreditRating::BBB];
        ratings.sort();
        assert_eq!(
            ratings,
            vec![CreditRating::AAA, CreditRating::BBB, CreditRating::B, CreditRating::CccMinus]
        );
        assert_eq!("CCC+".parse::<CreditRating>().unwrap(), CreditRating::CccPlus);
    }

    #[test]
    fn test_ai_generated_label() {
        assert_eq!(ScenarioCategory::AiGenerated.to_string(), "AI-Generated");
        let json = serde_json::to_string(&ScenarioCategory::AiGenerated).unwrap();
        assert_eq!(json, "\"AI-Generated\"");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = "sleeping".parse::<AgentStatus>().unwrap_err();
        assert_eq!(err.kind, "agent status");
        let bad: Result<AgentStatus, _> = serde_json::from_str("\"sleeping\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_info_uses_default_style() {
        assert_eq!(LogSeverity::Info.style(), severity_color("anything"));
        assert_eq!(LogSeverity::from(Severity::High).style(), Severity::High.style());
    }

    #[test]
    fn test_compliance_assess() {
        assert_eq!(ComplianceStatus::assess(118.0, 100.0), ComplianceStatus::Compliant);
        assert_eq!(ComplianceStatus::assess(100.0, 100.0), ComplianceStatus::Compliant);
        assert!(ComplianceStatus::assess(99.9, 100.0).is_breach());
    }
}
