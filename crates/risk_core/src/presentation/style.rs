//! Severity and risk-score style tokens.
//!
//! Tokens are utility class names consumed by the rendering layer. They are
//! opaque identifiers here; only the bucket selection is behaviour.

use serde::Serialize;

use crate::types::RiskLevel;

/// Style tokens for a severity badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityStyle {
    /// Background token
    pub bg: &'static str,
    /// Text token
    pub text: &'static str,
    /// Border token
    pub border: &'static str,
    /// Indicator dot token
    pub dot: &'static str,
}

const CRITICAL: SeverityStyle = SeverityStyle {
    bg: "bg-red-500/15",
    text: "text-red-400",
    border: "border-red-500/30",
    dot: "bg-red-500",
};

const HIGH: SeverityStyle = SeverityStyle {
    bg: "bg-orange-500/15",
    text: "text-orange-400",
    border: "border-orange-500/30",
    dot: "bg-orange-500",
};

const MEDIUM: SeverityStyle = SeverityStyle {
    bg: "bg-amber-500/15",
    text: "text-amber-400",
    border: "border-amber-500/30",
    dot: "bg-amber-500",
};

const LOW: SeverityStyle = SeverityStyle {
    bg: "bg-blue-500/15",
    text: "text-blue-400",
    border: "border-blue-500/30",
    dot: "bg-blue-400",
};

/// Fallback bucket for any unrecognised label.
pub const DEFAULT_SEVERITY_STYLE: SeverityStyle = SeverityStyle {
    bg: "bg-slate-500/15",
    text: "text-slate-400",
    border: "border-slate-500/30",
    dot: "bg-slate-400",
};

/// Map a severity label to its style bucket. Never fails.
///
/// # Examples
/// ```
/// use risk_core::presentation::{severity_color, DEFAULT_SEVERITY_STYLE};
///
/// assert_eq!(severity_color("high").text, "text-orange-400");
/// assert_eq!(severity_color("unknown").bg, DEFAULT_SEVERITY_STYLE.bg);
/// ```
pub fn severity_color(severity: &str) -> SeverityStyle {
    match severity {
        "critical" => CRITICAL,
        "high" => HIGH,
        "medium" => MEDIUM,
        "low" => LOW,
        _ => DEFAULT_SEVERITY_STYLE,
    }
}

/// Colour band for a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskColor {
    /// Hex colour for gauges and charts
    pub color: &'static str,
    /// Tier label
    pub label: RiskLevel,
    /// Background token
    pub bg: &'static str,
    /// Text token
    pub text: &'static str,
}

/// Step function from score to tier, inclusive upper bounds.
///
/// # Examples
/// ```
/// use risk_core::presentation::risk_color;
/// use risk_core::types::RiskLevel;
///
/// assert_eq!(risk_color(20.0).label, RiskLevel::Low);
/// assert_eq!(risk_color(21.0).label, RiskLevel::Moderate);
/// assert_eq!(risk_color(81.0).label, RiskLevel::Critical);
/// ```
pub fn risk_color(score: f64) -> RiskColor {
    if score <= 20.0 {
        RiskColor {
            color: "#10b981",
            label: RiskLevel::Low,
            bg: "bg-emerald-500/15",
            text: "text-emerald-400",
        }
    } else if score <= 40.0 {
        RiskColor {
            color: "#3b82f6",
            label: RiskLevel::Moderate,
            bg: "bg-blue-500/15",
            text: "text-blue-400",
        }
    } else if score <= 60.0 {
        RiskColor {
            color: "#f59e0b",
            label: RiskLevel::Elevated,
            bg: "bg-amber-500/15",
            text: "text-amber-400",
        }
    } else if score <= 80.0 {
        RiskColor {
            color: "#ef4444",
            label: RiskLevel::High,
            bg: "bg-red-500/15",
            text: "text-red-400",
        }
    } else {
        RiskColor {
            color: "#dc2626",
            label: RiskLevel::Critical,
            bg: "bg-red-600/15",
            text: "text-red-500",
        }
    }
}
