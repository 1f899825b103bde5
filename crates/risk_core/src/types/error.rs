//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParseError`: an unknown label for one of the closed enums
//! - `RiskCoreError`: construction failures for bounded values

use thiserror::Error;

/// A label that does not name any variant of a closed enum.
///
/// # Examples
/// ```
/// use risk_core::types::{ParseError, Severity};
///
/// let err = "severe".parse::<Severity>().unwrap_err();
/// assert_eq!(err, ParseError::new("severity", "severe"));
/// assert_eq!(format!("{}", err), "Unknown severity: 'severe'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseError {
    /// Name of the enum that rejected the label
    pub kind: &'static str,
    /// The rejected label
    pub value: String,
}

impl ParseError {
    /// Create a parse error for `kind` rejecting `value`.
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Errors raised while constructing data model values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskCoreError {
    /// Risk score outside the 0..=100 scale
    #[error("Risk score {0} is outside 0..=100")]
    ScoreOutOfRange(u32),

    /// Stored VaR limit utilization disagrees with VaR over limit
    #[error("Limit utilization {stored} does not match derived value {derived}")]
    UtilizationMismatch {
        /// Value found in the record
        stored: f64,
        /// Value derived from VaR and limit
        derived: f64,
    },

    /// No alert id left after this one
    #[error("Alert id {0} is the last id available")]
    AlertIdExhausted(u32),

    /// Unknown enum label
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("credit rating", "ZZZ");
        assert_eq!(err.to_string(), "Unknown credit rating: 'ZZZ'");
    }

    #[test]
    fn test_core_error_wraps_parse_error() {
        let err: RiskCoreError = ParseError::new("agent status", "sleeping").into();
        assert!(err.to_string().contains("sleeping"));
        assert_eq!(
            RiskCoreError::ScoreOutOfRange(140).to_string(),
            "Risk score 140 is outside 0..=100"
        );
    }
}
