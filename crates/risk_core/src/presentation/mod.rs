//! Pure presentation mapping shared by every dashboard view.
//!
//! - [`format`]: currency, percent and number strings
//! - [`style`]: severity and risk-score style tokens
//!
//! These functions are total: unknown labels fall through to a default
//! bucket and any finite number formats.

pub mod format;
pub mod style;

pub use format::{
    format_currency, format_number, format_percent, to_fixed, DEFAULT_PERCENT_DECIMALS,
};
pub use style::{risk_color, severity_color, RiskColor, SeverityStyle, DEFAULT_SEVERITY_STYLE};
