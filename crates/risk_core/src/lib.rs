//! # risk_core: Data Model Foundation for the FinRisk Dashboard
//!
//! ## Foundation Layer Role
//!
//! risk_core is the bottom layer of the workspace, providing:
//! - Closed enums for severities, ratings, scenario tags (`types`)
//! - Bounded risk scores and their daily history (`types::score`)
//! - Entity records for credit, market, liquidity and agent monitoring (`model`)
//! - Pure formatting and style mapping used by every view (`presentation`)
//!
//! ## No Generation Here
//!
//! This crate only defines shapes and pure functions. Synthetic values are
//! produced by the `demo_inputs` crate and consumed by `demo_outputs`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use risk_core::presentation::{format_currency, format_percent, risk_color};
//! use risk_core::types::{RiskLevel, Severity};
//!
//! assert_eq!(format_currency(1_234_567_890.0, true), "$1.2B");
//! assert_eq!(format_percent(12.449, 1), "12.4%");
//! assert_eq!(risk_color(41.0).label, RiskLevel::Elevated);
//!
//! let severity: Severity = "critical".parse().unwrap();
//! assert_eq!(severity.style().dot, "bg-red-500");
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod model;
pub mod presentation;
pub mod types;
