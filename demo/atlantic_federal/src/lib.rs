//! # Atlantic Federal FinRisk
//!
//! Composition root for the FinRisk dashboard demo: configuration, error
//! handling and the `finrisk` command implementations.
//!
//! The binary resolves a [`FinRiskConfig`](config::FinRiskConfig), generates
//! one [`RiskSnapshot`](demo_inputs::RiskSnapshot) and hands it by
//! reference to the selected command.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{AppError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::commands::export::ExportTarget;
    pub use crate::config::{CliOverrides, ConfigError, FinRiskConfig};
    pub use crate::error::{AppError, Result};
}
