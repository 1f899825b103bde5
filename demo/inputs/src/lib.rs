//! # Synthetic Inputs
//!
//! Generates the in-memory data set behind the FinRisk dashboard.
//!
//! All values are fabricated: static tables come from literals and the
//! 30-day series come from a seeded random source anchored to a fixed
//! reference date. Nothing here performs real risk computation.
//!
//! ## Modules
//!
//! - [`generator`]: Seeded RNG, Box-Muller draws, daily series, cash-flow ladder
//! - [`fixtures`]: Literal tables for the Atlantic Federal Bank demo book
//! - [`snapshot`]: Assembles everything into one immutable [`RiskSnapshot`]

pub mod fixtures;
pub mod generator;
pub mod snapshot;

pub use snapshot::{CreditBook, LiquidityBook, MarketBook, RiskSnapshot, SyntheticConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::generator::{
        build_cash_flow_ladder, generate_daily_series, SeriesSpec, SyntheticRng,
    };
    pub use crate::snapshot::{
        CreditBook, LiquidityBook, MarketBook, RiskSnapshot, SyntheticConfig, DEFAULT_SEED,
    };
}
