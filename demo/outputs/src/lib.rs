//! # Dashboard Outputs
//!
//! Everything the FinRisk dashboard derives from a generated
//! [`RiskSnapshot`](demo_inputs::RiskSnapshot).
//!
//! ## Modules
//!
//! - [`views`]: Display-ready view models for each dashboard page
//! - [`alert_board`]: Alert feed with acknowledgement and new alerts
//! - [`export`]: JSON snapshot export
//! - [`error`]: Error type shared by the board and the exporter

pub mod alert_board;
pub mod error;
pub mod export;
pub mod views;

pub use error::{DashboardError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::alert_board::{AlertBoard, AlertStatistics, NewAlert};
    pub use crate::error::DashboardError;
    pub use crate::export::{JsonStyle, SnapshotWriter, WrittenSnapshot};
    pub use crate::views::{
        AgentsView, CardTone, CreditView, DashboardView, LiquidityView, MarketView, MetricCard,
        RatioGauge, RiskGauge,
    };
}
