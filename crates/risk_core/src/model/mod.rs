//! Entity records of the risk data model.
//!
//! Every record serialises with camelCase field names so exported snapshots
//! keep the dashboard's data contract.

mod agents;
mod alerts;
mod credit;
mod institution;
mod liquidity;
mod market;

pub use agents::{Agent, AgentMetrics};
pub use alerts::{ActivityLogEntry, Alert, AlertId};
pub use credit::{CreditMetrics, CreditRatingBucket, MigrationDay, SectorExposure, TopExposure};
pub use institution::Institution;
pub use liquidity::{
    CashFlowBucket, CashFlowInput, FundingSource, HqlaComponent, LcrTrendDay, LiquidityRatios,
    LiquidityStressScenario,
};
pub use market::{AssetClassPosition, Sensitivity, StressScenario, VarSeriesDay, VarSummary};
