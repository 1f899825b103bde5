//! Literal demo book for Atlantic Federal Bank.
//!
//! Static tables are returned as constructed. Series take the snapshot's
//! random source, reference date and window length.

pub mod agents;
pub mod alerts;
pub mod credit;
pub mod institution;
pub mod liquidity;
pub mod market;
