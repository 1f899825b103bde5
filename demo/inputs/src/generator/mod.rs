//! Generation primitives.
//!
//! - [`rng`]: seeded uniform source and Box-Muller normal draws
//! - [`series`]: clamped daily series ending at a reference date
//! - [`ladder`]: cash-flow ladder with running cumulative position

mod ladder;
mod rng;
mod series;

pub use ladder::build_cash_flow_ladder;
pub use rng::{box_muller, nonzero_uniform, SyntheticRng, UniformSource};
pub use series::{date_window, flat, generate_daily_series, linear, ramp_after, SeriesSpec};
