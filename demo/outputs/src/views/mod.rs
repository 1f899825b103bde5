//! Derived view models.
//!
//! Each view is computed once from a [`RiskSnapshot`](demo_inputs::RiskSnapshot)
//! and holds display-ready strings alongside the numbers they came from.
//! Renderers only lay these out; all arithmetic and thresholds live here.
//!
//! - [`dashboard`]: Overview gauges, recent alerts and activity
//! - [`credit`]: Loss metrics and watchlisted names
//! - [`market`]: VaR cards, loss days and sensitivities
//! - [`liquidity`]: Regulatory ratio gauges, HQLA and stress outcomes
//! - [`agents`]: Agent roster summary

pub mod agents;
pub mod credit;
pub mod dashboard;
pub mod liquidity;
pub mod market;

use risk_core::presentation::risk_color;
use risk_core::types::{RiskLevel, RiskScore};
use serde::Serialize;

pub use agents::AgentsView;
pub use credit::CreditView;
pub use dashboard::DashboardView;
pub use liquidity::{LiquidityView, RatioGauge};
pub use market::{MarketView, SensitivityRow};

/// Emphasis of a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTone {
    /// No emphasis
    Normal,
    /// Above an internal threshold
    Warning,
    /// Limit breached
    Breach,
}

impl CardTone {
    /// `Breach` when `breached`, otherwise `Normal`.
    pub fn breach_if(breached: bool) -> Self {
        if breached {
            CardTone::Breach
        } else {
            CardTone::Normal
        }
    }

    /// `Warning` when `flagged`, otherwise `Normal`.
    pub fn warning_if(flagged: bool) -> Self {
        if flagged {
            CardTone::Warning
        } else {
            CardTone::Normal
        }
    }
}

/// Headline figure with a label and optional caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    /// Card title
    pub label: String,
    /// Formatted value
    pub value: String,
    /// Caption under the value
    pub subtext: Option<String>,
    /// Emphasis
    pub tone: CardTone,
}

impl MetricCard {
    /// Create a card with normal tone and no caption.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            subtext: None,
            tone: CardTone::Normal,
        }
    }

    /// Set the caption.
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    /// Set the tone.
    pub fn with_tone(mut self, tone: CardTone) -> Self {
        self.tone = tone;
        self
    }
}

/// Circular gauge for a 0-100 risk score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskGauge {
    /// Risk area
    pub label: String,
    /// Score shown in the centre
    pub score: u32,
    /// Band label
    pub level: RiskLevel,
    /// Band colour
    pub color: &'static str,
    /// Share of the arc to fill, `score / 100`
    pub arc_fraction: f64,
}

impl RiskGauge {
    /// Gauge for `score`.
    pub fn new(label: impl Into<String>, score: RiskScore) -> Self {
        let band = risk_color(f64::from(score.value()));
        Self {
            label: label.into(),
            score: score.value(),
            level: band.label,
            color: band.color,
            arc_fraction: f64::from(score.value()) / 100.0,
        }
    }
}
