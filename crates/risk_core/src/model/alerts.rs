//! Risk alerts and the agent activity log.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{LogSeverity, RiskCoreError, Severity};

/// Alert identifier. Unique within a snapshot and allocated in increasing order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(pub u32);

impl AlertId {
    /// The id allocated after this one.
    ///
    /// # Errors
    ///
    /// [`RiskCoreError::AlertIdExhausted`] at `u32::MAX`.
    pub fn next(self) -> Result<Self, RiskCoreError> {
        self.0
            .checked_add(1)
            .map(AlertId)
            .ok_or(RiskCoreError::AlertIdExhausted(self.0))
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A finding raised by one of the monitoring agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique id
    pub id: AlertId,
    /// Severity, drives badge styling
    pub severity: Severity,
    /// Risk area, e.g. "Credit"
    pub category: String,
    /// One-line headline
    pub title: String,
    /// Full description
    pub message: String,
    /// When the alert was raised
    pub timestamp: DateTime<Utc>,
    /// Name of the raising agent
    pub agent: String,
    /// Whether a user has acknowledged it
    pub acknowledged: bool,
}

impl Alert {
    /// Whether the alert still needs attention.
    pub fn is_open(&self) -> bool {
        !self.acknowledged
    }
}

/// One line of the agent activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    /// Wall-clock time, `HH:MM:SS`
    pub timestamp: String,
    /// Agent name, or "All Agents" for fleet-wide actions
    pub agent: String,
    /// Short verb tag such as `ALERT` or `SCAN`
    pub action: String,
    /// What happened
    pub detail: String,
    /// Severity tag
    pub severity: LogSeverity,
}
