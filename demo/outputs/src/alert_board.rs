//! In-memory alert board.
//!
//! Holds the alert feed for the dashboard session. Reads borrow the board
//! immutably; acknowledging or raising alerts needs `&mut self`, so there is
//! exactly one writer at a time. Callers that share a board across threads
//! wrap it in `Arc<RwLock<AlertBoard>>`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use demo_inputs::RiskSnapshot;
use risk_core::model::{Alert, AlertId};
use risk_core::types::{RiskCoreError, Severity};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{DashboardError, Result};

/// Alert submitted by a monitoring agent, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    /// Severity
    pub severity: Severity,
    /// Risk area
    pub category: String,
    /// Headline
    pub title: String,
    /// Detail text
    pub message: String,
    /// Raising agent's display name
    pub agent: String,
    /// Time raised
    pub timestamp: DateTime<Utc>,
}

impl NewAlert {
    /// Create an alert stamped with the current time.
    pub fn new(
        severity: Severity,
        category: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category: category.into(),
            title: title.into(),
            message: message.into(),
            agent: agent.into(),
            timestamp: Utc::now(),
        }
    }

    /// Override the timestamp.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Alert feed, newest first.
#[derive(Debug, Clone)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
    /// `None` once the id space is used up
    next_id: Option<AlertId>,
}

impl AlertBoard {
    /// Build a board from a list of alerts.
    pub fn new(alerts: Vec<Alert>) -> Self {
        let next_id = alerts
            .iter()
            .map(|a| a.id)
            .max()
            .map_or(Some(AlertId(1)), |max| max.next().ok());
        Self { alerts, next_id }
    }

    /// Copy the alert feed out of a snapshot.
    pub fn from_snapshot(snapshot: &RiskSnapshot) -> Self {
        Self::new(snapshot.alerts.clone())
    }

    /// Every alert in feed order.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Number of alerts on the board.
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Whether the board holds no alerts.
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Look up an alert.
    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    /// Alerts still waiting for acknowledgement.
    pub fn unacknowledged(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| a.is_open())
    }

    /// Alerts of one severity, acknowledged or not.
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(move |a| a.severity == severity)
    }

    /// Mark an alert as acknowledged.
    ///
    /// Acknowledging an alert twice is a no-op.
    ///
    /// # Errors
    ///
    /// [`DashboardError::UnknownAlert`] if no alert has this id.
    pub fn acknowledge(&mut self, id: AlertId) -> Result<&Alert> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DashboardError::UnknownAlert(id))?;

        if alert.acknowledged {
            debug!(alert_id = %id, "Alert already acknowledged");
        } else {
            alert.acknowledged = true;
            info!(
                alert_id = %id,
                severity = %alert.severity,
                title = %alert.title,
                "Alert acknowledged"
            );
        }
        Ok(&*alert)
    }

    /// Put a new alert at the top of the feed and return its id.
    ///
    /// # Errors
    ///
    /// [`DashboardError::Model`] if the board already holds the largest
    /// possible id.
    pub fn raise(&mut self, new: NewAlert) -> Result<AlertId> {
        let id = self
            .next_id
            .ok_or(RiskCoreError::AlertIdExhausted(u32::MAX))?;
        self.next_id = id.next().ok();

        info!(alert_id = %id, severity = %new.severity, agent = %new.agent, "Alert raised");

        self.alerts.insert(
            0,
            Alert {
                id,
                severity: new.severity,
                category: new.category,
                title: new.title,
                message: new.message,
                timestamp: new.timestamp,
                agent: new.agent,
                acknowledged: false,
            },
        );
        Ok(id)
    }

    /// Summary counts.
    pub fn statistics(&self) -> AlertStatistics {
        let mut open_by_severity = BTreeMap::new();
        for alert in self.unacknowledged() {
            *open_by_severity.entry(alert.severity).or_insert(0) += 1;
        }
        let unacknowledged: usize = open_by_severity.values().sum();

        AlertStatistics {
            total: self.alerts.len(),
            unacknowledged,
            acknowledged: self.alerts.len() - unacknowledged,
            open_by_severity,
        }
    }
}

impl Default for AlertBoard {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Board statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStatistics {
    /// Alerts on the board
    pub total: usize,
    /// Alerts still open
    pub unacknowledged: usize,
    /// Alerts already acknowledged
    pub acknowledged: usize,
    /// Open alerts per severity
    pub open_by_severity: BTreeMap<Severity, usize>,
}
