//! Monitoring agent roster.

use serde::{Deserialize, Serialize};

use crate::types::AgentStatus;

/// Lifetime counters for an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMetrics {
    /// Alerts raised since deployment
    pub alerts_generated: u32,
    /// Share of alerts confirmed, 0-1
    pub true_positive_rate: f64,
    /// Display string such as "1.2s"
    pub avg_response_time: String,
}

/// An AI monitoring agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Unique slug, e.g. "credit-sentinel"
    pub id: String,
    /// Display name, referenced by alerts and the activity log
    pub name: String,
    /// Analysis domain
    #[serde(rename = "type")]
    pub kind: String,
    /// Run state
    pub status: AgentStatus,
    /// What the agent watches
    pub description: String,
    /// Current work item
    pub current_task: String,
    /// Relative time of the last action, e.g. "2 min ago"
    pub last_action: String,
    /// Findings raised today
    pub findings_today: u32,
    /// Accuracy in percent
    pub accuracy: f64,
    /// Model description
    pub model: String,
    /// Connected upstream feeds, in display order
    pub data_sources_connected: Vec<String>,
    /// Lifetime counters
    pub metrics: AgentMetrics,
}

impl Agent {
    /// Whether the agent is currently processing.
    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }
}
