//! Agent roster page.

use demo_inputs::RiskSnapshot;
use risk_core::presentation::{format_percent, DEFAULT_PERCENT_DECIMALS};
use risk_core::types::AgentStatus;
use serde::Serialize;

/// One agent, formatted for the roster table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentRow {
    /// Display name
    pub name: String,
    /// Specialisation
    pub kind: String,
    /// Running or idle
    pub status: AgentStatus,
    /// What the agent is doing now
    pub current_task: String,
    /// Findings since midnight
    pub findings_today: u32,
    /// Accuracy, e.g. `"94.2%"`
    pub accuracy: String,
    /// True-positive rate as a percent, e.g. `"94.2%"`
    pub true_positive_rate: String,
    /// Mean time to alert
    pub avg_response_time: String,
}

/// Agent roster summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentsView {
    /// Agents running
    pub active: usize,
    /// Agents idle
    pub idle: usize,
    /// Mean accuracy across the roster, percent
    pub mean_accuracy: f64,
    /// Findings across the roster today
    pub total_findings: u32,
    /// Per-agent rows in roster order
    pub rows: Vec<AgentRow>,
}

impl AgentsView {
    /// Build from a snapshot.
    pub fn from_snapshot(snapshot: &RiskSnapshot) -> Self {
        let agents = &snapshot.agents;
        let active = agents.iter().filter(|a| a.is_active()).count();

        let mean_accuracy = if agents.is_empty() {
            0.0
        } else {
            agents.iter().map(|a| a.accuracy).sum::<f64>() / agents.len() as f64
        };

        let rows = agents
            .iter()
            .map(|a| AgentRow {
                name: a.name.clone(),
                kind: a.kind.clone(),
                status: a.status,
                current_task: a.current_task.clone(),
                findings_today: a.findings_today,
                accuracy: format_percent(a.accuracy, DEFAULT_PERCENT_DECIMALS),
                true_positive_rate: format_percent(
                    a.metrics.true_positive_rate * 100.0,
                    DEFAULT_PERCENT_DECIMALS,
                ),
                avg_response_time: a.metrics.avg_response_time.clone(),
            })
            .collect();

        Self {
            active,
            idle: agents.len() - active,
            mean_accuracy,
            total_findings: agents.iter().map(|a| a.findings_today).sum(),
            rows,
        }
    }
}
