//! Error types for dashboard outputs.

use risk_core::model::AlertId;
use risk_core::types::RiskCoreError;
use thiserror::Error;

/// Dashboard output error type
#[derive(Debug, Error)]
pub enum DashboardError {
    /// No alert with this id on the board
    #[error("Unknown alert id: {0}")]
    UnknownAlert(AlertId),

    /// Data model error
    #[error(transparent)]
    Model(#[from] RiskCoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for dashboard outputs
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::UnknownAlert(AlertId(42));
        assert_eq!(err.to_string(), "Unknown alert id: 42");

        let err: DashboardError = RiskCoreError::AlertIdExhausted(u32::MAX).into();
        assert_eq!(err.to_string(), "Alert id 4294967295 is the last id available");
    }
}
