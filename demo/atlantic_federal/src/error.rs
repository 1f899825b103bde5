//! Error types for the FinRisk CLI.

use demo_outputs::DashboardError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Alert board or export error
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use risk_core::model::AlertId;

    #[test]
    fn test_error_display() {
        let err = AppError::from(ConfigError::Validation(vec!["history_days must be greater than 0".into()]));
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("history_days"));

        let err = AppError::from(DashboardError::UnknownAlert(AlertId(12)));
        assert_eq!(err.to_string(), "Unknown alert id: 12");
    }
}
