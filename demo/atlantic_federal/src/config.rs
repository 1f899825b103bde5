//! FinRisk configuration management.
//!
//! Handles loading of generation and logging settings from TOML files
//! with environment variable override support.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use demo_inputs::snapshot::{default_reference_date, DEFAULT_HISTORY_DAYS, DEFAULT_SEED};
use demo_inputs::SyntheticConfig;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "finrisk.toml";

/// Longest history the generator accepts, in days.
pub const MAX_HISTORY_DAYS: usize = 365;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Settings from the command line. They win over file and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Fixed generator seed
    pub seed: Option<u64>,
    /// Seed from OS entropy
    pub fresh: bool,
    /// Force debug logging
    pub verbose: bool,
}

/// FinRisk configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FinRiskConfig {
    /// Generator seed; `None` draws from OS entropy. `seed = "random"` in TOML.
    #[serde(default = "default_seed", deserialize_with = "deserialize_seed")]
    pub seed: Option<u64>,

    /// Last day of every generated series (YYYY-MM-DD)
    #[serde(default = "default_reference_date")]
    pub reference_date: NaiveDate,

    /// Days of generated history
    #[serde(default = "default_history_days")]
    pub history_days: usize,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory for snapshot exports
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Environment overrides that could not be parsed
    #[serde(skip)]
    rejected_env: Vec<String>,
}

fn default_seed() -> Option<u64> {
    Some(DEFAULT_SEED)
}

fn default_history_days() -> usize {
    DEFAULT_HISTORY_DAYS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("exports")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedValue {
    Fixed(u64),
    Named(String),
}

fn parse_seed(value: &str) -> Option<Option<u64>> {
    if value.eq_ignore_ascii_case("random") {
        Some(None)
    } else {
        value.parse().ok().map(Some)
    }
}

fn deserialize_seed<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match SeedValue::deserialize(deserializer)? {
        SeedValue::Fixed(seed) => Ok(Some(seed)),
        SeedValue::Named(name) => parse_seed(&name).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid seed '{}': expected an integer or \"random\"",
                name
            ))
        }),
    }
}

impl Default for FinRiskConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            reference_date: default_reference_date(),
            history_days: default_history_days(),
            log_level: default_log_level(),
            export_dir: default_export_dir(),
            rejected_env: Vec::new(),
        }
    }
}

impl FinRiskConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `finrisk.toml` from the working directory, or defaults if it is absent
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup, using the `FINRISK_*` names.
    ///
    /// Values that fail to parse leave the setting unchanged and are reported
    /// by [`FinRiskConfig::validate`].
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("FINRISK_SEED") {
            match parse_seed(&seed) {
                Some(seed) => self.seed = seed,
                None => self.reject("FINRISK_SEED", &seed),
            }
        }

        if let Some(date) = lookup("FINRISK_REFERENCE_DATE") {
            match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
                Ok(date) => self.reference_date = date,
                Err(_) => self.reject("FINRISK_REFERENCE_DATE", &date),
            }
        }

        if let Some(days) = lookup("FINRISK_HISTORY_DAYS") {
            match days.parse() {
                Ok(days) => self.history_days = days,
                Err(_) => self.reject("FINRISK_HISTORY_DAYS", &days),
            }
        }

        if let Some(log_level) = lookup("FINRISK_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(export_dir) = lookup("FINRISK_EXPORT_DIR") {
            self.export_dir = PathBuf::from(export_dir);
        }

        self
    }

    fn reject(&mut self, key: &str, value: &str) {
        self.rejected_env.push(format!("{} has unparseable value '{}'", key, value));
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.rejected_env.clone();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.history_days == 0 {
            errors.push("history_days must be greater than 0".to_string());
        }
        if self.history_days > MAX_HISTORY_DAYS {
            errors.push(format!(
                "history_days {} exceeds maximum allowed ({})",
                self.history_days, MAX_HISTORY_DAYS
            ));
        }

        if self.export_dir.as_os_str().is_empty() {
            errors.push("export_dir cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Apply command-line settings.
    pub fn with_cli_overrides(mut self, cli: &CliOverrides) -> Self {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if cli.fresh {
            self.seed = None;
        }
        if cli.verbose {
            self.log_level = "debug".to_string();
        }
        self
    }

    /// Load from `path` (or [`DEFAULT_CONFIG_PATH`] when absent), apply
    /// environment then command-line overrides, and validate.
    pub fn load_with_env_and_validate(
        path: Option<&Path>,
        cli: &CliOverrides,
    ) -> Result<Self, ConfigError> {
        let config = Self::load_from(path)?
            .with_env_override()
            .with_cli_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    /// [`FinRiskConfig::load_with_env_and_validate`] with a custom
    /// environment lookup.
    pub fn load_with_overrides<F>(
        path: Option<&Path>,
        cli: &CliOverrides,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::load_from(path)?
            .with_overrides(lookup)
            .with_cli_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_or_default(),
        }
    }

    /// Generator parameters
    pub fn synthetic_config(&self) -> SyntheticConfig {
        SyntheticConfig {
            seed: self.seed,
            reference_date: self.reference_date,
            history_days: self.history_days,
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn validation_errors(config: &FinRiskConfig) -> Vec<String> {
        match config.validate() {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config() {
        let config = FinRiskConfig::default();
        assert_eq!(config.seed, Some(DEFAULT_SEED));
        assert_eq!(config.reference_date.to_string(), "2026-02-12");
        assert_eq!(config.history_days, 30);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = FinRiskConfig::from_toml_str(
            r#"
            seed = 7
            history_days = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.history_days, 60);
        assert_eq!(config.export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_parse_full_toml() {
        let config = FinRiskConfig::from_toml_str(
            r#"
            seed = "random"
            reference_date = "2025-12-31"
            history_days = 90
            log_level = "debug"
            export_dir = "out/snapshots"
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.export_dir, PathBuf::from("out/snapshots"));
    }

    #[test]
    fn test_parse_bad_seed() {
        let err = FinRiskConfig::from_toml_str(r#"seed = "lucky""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_parse_bad_date() {
        let err = FinRiskConfig::from_toml_str(r#"reference_date = "12/02/2026""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_override() {
        let config = FinRiskConfig::default().with_overrides(env(&[
            ("FINRISK_SEED", "42"),
            ("FINRISK_REFERENCE_DATE", "2026-01-31"),
            ("FINRISK_HISTORY_DAYS", "10"),
            ("FINRISK_LOG_LEVEL", "warn"),
            ("FINRISK_EXPORT_DIR", "/tmp/finrisk"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.reference_date.to_string(), "2026-01-31");
        assert_eq!(config.history_days, 10);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.export_dir, PathBuf::from("/tmp/finrisk"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_seed_random() {
        let config = FinRiskConfig::default().with_overrides(env(&[("FINRISK_SEED", "RANDOM")]));
        assert_eq!(config.seed, None);
        assert_eq!(config.synthetic_config().seed, None);
    }

    #[test]
    fn test_env_unparseable_values_reported() {
        let config = FinRiskConfig::default().with_overrides(env(&[
            ("FINRISK_SEED", "abc"),
            ("FINRISK_HISTORY_DAYS", "-3"),
        ]));
        assert_eq!(config.seed, Some(DEFAULT_SEED));
        assert_eq!(config.history_days, 30);

        let errors = validation_errors(&config);
        assert!(errors.iter().any(|e| e.contains("FINRISK_SEED")));
        assert!(errors.iter().any(|e| e.contains("FINRISK_HISTORY_DAYS")));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = FinRiskConfig::default();
        config.log_level = "verbose".to_string();
        let errors = validation_errors(&config);
        assert!(errors.iter().any(|e| e.contains("log_level")));
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let mut config = FinRiskConfig::default();
            config.log_level = level.to_string();
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_history_days_bounds() {
        let mut config = FinRiskConfig::default();
        config.history_days = 0;
        assert!(validation_errors(&config).iter().any(|e| e.contains("greater than 0")));

        config.history_days = 366;
        assert!(validation_errors(&config).iter().any(|e| e.contains("exceeds maximum")));

        config.history_days = 365;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_export_dir() {
        let mut config = FinRiskConfig::default();
        config.export_dir = PathBuf::from("");
        assert!(validation_errors(&config).iter().any(|e| e.contains("export_dir")));
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = FinRiskConfig::default();
        config.log_level = "invalid".to_string();
        config.history_days = 0;
        config.export_dir = PathBuf::from("");

        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 3, "{:?}", errors);
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }

    #[test]
    fn test_synthetic_config() {
        let mut config = FinRiskConfig::default();
        config.seed = Some(5);
        config.history_days = 12;
        let synthetic = config.synthetic_config();
        assert_eq!(synthetic.seed, Some(5));
        assert_eq!(synthetic.history_days, 12);
        assert_eq!(synthetic.reference_date, config.reference_date);
    }

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("finrisk.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_applies_env_then_cli() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "seed = 3\nhistory_days = 20\nlog_level = \"warn\"\n");

        let config = FinRiskConfig::load_with_overrides(
            Some(&path),
            &CliOverrides::default(),
            env(&[("FINRISK_SEED", "8"), ("FINRISK_EXPORT_DIR", "env-out")]),
        )
        .unwrap();
        assert_eq!(config.seed, Some(8));
        assert_eq!(config.history_days, 20);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.export_dir, PathBuf::from("env-out"));

        let cli = CliOverrides {
            seed: Some(21),
            verbose: true,
            ..CliOverrides::default()
        };
        let config =
            FinRiskConfig::load_with_overrides(Some(&path), &cli, env(&[("FINRISK_SEED", "8")]))
                .unwrap();
        assert_eq!(config.seed, Some(21));
        assert_eq!(config.log_level, "debug");

        let fresh = CliOverrides {
            fresh: true,
            ..CliOverrides::default()
        };
        let config = FinRiskConfig::load_with_overrides(Some(&path), &fresh, env(&[])).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_rejects_bad_env() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "seed = 3\n");

        let err = FinRiskConfig::load_with_overrides(
            Some(&path),
            &CliOverrides::default(),
            env(&[("FINRISK_HISTORY_DAYS", "lots"), ("FINRISK_LOG_LEVEL", "loud")]),
        )
        .unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 2, "{:?}", errors);
                assert!(errors[0].contains("FINRISK_HISTORY_DAYS"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = FinRiskConfig::load_with_env_and_validate(
            Some(Path::new("/nonexistent/finrisk.toml")),
            &CliOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
