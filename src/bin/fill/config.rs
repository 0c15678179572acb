//! Configuration for the table fill tool.

use serde::Deserialize;
use std::path::Path;
use unihash::TableConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table: TableConfig,
    pub workload: WorkloadConfig,
    pub logging: LoggingConfig,
}

/// How keys are generated.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    /// Keys `0..count`, each exactly once.
    Sequential,
    /// `count` keys drawn uniformly from `0..count`, repeats allowed.
    #[default]
    Random,
}

impl std::fmt::Display for KeyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyMode::Sequential => write!(f, "sequential"),
            KeyMode::Random => write!(f, "random"),
        }
    }
}

/// Workload configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of entries to insert.
    pub count: u64,
    /// Key generation mode.
    pub mode: KeyMode,
    /// Key to look up once the table is filled.
    pub probe: u64,
    /// Seed for key generation. `None` uses the thread-local RNG.
    pub seed: Option<u64>,
    /// Print the chain length of every slot.
    pub print_slots: bool,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            mode: KeyMode::Random,
            probe: 1234,
            seed: None,
            print_slots: false,
        }
    }
}

/// Log output format.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset (e.g. "info", "unihash=debug").
    pub level: String,
    pub format: LogFormat,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            timestamps: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;

        if config.workload.count == 0 {
            return Err(ConfigError::Invalid(
                "workload.count must be non-zero".to_string(),
            ));
        }
        if config.table.table_size == 0 {
            return Err(ConfigError::Invalid(
                "table.table_size must be non-zero".to_string(),
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.table, TableConfig::default());
        assert_eq!(config.workload.count, 10_000);
        assert_eq!(config.workload.mode, KeyMode::Random);
        assert_eq!(config.workload.probe, 1234);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            [table]
            max_key = 10000
            table_size = 1000
            seed = 5

            [workload]
            count = 10000
            mode = "sequential"
            probe = 42
            seed = 9
            print_slots = true

            [logging]
            level = "debug"
            format = "json"
            timestamps = false
            "#,
        )
        .unwrap();
        assert_eq!(config.table.seed, Some(5));
        assert_eq!(config.workload.mode, KeyMode::Sequential);
        assert_eq!(config.workload.probe, 42);
        assert_eq!(config.workload.seed, Some(9));
        assert!(config.workload.print_slots);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.logging.timestamps);
    }

    #[test]
    fn test_zero_count_rejected() {
        let err = Config::parse("[workload]\ncount = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_table_size_rejected() {
        let err = Config::parse("[table]\ntable_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = Config::parse("[workload]\nmode = \"zipf\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
