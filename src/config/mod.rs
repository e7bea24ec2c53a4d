//! Configuration loading and validation.
//!
//! Configuration is read from an optional TOML file. `PAIRVOTE_LOG_LEVEL`
//! overrides `[logging] level` when set.

use serde::Deserialize;
use std::path::Path;

use crate::domain::DEFAULT_TOP_LIMIT;
use crate::error::{ConfigError, Result};

mod logging;

pub use logging::{LoggingConfig, LOG_FORMATS};

/// Environment variable that overrides the configured log level.
pub const LOG_LEVEL_ENV: &str = "PAIRVOTE_LOG_LEVEL";

/// Ranking defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Pairs listed when no explicit limit is given.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

/// How loaded state is prepared before queries run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerConfig {
    /// Renormalize voting power right after loading a state file.
    #[serde(default)]
    pub renormalize_on_load: bool,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise start from defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            let mut config = Self::default();
            config.apply_env();
            config.validate()?;
            Ok(config)
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.is_empty() {
            return Err(ConfigError::MissingField {
                field: "logging.level",
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "expected one of {}, got {:?}",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }
        if self.ranking.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ranking.default_limit",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.ranking.default_limit, DEFAULT_TOP_LIMIT);
        assert_eq!(config.logging.format, "pretty");
        assert!(!config.ledger.renormalize_on_load);
    }

    #[test]
    fn sections_are_read() {
        let config = Config::parse(
            r#"
[logging]
format = "json"

[ranking]
default_limit = 10

[ledger]
renormalize_on_load = true
"#,
        )
        .unwrap();

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.ranking.default_limit, 10);
        assert!(config.ledger.renormalize_on_load);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let result = Config::parse("[ranking]\ndefault_limit = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "ranking.default_limit",
                ..
            }))
        ));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result = Config::parse("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::parse("[ranking\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
