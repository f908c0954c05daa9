//! Server configuration
//!
//! Settings come from an optional TOML file; command-line flags override them.
//!
//! ```toml
//! default_cycle_length = 30
//! default_period_length = 4
//! log_level = "debug"
//! ```

use crate::tracker::{DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH};
use crate::validation::MAX_LENGTH_DAYS;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cycle length used when `predict_cycle` is called without one
    pub default_cycle_length: u32,
    /// Period length used when `predict_cycle` is called without one
    pub default_period_length: u32,
    /// trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_cycle_length: DEFAULT_CYCLE_LENGTH,
            default_period_length: DEFAULT_PERIOD_LENGTH,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Check that both default lengths are in range
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("default_cycle_length", self.default_cycle_length),
            ("default_period_length", self.default_period_length),
        ] {
            if value == 0 || value > MAX_LENGTH_DAYS {
                bail!("{} must be between 1 and {}, got {}", name, MAX_LENGTH_DAYS, value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_cycle_length, 28);
        assert_eq!(config.default_period_length, 5);
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = Config::from_toml_str("default_cycle_length = 32\n").unwrap();
        assert_eq!(config.default_cycle_length, 32);
        assert_eq!(config.default_period_length, 5);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_zero_length_is_rejected() {
        assert!(Config::from_toml_str("default_period_length = 0\n").is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(Config::from_toml_str("default_cycle_length = \"long\"\n").is_err());
    }
}
