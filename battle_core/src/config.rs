//! Configuration loading from TOML files

use crate::range::{InvalidRangeError, StatRange};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid range in config: {0}")]
    Range(#[from] InvalidRangeError),
}

/// Stat bounds as written in a config file
///
/// Both fields default to the standard bounds, so a partial file (or an
/// empty one) still parses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangeConfig {
    #[serde(default = "default_max")]
    pub max: i32,
    #[serde(default = "default_min")]
    pub min: i32,
}

fn default_max() -> i32 {
    StatRange::default().max
}
fn default_min() -> i32 {
    StatRange::default().min
}

impl RangeConfig {
    /// Validate the configured bounds into a usable range
    pub fn into_range(self) -> Result<StatRange, InvalidRangeError> {
        StatRange::new(self.max, self.min)
    }
}

/// Load and validate a stat range from a TOML file
pub fn load_range(path: &Path) -> Result<StatRange, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_range(&content)
}

/// Parse and validate a stat range from a TOML string
pub fn parse_range(content: &str) -> Result<StatRange, ConfigError> {
    let config: RangeConfig = toml::from_str(content)?;
    Ok(config.into_range()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let range = parse_range("max = 100\nmin = 10\n").unwrap();
        assert_eq!(range, StatRange::new(100, 10).unwrap());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let range = parse_range("min = 5\n").unwrap();
        assert_eq!(range, StatRange::new(100, 5).unwrap());

        let range = parse_range("").unwrap();
        assert_eq!(range, StatRange::default());
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let err = parse_range("max = 10\nmin = 20\n").unwrap_err();
        assert!(matches!(err, ConfigError::Range(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = parse_range("max = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
