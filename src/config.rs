//! Runtime configuration
//!
//! Read once at startup from `UNITCONV_*` environment variables.

use serde::Serialize;
use thiserror::Error;

use crate::conversion::{ParseMode, DEFAULT_DECIMALS, MAX_DECIMALS};

pub const PARSE_MODE_VAR: &str = "UNITCONV_PARSE_MODE";
pub const DECIMALS_VAR: &str = "UNITCONV_DECIMALS";

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be 'strict' or 'tolerant', got '{value}'")]
    InvalidParseMode { var: &'static str, value: String },

    #[error("{var} must be an integer between 0 and {max}, got '{value}'")]
    InvalidDecimals {
        var: &'static str,
        value: String,
        max: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Config {
    /// How unparsable input text is handled
    pub parse_mode: ParseMode,
    /// Decimal places used when displaying results
    pub decimals: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::Strict,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` to resolve variable names. Unset variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(PARSE_MODE_VAR) {
            config.parse_mode =
                ParseMode::from_str(&value).ok_or(ConfigError::InvalidParseMode {
                    var: PARSE_MODE_VAR,
                    value,
                })?;
        }

        if let Some(value) = lookup(DECIMALS_VAR) {
            config.decimals = parse_decimals(&value).ok_or(ConfigError::InvalidDecimals {
                var: DECIMALS_VAR,
                value,
                max: MAX_DECIMALS,
            })?;
        }

        Ok(config)
    }
}

fn parse_decimals(value: &str) -> Option<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|d| *d <= MAX_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.decimals, 2);
        assert_eq!(config.parse_mode, ParseMode::Strict);
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (PARSE_MODE_VAR, "tolerant"),
            (DECIMALS_VAR, " 4 "),
        ]))
        .unwrap();
        assert_eq!(config.parse_mode, ParseMode::Tolerant);
        assert_eq!(config.decimals, 4);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(PARSE_MODE_VAR, "loose")])),
            Err(ConfigError::InvalidParseMode { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(DECIMALS_VAR, "11")])),
            Err(ConfigError::InvalidDecimals { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(DECIMALS_VAR, "-1")])),
            Err(ConfigError::InvalidDecimals { .. })
        ));
    }
}
