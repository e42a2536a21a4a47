//! Run configuration for the command-line tools
//!
//! Reads from environment variables:
//!   STASH_SEED, STASH_ANNUAL_RATE, STASH_YEARS, STASH_WEEKLY_CONTRIBUTION
//! Unset variables keep their defaults. The library functions themselves take explicit
//! parameters and never read the environment.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mock::DEFAULT_SEED;
use crate::projection::{SeriesConfig, DEFAULT_ANNUAL_RATE};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Seed for generated accounts
    pub seed: u32,

    /// Annual growth rate for projections
    pub annual_rate: f64,

    /// Projection horizon in years
    pub years: u32,

    /// Recurring weekly pledge
    pub weekly_contribution: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            annual_rate: DEFAULT_ANNUAL_RATE,
            years: 10,
            weekly_contribution: 0.0,
        }
    }
}

impl DemoConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            seed: parse_var(&lookup, "STASH_SEED")?.unwrap_or(defaults.seed),
            annual_rate: parse_var(&lookup, "STASH_ANNUAL_RATE")?.unwrap_or(defaults.annual_rate),
            years: parse_var(&lookup, "STASH_YEARS")?.unwrap_or(defaults.years),
            weekly_contribution: parse_var(&lookup, "STASH_WEEKLY_CONTRIBUTION")?
                .unwrap_or(defaults.weekly_contribution),
        };

        config.series(0.0).validate()?;
        Ok(config)
    }

    /// Projection inputs for an initial deposit under this configuration
    pub fn series(&self, initial_amount: f64) -> SeriesConfig {
        SeriesConfig {
            initial_amount,
            weekly_contribution: self.weekly_contribution,
            years: self.years,
            annual_rate: self.annual_rate,
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(DemoConfig::from_lookup(lookup(&[])).unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::from_lookup(lookup(&[
            ("STASH_SEED", "7"),
            ("STASH_ANNUAL_RATE", "0.05"),
            ("STASH_YEARS", " 20 "),
            ("STASH_WEEKLY_CONTRIBUTION", "12.5"),
        ]))
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.annual_rate, 0.05);
        assert_eq!(config.years, 20);
        assert_eq!(config.series(100.0).weekly_contribution, 12.5);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            DemoConfig::from_lookup(lookup(&[("STASH_YEARS", "ten")])),
            Err(ConfigError::InvalidValue { var: "STASH_YEARS", value: "ten".to_string() })
        );
        assert_eq!(
            DemoConfig::from_lookup(lookup(&[("STASH_ANNUAL_RATE", "-2")])),
            Err(ConfigError::Projection(ProjectionError::RateOutOfRange(-2.0)))
        );
    }
}
