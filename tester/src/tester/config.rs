use std::{env, str::FromStr};
use thiserror::Error;

pub const DEFAULT_ROUNDS: usize = 32;
pub const DEFAULT_OPS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Settings for a tester run, read from `TESTER_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesterConfig {
    pub rounds: usize,
    pub ops: usize,
    /// When set, only this seed is run.
    pub seed: Option<u64>,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            ops: DEFAULT_OPS,
            seed: None,
        }
    }
}

impl TesterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            rounds: parse(&lookup, "TESTER_ROUNDS")?.unwrap_or(defaults.rounds),
            ops: parse(&lookup, "TESTER_OPS")?.unwrap_or(defaults.ops),
            seed: parse(&lookup, "TESTER_SEED")?,
        })
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value })
        })
        .transpose()
}
