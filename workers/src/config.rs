use crate::error::{WorkerError, WorkerResult};
use std::{env, str::FromStr, time::Duration};

pub const DEFAULT_WORKERS: usize = 2;
pub const DEFAULT_ITERATIONS: usize = 3;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub workers: usize,
    pub iterations: usize,
    /// Pause after each iteration.
    pub delay: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            iterations: DEFAULT_ITERATIONS,
            delay: DEFAULT_DELAY,
        }
    }
}

impl WorkerConfig {
    /// Reads `WORKERS_COUNT`, `WORKERS_ITERATIONS` and `WORKERS_DELAY_MS`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> WorkerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> WorkerResult<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();
        let delay = parse::<u64, _>(&lookup, "WORKERS_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.delay);

        Ok(Self {
            workers: parse(&lookup, "WORKERS_COUNT")?.unwrap_or(defaults.workers),
            iterations: parse(&lookup, "WORKERS_ITERATIONS")?.unwrap_or(defaults.iterations),
            delay,
        })
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> WorkerResult<Option<T>>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| WorkerError::InvalidConfig { key, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_two_thread_demo() {
        let config = WorkerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.workers, 2);
        assert_eq!(config.iterations, 3);
        assert_eq!(config.delay, Duration::from_millis(500));
    }

    #[test]
    fn reads_overrides() {
        let config = WorkerConfig::from_lookup(|key| match key {
            "WORKERS_COUNT" => Some("4".to_string()),
            "WORKERS_DELAY_MS" => Some("0".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            config,
            WorkerConfig {
                workers: 4,
                iterations: DEFAULT_ITERATIONS,
                delay: Duration::ZERO,
            }
        );
    }

    #[test]
    fn rejects_negative_count() {
        let err = WorkerConfig::from_lookup(|key| {
            (key == "WORKERS_COUNT").then(|| "-1".to_string())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            WorkerError::InvalidConfig { key: "WORKERS_COUNT", ref value } if value == "-1"
        ));
        assert_eq!(err.to_string(), "invalid value \"-1\" for WORKERS_COUNT");
    }
}
