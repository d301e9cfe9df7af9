use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8001;
const DEFAULT_SIMULATED_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings, read from the environment (a `.env` file is honoured).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// How long the `timeout` simulation stalls a request before answering.
    pub simulated_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            simulated_timeout: Duration::from_secs(DEFAULT_SIMULATED_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let simulated_timeout = match lookup("SIMULATED_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid {
                    key: "SIMULATED_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => defaults.simulated_timeout,
        };

        Ok(Self {
            port,
            simulated_timeout,
        })
    }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8001);
        assert_eq!(config.simulated_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9100"),
            ("SIMULATED_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.simulated_timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_garbage_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
