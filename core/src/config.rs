//! Client configuration read from the environment.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const URL_VAR: &str = "TODO_API_URL";
const TIMEOUT_VAR: &str = "TODO_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Read `TODO_API_URL` and `TODO_API_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(URL_VAR).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidVar {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn reads_url_and_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[
            (URL_VAR, "http://todo.internal:8080/"),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://todo.internal:8080/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_timeout() {
        for bad in ["abc", "0", "-3"] {
            let err = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidVar { var: TIMEOUT_VAR, .. }));
        }
    }
}
