use crate::errors::MileageError;
use crate::selection::{SelectionPolicy, DEFAULT_TARGET_NAME};
use std::{env, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FEED_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_FEED_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub feed_base_url: String,
    pub feed_timeout: Duration,
    pub selection: SelectionPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, MileageError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MileageError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get("PORT") {
            Some(value) => parse_number::<u16>("PORT", &value)?,
            None => DEFAULT_PORT,
        };

        let feed_base_url = get("FEED_BASE_URL")
            .unwrap_or_else(|| DEFAULT_FEED_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match get("FEED_TIMEOUT_SECS") {
            Some(value) => parse_number::<u64>("FEED_TIMEOUT_SECS", &value)?,
            None => DEFAULT_FEED_TIMEOUT_SECS,
        };

        let selection = match get("TARGET_ATHLETE_ID") {
            Some(value) => SelectionPolicy::ById(parse_number::<i64>("TARGET_ATHLETE_ID", &value)?),
            None => SelectionPolicy::ByNameWithFallback(
                get("TARGET_ATHLETE_NAME").unwrap_or_else(|| DEFAULT_TARGET_NAME.to_string()),
            ),
        };

        Ok(Self {
            port,
            feed_base_url,
            feed_timeout: Duration::from_secs(timeout_secs),
            selection,
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, MileageError> {
    value
        .parse::<T>()
        .map_err(|_| MileageError::config(format!("{key} must be a number, got '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, MileageError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.feed_base_url, DEFAULT_FEED_BASE_URL);
        assert_eq!(config.feed_timeout, Duration::from_secs(DEFAULT_FEED_TIMEOUT_SECS));
        assert_eq!(config.selection, SelectionPolicy::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("FEED_BASE_URL", "http://backend:5000/"),
            ("FEED_TIMEOUT_SECS", "3"),
            ("TARGET_ATHLETE_NAME", "Sam"),
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.feed_base_url, "http://backend:5000");
        assert_eq!(config.feed_timeout, Duration::from_secs(3));
        assert_eq!(config.selection, SelectionPolicy::ByNameWithFallback("Sam".to_string()));
    }

    #[test]
    fn athlete_id_wins_over_name() {
        let config =
            config_from(&[("TARGET_ATHLETE_ID", "12"), ("TARGET_ATHLETE_NAME", "Sam")]).unwrap();
        assert_eq!(config.selection, SelectionPolicy::ById(12));
    }

    #[test]
    fn rejects_non_numeric_values() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, MileageError::Config(_)));
        assert!(err.to_string().contains("PORT"));
        assert!(config_from(&[("TARGET_ATHLETE_ID", "tori")]).is_err());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "  "), ("TARGET_ATHLETE_NAME", "")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.selection, SelectionPolicy::default());
    }
}
