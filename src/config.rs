use crate::errors::ConfigError;
use std::{env, time::Duration};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_SAMPLE_SIZE: u32 = 100;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub page_size: u32,
    /// Number of leading catalog records the summary statistics are computed
    /// from. The average rating and maximum clicks describe this sample only.
    pub sample_size: u32,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("CATALOG_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                name: "CATALOG_API_URL",
                value: api_url,
            });
        }

        Ok(Self {
            port: positive(&lookup, "PORT", DEFAULT_PORT),
            api_url,
            page_size: positive(&lookup, "DASHBOARD_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            sample_size: positive(&lookup, "DASHBOARD_SAMPLE_SIZE", DEFAULT_SAMPLE_SIZE),
            timeout: Duration::from_secs(positive(
                &lookup,
                "CATALOG_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            sample_size: DEFAULT_SAMPLE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn positive<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + Default + Copy,
{
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            warn!("ignoring invalid {name}={raw:?}, using default");
            default
        }
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
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.sample_size, 100);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides_and_trims_trailing_slash() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("CATALOG_API_URL", "https://catalog.example/"),
            ("DASHBOARD_PAGE_SIZE", "25"),
            ("DASHBOARD_SAMPLE_SIZE", "50"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_url, "https://catalog.example");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.sample_size, 50);
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            ("DASHBOARD_PAGE_SIZE", "0"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn rejects_non_http_url() {
        let err = Config::from_lookup(lookup(&[("CATALOG_API_URL", "ftp://catalog")])).unwrap_err();
        assert!(err.to_string().contains("CATALOG_API_URL"));
    }
}
