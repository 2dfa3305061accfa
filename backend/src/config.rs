//! Environment configuration for the catalog client.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

pub const API_URL_VAR: &str = "CATALOG_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "CATALOG_REQUEST_TIMEOUT_MS";
pub const CHAT_API_URL_VAR: &str = "CHAT_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_CHAT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL without a trailing slash, e.g. `https://catalog.example.org/api/v1`.
    pub api_url: String,
    pub request_timeout: Duration,
    /// Root of the chatbot service, which answers `POST /api/chat`.
    pub chat_api_url: String,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url: String = try_load(&lookup, API_URL_VAR, DEFAULT_API_URL.to_string());
        let timeout_ms: u64 = try_load(&lookup, REQUEST_TIMEOUT_VAR, DEFAULT_REQUEST_TIMEOUT_MS);
        let chat_api_url: String = try_load(&lookup, CHAT_API_URL_VAR, DEFAULT_CHAT_API_URL.to_string());
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_millis(timeout_ms),
            chat_api_url: chat_api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = CatalogConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS));
        assert_eq!(config.chat_api_url, DEFAULT_CHAT_API_URL);
    }

    #[test]
    fn reads_and_normalizes_values() {
        let config = CatalogConfig::from_lookup(lookup(&[
            (API_URL_VAR, "https://catalog.example.org/api/v1/"),
            (REQUEST_TIMEOUT_VAR, " 2500 "),
            (CHAT_API_URL_VAR, "https://chat.example.org/"),
        ]));
        assert_eq!(config.api_url, "https://catalog.example.org/api/v1");
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        assert_eq!(config.chat_api_url, "https://chat.example.org");
    }

    #[test]
    fn invalid_timeout_falls_back() {
        let config = CatalogConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_VAR, "soon")]));
        assert_eq!(config.request_timeout, Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS));
    }
}
