//! Runtime configuration, read from `STOREFRONT_*` environment variables.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "+2348166411702";
pub const DEFAULT_POPULAR_COUNT: usize = 8;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL of the API that serves `/api/products` and `/api/orders`.
    pub api_url: String,
    /// Bearer token of the signed-in user, if any.
    pub auth_token: Option<String>,
    pub whatsapp_number: String,
    pub popular_count: usize,
    pub request_timeout: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            popular_count: DEFAULT_POPULAR_COUNT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string());

        let api_url = match get("STOREFRONT_API_URL") {
            Some(url) if url.is_empty() => return Err(ConfigError::Empty { key: "STOREFRONT_API_URL" }),
            Some(url) => url.trim_end_matches('/').to_string(),
            None => defaults.api_url,
        };

        let auth_token = get("STOREFRONT_AUTH_TOKEN").filter(|t| !t.is_empty());

        let whatsapp_number = get("STOREFRONT_WHATSAPP_NUMBER")
            .filter(|n| !n.is_empty())
            .unwrap_or(defaults.whatsapp_number);

        let popular_count = match get("STOREFRONT_POPULAR_COUNT") {
            Some(raw) => parse_number("STOREFRONT_POPULAR_COUNT", &raw)? as usize,
            None => defaults.popular_count,
        };

        let request_timeout = match get("STOREFRONT_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_number("STOREFRONT_REQUEST_TIMEOUT_SECS", &raw)?),
            None => defaults.request_timeout,
        };

        Ok(Self {
            api_url,
            auth_token,
            whatsapp_number,
            popular_count,
            request_timeout,
        })
    }
}

fn parse_number(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}
