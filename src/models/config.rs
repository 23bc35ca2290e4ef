//! Configuration module for the AML Wallet API
//!
//! Values come from the environment; anything unset falls back to the
//! defaults in utils/constants.rs.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_DATA_PATH, DEFAULT_HOST, DEFAULT_MAX_CONCURRENT_REQUESTS, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOP_N,
};

/// Runtime configuration shared by both binaries
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host (`AML_HOST`)
    pub host: String,
    /// Bind port (`PORT`, then `AML_PORT`)
    pub port: u16,
    /// CSV score table (`AML_DATA_PATH`)
    pub data_path: PathBuf,
    /// `n` used when the top wallets request omits it (`AML_DEFAULT_TOP_N`)
    pub default_top_n: i64,
    /// Per-request timeout (`AML_REQUEST_TIMEOUT_SECS`)
    pub request_timeout: Duration,
    /// In-flight request cap (`AML_MAX_CONCURRENT_REQUESTS`)
    pub max_concurrent_requests: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_top_n: DEFAULT_TOP_N,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
        }
    }
}

impl ServerConfig {
    /// Build from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Hosting platforms set PORT; AML_PORT is for local runs
        let port = match lookup("PORT").or_else(|| lookup("AML_PORT")) {
            Some(raw) => parse_value("PORT", &raw)?,
            None => defaults.port,
        };

        let request_timeout = match lookup("AML_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_value("AML_REQUEST_TIMEOUT_SECS", &raw)?),
            None => defaults.request_timeout,
        };

        let max_concurrent_requests = match lookup("AML_MAX_CONCURRENT_REQUESTS") {
            Some(raw) => {
                let value: usize = parse_value("AML_MAX_CONCURRENT_REQUESTS", &raw)?;
                if value == 0 {
                    return Err(AppError::invalid_config("AML_MAX_CONCURRENT_REQUESTS", &raw));
                }
                value
            }
            None => defaults.max_concurrent_requests,
        };

        let config = Self {
            host: lookup("AML_HOST").unwrap_or(defaults.host),
            port,
            data_path: lookup("AML_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            default_top_n: match lookup("AML_DEFAULT_TOP_N") {
                Some(raw) => parse_value("AML_DEFAULT_TOP_N", &raw)?,
                None => defaults.default_top_n,
            },
            request_timeout,
            max_concurrent_requests,
        };

        info!(
            data_path = %config.data_path.display(),
            default_top_n = config.default_top_n,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// `host:port` string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid_config(key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/wallet_scores.csv"));
        assert_eq!(config.default_top_n, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_port_prefers_platform_variable() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("PORT", "9000"), ("AML_PORT", "7000")]))
                .unwrap();
        assert_eq!(config.port, 9000);

        let config = ServerConfig::from_lookup(lookup_from(&[("AML_PORT", "7000")])).unwrap();
        assert_eq!(config.port, 7000);
        assert_eq!(config.bind_address(), "0.0.0.0:7000");
    }

    #[test]
    fn test_invalid_value_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("AML_DEFAULT_TOP_N", "five")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);

        let err =
            ServerConfig::from_lookup(lookup_from(&[("AML_MAX_CONCURRENT_REQUESTS", "0")]))
                .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }
}
