//! Configuration management for the GitHub organization client.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default root of the GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Configuration for the GitHub organization client.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub API base URL (default: https://api.github.com)
    pub github_api_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `GITHUB_API_BASE_URL`: Base URL for the GitHub API (default: https://api.github.com)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `GITHUB_USER_AGENT`: User-Agent header (default: github-org-client/<version>)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let github_api_url =
            env::var("GITHUB_API_BASE_URL").unwrap_or(defaults.github_api_url);

        // Validate API URL format
        if !github_api_url.starts_with("http://") && !github_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "GITHUB_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let user_agent = env::var("GITHUB_USER_AGENT").unwrap_or(defaults.user_agent);
        if user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "GITHUB_USER_AGENT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            github_api_url,
            request_timeout,
            user_agent,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            github_api_url: DEFAULT_API_URL.to_string(),
            request_timeout: 10,
            user_agent: concat!("github-org-client/", env!("CARGO_PKG_VERSION")).to_string(),
            log_level: "error".to_string(),
        }
    }
}
