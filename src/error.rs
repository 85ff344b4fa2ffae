//! Error types for the GitHub organization client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// A key along a lookup path could not be resolved.
///
/// Carries exactly the key that failed, so callers can tell which step of a
/// nested path was missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Key not found: {key:?}")]
pub struct LookupError {
    /// The key that could not be resolved
    pub key: String,
}

impl LookupError {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Errors that can occur when talking to the GitHub API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required field was missing from a payload
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// No canned payload is registered for the URL
    #[error("No route for URL: {0}")]
    NoRoute(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
