//! Fetching JSON documents over HTTP.
//!
//! [`JsonFetcher`] is the seam between the organization client and the
//! network. [`HttpFetcher`] is the production implementation; tests swap in a
//! [`RouteTable`](super::RouteTable).

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use serde_json::Value;
use std::error::Error as _;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Something that can GET a URL and hand back the decoded JSON body.
pub trait JsonFetcher: Send + Sync {
    /// Fetch `url` and decode its body. The result may be an object, an
    /// array or a scalar, depending on the endpoint.
    fn get_json(&self, url: &str) -> ClientResult<Value>;
}

/// Blocking HTTP implementation of [`JsonFetcher`] built on `ureq`.
///
/// One GET per call, no retries and no caching.
#[derive(Clone)]
pub struct HttpFetcher {
    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// User-Agent header value
    user_agent: String,
}

impl HttpFetcher {
    /// Create an HttpFetcher from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            agent: Arc::new(agent),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Map a ureq error to a ClientError.
    fn map_error(&self, error: ureq::Error) -> ClientError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    404 => ClientError::NotFound(message),
                    _ => ClientError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                let io_kind = transport
                    .source()
                    .and_then(|source| source.downcast_ref::<io::Error>())
                    .map(io::Error::kind);

                match io_kind {
                    Some(kind) if is_timeout(kind) => ClientError::Timeout,
                    // Display carries the URL, the failure kind and its cause.
                    _ => ClientError::HttpError(transport.to_string()),
                }
            }
        }
    }
}

fn is_timeout(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl JsonFetcher for HttpFetcher {
    fn get_json(&self, url: &str) -> ClientResult<Value> {
        tracing::debug!("GET {}", url);

        let response = match self
            .agent
            .get(url)
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", &self.user_agent)
            .call()
        {
            Ok(response) => response,
            Err(e) => {
                let err = self.map_error(e);
                tracing::warn!("GET {} failed: {}", url, err);
                return Err(err);
            }
        };

        let body = response.into_string().map_err(|e| {
            if is_timeout(e.kind()) {
                ClientError::Timeout
            } else {
                ClientError::HttpError(format!("{}: reading body: {}", url, e))
            }
        })?;

        serde_json::from_str(&body).map_err(ClientError::JsonError)
    }
}

/// Fetch `url` with a default [`HttpFetcher`] and decode the JSON body.
pub fn get_json(url: &str) -> ClientResult<Value> {
    HttpFetcher::default().get_json(url)
}
