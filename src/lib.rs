//! GitHub Org Client - a minimal, synchronous client for listing an
//! organization's public repositories and filtering them by license.
//!
//! # Architecture
//!
//! - **access**: Nested key lookups into loosely-typed JSON payloads
//! - **cache**: Per-instance memoization cells
//! - **client**: JSON transport trait, HTTP and routing-table transports, and the organization client
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Per-endpoint request counters and listing outcomes
//! - **models**: Typed views over repository records

pub mod access;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;

pub use access::{access_nested_map, access_nested_str};
pub use cache::Memoized;
pub use client::{get_json, HttpFetcher, JsonFetcher, OrgClient, RouteTable};
pub use config::Config;
pub use error::{ClientError, ClientResult, ConfigError, LookupError};
pub use metrics::{Endpoint, Metrics, MetricsSnapshot};
pub use models::{License, Repository};
