//! Synchronous client for the GitHub organizations API.
//!
//! [`OrgClient`] composes a [`JsonFetcher`] transport with per-instance
//! memoization. Production code uses [`HttpFetcher`] (blocking `ureq`);
//! tests inject a [`RouteTable`] of canned payloads.

mod fetch;
mod org;
mod routes;

pub use fetch::{get_json, HttpFetcher, JsonFetcher};
pub use org::OrgClient;
pub use routes::RouteTable;
