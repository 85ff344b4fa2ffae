//! Canned-response transport for tests.
//!
//! A [`RouteTable`] maps exact URLs to JSON payloads and records how many
//! times each URL was requested, so tests can drive the client without any
//! network access and assert on call counts.

use super::fetch::JsonFetcher;
use crate::error::{ClientError, ClientResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A [`JsonFetcher`] serving fixed payloads from an exact-URL routing table.
///
/// Clones share the same routes and counters.
///
/// # Example
/// ```
/// use github_org_client::{JsonFetcher, RouteTable};
/// use serde_json::json;
///
/// let routes = RouteTable::new().with_route("https://example.com/a", json!({"ok": true}));
/// assert_eq!(routes.get_json("https://example.com/a").unwrap(), json!({"ok": true}));
/// assert!(routes.get_json("https://example.com/b").is_err());
/// assert_eq!(routes.call_count("https://example.com/a"), 1);
/// ```
#[derive(Clone, Default)]
pub struct RouteTable {
    routes: Arc<Mutex<HashMap<String, Value>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RouteTable::insert`].
    pub fn with_route(self, url: impl Into<String>, payload: Value) -> Self {
        self.insert(url, payload);
        self
    }

    /// Map `url` to `payload`, replacing any previous payload.
    pub fn insert(&self, url: impl Into<String>, payload: Value) {
        lock(&self.routes).insert(url.into(), payload);
    }

    /// How many times `url` has been requested, mapped or not.
    pub fn call_count(&self, url: &str) -> usize {
        lock(&self.call_counts).get(url).copied().unwrap_or(0)
    }

    /// Total requests across every URL.
    pub fn total_calls(&self) -> usize {
        lock(&self.call_counts).values().sum()
    }

    fn track_call(&self, url: &str) {
        *lock(&self.call_counts).entry(url.to_string()).or_insert(0) += 1;
    }
}

impl JsonFetcher for RouteTable {
    fn get_json(&self, url: &str) -> ClientResult<Value> {
        self.track_call(url);

        lock(&self.routes).get(url).cloned().ok_or_else(|| {
            tracing::debug!("no route for {}", url);
            ClientError::NoRoute(url.to_string())
        })
    }
}

// A panic while holding the lock cannot leave a map half-updated.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
