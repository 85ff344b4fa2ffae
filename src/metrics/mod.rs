//! Counters for organization lookups and repository listings.
//!
//! An [`OrgClient`](crate::OrgClient) records every fetch it issues, split by
//! endpoint, and how many repositories each listing kept or filtered out.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Which GitHub resource a request targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /orgs/{org}`
    Org,
    /// `GET {repos_url}`
    Repos,
}

#[derive(Debug, Default)]
struct Counters {
    org_requests: AtomicU64,
    repos_requests: AtomicU64,
    failed_requests: AtomicU64,
    repos_listed: AtomicU64,
    repos_filtered_out: AtomicU64,
}

/// Shared handle to a client's counters. Clones observe the same values.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

/// Point-in-time copy of [`Metrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub org_requests: u64,
    pub repos_requests: u64,
    pub failed_requests: u64,
    pub repos_listed: u64,
    pub repos_filtered_out: u64,
}

impl MetricsSnapshot {
    pub fn total_requests(&self) -> u64 {
        self.org_requests + self.repos_requests
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one request to `endpoint`, and a failure if it did not succeed.
    pub fn record_request(&self, endpoint: Endpoint, succeeded: bool) {
        let counter = match endpoint {
            Endpoint::Org => &self.counters.org_requests,
            Endpoint::Repos => &self.counters.repos_requests,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        if !succeeded {
            self.counters.failed_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Count the outcome of one listing: names returned and records dropped
    /// by the license filter.
    pub fn record_listing(&self, kept: usize, filtered_out: usize) {
        self.counters
            .repos_listed
            .fetch_add(kept as u64, Ordering::Relaxed);
        self.counters
            .repos_filtered_out
            .fetch_add(filtered_out as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let c = &self.counters;
        MetricsSnapshot {
            org_requests: c.org_requests.load(Ordering::Relaxed),
            repos_requests: c.repos_requests.load(Ordering::Relaxed),
            failed_requests: c.failed_requests.load(Ordering::Relaxed),
            repos_listed: c.repos_listed.load(Ordering::Relaxed),
            repos_filtered_out: c.repos_filtered_out.load(Ordering::Relaxed),
        }
    }
}
