//! Recorded GitHub payloads for the `google` organization.
//!
//! The org payload's `repos_url` points at the public API; tests that serve
//! the payloads from a local server rewrite it with [`org_payload_at`].

#![allow(dead_code)]

use serde_json::Value;

pub const ORG_NAME: &str = "google";
pub const ORG_URL: &str = "https://api.github.com/orgs/google";
pub const REPOS_URL: &str = "https://api.github.com/orgs/google/repos";

/// Every repository name in the listing, in upstream order.
pub const EXPECTED_REPOS: [&str; 9] = [
    "episodes.dart",
    "cpp-netlib",
    "dagger",
    "ios-webkit-debug-proxy",
    "google.github.io",
    "kratu",
    "build-debian-cloud",
    "traceur-compiler",
    "firmata.py",
];

/// The subset licensed under Apache 2.0.
pub const APACHE2_REPOS: [&str; 4] = ["dagger", "kratu", "traceur-compiler", "firmata.py"];

pub fn org_payload() -> Value {
    serde_json::from_str(include_str!("org_payload.json")).unwrap()
}

pub fn repos_payload() -> Value {
    serde_json::from_str(include_str!("repos_payload.json")).unwrap()
}

/// The org payload with `repos_url` pointing at `repos_url`.
pub fn org_payload_at(repos_url: &str) -> Value {
    let mut payload = org_payload();
    payload["repos_url"] = Value::String(repos_url.to_string());
    payload
}
