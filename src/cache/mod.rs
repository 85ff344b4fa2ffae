//! Caching utilities for the GitHub organization client.
//!
//! This module provides a set-once cache cell used to memoize per-instance
//! computations such as the organization payload.

pub mod memoized;

pub use memoized::Memoized;
