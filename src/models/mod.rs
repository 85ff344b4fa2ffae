//! Data models for GitHub entities.
//!
//! Payloads arrive as loose JSON; these types are the typed views the client
//! extracts from them.

pub mod repository;

pub use repository::{License, Repository};
