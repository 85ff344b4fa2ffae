//! Repository model extracted from a GitHub repository listing.

use crate::access::{access_nested_map, access_nested_str};
use crate::error::LookupError;
use serde::Serialize;
use serde_json::Value;

/// License metadata attached to a repository.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct License {
    /// Short license identifier (e.g. "apache-2.0")
    pub key: Option<String>,

    /// Human readable license name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// SPDX identifier (e.g. "Apache-2.0")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spdx_id: Option<String>,
}

/// A repository as listed under an organization.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Repository {
    /// Repository name
    pub name: String,

    /// Declared license, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

impl Repository {
    /// Extract the typed view from a raw repository record.
    ///
    /// Only `name` is required. Unknown fields are ignored, and a `license`
    /// that is absent, `null` or not an object reads as no license.
    pub fn from_value(record: &Value) -> Result<Self, LookupError> {
        let name = access_nested_str(record, &["name"])?.to_string();

        let license = access_nested_map(record, &["license"])
            .ok()
            .filter(|license| license.is_object())
            .map(|license| {
                let field = |key: &str| {
                    access_nested_str(license, &[key])
                        .ok()
                        .map(str::to_string)
                };
                License {
                    key: field("key"),
                    name: field("name"),
                    spdx_id: field("spdx_id"),
                }
            });

        Ok(Self { name, license })
    }

    /// The short license identifier, if one is declared.
    pub fn license_key(&self) -> Option<&str> {
        self.license.as_ref().and_then(|l| l.key.as_deref())
    }
}
