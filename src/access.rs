//! Nested lookups into loosely-typed JSON payloads.

use crate::error::LookupError;
use serde_json::Value;

/// Walk `map` along `path`, indexing one key at a time.
///
/// An empty path returns `map` itself. The first key that is absent, or that
/// is applied to something other than a JSON object, is reported in the
/// returned [`LookupError`].
///
/// ```
/// use github_org_client::access_nested_map;
/// use serde_json::json;
///
/// let map = json!({"a": {"b": 2}});
/// assert_eq!(access_nested_map(&map, &["a", "b"]).unwrap(), &json!(2));
/// assert_eq!(access_nested_map(&map, &["a", "c"]).unwrap_err().key, "c");
/// ```
pub fn access_nested_map<'a, K>(map: &'a Value, path: &[K]) -> Result<&'a Value, LookupError>
where
    K: AsRef<str>,
{
    path.iter().try_fold(map, |current, key| {
        let key = key.as_ref();
        current
            .as_object()
            .and_then(|object| object.get(key))
            .ok_or_else(|| LookupError::new(key))
    })
}

/// Like [`access_nested_map`], but requires the value at the end of the path
/// to be a string.
pub fn access_nested_str<'a, K>(map: &'a Value, path: &[K]) -> Result<&'a str, LookupError>
where
    K: AsRef<str>,
{
    let value = access_nested_map(map, path)?;
    value.as_str().ok_or_else(|| {
        // A non-string leaf is as unusable as a missing one; name the last key.
        let key = path.last().map(|k| k.as_ref()).unwrap_or_default();
        LookupError::new(key)
    })
}
