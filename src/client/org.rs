//! Client for a single GitHub organization.

use super::fetch::{HttpFetcher, JsonFetcher};
use crate::access::access_nested_str;
use crate::cache::Memoized;
use crate::config::{Config, DEFAULT_API_URL};
use crate::error::ClientResult;
use crate::metrics::{Endpoint, Metrics};
use crate::models::Repository;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Lists the public repositories of one organization.
///
/// The organization payload and the repos URL derived from it are fetched at
/// most once per client and cached for its lifetime. Repository listings are
/// fetched fresh on every call.
///
/// Memoization is unsynchronized, so a client must not be shared between
/// threads; create one per thread instead.
pub struct OrgClient {
    /// Organization login, inserted verbatim into the org URL
    org_name: String,

    /// API root (no trailing slash)
    base_url: String,

    fetcher: Arc<dyn JsonFetcher>,

    metrics: Metrics,

    org: Memoized<Value>,

    repos_url: Memoized<String>,
}

impl OrgClient {
    /// Create a client for `org_name` against the public GitHub API.
    pub fn new(org_name: impl Into<String>, fetcher: impl JsonFetcher + 'static) -> Self {
        Self::with_base_url(org_name, DEFAULT_API_URL, fetcher)
    }

    /// Create a client against a different API root (useful for testing).
    pub fn with_base_url(
        org_name: impl Into<String>,
        base_url: impl Into<String>,
        fetcher: impl JsonFetcher + 'static,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            org_name: org_name.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher: Arc::new(fetcher),
            metrics: Metrics::new(),
            org: Memoized::new(),
            repos_url: Memoized::new(),
        }
    }

    /// Create a client that talks HTTP according to `config`.
    pub fn from_config(org_name: impl Into<String>, config: &Config) -> Self {
        Self::with_base_url(
            org_name,
            config.github_api_url.clone(),
            HttpFetcher::new(config),
        )
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// Request and listing counters for this client.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// URL of the organization resource.
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.base_url, self.org_name)
    }

    /// The organization payload, fetched on first access.
    ///
    /// A failed fetch is returned to the caller and not cached.
    pub fn org(&self) -> ClientResult<&Value> {
        self.org.get_or_try_init(|| {
            let url = self.org_url();
            tracing::info!("Fetching organization {} from {}", self.org_name, url);
            self.fetch(Endpoint::Org, &url)
        })
    }

    /// The `repos_url` field of the organization payload.
    ///
    /// Fails with a lookup error naming `repos_url` if the payload lacks a
    /// string under that key.
    pub fn public_repos_url(&self) -> ClientResult<&str> {
        let url = self.repos_url.get_or_try_init(|| -> ClientResult<String> {
            let org = self.org()?;
            Ok(access_nested_str(org, &["repos_url"])?.to_string())
        })?;
        Ok(url.as_str())
    }

    /// The raw repository listing. Fetched on every call.
    pub fn repos_payload(&self) -> ClientResult<Value> {
        let url = self.public_repos_url()?;
        tracing::debug!("Listing repositories for {}", self.org_name);
        self.fetch(Endpoint::Repos, url)
    }

    fn fetch(&self, endpoint: Endpoint, url: &str) -> ClientResult<Value> {
        let result = self.fetcher.get_json(url);
        self.metrics.record_request(endpoint, result.is_ok());
        result
    }

    /// Typed view of the repository listing, in upstream order.
    pub fn repositories(&self) -> ClientResult<Vec<Repository>> {
        let records = self.repo_records()?;
        let repos = records
            .iter()
            .map(Repository::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(repos)
    }

    /// Names of all public repositories, in upstream order.
    pub fn public_repos(&self) -> ClientResult<Vec<String>> {
        self.list_repo_names(None)
    }

    /// Names of the public repositories whose license key equals `license`.
    ///
    /// `null` or an empty string means no filter. A license that is not a
    /// string matches nothing.
    pub fn public_repos_with_license(&self, license: impl Into<Value>) -> ClientResult<Vec<String>> {
        let license = license.into();
        let filter = match &license {
            Value::Null => None,
            Value::String(key) if key.is_empty() => None,
            _ => Some(&license),
        };
        self.list_repo_names(filter)
    }

    /// Whether `repo` declares a license whose key equals `license_key`.
    ///
    /// The comparison is exact and case-sensitive. Returns `false` when the
    /// record has no license, the license has no key, or `license_key` is not
    /// a string.
    pub fn has_license(repo: &Value, license_key: impl Into<Value>) -> bool {
        license_matches(repo, &license_key.into())
    }

    fn repo_records(&self) -> ClientResult<Vec<Value>> {
        let payload = self.repos_payload()?;
        Ok(serde_json::from_value(payload)?)
    }

    fn list_repo_names(&self, license: Option<&Value>) -> ClientResult<Vec<String>> {
        let records = self.repo_records()?;

        let mut names = Vec::with_capacity(records.len());
        for repo in &records {
            if let Some(license) = license {
                if !license_matches(repo, license) {
                    continue;
                }
            }
            names.push(access_nested_str(repo, &["name"])?.to_string());
        }

        self.metrics
            .record_listing(names.len(), records.len() - names.len());
        Ok(names)
    }
}

fn license_matches(repo: &Value, license_key: &Value) -> bool {
    let Some(wanted) = license_key.as_str() else {
        return false;
    };

    access_nested_str(repo, &["license", "key"])
        .map(|key| key == wanted)
        .unwrap_or(false)
}

impl fmt::Debug for OrgClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrgClient")
            .field("org_name", &self.org_name)
            .field("base_url", &self.base_url)
            .field("org_cached", &self.org.is_set())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RouteTable;
    use crate::error::ClientError;
    use serde_json::json;

    const REPOS_URL: &str = "www.yes.com";

    fn repos_fixture() -> Value {
        json!([
            {"name": "Jeff", "license": {"key": "a"}},
            {"name": "Bobb", "license": {"key": "b"}},
            {"name": "Suee"}
        ])
    }

    fn client_with_repos(org: &str) -> (OrgClient, RouteTable) {
        let routes = RouteTable::new()
            .with_route(
                format!("https://api.github.com/orgs/{}", org),
                json!({"repos_url": REPOS_URL}),
            )
            .with_route(REPOS_URL, repos_fixture());
        (OrgClient::new(org, routes.clone()), routes)
    }

    #[test]
    fn test_org() {
        for (org, expected) in [("google", json!({"google": true})), ("abc", json!({"abc": true}))] {
            let url = format!("https://api.github.com/orgs/{}", org);
            let routes = RouteTable::new().with_route(url.clone(), expected.clone());
            let client = OrgClient::new(org, routes.clone());

            assert_eq!(client.org().unwrap(), &expected);
            assert_eq!(client.org().unwrap(), &expected);
            assert_eq!(routes.call_count(&url), 1);
            assert_eq!(routes.total_calls(), 1);
        }
    }

    #[test]
    fn test_org_url() {
        let client = OrgClient::new("google", RouteTable::new());
        assert_eq!(client.org_url(), "https://api.github.com/orgs/google");

        let client = OrgClient::with_base_url("google", "http://localhost:1234/", RouteTable::new());
        assert_eq!(client.org_url(), "http://localhost:1234/orgs/google");
    }

    #[test]
    fn test_org_failure_is_not_cached() {
        let routes = RouteTable::new();
        let client = OrgClient::new("late", routes.clone());

        assert!(matches!(client.org(), Err(ClientError::NoRoute(_))));

        routes.insert("https://api.github.com/orgs/late", json!({"login": "late"}));
        assert_eq!(client.org().unwrap(), &json!({"login": "late"}));
        assert_eq!(routes.total_calls(), 2);

        let snapshot = client.metrics().snapshot();
        assert_eq!(snapshot.org_requests, 2);
        assert_eq!(snapshot.failed_requests, 1);
    }

    #[test]
    fn test_public_repos_url() {
        let (client, routes) = client_with_repos("test_org");

        assert_eq!(client.public_repos_url().unwrap(), REPOS_URL);
        assert_eq!(client.public_repos_url().unwrap(), REPOS_URL);
        assert_eq!(routes.total_calls(), 1);
    }

    #[test]
    fn test_public_repos_url_missing() {
        let routes = RouteTable::new()
            .with_route("https://api.github.com/orgs/bare", json!({"login": "bare"}));
        let client = OrgClient::new("bare", routes);

        match client.public_repos_url() {
            Err(ClientError::Lookup(err)) => assert_eq!(err.key, "repos_url"),
            other => panic!("Expected Lookup error, got: {:?}", other),
        }
    }

    #[test]
    fn test_public_repos() {
        let (client, routes) = client_with_repos("test_org");

        assert_eq!(client.public_repos().unwrap(), vec!["Jeff", "Bobb", "Suee"]);
        assert_eq!(client.public_repos_with_license("a").unwrap(), vec!["Jeff"]);
        assert!(client.public_repos_with_license("c").unwrap().is_empty());
        assert!(client.public_repos_with_license(45).unwrap().is_empty());

        // Listings are refetched per call, the org is not.
        assert_eq!(routes.call_count(REPOS_URL), 4);
        assert_eq!(routes.call_count("https://api.github.com/orgs/test_org"), 1);
    }

    #[test]
    fn test_public_repos_empty_filter_is_unfiltered() {
        let (client, _routes) = client_with_repos("test_org");

        assert_eq!(client.public_repos_with_license("").unwrap().len(), 3);
        assert_eq!(client.public_repos_with_license(Value::Null).unwrap().len(), 3);
    }

    #[test]
    fn test_public_repos_sees_upstream_changes() {
        let (client, routes) = client_with_repos("test_org");
        assert_eq!(client.public_repos().unwrap().len(), 3);

        routes.insert(REPOS_URL, json!([{"name": "Solo"}]));
        assert_eq!(client.public_repos().unwrap(), vec!["Solo"]);
    }

    #[test]
    fn test_public_repos_missing_name() {
        let routes = RouteTable::new()
            .with_route("https://api.github.com/orgs/o", json!({"repos_url": "r"}))
            .with_route("r", json!([{"name": "ok"}, {"id": 2}]));
        let client = OrgClient::new("o", routes);

        match client.public_repos() {
            Err(ClientError::Lookup(err)) => assert_eq!(err.key, "name"),
            other => panic!("Expected Lookup error, got: {:?}", other),
        }
    }

    #[test]
    fn test_public_repos_rejects_non_array_listing() {
        let routes = RouteTable::new()
            .with_route("https://api.github.com/orgs/o", json!({"repos_url": "r"}))
            .with_route("r", json!({"message": "Not Found"}));
        let client = OrgClient::new("o", routes);

        assert!(matches!(client.public_repos(), Err(ClientError::JsonError(_))));
    }

    #[test]
    fn test_repositories() {
        let (client, _routes) = client_with_repos("test_org");

        let repos = client.repositories().unwrap();
        let keys: Vec<Option<&str>> = repos.iter().map(|r| r.license_key()).collect();
        assert_eq!(keys, vec![Some("a"), Some("b"), None]);
    }

    #[test]
    fn test_metrics_count_listed_repos() {
        let (client, _routes) = client_with_repos("test_org");

        client.public_repos().unwrap();
        client.public_repos_with_license("b").unwrap();

        let snapshot = client.metrics().snapshot();
        assert_eq!(snapshot.org_requests, 1);
        assert_eq!(snapshot.repos_requests, 2);
        assert_eq!(snapshot.repos_listed, 4);
        assert_eq!(snapshot.repos_filtered_out, 2);
        assert_eq!(snapshot.failed_requests, 0);
    }

    #[test]
    fn test_has_license() {
        let cases = [
            (json!({"license": {"key": "my_license"}}), "my_license", true),
            (json!({"license": {"key": "other_license"}}), "my_license", false),
            (json!({"license": {"key": "MY_LICENSE"}}), "my_license", false),
            (json!({"license": {"name": "My License"}}), "my_license", false),
            (json!({"license": null}), "my_license", false),
            (json!({"name": "no-license"}), "my_license", false),
        ];

        for (repo, key, expected) in cases {
            assert_eq!(OrgClient::has_license(&repo, key), expected, "{}", repo);
        }
    }

    #[test]
    fn test_has_license_ill_typed_key() {
        let repo = json!({"license": {"key": "45"}});
        assert!(!OrgClient::has_license(&repo, 45));
        assert!(!OrgClient::has_license(&repo, json!(["45"])));
    }
}
