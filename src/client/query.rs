//! Read-only operations: find, get and list.

use serde::Deserialize;

use super::{decode_body, Client, DATA_PATH};
use crate::credential::{Credential, CredentialSummary, WireCredential};
use crate::errors::{CredHubError, Result};
use crate::transport::{Method, StoreRequest};

#[derive(Deserialize)]
struct FindResults {
    #[serde(default)]
    credentials: Vec<CredentialSummary>,
}

#[derive(Deserialize)]
struct DataResults {
    #[serde(default)]
    data: Vec<WireCredential>,
}

#[derive(Deserialize)]
struct PathResults {
    #[serde(default)]
    paths: Vec<PathEntry>,
}

#[derive(Deserialize)]
struct PathEntry {
    path: String,
}

impl Client {
    /// Find every credential whose name lies under `path`.
    ///
    /// Fails with `NotFound` when nothing matches.
    pub fn find_by_path(&self, path: &str) -> Result<Vec<CredentialSummary>> {
        let request = StoreRequest::new(Method::Get, DATA_PATH).query("path", path);
        let body = self.exchange(request, 200, path)?;
        let results: FindResults = decode_body(&body, "find results")?;

        if results.credentials.is_empty() {
            return Err(not_found(path));
        }
        Ok(results.credentials)
    }

    /// Find every credential whose name contains `partial`.
    ///
    /// An empty result is not an error.
    pub fn find_by_partial_name(&self, partial: &str) -> Result<Vec<CredentialSummary>> {
        let request = StoreRequest::new(Method::Get, DATA_PATH).query("name-like", partial);
        let body = self.exchange(request, 200, partial)?;
        let results: FindResults = decode_body(&body, "find results")?;
        Ok(results.credentials)
    }

    /// Every version stored under `name`, most recent first.
    pub fn get_all_by_name(&self, name: &str) -> Result<Vec<Credential>> {
        let request = StoreRequest::new(Method::Get, DATA_PATH).query("name", name);
        self.get_versions(request, name)
    }

    /// The most recent version stored under `name`.
    pub fn get_latest_by_name(&self, name: &str) -> Result<Credential> {
        let request = StoreRequest::new(Method::Get, DATA_PATH)
            .query("name", name)
            .query("current", "true");
        self.get_versions(request, name)?
            .into_iter()
            .next()
            .ok_or_else(|| not_found(name))
    }

    /// The `count` most recent versions under `name`, most recent first.
    ///
    /// Returns fewer when fewer exist.  `count` must be at least one.
    pub fn get_versions_by_name(&self, name: &str, count: usize) -> Result<Vec<Credential>> {
        if count == 0 {
            return Err(CredHubError::InvalidArgument(
                "version count must be at least 1".into(),
            ));
        }

        let request = StoreRequest::new(Method::Get, DATA_PATH)
            .query("name", name)
            .query("versions", count.to_string());
        let mut versions = self.get_versions(request, name)?;
        versions.truncate(count);
        Ok(versions)
    }

    /// The single version with store-assigned `id`.
    pub fn get_by_id(&self, id: &str) -> Result<Credential> {
        if id.is_empty() {
            return Err(CredHubError::InvalidArgument(
                "credential id cannot be empty".into(),
            ));
        }
        // The id becomes one path segment; only unreserved URL characters fit.
        if let Some(bad) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')))
        {
            return Err(CredHubError::InvalidArgument(format!(
                "credential id '{id}' contains '{bad}', which is not allowed in a path segment"
            )));
        }

        let request = StoreRequest::new(Method::Get, format!("{DATA_PATH}/{id}"));
        let body = self.exchange(request, 200, id)?;
        super::decode_credential(&body)
    }

    /// Every distinct path prefix known to the store.
    pub fn list_all_paths(&self) -> Result<Vec<String>> {
        let request = StoreRequest::new(Method::Get, DATA_PATH).query("paths", "true");
        let body = self.exchange(request, 200, "paths")?;
        let results: PathResults = decode_body(&body, "path list")?;
        Ok(results.paths.into_iter().map(|p| p.path).collect())
    }

    /// Fetch, decode and order a `data` listing.  Empty means `NotFound`.
    fn get_versions(&self, request: StoreRequest, name: &str) -> Result<Vec<Credential>> {
        let body = self.exchange(request, 200, name)?;
        let results: DataResults = decode_body(&body, "credential list")?;
        if results.data.is_empty() {
            return Err(not_found(name));
        }

        let mut versions = results
            .data
            .into_iter()
            .map(Credential::try_from)
            .collect::<Result<Vec<_>>>()?;

        // Stable, so versions without a timestamp keep the store's order.
        versions.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(versions)
    }
}

fn not_found(target: &str) -> CredHubError {
    CredHubError::NotFound {
        target: target.to_string(),
        expected: 200,
    }
}
