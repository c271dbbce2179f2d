//! Token endpoint discovery.
//!
//! CredHub advertises its authorization server in the unauthenticated
//! `/info` document.  The OAuth2 endpoints hang off that URL.

use serde::Deserialize;
use tracing::debug;

use super::{Method, StoreRequest, Transport};
use crate::errors::{CredHubError, Result};

const INFO_PATH: &str = "/info";

/// OAuth2 endpoints of the store's authorization server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEndpoint {
    pub auth_url: String,
    pub token_url: String,
}

impl AuthEndpoint {
    /// Derive the endpoints from an authorization server base URL.
    pub fn from_server_url(url: &str) -> Self {
        let base = url.trim_end_matches('/');
        Self {
            auth_url: format!("{base}/oauth/authorize"),
            token_url: format!("{base}/oauth/token"),
        }
    }
}

#[derive(Deserialize)]
struct InfoDocument {
    #[serde(rename = "auth-server")]
    auth_server: AuthServer,
}

#[derive(Deserialize)]
struct AuthServer {
    url: String,
}

/// Resolve the authorization server endpoints advertised by the store.
///
/// `transport` does not need to be authenticated.
pub fn discover_auth_endpoint(transport: &dyn Transport) -> Result<AuthEndpoint> {
    let response = transport.execute(StoreRequest::new(Method::Get, INFO_PATH))?;
    if response.status != 200 {
        return Err(CredHubError::UnexpectedStatus {
            expected: 200,
            actual: response.status,
        });
    }

    let info: InfoDocument = serde_json::from_slice(&response.body)
        .map_err(|e| CredHubError::decoding("info", e))?;
    if info.auth_server.url.is_empty() {
        return Err(CredHubError::decoding("info", "auth-server url is empty"));
    }

    debug!(auth_server = %info.auth_server.url, "discovered authorization server");
    Ok(AuthEndpoint::from_server_url(&info.auth_server.url))
}
