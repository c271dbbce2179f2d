//! The CredHub client.
//!
//! `Client` is stateless: it holds the injected `Transport` and nothing
//! else, so it can be cloned and shared across threads freely.  Every
//! operation is exactly one request/response exchange.
//!
//! Operations are grouped by concern:
//! - Lookups: find, get, list (`query`)
//! - Writes: set, generate, regenerate, delete (`command`)
//! - Access control lists (`permissions`)

mod command;
mod permissions;
mod query;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::credential::{Credential, WireCredential};
use crate::errors::{CredHubError, Result};
use crate::transport::{StoreRequest, Transport};

pub(crate) const DATA_PATH: &str = "/api/v1/data";
pub(crate) const REGENERATE_PATH: &str = "/api/v1/regenerate";
pub(crate) const PERMISSIONS_PATH: &str = "/api/v1/permissions";

/// Handle for issuing operations against one CredHub server.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client over an already-authenticated transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Create a client over the bundled HTTP transport.
    ///
    /// Validates `settings` first; `tokens` supplies the bearer token for
    /// every request.
    #[cfg(feature = "http-transport")]
    pub fn from_settings(
        settings: &crate::config::Settings,
        tokens: impl crate::transport::TokenSource + 'static,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self::new(crate::transport::HttpTransport::with_token_source(
            settings, tokens,
        )))
    }

    // ------------------------------------------------------------------
    // Exchange helpers
    // ------------------------------------------------------------------

    /// Perform one exchange and return the body if the status is `expected`.
    ///
    /// A 404 becomes `NotFound` naming `target`; any other status is
    /// `UnexpectedStatus` and the body is left unparsed.
    fn exchange(&self, request: StoreRequest, expected: u16, target: &str) -> Result<Vec<u8>> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.execute(request)?;

        match response.status {
            status if status == expected => {
                debug!(%method, %path, status, "request succeeded");
                Ok(response.body)
            }
            404 => {
                debug!(%method, %path, target, "not found");
                Err(CredHubError::NotFound {
                    target: target.to_string(),
                    expected,
                })
            }
            actual => {
                warn!(%method, %path, expected, actual, "unexpected status from store");
                Err(CredHubError::UnexpectedStatus { expected, actual })
            }
        }
    }
}

// ── Body codecs ──────────────────────────────────────────────────────

pub(crate) fn encode_body<T: Serialize>(body: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(|e| CredHubError::Serialization(e.to_string()))
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| CredHubError::decoding(what, e))
}

pub(crate) fn decode_credential(body: &[u8]) -> Result<Credential> {
    let wire: WireCredential = decode_body(body, "credential")?;
    Credential::try_from(wire)
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
