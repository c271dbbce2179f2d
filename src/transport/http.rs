//! Blocking HTTP transport backed by `ureq`.
//!
//! Behind the `http-transport` feature flag (on by default).  Attaches a
//! bearer token from an optional `TokenSource` to every request and hands
//! every HTTP status back as a response so the client can map it.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use ureq::{Agent, RequestBuilder};
use zeroize::Zeroizing;

use super::token::{bearer, TokenSource};
use super::{Method, StoreRequest, StoreResponse, Transport};
use crate::config::Settings;
use crate::errors::TransportError;

/// `Transport` over a shared `ureq::Agent`.
#[derive(Clone)]
pub struct HttpTransport {
    agent: Agent,
    base_url: String,
    user_agent: String,
    tokens: Option<Arc<dyn TokenSource>>,
}

impl HttpTransport {
    /// Build an unauthenticated transport, e.g. for endpoint discovery.
    pub fn new(settings: &Settings) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(settings.timeout_secs)))
            .http_status_as_error(false)
            .build();

        Self {
            agent: Agent::new_with_config(config),
            base_url: settings.server_url.trim_end_matches('/').to_string(),
            user_agent: settings.user_agent.clone(),
            tokens: None,
        }
    }

    /// Build a transport that authorizes every request with `tokens`.
    pub fn with_token_source(settings: &Settings, tokens: impl TokenSource + 'static) -> Self {
        Self {
            tokens: Some(Arc::new(tokens)),
            ..Self::new(settings)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn prepare<B>(
        &self,
        mut builder: RequestBuilder<B>,
        request: &StoreRequest,
    ) -> Result<RequestBuilder<B>, TransportError> {
        builder = builder.header("User-Agent", self.user_agent.as_str());
        if let Some(tokens) = &self.tokens {
            let token = Zeroizing::new(tokens.token()?);
            builder = builder.header("Authorization", bearer(&token).as_str());
        }
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        for (key, value) in &request.query {
            builder = builder.query(key.as_str(), value.as_str());
        }
        Ok(builder)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: StoreRequest) -> Result<StoreResponse, TransportError> {
        let url = self.url(&request.path);
        let body = request.body.as_deref().unwrap_or_default();

        let result = match request.method {
            Method::Get => self.prepare(self.agent.get(&url), &request)?.call(),
            Method::Delete => self.prepare(self.agent.delete(&url), &request)?.call(),
            Method::Post => self.prepare(self.agent.post(&url), &request)?.send(body),
            Method::Put => self.prepare(self.agent.put(&url), &request)?.send(body),
        };

        let mut response = result.map_err(|e| {
            TransportError::with_source(format!("{} {} failed", request.method, request.path), e)
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_vec().map_err(|e| {
            TransportError::with_source(
                format!("reading response to {} {}", request.method, request.path),
                e,
            )
        })?;

        debug!(method = %request.method, path = %request.path, status, "store exchange");

        Ok(StoreResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.tokens.is_some())
            .finish()
    }
}
