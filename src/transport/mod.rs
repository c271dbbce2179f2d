//! Transport module: the seam between the client and the network.
//!
//! The client only builds `StoreRequest`s and reads `StoreResponse`s; a
//! `Transport` implementation performs the exchange and is responsible for
//! TLS, timeouts and attaching bearer credentials.
//!
//! This module provides:
//! - The `Transport` trait and its request/response types
//! - `TokenSource` and `StaticToken` for bearer credentials (`token`)
//! - Token endpoint discovery (`discovery`)
//! - A blocking `ureq` implementation (`http`, feature `http-transport`)

pub mod discovery;
#[cfg(feature = "http-transport")]
pub mod http;
pub mod token;

use std::fmt;

use crate::errors::TransportError;

pub use discovery::{discover_auth_endpoint, AuthEndpoint};
#[cfg(feature = "http-transport")]
pub use http::HttpTransport;
pub use token::{StaticToken, TokenSource};

/// The HTTP verbs the store API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the store's base URL.
///
/// Query values are unencoded; the transport encodes them.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl StoreRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body and the matching content type.
    pub fn json_body(self, body: Vec<u8>) -> Self {
        let mut req = self.header("Content-Type", "application/json");
        req.body = Some(body);
        req
    }

    /// Look up a query parameter by name.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A response from the store.  Any status code is a valid response; only
/// failures below HTTP are transport errors.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl StoreResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self::new(status, Vec::new())
    }
}

/// Performs authorized request/response exchanges with the store.
///
/// Implementations must be safe to share across threads; the client
/// holds one behind an `Arc` and never serializes calls through it.
pub trait Transport: Send + Sync {
    fn execute(&self, request: StoreRequest) -> Result<StoreResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: StoreRequest) -> Result<StoreResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: StoreRequest) -> Result<StoreResponse, TransportError> {
        (**self).execute(request)
    }
}
