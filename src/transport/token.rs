//! Bearer credentials for authenticated transports.
//!
//! Token acquisition and refresh are the caller's business: implement
//! `TokenSource` over whatever OAuth2 client you use and hand it to the
//! transport.  `StaticToken` covers the case of a token obtained out of
//! band.

use zeroize::Zeroizing;

use crate::errors::TransportError;

/// Supplies the current access token for each request.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Result<String, TransportError>;
}

/// A fixed access token, zeroized when dropped.
pub struct StaticToken(Zeroizing<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Result<String, TransportError> {
        if self.0.is_empty() {
            return Err(TransportError::new("access token is empty"));
        }
        Ok(self.0.as_str().to_string())
    }
}

impl<F> TokenSource for F
where
    F: Fn() -> Result<String, TransportError> + Send + Sync,
{
    fn token(&self) -> Result<String, TransportError> {
        self()
    }
}

/// Format a token as an `Authorization` header value.
pub(crate) fn bearer(token: &str) -> Zeroizing<String> {
    Zeroizing::new(format!("Bearer {token}"))
}
