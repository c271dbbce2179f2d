//! Client library for the CredHub credential store.
//!
//! ```rust,ignore
//! use credhub::{Client, Credential, OverwriteMode, Settings, StaticToken, UserValue};
//!
//! let settings = Settings::load(std::path::Path::new("."))?;
//! let client = Client::from_settings(&settings, StaticToken::new(token))?;
//!
//! let cred = Credential::new("/sample-set", UserValue {
//!     username: "me".into(),
//!     password: "super-secret".into(),
//!     password_hash: None,
//! });
//! let stored = client.set(&cred, OverwriteMode::Converge, &[])?;
//! ```

pub mod client;
pub mod config;
pub mod conflict;
pub mod credential;
pub mod errors;
pub mod transport;

pub use client::Client;
pub use config::Settings;
pub use conflict::{resolve_write, OverwriteMode, WriteDecision};
pub use credential::{
    CertificateValue, Credential, CredentialPermissions, CredentialSummary, CredentialType,
    CredentialValue, GenerationParameters, Operation, Permission, RsaValue, SshValue, UserValue,
};
pub use errors::{CredHubError, Result, TransportError};
#[cfg(feature = "http-transport")]
pub use transport::HttpTransport;
pub use transport::{
    discover_auth_endpoint, AuthEndpoint, Method, StaticToken, StoreRequest, StoreResponse,
    TokenSource, Transport,
};
