use thiserror::Error;

use crate::credential::CredentialType;

/// All errors that can occur when talking to CredHub.
#[derive(Debug, Error)]
pub enum CredHubError {
    // --- Payload errors ---
    #[error("Failed to decode {kind} credential: {reason}")]
    Decoding { kind: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- Status errors ---
    #[error("expected return code {expected}, got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },

    #[error("expected return code {expected}, got 404: '{target}' not found")]
    NotFound { target: String, expected: u16 },

    // --- Transport errors ---
    #[error(transparent)]
    Transport(#[from] TransportError),

    // --- Usage errors ---
    #[error("Credential holds a {actual} value, not {expected}")]
    WrongValueType {
        expected: CredentialType,
        actual: CredentialType,
    },

    #[error("Credential '{name}' is of type {existing}, cannot write a {proposed} version")]
    TypeMismatch {
        name: String,
        existing: CredentialType,
        proposed: CredentialType,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // --- Config errors ---
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CredHubError {
    /// Returns `true` for errors caused by an absent name, id or path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CredHubError::NotFound { .. })
    }

    pub(crate) fn decoding(kind: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        CredHubError::Decoding {
            kind: kind.into(),
            reason: reason.to_string(),
        }
    }
}

/// A failure below the HTTP status layer: connection, TLS, timeout or
/// token acquisition. Carried opaquely to the caller.
#[derive(Debug, Error)]
#[error("Transport error: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convenience type alias for CredHub results.
pub type Result<T> = std::result::Result<T, CredHubError>;
