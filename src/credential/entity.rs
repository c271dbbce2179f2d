//! The credential envelope and its wire representation.
//!
//! A `Credential` is one immutable version of a named secret.  The store
//! assigns `id` and `created`; a freshly built credential carries neither
//! until it has been written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::value::{
    CertificateValue, CredentialType, CredentialValue, RsaValue, SshValue, UserValue,
};
use crate::errors::{CredHubError, Result};

/// One version of a named credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    /// Store-assigned version id (empty until written).
    pub id: String,

    /// Hierarchical name, e.g. `/concourse/common/db-password`.
    pub name: String,

    /// The typed value.  The credential's type tag is derived from it.
    pub value: CredentialValue,

    /// When the store created this version.
    pub created: Option<DateTime<Utc>>,
}

impl Credential {
    /// Build an unsaved credential to pass to `Client::set`.
    pub fn new(name: impl Into<String>, value: impl Into<CredentialValue>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            value: value.into(),
            created: None,
        }
    }

    pub fn credential_type(&self) -> CredentialType {
        self.value.credential_type()
    }

    /// The string held by a `value` or `password` credential.
    pub fn value_as_str(&self) -> Result<&str> {
        match &self.value {
            CredentialValue::Value(s) | CredentialValue::Password(s) => Ok(s),
            other => Err(Self::wrong_type(CredentialType::Value, other)),
        }
    }

    pub fn value_as_json(&self) -> Result<&JsonValue> {
        match &self.value {
            CredentialValue::Json(v) => Ok(v),
            other => Err(Self::wrong_type(CredentialType::Json, other)),
        }
    }

    pub fn value_as_user(&self) -> Result<&UserValue> {
        match &self.value {
            CredentialValue::User(v) => Ok(v),
            other => Err(Self::wrong_type(CredentialType::User, other)),
        }
    }

    pub fn value_as_ssh(&self) -> Result<&SshValue> {
        match &self.value {
            CredentialValue::Ssh(v) => Ok(v),
            other => Err(Self::wrong_type(CredentialType::Ssh, other)),
        }
    }

    pub fn value_as_rsa(&self) -> Result<&RsaValue> {
        match &self.value {
            CredentialValue::Rsa(v) => Ok(v),
            other => Err(Self::wrong_type(CredentialType::Rsa, other)),
        }
    }

    pub fn value_as_certificate(&self) -> Result<&CertificateValue> {
        match &self.value {
            CredentialValue::Certificate(v) => Ok(v),
            other => Err(Self::wrong_type(CredentialType::Certificate, other)),
        }
    }

    fn wrong_type(expected: CredentialType, actual: &CredentialValue) -> CredHubError {
        CredHubError::WrongValueType {
            expected,
            actual: actual.credential_type(),
        }
    }
}

/// Name and timestamp of a credential, as returned by the find operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSummary {
    pub name: String,
    #[serde(rename = "version_created_at")]
    pub created: Option<DateTime<Utc>>,
}

// ── Wire envelope ────────────────────────────────────────────────────

/// The credential exactly as the store serializes it.
///
/// `kind` stays a plain string so an unknown tag is reported as a
/// decoding error rather than a generic JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WireCredential {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: JsonValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_created_at: Option<DateTime<Utc>>,
}

impl TryFrom<WireCredential> for Credential {
    type Error = CredHubError;

    fn try_from(wire: WireCredential) -> Result<Self> {
        let kind: CredentialType = wire.kind.parse()?;
        let value = CredentialValue::decode(kind, wire.value)?;
        Ok(Credential {
            id: wire.id,
            name: wire.name,
            value,
            created: wire.version_created_at,
        })
    }
}

impl TryFrom<&Credential> for WireCredential {
    type Error = CredHubError;

    fn try_from(cred: &Credential) -> Result<Self> {
        Ok(WireCredential {
            id: cred.id.clone(),
            name: cred.name.clone(),
            kind: cred.credential_type().as_str().to_string(),
            value: cred.value.encode()?,
            version_created_at: cred.created,
        })
    }
}
