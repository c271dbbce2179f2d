//! Typed credential values.
//!
//! The store ships every value as an untyped JSON payload next to a
//! `type` tag.  `CredentialValue` is the closed set of shapes those
//! payloads take; decoding is driven strictly by the tag, never by
//! sniffing the payload's structure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::errors::{CredHubError, Result};

/// The closed set of credential type tags understood by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    Value,
    Password,
    Json,
    User,
    Ssh,
    Rsa,
    Certificate,
}

impl CredentialType {
    pub const ALL: [CredentialType; 7] = [
        CredentialType::Value,
        CredentialType::Password,
        CredentialType::Json,
        CredentialType::User,
        CredentialType::Ssh,
        CredentialType::Rsa,
        CredentialType::Certificate,
    ];

    /// The tag as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialType::Value => "value",
            CredentialType::Password => "password",
            CredentialType::Json => "json",
            CredentialType::User => "user",
            CredentialType::Ssh => "ssh",
            CredentialType::Rsa => "rsa",
            CredentialType::Certificate => "certificate",
        }
    }

    /// Whether the store knows how to generate values of this type.
    pub fn is_generatable(&self) -> bool {
        !matches!(self, CredentialType::Value | CredentialType::Json)
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialType {
    type Err = CredHubError;

    fn from_str(s: &str) -> Result<Self> {
        CredentialType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CredHubError::decoding(s, "unrecognized credential type"))
    }
}

/// A `user` credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserValue {
    pub username: String,
    pub password: String,
    /// Computed by the store; omitted when writing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

/// An `ssh` keypair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshValue {
    pub public_key: String,
    pub private_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_fingerprint: Option<String>,
}

/// An `rsa` keypair, both halves PEM-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaValue {
    pub public_key: String,
    pub private_key: String,
}

/// A `certificate` credential. Self-signed certificates carry no CA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>,
    pub certificate: String,
    pub private_key: String,
}

/// The value of one credential version, shaped by its type.
///
/// Equality is structural and variant-aware.  For `Json` it compares the
/// decoded trees, so two objects holding the same members in a different
/// key order are equal.
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialValue {
    Value(String),
    Password(String),
    Json(JsonValue),
    User(UserValue),
    Ssh(SshValue),
    Rsa(RsaValue),
    Certificate(CertificateValue),
}

impl CredentialValue {
    /// The type tag this value is stored under.
    pub fn credential_type(&self) -> CredentialType {
        match self {
            CredentialValue::Value(_) => CredentialType::Value,
            CredentialValue::Password(_) => CredentialType::Password,
            CredentialValue::Json(_) => CredentialType::Json,
            CredentialValue::User(_) => CredentialType::User,
            CredentialValue::Ssh(_) => CredentialType::Ssh,
            CredentialValue::Rsa(_) => CredentialType::Rsa,
            CredentialValue::Certificate(_) => CredentialType::Certificate,
        }
    }

    /// Decode an untyped payload according to `kind`.
    ///
    /// Fails with `Decoding` when the payload does not have the shape the
    /// tag demands (e.g. a `user` payload without `username`).
    pub fn decode(kind: CredentialType, payload: JsonValue) -> Result<Self> {
        let value = match kind {
            CredentialType::Value => CredentialValue::Value(decode_shape(kind, payload)?),
            CredentialType::Password => CredentialValue::Password(decode_shape(kind, payload)?),
            CredentialType::Json => CredentialValue::Json(payload),
            CredentialType::User => CredentialValue::User(decode_shape(kind, payload)?),
            CredentialType::Ssh => CredentialValue::Ssh(decode_shape(kind, payload)?),
            CredentialType::Rsa => CredentialValue::Rsa(decode_shape(kind, payload)?),
            CredentialType::Certificate => {
                CredentialValue::Certificate(decode_shape(kind, payload)?)
            }
        };
        Ok(value)
    }

    /// Encode into the untyped payload used in the wire envelope.
    pub fn encode(&self) -> Result<JsonValue> {
        let payload = match self {
            CredentialValue::Value(s) | CredentialValue::Password(s) => {
                JsonValue::String(s.clone())
            }
            CredentialValue::Json(v) => v.clone(),
            CredentialValue::User(v) => encode_shape(v)?,
            CredentialValue::Ssh(v) => encode_shape(v)?,
            CredentialValue::Rsa(v) => encode_shape(v)?,
            CredentialValue::Certificate(v) => encode_shape(v)?,
        };
        Ok(payload)
    }
}

impl From<UserValue> for CredentialValue {
    fn from(v: UserValue) -> Self {
        CredentialValue::User(v)
    }
}

impl From<SshValue> for CredentialValue {
    fn from(v: SshValue) -> Self {
        CredentialValue::Ssh(v)
    }
}

impl From<RsaValue> for CredentialValue {
    fn from(v: RsaValue) -> Self {
        CredentialValue::Rsa(v)
    }
}

impl From<CertificateValue> for CredentialValue {
    fn from(v: CertificateValue) -> Self {
        CredentialValue::Certificate(v)
    }
}

fn decode_shape<T: serde::de::DeserializeOwned>(
    kind: CredentialType,
    payload: JsonValue,
) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| CredHubError::decoding(kind.as_str(), e))
}

fn encode_shape<T: Serialize>(value: &T) -> Result<JsonValue> {
    serde_json::to_value(value).map_err(|e| CredHubError::Serialization(e.to_string()))
}
