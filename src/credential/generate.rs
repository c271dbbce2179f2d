//! Parameters for server-side credential generation.
//!
//! The store interprets the options; this side only carries them.  The
//! helper setters cover the common options but any key can be set with
//! [`GenerationParameters::set`].

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// An ordered option -> value mapping sent with a generate request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GenerationParameters(Map<String, JsonValue>);

impl GenerationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary option.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // ── Password / user options ──────────────────────────────────────

    pub fn length(self, length: u32) -> Self {
        self.set("length", length)
    }

    pub fn exclude_upper(self, exclude: bool) -> Self {
        self.set("exclude_upper", exclude)
    }

    pub fn exclude_lower(self, exclude: bool) -> Self {
        self.set("exclude_lower", exclude)
    }

    pub fn exclude_number(self, exclude: bool) -> Self {
        self.set("exclude_number", exclude)
    }

    pub fn include_special(self, include: bool) -> Self {
        self.set("include_special", include)
    }

    pub fn username(self, username: impl Into<String>) -> Self {
        self.set("username", username.into())
    }

    // ── Key / certificate options ────────────────────────────────────

    pub fn key_length(self, bits: u32) -> Self {
        self.set("key_length", bits)
    }

    pub fn common_name(self, cn: impl Into<String>) -> Self {
        self.set("common_name", cn.into())
    }

    /// Name of the CA credential that signs a generated certificate.
    pub fn ca(self, ca_name: impl Into<String>) -> Self {
        self.set("ca", ca_name.into())
    }

    pub fn is_ca(self, is_ca: bool) -> Self {
        self.set("is_ca", is_ca)
    }

    pub fn self_sign(self, self_sign: bool) -> Self {
        self.set("self_sign", self_sign)
    }

    /// Certificate validity in days.
    pub fn duration(self, days: u32) -> Self {
        self.set("duration", days)
    }
}

impl FromIterator<(String, JsonValue)> for GenerationParameters {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
