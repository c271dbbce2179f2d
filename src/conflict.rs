//! Write-conflict policy for `set`.
//!
//! Decides, for a proposed value and an overwrite mode, whether the store
//! should append a new version under a name or hand back the latest one.
//! The CredHub server evaluates this itself from the `mode` field of a set
//! request; `resolve_write` is the same policy expressed locally so that
//! store fakes and offline callers agree with the server on the outcome.

use serde::{Deserialize, Serialize};

use crate::credential::{Credential, CredentialValue};
use crate::errors::{CredHubError, Result};

/// How `set` treats a name that already has versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverwriteMode {
    /// Always write a new version.
    Overwrite,
    /// Keep the latest version if one exists.
    NoOverwrite,
    /// Write a new version only if the value changed.
    Converge,
}

impl OverwriteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverwriteMode::Overwrite => "overwrite",
            OverwriteMode::NoOverwrite => "no-overwrite",
            OverwriteMode::Converge => "converge",
        }
    }
}

impl std::fmt::Display for OverwriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a write against the store's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDecision {
    /// Append a new version holding the proposed value.
    CreateVersion,
    /// Return the latest existing version untouched.
    KeepExisting,
}

/// Resolve a proposed write of `proposed` under `name`.
///
/// `latest` is the most recent existing version, if any.  All versions of
/// a name share one type, so creating a version of a different type fails
/// with `TypeMismatch`.  Keeping the existing version never fails.
pub fn resolve_write(
    mode: OverwriteMode,
    name: &str,
    latest: Option<&Credential>,
    proposed: &CredentialValue,
) -> Result<WriteDecision> {
    let Some(existing) = latest else {
        return Ok(WriteDecision::CreateVersion);
    };

    let decision = match mode {
        OverwriteMode::Overwrite => WriteDecision::CreateVersion,
        OverwriteMode::NoOverwrite => WriteDecision::KeepExisting,
        OverwriteMode::Converge if existing.value == *proposed => WriteDecision::KeepExisting,
        OverwriteMode::Converge => WriteDecision::CreateVersion,
    };

    if decision == WriteDecision::CreateVersion
        && existing.credential_type() != proposed.credential_type()
    {
        return Err(CredHubError::TypeMismatch {
            name: name.to_string(),
            existing: existing.credential_type(),
            proposed: proposed.credential_type(),
        });
    }

    Ok(decision)
}
