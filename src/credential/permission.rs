//! Access-control entries attached to a credential name.

use serde::{Deserialize, Serialize};

/// An operation an actor may be granted on a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Read,
    Write,
    Delete,
    ReadAcl,
    WriteAcl,
}

/// Grants `operations` on a credential to `actor`
/// (e.g. `uaa-user:<guid>` or `mtls-app:<guid>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub actor: String,
    pub operations: Vec<Operation>,
}

impl Permission {
    pub fn new(actor: impl Into<String>, operations: impl IntoIterator<Item = Operation>) -> Self {
        Self {
            actor: actor.into(),
            operations: operations.into_iter().collect(),
        }
    }

    pub fn allows(&self, op: Operation) -> bool {
        self.operations.contains(&op)
    }
}

/// The access-control list of one credential name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPermissions {
    pub credential_name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}
