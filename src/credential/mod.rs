//! Credential module: the data model shared by every operation.
//!
//! This module provides:
//! - Type tags and typed values (`value`)
//! - The `Credential` envelope and find-result summaries (`entity`)
//! - Access-control entries (`permission`)
//! - Options for server-side generation (`generate`)

pub mod entity;
pub mod generate;
pub mod permission;
pub mod value;

// Re-export the most commonly used items.
pub(crate) use entity::WireCredential;
pub use entity::{Credential, CredentialSummary};
pub use generate::GenerationParameters;
pub use permission::{CredentialPermissions, Operation, Permission};
pub use value::{
    CertificateValue, CredentialType, CredentialValue, RsaValue, SshValue, UserValue,
};
