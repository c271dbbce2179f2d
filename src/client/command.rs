//! Write operations: set, generate, regenerate and delete.

use serde::Serialize;
use tracing::debug;

use super::{decode_credential, encode_body, Client, DATA_PATH, REGENERATE_PATH};
use crate::conflict::OverwriteMode;
use crate::credential::{
    Credential, CredentialType, GenerationParameters, Permission, WireCredential,
};
use crate::errors::{CredHubError, Result};
use crate::transport::{Method, StoreRequest};

#[derive(Serialize)]
struct SetRequest {
    #[serde(flatten)]
    credential: WireCredential,
    mode: OverwriteMode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    additional_permissions: Vec<Permission>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: CredentialType,
    parameters: &'a GenerationParameters,
}

#[derive(Serialize)]
struct RegenerateRequest<'a> {
    name: &'a str,
}

impl Client {
    /// Write `credential` under its name, resolving any existing version
    /// according to `mode`.
    ///
    /// Returns the version the store ends up holding: a new one, or the
    /// existing one when `mode` keeps it.  `additional_permissions` are
    /// only applied when a credential is created.
    pub fn set(
        &self,
        credential: &Credential,
        mode: OverwriteMode,
        additional_permissions: &[Permission],
    ) -> Result<Credential> {
        validate_name(&credential.name)?;

        let mut wire = WireCredential::try_from(credential)?;
        wire.id.clear();
        wire.version_created_at = None;

        let body = encode_body(&SetRequest {
            credential: wire,
            mode,
            additional_permissions: additional_permissions.to_vec(),
        })?;

        debug!(name = %credential.name, %mode, "setting credential");
        let request = StoreRequest::new(Method::Put, DATA_PATH).json_body(body);
        let body = self.exchange(request, 200, &credential.name)?;
        decode_credential(&body)
    }

    /// Ask the store to generate a new credential of type `kind`.
    ///
    /// `parameters` are passed through untouched.  `value` and `json`
    /// credentials cannot be generated.
    pub fn generate(
        &self,
        name: &str,
        kind: CredentialType,
        parameters: &GenerationParameters,
    ) -> Result<Credential> {
        validate_name(name)?;
        if !kind.is_generatable() {
            return Err(CredHubError::InvalidArgument(format!(
                "credentials of type {kind} cannot be generated"
            )));
        }

        let body = encode_body(&GenerateRequest {
            name,
            kind,
            parameters,
        })?;

        debug!(name, %kind, "generating credential");
        let request = StoreRequest::new(Method::Post, DATA_PATH).json_body(body);
        let body = self.exchange(request, 200, name)?;
        decode_credential(&body)
    }

    /// Generate a new version of `name` with the parameters its latest
    /// version was generated with.
    ///
    /// The store refuses credentials that were set rather than generated.
    pub fn regenerate(&self, name: &str) -> Result<Credential> {
        validate_name(name)?;

        let body = encode_body(&RegenerateRequest { name })?;
        debug!(name, "regenerating credential");
        let request = StoreRequest::new(Method::Post, REGENERATE_PATH).json_body(body);
        let body = self.exchange(request, 200, name)?;
        decode_credential(&body)
    }

    /// Delete every version stored under `name`.
    pub fn delete(&self, name: &str) -> Result<()> {
        validate_name(name)?;

        debug!(name, "deleting credential");
        let request = StoreRequest::new(Method::Delete, DATA_PATH).query("name", name);
        self.exchange(request, 204, name)?;
        Ok(())
    }
}

pub(super) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CredHubError::InvalidArgument(
            "credential name cannot be empty".into(),
        ));
    }
    Ok(())
}
