//! Access control list operations.

use serde::Serialize;

use super::command::validate_name;
use super::{decode_body, encode_body, Client, PERMISSIONS_PATH};
use crate::credential::{CredentialPermissions, Permission};
use crate::errors::{CredHubError, Result};
use crate::transport::{Method, StoreRequest};

#[derive(Serialize)]
struct AddPermissionsRequest<'a> {
    credential_name: &'a str,
    permissions: &'a [Permission],
}

impl Client {
    /// The access control list of `name`.
    pub fn get_permissions(&self, name: &str) -> Result<CredentialPermissions> {
        validate_name(name)?;
        let request =
            StoreRequest::new(Method::Get, PERMISSIONS_PATH).query("credential_name", name);
        let body = self.exchange(request, 200, name)?;
        decode_body(&body, "permissions")
    }

    /// Grant `permissions` on an existing credential.
    pub fn add_permissions(&self, name: &str, permissions: &[Permission]) -> Result<()> {
        validate_name(name)?;
        if permissions.is_empty() {
            return Err(CredHubError::InvalidArgument(
                "at least one permission is required".into(),
            ));
        }

        let body = encode_body(&AddPermissionsRequest {
            credential_name: name,
            permissions,
        })?;
        let request = StoreRequest::new(Method::Post, PERMISSIONS_PATH).json_body(body);
        self.exchange(request, 201, name)?;
        Ok(())
    }

    /// Revoke every permission `actor` holds on `name`.
    pub fn delete_permissions(&self, name: &str, actor: &str) -> Result<()> {
        validate_name(name)?;
        if actor.is_empty() {
            return Err(CredHubError::InvalidArgument("actor cannot be empty".into()));
        }

        let request = StoreRequest::new(Method::Delete, PERMISSIONS_PATH)
            .query("credential_name", name)
            .query("actor", actor);
        self.exchange(request, 204, name)?;
        Ok(())
    }
}
