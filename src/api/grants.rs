//! Grant operations.

use serde_json::json;

use crate::client::Client;
use crate::transport::GraphqlRequest;
use crate::types::Grant;
use crate::Error;

use super::queries;

/// Client for permission grants.
///
/// Access via [`Client::grants`]. Grants are immutable: a change to any
/// property means delete and create.
#[derive(Clone)]
pub struct GrantsClient {
    client: Client,
}

impl GrantsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Grants `profile_id` a permission on `resource` (id or aka).
    pub async fn create(
        &self,
        profile_id: &str,
        resource: &str,
        permission_type: &str,
        permission_level: &str,
    ) -> Result<Grant, Error> {
        let request = GraphqlRequest::new(queries::CREATE_GRANT).with_variables(json!({
            "input": {
                "resource": resource,
                "identity": profile_id,
                "permissionTypeAka": permission_type,
                "permissionLevelAka": permission_level,
            }
        }));
        self.client.inner().execute_field(&request, "grant").await
    }

    /// Reads a grant by id.
    pub async fn read(&self, id: &str) -> Result<Grant, Error> {
        let request =
            GraphqlRequest::new(queries::READ_GRANT).with_variables(json!({ "id": id }));
        self.client.inner().execute_field(&request, "grant").await
    }

    /// Deletes a grant.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let request = GraphqlRequest::new(queries::DELETE_GRANT)
            .with_variables(json!({ "input": { "id": id } }));
        self.client.inner().execute::<serde_json::Value>(&request).await?;
        Ok(())
    }

    /// Returns whether a grant exists.
    pub async fn exists(&self, id: &str) -> Result<bool, Error> {
        match self.read(id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for GrantsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrantsClient").finish_non_exhaustive()
    }
}
