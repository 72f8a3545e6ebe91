//! Grant activation operations.

use serde_json::json;

use crate::client::Client;
use crate::transport::GraphqlRequest;
use crate::types::ActiveGrant;
use crate::Error;

use super::queries;

/// Client for grant activations.
///
/// Access via [`Client::active_grants`].
#[derive(Clone)]
pub struct ActiveGrantsClient {
    client: Client,
}

impl ActiveGrantsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Activates `grant` on `resource` (id or aka).
    pub async fn activate(&self, grant: &str, resource: &str) -> Result<ActiveGrant, Error> {
        let request = GraphqlRequest::new(queries::ACTIVATE_GRANT)
            .with_variables(json!({ "input": { "grant": grant, "resource": resource } }));
        self.client.inner().execute_field(&request, "activeGrant").await
    }

    /// Reads an activation by id.
    pub async fn read(&self, id: &str) -> Result<ActiveGrant, Error> {
        let request =
            GraphqlRequest::new(queries::READ_ACTIVE_GRANT).with_variables(json!({ "id": id }));
        self.client.inner().execute_field(&request, "activeGrant").await
    }

    /// Deactivates a grant activation.
    pub async fn deactivate(&self, id: &str) -> Result<(), Error> {
        let request = GraphqlRequest::new(queries::DEACTIVATE_GRANT)
            .with_variables(json!({ "input": { "id": id } }));
        self.client.inner().execute::<serde_json::Value>(&request).await?;
        Ok(())
    }

    /// Returns whether an activation exists.
    pub async fn exists(&self, id: &str) -> Result<bool, Error> {
        match self.read(id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for ActiveGrantsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveGrantsClient").finish_non_exhaustive()
    }
}
