//! Policy value lookups.

use serde_json::json;

use crate::client::Client;
use crate::transport::GraphqlRequest;
use crate::types::PolicyValue;
use crate::Error;

use super::queries;

/// Client for reading effective policy values.
///
/// Access via [`Client::policy_values`].
#[derive(Clone)]
pub struct PolicyValuesClient {
    client: Client,
}

impl PolicyValuesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Reads the effective value of `policy_type` on `resource`.
    pub async fn read(&self, policy_type: &str, resource: &str) -> Result<PolicyValue, Error> {
        let request = GraphqlRequest::new(queries::read_policy_value())
            .with_variables(json!({ "policyType": policy_type, "resource": resource }));
        self.client.inner().execute_field(&request, "policyValue").await
    }
}

impl std::fmt::Debug for PolicyValuesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyValuesClient").finish_non_exhaustive()
    }
}
