//! Reconciler for `turbot_grant_activation`.

use super::grant::suppress_if_aka_matches;
use super::{Reconciler, ResourceData, ResourceKind};
use crate::client::Client;
use crate::Error;

/// Reconciles grant activations.
///
/// Fields: `grant` (grant id), `resource` (aka); computed `resource_akas`.
/// The `resource` diff is suppressed the same way as for grants.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrantActivationReconciler;

#[async_trait::async_trait]
impl Reconciler for GrantActivationReconciler {
    fn kind(&self) -> ResourceKind {
        ResourceKind::GrantActivation
    }

    async fn create(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let resource = data.get_str("resource")?.to_string();
        let activation = client
            .active_grants()
            .activate(data.get_str("grant")?, &resource)
            .await?;
        data.set_id(activation.turbot.id.as_str());

        let akas = client.resources().akas(&resource).await?;
        data.set("resource_akas", akas);
        Ok(())
    }

    async fn read(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let id = data.require_id()?.to_string();
        let activation = match client.active_grants().read(&id).await {
            Ok(activation) => activation,
            Err(e) if e.is_not_found() => {
                tracing::debug!(id = %id, "grant activation no longer exists");
                data.clear_id();
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let akas = client.resources().akas(&activation.turbot.resource_id).await?;
        data.set("grant", activation.turbot.grant_id);
        data.set("resource", activation.turbot.resource_id);
        data.set("resource_akas", akas);
        Ok(())
    }

    async fn delete(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let id = data.require_id()?.to_string();
        client.active_grants().deactivate(&id).await?;
        data.clear_id();
        Ok(())
    }

    async fn exists(&self, client: &Client, data: &ResourceData) -> Result<bool, Error> {
        client.active_grants().exists(data.require_id()?).await
    }

    fn suppress_diff(&self, field: &str, _old: &str, new: &str, data: &ResourceData) -> bool {
        field == "resource" && suppress_if_aka_matches(new, data)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::transport::MockTransport;
    use crate::Credentials;

    const ACCOUNT: &str = "arn:aws:::123456789012";

    fn setup() -> (Arc<MockTransport>, Client) {
        let mock = Arc::new(MockTransport::new());
        let client = Client::builder()
            .credentials(Credentials::new("ak", "sk", "example.cloud.turbot.com"))
            .transport(mock.clone())
            .build()
            .unwrap();
        (mock, client)
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let (mock, client) = setup();
        let akas = json!({"resource": {"turbot": {"id": "14", "akas": [ACCOUNT]}}});

        mock.push_data(json!({"activeGrant": {"turbot": {"id": "5", "grantId": "99", "resourceId": "14"}}}))
            .push_data(akas.clone());
        let mut data = ResourceData::new().with("grant", "99").with("resource", ACCOUNT);
        GrantActivationReconciler.create(&client, &mut data).await.unwrap();
        assert_eq!(data.id(), Some("5"));
        assert_eq!(mock.requests()[0].variables["input"]["grant"], "99");

        mock.push_data(json!({"activeGrant": {"turbot": {"id": "5", "grantId": "99", "resourceId": "14"}}}))
            .push_data(akas);
        GrantActivationReconciler.read(&client, &mut data).await.unwrap();
        assert_eq!(data.get_str("resource").unwrap(), "14");
        assert!(GrantActivationReconciler.suppress_diff("resource", "14", ACCOUNT, &data));

        mock.push_data(json!({"activeGrant": {"turbot": {"id": "5"}}}));
        GrantActivationReconciler.delete(&client, &mut data).await.unwrap();
        assert_eq!(data.id(), None);
    }

    #[tokio::test]
    async fn test_read_not_found_clears_id() {
        let (mock, client) = setup();
        mock.push_error(Error::from_api_message("Not found: active grant 5"));

        let mut data = ResourceData::with_id("5");
        GrantActivationReconciler.read(&client, &mut data).await.unwrap();
        assert_eq!(data.id(), None);
    }

    #[tokio::test]
    async fn test_read_other_error_keeps_id() {
        let (mock, client) = setup();
        mock.push_error(Error::from_api_message("Internal error"));

        let mut data = ResourceData::with_id("5");
        assert!(GrantActivationReconciler.read(&client, &mut data).await.is_err());
        assert_eq!(data.id(), Some("5"));
    }
}
