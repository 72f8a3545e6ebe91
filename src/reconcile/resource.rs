//! Reconciler for `turbot_resource`.

use std::collections::BTreeMap;

use super::{Reconciler, ResourceData, ResourceKind};
use crate::client::Client;
use crate::types::Value;
use crate::Error;

/// Reconciles generic resources.
///
/// Fields: `parent` (aka), `type` (resource type aka), `data` (JSON object
/// text); computed `parent_akas`. The API may reorder or reformat `data`,
/// so its diff is suppressed when both sides decode to the same JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceReconciler;

impl ResourceReconciler {
    fn parse_data(data: &ResourceData) -> Result<BTreeMap<String, Value>, Error> {
        let text = data.get_str("data")?;
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(text).map_err(|e| {
            Error::invalid_argument(format!("field 'data': invalid JSON object: {}", e))
                .with_source(e)
        })
    }

    fn store_data(data: &mut ResourceData, fields: &BTreeMap<String, Value>) -> Result<(), Error> {
        let text = serde_json::to_string(fields).map_err(|e| {
            Error::invalid_response(format!("failed to encode resource data: {}", e))
        })?;
        data.set("data", text);
        Ok(())
    }
}

#[async_trait::async_trait]
impl Reconciler for ResourceReconciler {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Resource
    }

    async fn create(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let parent = data.get_str("parent")?.to_string();
        let fields = Self::parse_data(data)?;
        let resource = client
            .resources()
            .create(&parent, data.get_str("type")?, &fields)
            .await?;
        data.set_id(resource.turbot.id.as_str());

        let akas = client.resources().akas(&parent).await?;
        data.set("parent_akas", akas);
        Ok(())
    }

    async fn read(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let id = data.require_id()?.to_string();
        let resource = match client.resources().read(&id).await {
            Ok(resource) => resource,
            Err(e) if e.is_not_found() => {
                tracing::debug!(id = %id, "resource no longer exists");
                data.clear_id();
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let akas = client.resources().akas(&resource.turbot.parent_id).await?;
        Self::store_data(data, &resource.data)?;
        data.set("parent", resource.turbot.parent_id);
        data.set("parent_akas", akas);
        Ok(())
    }

    async fn update(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let id = data.require_id()?.to_string();
        let fields = Self::parse_data(data)?;
        client.resources().update(&id, &fields).await?;
        Ok(())
    }

    async fn delete(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let id = data.require_id()?.to_string();
        client.resources().delete(&id).await?;
        data.clear_id();
        Ok(())
    }

    async fn exists(&self, client: &Client, data: &ResourceData) -> Result<bool, Error> {
        client.resources().exists(data.require_id()?).await
    }

    fn suppress_diff(&self, field: &str, old: &str, new: &str, data: &ResourceData) -> bool {
        match field {
            "data" => json_equal(old, new),
            "parent" => data
                .get_string_list("parent_akas")
                .map(|akas| akas.iter().any(|aka| aka == new))
                .unwrap_or(false),
            _ => false,
        }
    }
}

fn json_equal(old: &str, new: &str) -> bool {
    match (
        serde_json::from_str::<serde_json::Value>(old),
        serde_json::from_str::<serde_json::Value>(new),
    ) {
        (Ok(old), Ok(new)) => old == new,
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use test_case::test_case;

    use super::*;
    use crate::transport::MockTransport;
    use crate::{Credentials, ErrorKind};

    const ROOT: &str = "tmod:@turbot/turbot#/";
    const FOLDER: &str = "tmod:@turbot/turbot#/resource/types/folder";

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
    async fn test_create_sends_decoded_data() {
        let (mock, client) = setup();
        mock.push_data(json!({"resource": {"turbot": {"id": "42", "parentId": "1"}}}))
            .push_data(json!({"resource": {"turbot": {"id": "1", "akas": [ROOT]}}}));

        let mut data = ResourceData::new()
            .with("parent", ROOT)
            .with("type", FOLDER)
            .with("data", r#"{"title": "Finance", "description": "Cost centre"}"#);
        ResourceReconciler.create(&client, &mut data).await.unwrap();

        assert_eq!(data.id(), Some("42"));
        let input = &mock.requests()[0].variables["input"];
        assert_eq!(input["data"]["title"], "Finance");
        assert_eq!(input["type"], FOLDER);
        assert_eq!(data.get_string_list("parent_akas").unwrap(), vec![ROOT]);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_json() {
        let (mock, client) = setup();
        let mut data = ResourceData::new().with("data", "{title:");
        let err = ResourceReconciler.create(&client, &mut data).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_read_and_suppress() {
        let (mock, client) = setup();
        mock.push_data(json!({"resource": {
            "data": {"title": "Finance", "description": "Cost centre"},
            "turbot": {"id": "42", "parentId": "1"}
        }}))
        .push_data(json!({"resource": {"turbot": {"id": "1", "akas": [ROOT]}}}));

        let mut data = ResourceData::with_id("42");
        ResourceReconciler.read(&client, &mut data).await.unwrap();

        let stored = data.get_str("data").unwrap().to_string();
        let configured = r#"{ "title": "Finance", "description": "Cost centre" }"#;
        assert!(ResourceReconciler.suppress_diff("data", &stored, configured, &data));
        assert!(ResourceReconciler.suppress_diff("parent", "1", ROOT, &data));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (mock, client) = setup();
        let mut data = ResourceData::with_id("42").with("data", r#"{"title": "Ops"}"#);

        mock.push_data(json!({"resource": {"turbot": {"id": "42"}}}));
        ResourceReconciler.update(&client, &mut data).await.unwrap();
        assert_eq!(mock.last_request().unwrap().variables["input"]["data"]["title"], "Ops");

        mock.push_data(json!({"resource": {"turbot": {"id": "42"}}}));
        ResourceReconciler.delete(&client, &mut data).await.unwrap();
        assert_eq!(data.id(), None);
    }

    #[test_case(r#"{"a":1,"b":2}"#, r#"{"b":2,"a":1}"# => true; "key order")]
    #[test_case(r#"{"a":1}"#, r#"{"a":2}"# => false; "different value")]
    #[test_case(r#"{"a":1}"#, "{a:1}" => false; "invalid new")]
    #[test_case("", r#"{"a":1}"# => false; "nothing stored")]
    fn test_json_equal(old: &str, new: &str) -> bool {
        json_equal(old, new)
    }
}
