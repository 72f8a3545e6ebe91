//! Generic resource operations.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::json;

use crate::client::Client;
use crate::transport::GraphqlRequest;
use crate::types::{Resource, ResourceMetadata, Value};
use crate::Error;

use super::queries;

/// Client for resources with caller-defined data.
///
/// Access via [`Client::resources`]. Resource data is shaped by the
/// resource type schema and kept as [`Value`]s.
#[derive(Clone)]
pub struct ResourcesClient {
    client: Client,
}

impl ResourcesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a resource of `resource_type` under `parent`.
    pub async fn create(
        &self,
        parent: &str,
        resource_type: &str,
        data: &BTreeMap<String, Value>,
    ) -> Result<Resource, Error> {
        let request = GraphqlRequest::new(queries::create_resource()).with_variables(json!({
            "input": { "parent": parent, "type": resource_type, "data": data }
        }));
        self.client.inner().execute_field(&request, "resource").await
    }

    /// Reads a resource by id or aka.
    pub async fn read(&self, id: &str) -> Result<Resource, Error> {
        let request =
            GraphqlRequest::new(queries::read_resource()).with_variables(json!({ "id": id }));
        self.client.inner().execute_field(&request, "resource").await
    }

    /// Replaces the data of a resource.
    pub async fn update(
        &self,
        id: &str,
        data: &BTreeMap<String, Value>,
    ) -> Result<Resource, Error> {
        let request = GraphqlRequest::new(queries::update_resource())
            .with_variables(json!({ "input": { "id": id, "data": data } }));
        self.client.inner().execute_field(&request, "resource").await
    }

    /// Deletes a resource.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let request = GraphqlRequest::new(queries::DELETE_RESOURCE)
            .with_variables(json!({ "input": { "id": id } }));
        self.client.inner().execute::<serde_json::Value>(&request).await?;
        Ok(())
    }

    /// Returns whether a resource exists.
    pub async fn exists(&self, id: &str) -> Result<bool, Error> {
        match self.read(id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Lists resources matching a Turbot filter string.
    ///
    /// ```rust,no_run
    /// # async fn example(client: turbot_provider::Client) -> Result<(), turbot_provider::Error> {
    /// let folders = client
    ///     .resources()
    ///     .list("resourceType:tmod:@turbot/turbot#/resource/types/folder")
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, filter: &str) -> Result<Vec<Resource>, Error> {
        #[derive(Deserialize)]
        struct Page {
            #[serde(default)]
            items: Vec<Resource>,
        }

        let request = GraphqlRequest::new(queries::list_resources())
            .with_variables(json!({ "filter": [filter] }));
        let page: Page = self
            .client
            .inner()
            .execute_field(&request, "resourceList")
            .await?;
        Ok(page.items)
    }

    /// Returns the akas of a resource given its id or any of its akas.
    pub async fn akas(&self, id: &str) -> Result<Vec<String>, Error> {
        #[derive(Deserialize)]
        struct Akas {
            #[serde(default)]
            turbot: ResourceMetadata,
        }

        let request =
            GraphqlRequest::new(queries::RESOURCE_AKAS).with_variables(json!({ "id": id }));
        let resource: Akas = self.client.inner().execute_field(&request, "resource").await?;
        Ok(resource.turbot.akas)
    }
}

impl std::fmt::Debug for ResourcesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourcesClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::transport::MockTransport;
    use crate::Credentials;

    const FOLDER: &str = "tmod:@turbot/turbot#/resource/types/folder";

    fn setup() -> (Arc<MockTransport>, ResourcesClient) {
        let mock = Arc::new(MockTransport::new());
        let client = Client::builder()
            .credentials(Credentials::new("ak", "sk", "example.cloud.turbot.com"))
            .transport(mock.clone())
            .build()
            .unwrap();
        (mock, client.resources())
    }

    #[tokio::test]
    async fn test_create_resource() {
        let (mock, resources) = setup();
        mock.push_data(json!({"resource": {
            "data": {"title": "Finance"},
            "turbot": {"id": "42", "parentId": "1", "akas": ["tmod:@turbot/turbot#/"]}
        }}));

        let mut data = BTreeMap::new();
        data.insert("title".to_string(), Value::from("Finance"));
        let created = resources.create("tmod:@turbot/turbot#/", FOLDER, &data).await.unwrap();
        assert_eq!(created.turbot.id, "42");

        let input = &mock.last_request().unwrap().variables["input"];
        assert_eq!(input["type"], FOLDER);
        assert_eq!(input["data"]["title"], "Finance");
    }

    #[tokio::test]
    async fn test_akas() {
        let (mock, resources) = setup();
        mock.push_data(json!({"resource": {
            "turbot": {"id": "42", "akas": ["arn:aws:::folder/42", "tmod:@turbot/turbot#/"]}
        }}));
        let akas = resources.akas("42").await.unwrap();
        assert_eq!(akas, vec!["arn:aws:::folder/42", "tmod:@turbot/turbot#/"]);
    }

    #[tokio::test]
    async fn test_list() {
        let (mock, resources) = setup();
        mock.push_data(json!({"resourceList": {"items": [
            {"data": {"title": "a"}, "turbot": {"id": "1"}},
            {"data": {"title": "b"}, "turbot": {"id": "2"}}
        ]}}));
        let list = resources.list(&format!("resourceType:{}", FOLDER)).await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].data["title"].as_str().unwrap(), "b");
    }

    #[tokio::test]
    async fn test_read_not_found_error() {
        let (mock, resources) = setup();
        mock.push_error(Error::from_api_message("Not Found: resource 42"));
        assert!(!resources.exists("42").await.unwrap());
    }
}
