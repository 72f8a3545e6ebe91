//! Policy setting operations.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::Client;
use crate::transport::GraphqlRequest;
use crate::types::PolicySetting;
use crate::Error;

use super::queries;

/// Mutable fields of a policy setting write.
///
/// Exactly one of `value` and `value_source` is normally set: the API
/// decides by validation which form a given policy type accepts. Empty
/// strings are treated as unset and never sent.
///
/// ## Example
///
/// ```rust
/// use turbot_provider::api::PolicySettingInput;
///
/// let input = PolicySettingInput::builder()
///     .value("Skip")
///     .precedence("required")
///     .note("")
///     .build();
///
/// let retry = input.clone().into_value_source();
/// assert_eq!(retry.value, None);
/// assert_eq!(retry.value_source.as_deref(), Some("Skip"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct PolicySettingInput {
    /// Typed value.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub value: Option<String>,

    /// YAML source of the value.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub value_source: Option<String>,

    /// Precedence, `required` or `recommended`.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub precedence: Option<String>,

    /// Nunjucks template computing the value.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub template: Option<String>,

    /// GraphQL query feeding the template.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub template_input: Option<String>,

    /// Free-text note.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub note: Option<String>,

    /// Start of the validity window.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub valid_from_timestamp: Option<String>,

    /// End of the validity window.
    #[builder(into)]
    #[serde(skip_serializing_if = "is_blank")]
    pub valid_to_timestamp: Option<String>,
}

impl PolicySettingInput {
    /// Moves `value` into `value_source`, for the YAML form of a write.
    #[must_use]
    pub fn into_value_source(mut self) -> Self {
        self.value_source = self.value.take();
        self
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Client for policy setting operations.
///
/// Access via [`Client::policy_settings`].
#[derive(Clone)]
pub struct PolicySettingsClient {
    client: Client,
}

impl PolicySettingsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a policy setting for `policy_type` on `resource`.
    ///
    /// Both are accepted as id or aka.
    pub async fn create(
        &self,
        policy_type: &str,
        resource: &str,
        input: &PolicySettingInput,
    ) -> Result<PolicySetting, Error> {
        let mut variables = json!({ "input": input });
        variables["input"]["type"] = json!(policy_type);
        variables["input"]["resource"] = json!(resource);

        let request =
            GraphqlRequest::new(queries::create_policy_setting()).with_variables(variables);
        self.client.inner().execute_field(&request, "policySetting").await
    }

    /// Reads a policy setting by id.
    pub async fn read(&self, id: &str) -> Result<PolicySetting, Error> {
        let request = GraphqlRequest::new(queries::read_policy_setting())
            .with_variables(json!({ "id": id }));
        self.client.inner().execute_field(&request, "policySetting").await
    }

    /// Updates a policy setting.
    pub async fn update(
        &self,
        id: &str,
        input: &PolicySettingInput,
    ) -> Result<PolicySetting, Error> {
        let mut variables = json!({ "input": input });
        variables["input"]["id"] = json!(id);

        let request =
            GraphqlRequest::new(queries::update_policy_setting()).with_variables(variables);
        self.client.inner().execute_field(&request, "policySetting").await
    }

    /// Deletes a policy setting.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let request = GraphqlRequest::new(queries::DELETE_POLICY_SETTING)
            .with_variables(json!({ "input": { "id": id } }));
        self.client.inner().execute::<serde_json::Value>(&request).await?;
        Ok(())
    }

    /// Returns whether a policy setting exists.
    ///
    /// Not found maps to `false`; any other error is returned.
    pub async fn exists(&self, id: &str) -> Result<bool, Error> {
        match self.read(id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Finds the setting made directly on `resource` for `policy_type`.
    ///
    /// Returns `None` when the resource has no setting of its own.
    pub async fn find(
        &self,
        policy_type: &str,
        resource: &str,
    ) -> Result<Option<PolicySetting>, Error> {
        #[derive(Deserialize)]
        struct Page {
            #[serde(default)]
            items: Vec<PolicySetting>,
        }

        let filter = format!(
            "policyTypeId:{} resourceId:{} level:self",
            policy_type, resource
        );
        let request = GraphqlRequest::new(queries::find_policy_settings())
            .with_variables(json!({ "filter": [filter] }));
        let page: Page = self
            .client
            .inner()
            .execute_field(&request, "policySettings")
            .await?;
        Ok(page.items.into_iter().next())
    }
}

impl std::fmt::Debug for PolicySettingsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicySettingsClient").finish_non_exhaustive()
    }
}
