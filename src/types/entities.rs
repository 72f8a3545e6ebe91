//! Domain entities decoded from Turbot API responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ActiveGrantMetadata, GrantMetadata, PolicyMetadata, ResourceMetadata, Value};

/// A policy setting: a value for a policy type on a resource.
///
/// `value` is the typed value and `value_source` its YAML source. The API
/// decides through validation which of the two forms a write must use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicySetting {
    /// Typed value, shaped by the policy type schema.
    pub value: Value,
    /// YAML source of the value.
    #[serde(deserialize_with = "super::nullable")]
    pub value_source: String,
    /// Whether this is the policy type's default setting.
    #[serde(deserialize_with = "super::nullable")]
    pub default: bool,
    /// Precedence level, e.g. `REQUIRED` or `RECOMMENDED`.
    #[serde(deserialize_with = "super::nullable")]
    pub precedence: String,
    /// Nunjucks template computing the value.
    #[serde(deserialize_with = "super::nullable")]
    pub template: String,
    /// GraphQL query feeding the template.
    #[serde(deserialize_with = "super::nullable")]
    pub template_input: String,
    /// Input used by calculated settings.
    #[serde(deserialize_with = "super::nullable")]
    pub input: String,
    /// Free-text note.
    #[serde(deserialize_with = "super::nullable")]
    pub note: String,
    /// Start of the validity window.
    #[serde(deserialize_with = "super::nullable")]
    pub valid_from_timestamp: String,
    /// End of the validity window.
    #[serde(deserialize_with = "super::nullable")]
    pub valid_to_timestamp: String,
    /// Metadata envelope.
    pub turbot: PolicyMetadata,
}

/// The effective value of a policy type on a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyValue {
    /// Effective value.
    pub value: Value,
    /// Precedence of the winning setting.
    #[serde(deserialize_with = "super::nullable")]
    pub precedence: String,
    /// Evaluation state, e.g. `ok` or `tbd`.
    #[serde(deserialize_with = "super::nullable")]
    pub state: String,
    /// Reason for the state.
    #[serde(deserialize_with = "super::nullable")]
    pub reason: String,
    /// Evaluation details.
    #[serde(deserialize_with = "super::nullable")]
    pub details: String,
    /// The setting the value was derived from.
    #[serde(deserialize_with = "super::nullable")]
    pub setting: PolicySetting,
    /// Metadata envelope.
    pub turbot: PolicyMetadata,
}

/// A permission grant of a profile on a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Grant {
    /// Metadata envelope.
    pub turbot: GrantMetadata,
    /// Id of the permission type (e.g. AWS, Turbot).
    #[serde(deserialize_with = "super::nullable")]
    pub permission_type_id: String,
    /// Id of the permission level (e.g. Owner, User).
    #[serde(deserialize_with = "super::nullable")]
    pub permission_level_id: String,
}

/// An activation of a grant on a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActiveGrant {
    /// Metadata envelope.
    pub turbot: ActiveGrantMetadata,
}

/// A generic resource with caller-defined data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resource {
    /// Metadata envelope.
    pub turbot: ResourceMetadata,
    /// Resource properties, shaped by the resource type schema.
    #[serde(deserialize_with = "super::nullable")]
    pub data: BTreeMap<String, Value>,
}
