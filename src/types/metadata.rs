//! The `turbot` metadata envelope carried by every Turbot entity.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Value;

/// Metadata block of a Turbot resource.
///
/// `id` is the durable primary key and becomes the stored identity. `akas`
/// are mutable human-readable aliases: configuration references resources
/// by aka, but state always records the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceMetadata {
    /// Durable resource id.
    #[serde(deserialize_with = "super::nullable")]
    pub id: String,
    /// Id of the parent resource.
    #[serde(deserialize_with = "super::nullable")]
    pub parent_id: String,
    /// Alternate keys, e.g. `tmod:@turbot/turbot#/`.
    #[serde(deserialize_with = "super::nullable")]
    pub akas: Vec<String>,
    /// Custom metadata attached by mods.
    #[serde(deserialize_with = "super::nullable")]
    pub custom: BTreeMap<String, Value>,
    /// Resource metadata reported by the platform.
    #[serde(deserialize_with = "super::nullable")]
    pub metadata: BTreeMap<String, Value>,
    /// Resource tags.
    #[serde(deserialize_with = "super::nullable")]
    pub tags: BTreeMap<String, String>,
    /// Display title.
    #[serde(deserialize_with = "super::nullable")]
    pub title: String,
    /// Version of the resource record.
    #[serde(deserialize_with = "super::nullable")]
    pub version_id: String,
    /// Identity that performed the last change.
    #[serde(deserialize_with = "super::nullable")]
    pub actor_identity_id: String,
    /// Persona that performed the last change.
    #[serde(deserialize_with = "super::nullable")]
    pub actor_persona_id: String,
    /// Role that performed the last change.
    #[serde(deserialize_with = "super::nullable")]
    pub actor_role_id: String,
    /// Aka of the parent resource.
    #[serde(deserialize_with = "super::nullable")]
    pub resource_parent_aka: String,
    /// When the resource was created.
    pub create_timestamp: Option<DateTime<Utc>>,
    /// When the resource was deleted, if it was.
    pub delete_timestamp: Option<DateTime<Utc>>,
    /// When the resource was last updated.
    pub update_timestamp: Option<DateTime<Utc>>,
    /// Hierarchy path of ids from the root.
    #[serde(deserialize_with = "super::nullable")]
    pub path: String,
    /// Resource groups the resource belongs to.
    #[serde(deserialize_with = "super::nullable")]
    pub resource_group_ids: Vec<String>,
    /// Id of the resource type.
    #[serde(deserialize_with = "super::nullable")]
    pub resource_type_id: String,
    /// Lifecycle state, e.g. `active`.
    #[serde(deserialize_with = "super::nullable")]
    pub state: String,
    /// Terraform bookkeeping recorded on the resource.
    #[serde(deserialize_with = "super::nullable")]
    pub terraform: BTreeMap<String, Value>,
}

/// Metadata block of a policy setting or policy value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyMetadata {
    /// Durable id of the setting.
    #[serde(deserialize_with = "super::nullable")]
    pub id: String,
    /// Id of the parent.
    #[serde(deserialize_with = "super::nullable")]
    pub parent_id: String,
    /// Id of the resource the policy applies to.
    #[serde(deserialize_with = "super::nullable")]
    pub resource_id: String,
    /// Alternate keys.
    #[serde(deserialize_with = "super::nullable")]
    pub akas: Vec<String>,
}

/// Metadata block of a grant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrantMetadata {
    /// Durable id of the grant.
    #[serde(deserialize_with = "super::nullable")]
    pub id: String,
    /// Id of the profile receiving the grant.
    #[serde(deserialize_with = "super::nullable")]
    pub profile_id: String,
    /// Id of the resource the grant is scoped to.
    #[serde(deserialize_with = "super::nullable")]
    pub resource_id: String,
}

/// Metadata block of an active grant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActiveGrantMetadata {
    /// Durable id of the activation.
    #[serde(deserialize_with = "super::nullable")]
    pub id: String,
    /// Id of the activated grant.
    #[serde(deserialize_with = "super::nullable")]
    pub grant_id: String,
    /// Id of the resource the grant is active on.
    #[serde(deserialize_with = "super::nullable")]
    pub resource_id: String,
}
