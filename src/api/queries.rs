//! GraphQL documents sent to the Turbot API.
//!
//! Every mutation aliases its root field so responses decode with the same
//! shape as the matching read.

/// Introspection query used by [`Client::validate`](crate::Client::validate).
pub(crate) const VALIDATE: &str = "{ schema: __schema { queryType { name } } }";

const POLICY_SETTING_FIELDS: &str = "
    value
    valueSource
    default
    precedence
    template
    templateInput
    input
    note
    validFromTimestamp
    validToTimestamp
    turbot { id parentId resourceId akas }";

const RESOURCE_METADATA_FIELDS: &str = "
    turbot {
      id
      parentId
      akas
      custom
      metadata
      tags
      title
      versionId
      actorIdentityId
      actorPersonaId
      actorRoleId
      resourceParentAka
      createTimestamp
      deleteTimestamp
      updateTimestamp
      path
      resourceGroupIds
      resourceTypeId
      state
      terraform
    }";

pub(crate) fn create_policy_setting() -> String {
    format!(
        "mutation CreatePolicySetting($input: CreatePolicySettingInput!) {{
  policySetting: createPolicySetting(input: $input) {{{}
  }}
}}",
        POLICY_SETTING_FIELDS
    )
}

pub(crate) fn read_policy_setting() -> String {
    format!(
        "query PolicySetting($id: ID!) {{
  policySetting(id: $id) {{{}
  }}
}}",
        POLICY_SETTING_FIELDS
    )
}

pub(crate) fn update_policy_setting() -> String {
    format!(
        "mutation UpdatePolicySetting($input: UpdatePolicySettingInput!) {{
  policySetting: updatePolicySetting(input: $input) {{{}
  }}
}}",
        POLICY_SETTING_FIELDS
    )
}

pub(crate) const DELETE_POLICY_SETTING: &str =
    "mutation DeletePolicySetting($input: DeletePolicySettingInput!) {
  policySetting: deletePolicySetting(input: $input) {
    turbot { id }
  }
}";

pub(crate) fn find_policy_settings() -> String {
    format!(
        "query FindPolicySetting($filter: [String!]) {{
  policySettings(filter: $filter) {{
    items {{{}
    }}
  }}
}}",
        POLICY_SETTING_FIELDS
    )
}

pub(crate) fn read_policy_value() -> String {
    format!(
        "query PolicyValue($policyType: ID!, $resource: ID!) {{
  policyValue(uri: $policyType, resourceId: $resource) {{
    value
    precedence
    state
    reason
    details
    setting {{{}
    }}
    turbot {{ id parentId resourceId akas }}
  }}
}}",
        POLICY_SETTING_FIELDS
    )
}

pub(crate) const CREATE_GRANT: &str = "mutation CreateGrant($input: CreateGrantInput!) {
  grant: createGrant(input: $input) {
    permissionTypeId
    permissionLevelId
    turbot { id profileId resourceId }
  }
}";

pub(crate) const READ_GRANT: &str = "query Grant($id: ID!) {
  grant(id: $id) {
    permissionTypeId
    permissionLevelId
    turbot { id profileId resourceId }
  }
}";

pub(crate) const DELETE_GRANT: &str = "mutation DeleteGrant($input: DeleteGrantInput!) {
  grant: deleteGrant(input: $input) {
    turbot { id }
  }
}";

pub(crate) const ACTIVATE_GRANT: &str = "mutation ActivateGrant($input: ActivateGrantInput!) {
  activeGrant: activateGrant(input: $input) {
    turbot { id grantId resourceId }
  }
}";

pub(crate) const READ_ACTIVE_GRANT: &str = "query ActiveGrant($id: ID!) {
  activeGrant(id: $id) {
    turbot { id grantId resourceId }
  }
}";

pub(crate) const DEACTIVATE_GRANT: &str =
    "mutation DeactivateGrant($input: DeactivateGrantInput!) {
  activeGrant: deactivateGrant(input: $input) {
    turbot { id }
  }
}";

pub(crate) fn create_resource() -> String {
    format!(
        "mutation CreateResource($input: CreateResourceInput!) {{
  resource: createResource(input: $input) {{
    data{}
  }}
}}",
        RESOURCE_METADATA_FIELDS
    )
}

pub(crate) fn read_resource() -> String {
    format!(
        "query Resource($id: ID!) {{
  resource(id: $id) {{
    data{}
  }}
}}",
        RESOURCE_METADATA_FIELDS
    )
}

pub(crate) fn update_resource() -> String {
    format!(
        "mutation UpdateResource($input: UpdateResourceInput!) {{
  resource: updateResource(input: $input) {{
    data{}
  }}
}}",
        RESOURCE_METADATA_FIELDS
    )
}

pub(crate) const DELETE_RESOURCE: &str = "mutation DeleteResource($input: DeleteResourceInput!) {
  resource: deleteResource(input: $input) {
    turbot { id }
  }
}";

pub(crate) fn list_resources() -> String {
    format!(
        "query ResourceList($filter: [String!]) {{
  resourceList: resources(filter: $filter) {{
    items {{
      data{}
    }}
  }}
}}",
        RESOURCE_METADATA_FIELDS
    )
}

pub(crate) const RESOURCE_AKAS: &str = "query ResourceAkas($id: ID!) {
  resource(id: $id) {
    turbot { id akas }
  }
}";
