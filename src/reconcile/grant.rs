//! Reconciler for `turbot_grant`.

use super::{Reconciler, ResourceData, ResourceKind};
use crate::client::Client;
use crate::Error;

/// Reconciles permission grants.
///
/// Fields: `resource` (aka), `profile_id`, `permission_type`,
/// `permission_level`; computed `resource_akas`, `permission_type_id`,
/// `permission_level_id`. Every configured field forces replacement.
///
/// Configuration names the resource by aka while the API reports its id,
/// so the akas of the resource are stored on every create and read and
/// [`suppress_if_aka_matches`] hides the representation change.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrantReconciler;

#[async_trait::async_trait]
impl Reconciler for GrantReconciler {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Grant
    }

    async fn create(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let resource = data.get_str("resource")?.to_string();
        let grant = client
            .grants()
            .create(
                data.get_str("profile_id")?,
                &resource,
                data.get_str("permission_type")?,
                data.get_str("permission_level")?,
            )
            .await?;
        data.set_id(grant.turbot.id.as_str());

        let akas = client.resources().akas(&resource).await?;
        data.set("resource_akas", akas);
        tracing::debug!(id = %grant.turbot.id, resource = %resource, "created grant");
        Ok(())
    }

    async fn read(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let id = data.require_id()?.to_string();
        let grant = match client.grants().read(&id).await {
            Ok(grant) => grant,
            Err(e) if e.is_not_found() => {
                tracing::debug!(id = %id, "grant no longer exists");
                data.clear_id();
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let akas = client.resources().akas(&grant.turbot.resource_id).await?;
        data.set("permission_type_id", grant.permission_type_id);
        data.set("permission_level_id", grant.permission_level_id);
        data.set("profile_id", grant.turbot.profile_id);
        data.set("resource", grant.turbot.resource_id);
        data.set("resource_akas", akas);
        Ok(())
    }

    async fn delete(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let id = data.require_id()?.to_string();
        client.grants().delete(&id).await?;
        data.clear_id();
        Ok(())
    }

    async fn exists(&self, client: &Client, data: &ResourceData) -> Result<bool, Error> {
        client.grants().exists(data.require_id()?).await
    }

    fn suppress_diff(&self, field: &str, _old: &str, new: &str, data: &ResourceData) -> bool {
        field == "resource" && suppress_if_aka_matches(new, data)
    }
}

/// Returns `true` if `aka` is one of the stored `resource_akas`.
///
/// Before the akas have been fetched nothing is suppressed.
pub fn suppress_if_aka_matches(aka: &str, data: &ResourceData) -> bool {
    data.get_string_list("resource_akas")
        .map(|akas| akas.iter().any(|stored| stored == aka))
        .unwrap_or(false)
}
