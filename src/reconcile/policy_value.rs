//! Data source for effective policy values.

use super::ResourceData;
use crate::client::Client;
use crate::Error;

/// Reads the effective value of a policy type on a resource.
///
/// Inputs: `policy_type`, `resource`. Outputs: `value`, `precedence`,
/// `state`, `reason`, `details`, `setting_id`. The id is the policy
/// value's own id.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyValueDataSource;

impl PolicyValueDataSource {
    /// Reads the policy value and fills `data`.
    pub async fn read(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let value = client
            .policy_values()
            .read(data.get_str("policy_type")?, data.get_str("resource")?)
            .await?;

        data.set_id(value.turbot.id.as_str());
        data.set("value", value.value.to_plain_string());
        data.set("precedence", value.precedence);
        data.set("state", value.state);
        data.set("reason", value.reason);
        data.set("details", value.details);
        data.set("setting_id", value.setting.turbot.id);
        Ok(())
    }
}
