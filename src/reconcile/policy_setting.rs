//! Reconciler for `turbot_policy_setting`.
//!
//! A policy setting value can be written in two forms: the typed `value` or
//! the YAML `valueSource`. Which one a policy type accepts is only known
//! from the API's validation, so writes follow a two-state protocol:
//!
//! ```text
//! AsValue ──FailedValidation──▶ AsValueSource ──any error──▶ fail
//!    │                               │
//!    └── ok: store response          └── ok: store YAML-decoded value,
//!                                          value_source_used = true
//! ```

use std::sync::Arc;

use super::encryption::{PgpEncryptor, ValueEncryptor};
use super::{Reconciler, ResourceData, ResourceKind};
use crate::api::PolicySettingInput;
use crate::client::Client;
use crate::types::{PolicySetting, Value};
use crate::Error;

/// Precedence used when none is configured.
pub const DEFAULT_PRECEDENCE: &str = "required";

/// Which representation a policy setting write sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAttempt {
    /// The configured text is sent as the typed `value`.
    AsValue,
    /// The configured text is sent as the YAML `valueSource`.
    AsValueSource,
}

impl WriteAttempt {
    /// Returns the state to move to after `err`, or `None` to fail.
    ///
    /// Only a validation failure of the first attempt moves on.
    pub fn next_on(self, err: &Error) -> Option<WriteAttempt> {
        match self {
            WriteAttempt::AsValue if err.is_failed_validation() => {
                Some(WriteAttempt::AsValueSource)
            }
            _ => None,
        }
    }

    fn payload(self, input: &PolicySettingInput) -> PolicySettingInput {
        match self {
            WriteAttempt::AsValue => input.clone(),
            WriteAttempt::AsValueSource => input.clone().into_value_source(),
        }
    }
}

/// Where a policy setting write goes.
enum WriteTarget<'a> {
    Create {
        policy_type: &'a str,
        resource: &'a str,
    },
    Update {
        id: &'a str,
    },
}

impl WriteTarget<'_> {
    async fn send(
        &self,
        client: &Client,
        input: &PolicySettingInput,
    ) -> Result<PolicySetting, Error> {
        let settings = client.policy_settings();
        match self {
            WriteTarget::Create {
                policy_type,
                resource,
            } => settings.create(policy_type, resource, input).await,
            WriteTarget::Update { id } => settings.update(id, input).await,
        }
    }
}

/// Reconciles policy settings.
///
/// Fields: `policy_type`, `resource`, `value`, `precedence`, `template`,
/// `template_input`, `note`, `valid_from_timestamp`, `valid_to_timestamp`,
/// `pgp_key`; computed `value_source`, `value_source_used`,
/// `value_key_fingerprint`, `value_source_key_fingerprint`.
pub struct PolicySettingReconciler {
    encryptor: Arc<dyn ValueEncryptor>,
}

impl Default for PolicySettingReconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PolicySettingReconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicySettingReconciler").finish_non_exhaustive()
    }
}

impl PolicySettingReconciler {
    /// Creates a reconciler encrypting with [`PgpEncryptor`].
    pub fn new() -> Self {
        Self::with_encryptor(Arc::new(PgpEncryptor))
    }

    /// Creates a reconciler with a custom encryptor.
    pub fn with_encryptor(encryptor: Arc<dyn ValueEncryptor>) -> Self {
        Self { encryptor }
    }

    /// Builds the write payload from configured fields.
    fn build_input(data: &ResourceData) -> Result<PolicySettingInput, Error> {
        let field = |name: &str| -> Result<Option<String>, Error> {
            let value = data.get_str(name)?;
            Ok((!value.is_empty()).then(|| value.to_string()))
        };

        Ok(PolicySettingInput {
            value: field("value")?,
            value_source: None,
            precedence: Some(field("precedence")?.unwrap_or_else(|| DEFAULT_PRECEDENCE.into())),
            template: field("template")?,
            template_input: field("template_input")?,
            note: field("note")?,
            valid_from_timestamp: field("valid_from_timestamp")?,
            valid_to_timestamp: field("valid_to_timestamp")?,
        })
    }

    /// Sends a write, retrying once as `valueSource` after a validation failure.
    async fn write_with_fallback(
        client: &Client,
        target: &WriteTarget<'_>,
        input: &PolicySettingInput,
    ) -> Result<(PolicySetting, WriteAttempt), Error> {
        let mut attempt = WriteAttempt::AsValue;
        loop {
            match target.send(client, &attempt.payload(input)).await {
                Ok(setting) => return Ok((setting, attempt)),
                Err(e) => match attempt.next_on(&e) {
                    Some(next) if input.value.is_some() => {
                        tracing::debug!(error = %e, "value rejected, retrying as valueSource");
                        attempt = next;
                    }
                    _ => return Err(e),
                },
            }
        }
    }

    /// Records a successful write.
    fn store_write(
        &self,
        data: &mut ResourceData,
        setting: &PolicySetting,
        attempt: WriteAttempt,
        input: &PolicySettingInput,
    ) -> Result<(), Error> {
        match (attempt, input.value.as_deref()) {
            (WriteAttempt::AsValueSource, Some(source)) => {
                let decoded = Value::from_yaml(source)?;
                self.store_fields(data, &decoded.to_plain_string(), source)?;
                data.set("value_source_used", true);
            }
            _ => {
                self.store_value(data, setting)?;
                data.set("value_source_used", false);
            }
        }
        Ok(())
    }

    /// Stores `value` and `value_source` from an API response.
    fn store_value(&self, data: &mut ResourceData, setting: &PolicySetting) -> Result<(), Error> {
        self.store_fields(data, &setting.value.to_plain_string(), &setting.value_source)
    }

    /// Stores the value pair, encrypted when a `pgp_key` is configured.
    fn store_fields(
        &self,
        data: &mut ResourceData,
        value: &str,
        value_source: &str,
    ) -> Result<(), Error> {
        let pgp_key = data.get_str("pgp_key")?.to_string();
        if pgp_key.is_empty() {
            data.set("value", value);
            data.set("value_source", value_source);
            return Ok(());
        }

        let value = self.encryptor.encrypt(&pgp_key, value)?;
        let value_source = self.encryptor.encrypt(&pgp_key, value_source)?;
        data.set("value", value.ciphertext);
        data.set("value_key_fingerprint", value.fingerprint);
        data.set("value_source", value_source.ciphertext);
        data.set("value_source_key_fingerprint", value_source.fingerprint);
        Ok(())
    }
}

#[async_trait::async_trait]
impl Reconciler for PolicySettingReconciler {
    fn kind(&self) -> ResourceKind {
        ResourceKind::PolicySetting
    }

    async fn create(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let policy_type = data.get_str("policy_type")?.to_string();
        let resource = data.get_str("resource")?.to_string();

        if let Some(existing) = client.policy_settings().find(&policy_type, &resource).await? {
            if !existing.value.is_null() {
                return Err(Error::duplicate(format!(
                    "A policy setting for policy type: '{}', resource: '{}' already exists ( id: {} ). \
                     To manage the existing setting, import it using command \
                     'terraform import <resource_address> <id>'",
                    policy_type, resource, existing.turbot.id
                )));
            }
        }

        let input = Self::build_input(data)?;
        let target = WriteTarget::Create {
            policy_type: &policy_type,
            resource: &resource,
        };
        let (setting, attempt) = match Self::write_with_fallback(client, &target, &input).await {
            Ok(written) => written,
            Err(e) => {
                data.clear_id();
                return Err(e);
            }
        };

        // the setting exists remotely from here on, even if storing fails
        data.set_id(setting.turbot.id.as_str());
        tracing::debug!(id = %setting.turbot.id, ?attempt, "created policy setting");
        self.store_write(data, &setting, attempt, &input)
    }

    async fn read(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let id = data.require_id()?.to_string();
        let setting = match client.policy_settings().read(&id).await {
            Ok(setting) => setting,
            Err(e) if e.is_not_found() => {
                tracing::debug!(id = %id, "policy setting no longer exists");
                data.clear_id();
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        self.store_value(data, &setting)?;
        data.set("precedence", setting.precedence);
        data.set("template", setting.template);
        data.set("template_input", setting.template_input);
        data.set("note", setting.note);
        data.set("valid_from_timestamp", setting.valid_from_timestamp);
        data.set("valid_to_timestamp", setting.valid_to_timestamp);
        Ok(())
    }

    async fn update(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let id = data.require_id()?.to_string();
        let input = Self::build_input(data)?;
        let target = WriteTarget::Update { id: &id };

        let (setting, attempt) = match Self::write_with_fallback(client, &target, &input).await {
            Ok(written) => written,
            Err(e) => {
                data.clear_id();
                return Err(e);
            }
        };

        self.store_write(data, &setting, attempt, &input)
    }

    async fn delete(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        let id = data.require_id()?.to_string();
        client.policy_settings().delete(&id).await?;
        data.clear_id();
        Ok(())
    }

    async fn exists(&self, client: &Client, data: &ResourceData) -> Result<bool, Error> {
        client.policy_settings().exists(data.require_id()?).await
    }

    fn suppress_diff(&self, field: &str, old: &str, new: &str, data: &ResourceData) -> bool {
        match field {
            "value" => suppress_value_diff(old, new, data),
            "precedence" => old.eq_ignore_ascii_case(new),
            _ => false,
        }
    }
}

/// Decides whether a change to `value` is only apparent.
///
/// - With a `pgp_key` the stored value is ciphertext, so every diff is
///   suppressed.
/// - With no stored value there is nothing to compare.
/// - After a `valueSource` write the configured text is compared with the
///   stored `value_source` instead of the decoded value.
pub fn suppress_value_diff(old: &str, new: &str, data: &ResourceData) -> bool {
    if data.is_set("pgp_key") {
        return true;
    }
    if old.is_empty() {
        return false;
    }
    let old = if data.get_bool("value_source_used").unwrap_or(false) {
        data.get_str("value_source").unwrap_or(old)
    } else {
        old
    };
    new == old
}
