//! Provider configuration block.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

/// The provider configuration as written by the user.
///
/// Every field is optional; unset credentials fall back to environment
/// variables and then to a profile of the credentials file (see
/// [`auth::resolve`](crate::auth::resolve)). The struct is immutable input
/// passed by reference into resolution and client construction.
///
/// ## Example
///
/// ```rust
/// use turbot_provider::ProviderConfig;
///
/// let config = ProviderConfig::builder()
///     .profile("production")
///     .build();
/// assert_eq!(config.profile.as_deref(), Some("production"));
///
/// let from_json: ProviderConfig = serde_json::from_str(
///     r#"{"workspace": "https://example-turbot.cloud.turbot.com"}"#,
/// ).unwrap();
/// assert!(from_json.access_key.is_none());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(default)]
pub struct ProviderConfig {
    /// Access key id.
    #[builder(into)]
    pub access_key: Option<String>,

    /// Secret access key.
    #[builder(into)]
    pub secret_key: Option<String>,

    /// Workspace host or URL.
    #[builder(into)]
    pub workspace: Option<String>,

    /// Credentials file profile name.
    #[builder(into)]
    pub profile: Option<String>,

    /// Path of the credentials file.
    #[builder(into)]
    pub credentials_file: Option<PathBuf>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("workspace", &self.workspace)
            .field("profile", &self.profile)
            .field("credentials_file", &self.credentials_file)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial() {
        let config: ProviderConfig =
            serde_json::from_str(r#"{"profile": "invalid-keys"}"#).unwrap();
        assert_eq!(config.profile.as_deref(), Some("invalid-keys"));
        assert!(config.workspace.is_none());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ProviderConfig::builder().secret_key("hunter2").build();
        let debug = format!("{:?}", config);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("hunter2"));
    }
}
