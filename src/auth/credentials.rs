//! Credentials types for Turbot authentication.

use std::fmt;

use base64::Engine;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Resolved Turbot API credentials.
///
/// A Turbot access key pair plus the workspace it belongs to. Credentials
/// are immutable once resolved; the secret is redacted from `Debug` output
/// and wiped from memory on drop.
///
/// ## Example
///
/// ```rust
/// use turbot_provider::Credentials;
///
/// let creds = Credentials::new(
///     "034840a0-fa46-44fa-a445-954c39d0f0f0",
///     "860c12c8-e8a5-4617-8771-7885a7cb0f0f",
///     "https://example-turbot.cloud.turbot.com",
/// );
/// assert!(!format!("{:?}", creds).contains("860c12c8"));
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
    workspace: String,
}

impl Credentials {
    /// Creates credentials from an access key, secret key and workspace.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        workspace: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            workspace: workspace.into(),
        }
    }

    /// Returns the access key id.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Returns the secret access key.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Returns the workspace URL or host.
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// Returns the value of the `Authorization` header for these credentials.
    ///
    /// Turbot uses HTTP basic authentication with the access key as user
    /// name and the secret as password.
    pub(crate) fn basic_auth_header(&self) -> String {
        let pair = format!("{}:{}", self.access_key, self.secret_key);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(pair)
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .field("workspace", &self.workspace)
            .finish()
    }
}
