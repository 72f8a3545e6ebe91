//! TLS configuration for the API connection.

use std::path::PathBuf;

/// TLS settings for connections to the Turbot workspace.
///
/// By default the system root certificates are used and server
/// certificates are verified. Self-hosted workspaces behind a private CA
/// can supply that CA here.
///
/// ## Example: Custom CA
///
/// ```rust
/// use turbot_provider::TlsConfig;
///
/// let config = TlsConfig::builder()
///     .ca_cert_file("/etc/ssl/turbot-ca.crt")
///     .build();
/// assert!(config.has_custom_ca());
/// ```
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct TlsConfig {
    /// Custom CA certificate file path (PEM).
    #[builder(into)]
    pub ca_cert_file: Option<PathBuf>,

    /// Custom CA certificate PEM data.
    #[builder(into)]
    pub ca_cert_pem: Option<String>,

    /// Whether to skip certificate verification.
    ///
    /// **WARNING**: This is insecure and should only be used against local
    /// test workspaces.
    #[builder(default = false)]
    pub skip_verification: bool,
}

impl TlsConfig {
    /// Creates an insecure TLS config that skips verification.
    ///
    /// **WARNING**: This makes connections vulnerable to man-in-the-middle attacks.
    pub fn insecure() -> Self {
        Self::builder().skip_verification(true).build()
    }

    /// Returns `true` if a custom CA is configured.
    pub fn has_custom_ca(&self) -> bool {
        self.ca_cert_file.is_some() || self.ca_cert_pem.is_some()
    }

    /// Loads the custom CA certificate PEM, preferring inline data.
    pub(crate) fn load_ca_pem(&self) -> Result<Option<Vec<u8>>, crate::Error> {
        if let Some(pem) = &self.ca_cert_pem {
            return Ok(Some(pem.as_bytes().to_vec()));
        }
        match &self.ca_cert_file {
            Some(path) => std::fs::read(path).map(Some).map_err(|e| {
                crate::Error::configuration(format!(
                    "failed to read CA certificate '{}': {}",
                    path.display(),
                    e
                ))
            }),
            None => Ok(None),
        }
    }
}
