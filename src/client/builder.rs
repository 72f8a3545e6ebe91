//! Client builder with typestate pattern.

use std::{marker::PhantomData, sync::Arc, time::Duration};

use super::inner::ClientInner;
use crate::{
    Client, Error,
    auth::Credentials,
    config::{TlsConfig, build_api_url},
    transport::{GraphqlTransport, HttpTransport},
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Marker type: Credentials not yet provided.
pub struct NoCredentials;

/// Marker type: Credentials have been provided.
pub struct HasCredentials;

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern so a client cannot be built without
/// credentials.
///
/// ## Optional Configuration
///
/// - `api_url()`: Endpoint override; by default derived from the workspace
/// - `tls_config()`: Custom TLS settings
/// - `timeout()`: Request timeout (30s by default)
/// - `transport()`: A custom [`GraphqlTransport`], e.g. a
///   [`MockTransport`](crate::transport::MockTransport)
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use turbot_provider::{Client, Credentials};
///
/// let client = Client::builder()
///     .credentials(Credentials::new("ak", "sk", "example-turbot.cloud.turbot.com"))
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     client.api_url(),
///     "https://example-turbot.cloud.turbot.com/api/latest/graphql"
/// );
/// ```
pub struct ClientBuilder<CredentialsState> {
    credentials: Option<Credentials>,
    api_url: Option<String>,
    tls_config: TlsConfig,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn GraphqlTransport>>,
    _credentials_state: PhantomData<CredentialsState>,
}

impl ClientBuilder<NoCredentials> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            credentials: None,
            api_url: None,
            tls_config: TlsConfig::default(),
            timeout: None,
            transport: None,
            _credentials_state: PhantomData,
        }
    }

    /// Sets the credentials.
    pub fn credentials(self, credentials: Credentials) -> ClientBuilder<HasCredentials> {
        ClientBuilder {
            credentials: Some(credentials),
            api_url: self.api_url,
            tls_config: self.tls_config,
            timeout: self.timeout,
            transport: self.transport,
            _credentials_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoCredentials> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ClientBuilder<C> {
    /// Overrides the GraphQL endpoint.
    ///
    /// The value is used as is, without workspace normalization.
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Sets the TLS configuration.
    #[must_use]
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.tls_config = config;
        self
    }

    /// Disables TLS certificate verification.
    ///
    /// **WARNING**: Only for local test workspaces.
    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.tls_config.skip_verification = true;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a custom transport instead of HTTPS.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn GraphqlTransport>) -> Self {
        self.transport = Some(transport);
        self
    }
}

impl ClientBuilder<HasCredentials> {
    /// Builds the client.
    ///
    /// No request is made; use [`Client::validate`] to check the
    /// credentials against the workspace.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](crate::ErrorKind::Configuration) error if
    /// the workspace or endpoint is invalid or the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<Client, Error> {
        let credentials = self
            .credentials
            .ok_or_else(|| Error::configuration("credentials are required"))?;

        let api_url = match self.api_url {
            Some(url) => url,
            None => build_api_url(credentials.workspace())?,
        };
        let parsed_url = url::Url::parse(&api_url)
            .map_err(|e| Error::configuration(format!("invalid API URL '{}': {}", api_url, e)))?;

        let transport: Arc<dyn GraphqlTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(
                parsed_url,
                &credentials,
                &self.tls_config,
                self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            )?),
        };

        tracing::debug!(api_url = %api_url, "built turbot client");

        Ok(Client::from_inner(ClientInner {
            credentials,
            api_url,
            transport,
        }))
    }
}
