//! The Turbot API client.
//!
//! - [`Client`]: Holds credentials, endpoint and transport; entry point for
//!   validation and the typed domain sub-clients
//! - [`ClientBuilder`]: Typestate builder
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use turbot_provider::{Client, ProviderConfig};
//!
//! # async fn example() -> Result<(), turbot_provider::Error> {
//! let config = ProviderConfig::builder().profile("production").build();
//! let client = Client::configure(&config).await?;
//!
//! let setting = client
//!     .policy_settings()
//!     .find("tmod:@turbot/aws-s3#/policy/types/bucketApproved", "arn:aws:s3:::my-bucket")
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod inner;

pub use builder::{ClientBuilder, HasCredentials, NoCredentials};

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::api::{
    ActiveGrantsClient, GrantsClient, PolicySettingsClient, PolicyValuesClient, ResourcesClient,
    queries,
};
use crate::auth::{self, Credentials};
use crate::config::ProviderConfig;
use crate::transport::{GraphqlRequest, TransportStats};
use crate::Error;

/// Root query type name reported by a healthy workspace.
const EXPECTED_QUERY_TYPE: &str = "Query";

/// The Turbot API client.
///
/// Create one with [`Client::builder()`], or from a provider configuration
/// with [`Client::from_config`] / [`Client::configure`].
///
/// ## Thread Safety
///
/// `Client` is `Clone` and thread-safe. Clones share the same transport.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder<NoCredentials> {
        ClientBuilder::new()
    }

    /// Resolves credentials for `config` and builds a client.
    ///
    /// No request is made.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, Error> {
        let credentials = auth::resolve(config)?;
        Self::builder().credentials(credentials).build()
    }

    /// Resolves credentials, builds a client and validates it.
    ///
    /// This is the provider configure step: a client is only returned once
    /// the workspace has accepted the keys.
    pub async fn configure(config: &ProviderConfig) -> Result<Self, Error> {
        let client = Self::from_config(config)?;
        client.validate().await?;
        Ok(client)
    }

    /// Returns the GraphQL endpoint.
    pub fn api_url(&self) -> &str {
        &self.inner.api_url
    }

    /// Returns the credentials in use.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Returns request counters of the underlying transport.
    pub fn stats(&self) -> TransportStats {
        self.inner.transport.stats()
    }

    /// Checks that the workspace accepts the configured credentials.
    ///
    /// Issues an introspection query and expects the root query type to be
    /// named `Query`. Network failures are returned unchanged, so DNS and
    /// connection errors keep their original text. Any other failure
    /// becomes [`Error::auth_failure`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use turbot_provider::{Client, Credentials, AUTH_FAILURE_MESSAGE};
    /// use turbot_provider::transport::MockTransport;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let mock = Arc::new(MockTransport::new());
    /// mock.push_data(serde_json::json!({"schema": {"queryType": {"name": "Mutation"}}}));
    ///
    /// let client = Client::builder()
    ///     .credentials(Credentials::new("ak", "sk", "example.cloud.turbot.com"))
    ///     .transport(mock)
    ///     .build()
    ///     .unwrap();
    ///
    /// let err = client.validate().await.unwrap_err();
    /// assert_eq!(err.to_string(), AUTH_FAILURE_MESSAGE);
    /// # }
    /// ```
    pub async fn validate(&self) -> Result<(), Error> {
        let request = GraphqlRequest::new(queries::VALIDATE);
        match self.inner.transport.execute(&request).await {
            Ok(data) => {
                let name = data
                    .pointer("/schema/queryType/name")
                    .and_then(serde_json::Value::as_str);
                if name == Some(EXPECTED_QUERY_TYPE) {
                    tracing::debug!(api_url = %self.inner.api_url, "workspace validated");
                    Ok(())
                } else {
                    Err(Error::auth_failure())
                }
            }
            Err(e) if e.is_network_failure() => Err(e),
            Err(e) => {
                tracing::debug!(error = %e, "workspace validation failed");
                Err(Error::auth_failure().with_source(e))
            }
        }
    }

    /// Executes a raw GraphQL request and decodes its `data` object.
    pub async fn execute<R>(&self, request: &GraphqlRequest) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.inner.execute(request).await
    }

    /// Returns the policy settings client.
    pub fn policy_settings(&self) -> PolicySettingsClient {
        PolicySettingsClient::new(self.clone())
    }

    /// Returns the policy values client.
    pub fn policy_values(&self) -> PolicyValuesClient {
        PolicyValuesClient::new(self.clone())
    }

    /// Returns the grants client.
    pub fn grants(&self) -> GrantsClient {
        GrantsClient::new(self.clone())
    }

    /// Returns the active grants client.
    pub fn active_grants(&self) -> ActiveGrantsClient {
        ActiveGrantsClient::new(self.clone())
    }

    /// Returns the resources client.
    pub fn resources(&self) -> ResourcesClient {
        ResourcesClient::new(self.clone())
    }

    /// Creates a client from the inner implementation.
    pub(crate) fn from_inner(inner: inner::ClientInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Returns a reference to the inner client.
    pub(crate) fn inner(&self) -> &inner::ClientInner {
        &self.inner
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_url", &self.inner.api_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{AUTH_FAILURE_MESSAGE, ErrorKind};
    use crate::transport::MockTransport;

    fn client_with(mock: &Arc<MockTransport>) -> Client {
        Client::builder()
            .credentials(Credentials::new("ak", "s3cr3t", "example.cloud.turbot.com"))
            .transport(mock.clone())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_validate_ok() {
        let mock = Arc::new(MockTransport::new());
        mock.push_data(serde_json::json!({"schema": {"queryType": {"name": "Query"}}}));
        client_with(&mock).validate().await.unwrap();
        assert!(mock.last_request().unwrap().query.contains("__schema"));
    }

    #[tokio::test]
    async fn test_validate_api_error_becomes_auth_failure() {
        let mock = Arc::new(MockTransport::new());
        mock.push_error(Error::new(ErrorKind::Unauthorized, "HTTP 401"));
        let err = client_with(&mock).validate().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.to_string(), AUTH_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_validate_network_error_passes_through() {
        let mock = Arc::new(MockTransport::new());
        mock.push_error(Error::connection("dns error: no such host example.invalid"));
        let err = client_with(&mock).validate().await.unwrap_err();
        assert!(err.is_network_failure());
        assert_eq!(err.to_string(), "dns error: no such host example.invalid");
    }

    #[tokio::test]
    async fn test_execute_decodes_data() {
        #[derive(serde::Deserialize)]
        struct Data {
            answer: i64,
        }

        let mock = Arc::new(MockTransport::new());
        mock.push_data(serde_json::json!({"answer": 42}));
        let data: Data = client_with(&mock)
            .execute(&GraphqlRequest::new("{ answer }"))
            .await
            .unwrap();
        assert_eq!(data.answer, 42);
        assert_eq!(client_with(&mock).stats().requests_sent, 1);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let mock = Arc::new(MockTransport::new());
        let debug = format!("{:?}", client_with(&mock));
        assert!(debug.contains("api_url"));
        assert!(!debug.contains("s3cr3t"));
    }
}
