//! HTTP transport implementation using reqwest.

use std::error::Error as StdError;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use url::Url;

use super::traits::{GraphqlRequest, GraphqlTransport, TransportStats};
use crate::auth::Credentials;
use crate::config::TlsConfig;
use crate::error::ErrorKind;
use crate::user_agent;
use crate::Error;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// GraphQL transport over HTTPS.
///
/// Every request is a single `POST` of `{query, variables}` to the
/// workspace GraphQL endpoint, authenticated with the access key pair.
pub struct HttpTransport {
    client: reqwest::Client,
    api_url: Url,
    headers: HeaderMap,
    stats: RwLock<TransportStats>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("api_url", &self.api_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Creates a transport for the given endpoint and credentials.
    pub fn new(
        api_url: Url,
        credentials: &Credentials,
        tls_config: &TlsConfig,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let mut client_builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(user_agent::user_agent());

        if tls_config.skip_verification {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        if let Some(pem) = tls_config.load_ca_pem()? {
            let cert = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                Error::configuration(format!("invalid CA certificate: {}", e))
            })?;
            client_builder = client_builder.add_root_certificate(cert);
        }

        let client = client_builder.build().map_err(|e| {
            Error::configuration(format!("failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            api_url,
            headers: build_headers(credentials)?,
            stats: RwLock::new(TransportStats::default()),
        })
    }

    /// Returns the endpoint this transport posts to.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn record(&self, failed: bool) {
        let mut stats = self.stats.write();
        stats.requests_sent += 1;
        if failed {
            stats.requests_failed += 1;
        }
    }

    async fn send(&self, request: &GraphqlRequest) -> Result<serde_json::Value, Error> {
        let response = self
            .client
            .post(self.api_url.clone())
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;
        decode_response(status, &body)
    }
}

#[async_trait::async_trait]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value, Error> {
        tracing::trace!(url = %self.api_url, "executing graphql request");
        let result = self.send(request).await;
        self.record(result.is_err());
        if let Err(e) = &result {
            tracing::debug!(kind = %e.kind(), error = %e, "graphql request failed");
        }
        result
    }

    fn stats(&self) -> TransportStats {
        *self.stats.read()
    }
}

/// Builds the headers sent with every request.
fn build_headers(credentials: &Credentials) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut auth = HeaderValue::from_str(&credentials.basic_auth_header()).map_err(|_| {
        Error::configuration("access key and secret must be printable ASCII")
    })?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    Ok(headers)
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    #[serde(default)]
    message: String,
}

/// Decodes a GraphQL response body.
///
/// A non-empty `errors` list wins over the HTTP status so the API's own
/// message reaches the caller.
pub(crate) fn decode_response(status: u16, body: &str) -> Result<serde_json::Value, Error> {
    let envelope = serde_json::from_str::<ResponseEnvelope>(body);

    if let Ok(ResponseEnvelope { errors, .. }) = &envelope {
        if let Some(first) = errors.first() {
            return Err(Error::from_api_message(first.message.clone()));
        }
    }

    if !(200..300).contains(&status) {
        return Err(map_status_error(status, body));
    }

    match envelope {
        Ok(ResponseEnvelope {
            data: Some(data), ..
        }) if !data.is_null() => Ok(data),
        Ok(_) => Err(Error::invalid_response("response contained no data")),
        Err(e) => Err(Error::invalid_response(format!(
            "failed to parse response: {}",
            e
        ))),
    }
}

/// Maps reqwest errors to network errors.
///
/// The message is the full error chain, so DNS and connection failures
/// keep the host and the resolver's own text.
fn map_reqwest_error(e: reqwest::Error) -> Error {
    let kind = if e.is_timeout() {
        ErrorKind::Timeout
    } else {
        ErrorKind::Connection
    };
    Error::new(kind, error_chain(&e)).with_source(e)
}

fn error_chain(e: &(dyn StdError + 'static)) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Maps HTTP status codes without a GraphQL error body to errors.
fn map_status_error(status: u16, body: &str) -> Error {
    let message = if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else if let Ok(error) = serde_json::from_str::<serde_json::Value>(body) {
        error
            .get("message")
            .or_else(|| error.get("error"))
            .and_then(|e| e.as_str())
            .unwrap_or(body)
            .to_string()
    } else {
        body.to_string()
    };

    Error::new(ErrorKind::from_http_status(status), message)
}
