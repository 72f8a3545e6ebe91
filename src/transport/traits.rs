//! Transport trait definitions and common types.

use serde::Serialize;

use crate::Error;

/// A single GraphQL request: a query document plus its variables.
///
/// ## Example
///
/// ```rust
/// use turbot_provider::transport::GraphqlRequest;
///
/// let request = GraphqlRequest::new("{ schema: __schema { queryType { name } } }");
/// assert!(request.variables.is_null());
///
/// let request = GraphqlRequest::new("query R($id: ID!) { resource(id: $id) { data } }")
///     .with_variables(serde_json::json!({"id": "178463092858042"}));
/// assert_eq!(request.variables["id"], "178463092858042");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    /// The query or mutation document.
    pub query: String,
    /// Variables referenced by the document.
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub variables: serde_json::Value,
}

impl GraphqlRequest {
    /// Creates a request without variables.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: serde_json::Value::Null,
        }
    }

    /// Sets the request variables.
    #[must_use]
    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = variables;
        self
    }
}

/// Request counters for a transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportStats {
    /// Total requests sent.
    pub requests_sent: u64,
    /// Requests that ended in an error.
    pub requests_failed: u64,
}

/// Executes GraphQL requests against a Turbot workspace.
///
/// Implementations send exactly one request per call and never retry.
/// On success the `data` member of the response envelope is returned; a
/// non-empty `errors` list is turned into a classified [`Error`] carrying
/// the first message verbatim.
#[async_trait::async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Executes a request and returns the response `data`.
    async fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value, Error>;

    /// Returns request counters.
    fn stats(&self) -> TransportStats;
}
