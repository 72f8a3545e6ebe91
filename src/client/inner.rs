//! Internal client implementation.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::auth::Credentials;
use crate::transport::{GraphqlRequest, GraphqlTransport};
use crate::Error;

pub(crate) struct ClientInner {
    /// Resolved credentials.
    pub credentials: Credentials,

    /// The workspace GraphQL endpoint.
    pub api_url: String,

    /// Transport used for every request.
    pub transport: Arc<dyn GraphqlTransport>,
}

impl ClientInner {
    /// Executes a request and decodes the whole `data` object.
    pub(crate) async fn execute<R>(&self, request: &GraphqlRequest) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let data = self.transport.execute(request).await?;
        decode(data)
    }

    /// Executes a request and decodes one top-level field of `data`.
    ///
    /// A `null` field means the entity does not exist.
    pub(crate) async fn execute_field<R>(
        &self,
        request: &GraphqlRequest,
        field: &str,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let mut data = self.transport.execute(request).await?;
        match data.get_mut(field).map(serde_json::Value::take) {
            None => Err(Error::invalid_response(format!(
                "response is missing field '{}'",
                field
            ))),
            Some(serde_json::Value::Null) => {
                Err(Error::not_found(format!("{} not found", field)))
            }
            Some(value) => decode(value),
        }
    }
}

fn decode<R: DeserializeOwned>(value: serde_json::Value) -> Result<R, Error> {
    serde_json::from_value(value).map_err(|e| {
        Error::invalid_response(format!("failed to decode response: {}", e)).with_source(e)
    })
}
