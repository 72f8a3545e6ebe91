//! HTTP transport behavior against a mock workspace.

use std::time::Duration;

use serde_json::json;
use turbot_provider::transport::GraphqlRequest;
use turbot_provider::{Client, Credentials, ErrorKind};
use wiremock::matchers::{body_partial_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{GRAPHQL_PATH, TestWorkspace, init_tracing};

#[tokio::test]
async fn test_request_envelope() {
    let ws = TestWorkspace::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header_exists("user-agent"))
        .and(body_partial_json(json!({"variables": {"id": "42"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}})))
        .expect(1)
        .mount(&ws.server)
        .await;

    let request = GraphqlRequest::new("query Q($id: ID!) { ok }").with_variables(json!({"id": "42"}));
    let data: serde_json::Value = ws.client.execute(&request).await.unwrap();
    assert_eq!(data["ok"], true);

    let bodies = ws.request_bodies().await;
    assert_eq!(bodies[0]["query"], "query Q($id: ID!) { ok }");
}

#[tokio::test]
async fn test_graphql_errors_are_verbatim() {
    let ws = TestWorkspace::start().await;
    ws.fail_once("mutation", "Data validation failed: value should be string")
        .await;

    let err = ws
        .client
        .execute::<serde_json::Value>(&GraphqlRequest::new("mutation { x }"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FailedValidation);
    assert_eq!(err.to_string(), "Data validation failed: value should be string");
}

#[tokio::test]
async fn test_invalid_json_body() {
    let ws = TestWorkspace::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&ws.server)
        .await;

    let err = ws
        .client
        .execute::<serde_json::Value>(&GraphqlRequest::new("{ a }"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}

#[tokio::test]
async fn test_timeout() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {}}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = Client::builder()
        .credentials(Credentials::new("ak", "sk", server.uri()))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client
        .execute::<serde_json::Value>(&GraphqlRequest::new("{ a }"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.is_network_failure());
    assert_eq!(client.stats().requests_failed, 1);
}

#[tokio::test]
async fn test_api_url_override() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .credentials(Credentials::new("ak", "sk", "unused.example.com"))
        .api_url(format!("{}/custom/graphql", server.uri()))
        .build()
        .unwrap();

    let data: serde_json::Value = client.execute(&GraphqlRequest::new("{ ok }")).await.unwrap();
    assert_eq!(data["ok"], 1);
}
