//! Common test harness for the integration tests.

use std::path::PathBuf;
use std::sync::Once;

use serde_json::{Value, json};
use turbot_provider::{Client, Credentials};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the client posts to for a workspace without an API path.
pub const GRAPHQL_PATH: &str = "/api/latest/graphql";

static TRACING: Once = Once::new();

/// Installs a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A mock workspace and a client pointed at it.
pub struct TestWorkspace {
    pub server: MockServer,
    pub client: Client,
}

impl TestWorkspace {
    pub async fn start() -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let client = Client::builder()
            .credentials(Credentials::new("test-ak", "test-sk", server.uri()))
            .build()
            .expect("client should build");
        Self { server, client }
    }

    /// Answers requests whose body contains `operation` with `data`, once.
    pub async fn respond_once(&self, operation: &str, data: Value) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(body_string_contains(operation))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Answers requests whose body contains `operation` with a GraphQL error, once.
    pub async fn fail_once(&self, operation: &str, message: &str) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(body_string_contains(operation))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{ "message": message }]
            })))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Returns the JSON bodies of all received requests.
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("request body is JSON"))
            .collect()
    }
}

/// A credentials file removed on drop.
pub struct CredentialsFile {
    pub path: PathBuf,
}

impl CredentialsFile {
    pub fn write(contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("turbot-it-{}", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).expect("write credentials file");
        Self { path }
    }
}

impl Drop for CredentialsFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
