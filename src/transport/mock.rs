//! Scripted transport for testing.

use std::collections::VecDeque;

use parking_lot::Mutex;

use super::traits::{GraphqlRequest, GraphqlTransport, TransportStats};
use crate::Error;

/// In-memory transport that replays scripted responses.
///
/// Responses are consumed in FIFO order, one per request; every request is
/// recorded for later assertions. Running out of responses is an error.
///
/// ## Example
///
/// ```rust
/// use turbot_provider::transport::MockTransport;
/// use turbot_provider::Error;
///
/// let mock = MockTransport::new();
/// mock.push_data(serde_json::json!({"ok": true}));
/// mock.push_error(Error::from_api_message("Not Found"));
/// assert_eq!(mock.pending(), 2);
/// ```
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<serde_json::Value, Error>>>,
    requests: Mutex<Vec<GraphqlRequest>>,
    stats: Mutex<TransportStats>,
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("pending", &self.pending())
            .field("requests", &self.request_count())
            .finish()
    }
}

impl MockTransport {
    /// Creates a mock transport with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response `data` payload.
    pub fn push_data(&self, data: serde_json::Value) -> &Self {
        self.responses.lock().push_back(Ok(data));
        self
    }

    /// Queues an error response.
    pub fn push_error(&self, error: Error) -> &Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    /// Returns the number of responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.responses.lock().len()
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Returns a copy of every request made, oldest first.
    pub fn requests(&self) -> Vec<GraphqlRequest> {
        self.requests.lock().clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Option<GraphqlRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait::async_trait]
impl GraphqlTransport for MockTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value, Error> {
        self.requests.lock().push(request.clone());

        let response = self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(Error::invalid_response(
                "mock transport has no scripted response",
            ))
        });

        let mut stats = self.stats.lock();
        stats.requests_sent += 1;
        if response.is_err() {
            stats.requests_failed += 1;
        }
        response
    }

    fn stats(&self) -> TransportStats {
        *self.stats.lock()
    }
}
