//! Transport layer for Turbot GraphQL communication.
//!
//! - [`GraphqlTransport`]: The seam between domain operations and the wire
//! - [`HttpTransport`]: reqwest-based HTTPS transport
//! - [`MockTransport`]: Scripted in-memory transport for testing
//!
//! Users normally go through [`Client`](crate::Client); a transport can be
//! injected with [`ClientBuilder::transport`](crate::ClientBuilder::transport).

mod http;
mod mock;
mod traits;

pub use http::HttpTransport;
pub use mock::MockTransport;
pub use traits::{GraphqlRequest, GraphqlTransport, TransportStats};
