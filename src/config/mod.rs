//! Configuration types for the Turbot provider.
//!
//! - [`ProviderConfig`]: The user-supplied provider block
//! - [`TlsConfig`]: TLS/SSL settings
//! - [`build_api_url`]: Workspace to GraphQL endpoint normalization

mod endpoint;
mod provider;
mod tls;

pub use endpoint::build_api_url;
pub use provider::ProviderConfig;
pub use tls::TlsConfig;
