//! Integration tests for the Turbot provider core.
//!
//! Every test runs against a local `wiremock` server standing in for a
//! workspace GraphQL endpoint, so no Turbot workspace or credentials are
//! needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With request logs
//! RUST_LOG=turbot_provider=trace cargo test --test integration -- --nocapture
//! ```

mod client_tests;
mod common;
mod grant_tests;
mod policy_setting_tests;
mod transport_tests;
