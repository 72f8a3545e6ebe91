//! # Turbot Provider Core
//!
//! API client and reconciliation core for the Turbot infrastructure-as-code
//! provider. It resolves credentials, talks to a workspace's GraphQL
//! endpoint and maps declared resources onto create/read/update/delete
//! calls.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use turbot_provider::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let config = ProviderConfig::builder().profile("production").build();
//! let client = Client::configure(&config).await?;
//!
//! let mut setting = ResourceData::new()
//!     .with("policy_type", "tmod:@turbot/aws-s3#/policy/types/bucketApproved")
//!     .with("resource", "tmod:@turbot/turbot#/")
//!     .with("value", "Skip");
//!
//! let reconciler = ResourceKind::PolicySetting.reconciler();
//! reconciler.create(&client, &mut setting).await?;
//! println!("created {:?}", setting.id());
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! - [`auth`]: credential resolution (explicit, environment, profile file)
//! - [`config`]: provider configuration and endpoint normalization
//! - [`transport`]: authenticated GraphQL over HTTP
//! - [`api`]: typed domain operations
//! - [`reconcile`]: per-resource-kind lifecycle and diff suppression
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use the platform TLS stack

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod transport;
pub mod types;

mod user_agent;

pub mod prelude;

pub use auth::Credentials;
pub use client::{Client, ClientBuilder};
pub use config::{ProviderConfig, TlsConfig, build_api_url};
pub use error::{AUTH_FAILURE_MESSAGE, Error, ErrorKind, Result};
pub use reconcile::{Reconciler, ResourceData, ResourceKind};
pub use types::Value;
