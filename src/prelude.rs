//! Commonly used types.
//!
//! ```rust
//! use turbot_provider::prelude::*;
//! ```

pub use crate::{
    auth::Credentials,
    client::{Client, ClientBuilder},
    config::{ProviderConfig, TlsConfig},
    error::{Error, ErrorKind, Result},
    reconcile::{Reconciler, ResourceData, ResourceKind},
    types::Value,
};
