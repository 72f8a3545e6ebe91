//! Authentication and credentials for the Turbot provider.
//!
//! - [`Credentials`]: Resolved access key, secret key and workspace
//! - [`resolve`] / [`resolve_with_env`]: Credential resolution with
//!   per-field precedence (explicit > environment > credentials file)
//!
//! ## Credentials File
//!
//! An INI file with one section per profile:
//!
//! ```text
//! [default]
//! turbot_access_key_id=034840a0-fa46-44fa-a445-954c39d0f0f0
//! turbot_secret_access_key=860c12c8-e8a5-4617-8771-7885a7cb0f0f
//! turbot_workspace=https://example-turbot.cloud.turbot.com
//! ```

mod credentials;
mod resolver;

pub use credentials::Credentials;
pub use resolver::{
    DEFAULT_PROFILE, ENV_ACCESS_KEY, ENV_PROFILE, ENV_SECRET_KEY, ENV_WORKSPACE,
    default_credentials_path, resolve, resolve_with_env,
};
