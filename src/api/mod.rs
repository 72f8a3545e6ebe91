//! Typed operations on Turbot entities.
//!
//! Each sub-client is a thin composition: domain arguments become GraphQL
//! variables, one request is sent, and the response is decoded into a
//! [`types`](crate::types) entity.
//!
//! ```rust,no_run
//! # async fn example(client: turbot_provider::Client) -> Result<(), turbot_provider::Error> {
//! let grants = client.grants();
//! if !grants.exists("180391200585213").await? {
//!     println!("grant was removed outside the provider");
//! }
//! # Ok(())
//! # }
//! ```

mod active_grants;
mod grants;
mod policy_settings;
mod policy_values;
pub(crate) mod queries;
mod resources;

pub use active_grants::ActiveGrantsClient;
pub use grants::GrantsClient;
pub use policy_settings::{PolicySettingInput, PolicySettingsClient};
pub use policy_values::PolicyValuesClient;
pub use resources::ResourcesClient;
