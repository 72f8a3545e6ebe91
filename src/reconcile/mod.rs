//! Reconciliation of declared resources against the Turbot API.
//!
//! Each managed resource kind has a [`Reconciler`] that maps host-facing
//! [`ResourceData`] onto typed client operations:
//!
//! | Kind | Type name | Reconciler |
//! |------|-----------|------------|
//! | [`ResourceKind::PolicySetting`] | `turbot_policy_setting` | [`PolicySettingReconciler`] |
//! | [`ResourceKind::Grant`] | `turbot_grant` | [`GrantReconciler`] |
//! | [`ResourceKind::GrantActivation`] | `turbot_grant_activation` | [`GrantActivationReconciler`] |
//! | [`ResourceKind::Resource`] | `turbot_resource` | [`ResourceReconciler`] |
//!
//! Common behavior:
//!
//! - `read` of a resource that no longer exists clears the id and succeeds
//! - `delete` clears the id on success
//! - `import` is a `read` of a caller-supplied id
//!
//! ## Example
//!
//! ```rust
//! use turbot_provider::reconcile::ResourceKind;
//!
//! let kind: ResourceKind = "turbot_grant".parse().unwrap();
//! assert_eq!(kind, ResourceKind::Grant);
//! assert_eq!(kind.reconciler().kind(), ResourceKind::Grant);
//! ```

mod data;
mod encryption;
mod grant;
mod grant_activation;
mod policy_setting;
mod policy_value;
mod resource;

use std::fmt;
use std::str::FromStr;

pub use data::ResourceData;
pub use encryption::{EncryptedValue, PgpEncryptor, ValueEncryptor};
pub use grant::{GrantReconciler, suppress_if_aka_matches};
pub use grant_activation::GrantActivationReconciler;
pub use policy_setting::{
    DEFAULT_PRECEDENCE, PolicySettingReconciler, WriteAttempt, suppress_value_diff,
};
pub use policy_value::PolicyValueDataSource;
pub use resource::ResourceReconciler;

use crate::client::Client;
use crate::Error;

/// A managed resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A policy setting.
    PolicySetting,
    /// A permission grant.
    Grant,
    /// An activation of a grant.
    GrantActivation,
    /// A generic resource.
    Resource,
}

impl ResourceKind {
    /// Returns every kind, in registration order.
    pub fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::PolicySetting,
            ResourceKind::Grant,
            ResourceKind::GrantActivation,
            ResourceKind::Resource,
        ]
    }

    /// Returns the host-facing type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::PolicySetting => "turbot_policy_setting",
            ResourceKind::Grant => "turbot_grant",
            ResourceKind::GrantActivation => "turbot_grant_activation",
            ResourceKind::Resource => "turbot_resource",
        }
    }

    /// Returns a default reconciler for this kind.
    pub fn reconciler(&self) -> Box<dyn Reconciler> {
        match self {
            ResourceKind::PolicySetting => Box::new(PolicySettingReconciler::new()),
            ResourceKind::Grant => Box::new(GrantReconciler),
            ResourceKind::GrantActivation => Box::new(GrantActivationReconciler),
            ResourceKind::Resource => Box::new(ResourceReconciler),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::all()
            .iter()
            .copied()
            .find(|kind| kind.type_name() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown resource type '{}'", s)))
    }
}

/// Create/read/update/delete semantics for one resource kind.
///
/// Operations take the configured state and write back what the API
/// reports. A reconciler holds no per-resource state.
#[async_trait::async_trait]
pub trait Reconciler: Send + Sync {
    /// Returns the kind this reconciler manages.
    fn kind(&self) -> ResourceKind;

    /// Creates the resource and records its id.
    async fn create(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error>;

    /// Refreshes state from the API.
    ///
    /// A resource that no longer exists has its id cleared.
    async fn read(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error>;

    /// Applies changed fields.
    ///
    /// Kinds whose fields all force replacement reject updates.
    async fn update(&self, _client: &Client, _data: &mut ResourceData) -> Result<(), Error> {
        Err(Error::invalid_argument(format!(
            "{} does not support in-place updates",
            self.kind()
        )))
    }

    /// Deletes the resource and clears its id.
    async fn delete(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error>;

    /// Returns whether the resource still exists.
    async fn exists(&self, client: &Client, data: &ResourceData) -> Result<bool, Error>;

    /// Populates state for an existing id.
    async fn import(&self, client: &Client, data: &mut ResourceData) -> Result<(), Error> {
        self.read(client, data).await
    }

    /// Returns `true` if a change of `field` from `old` to `new` is not a
    /// real change.
    fn suppress_diff(&self, _field: &str, _old: &str, _new: &str, _data: &ResourceData) -> bool {
        false
    }
}
