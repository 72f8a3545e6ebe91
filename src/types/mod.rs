//! Core types for the Turbot provider.
//!
//! - [`Value`]: Dynamically typed values for caller-defined schemas
//! - [`ResourceMetadata`] and friends: The `turbot` metadata envelope
//! - [`PolicySetting`], [`PolicyValue`], [`Grant`], [`ActiveGrant`], [`Resource`]:
//!   Domain entities decoded from API responses

mod entities;
mod metadata;
mod value;

pub use entities::{ActiveGrant, Grant, PolicySetting, PolicyValue, Resource};
pub use metadata::{ActiveGrantMetadata, GrantMetadata, PolicyMetadata, ResourceMetadata};
pub use value::Value;

/// Deserializes `null` as the type's default.
///
/// The API returns `null` for unset scalar fields, which plain `String`
/// fields would reject.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
