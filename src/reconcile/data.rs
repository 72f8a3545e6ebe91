//! Host-facing resource state.

use std::collections::BTreeMap;

use crate::types::Value;
use crate::Error;

/// The state of one managed resource: an identity plus named fields.
///
/// Reconcilers read the configured fields and write back what the API
/// reports. Getters return zero values (`""`, `false`, an empty list) for
/// missing or null fields; a field of the wrong type is a
/// [`TypeMismatch`](crate::ErrorKind::TypeMismatch).
///
/// ## Example
///
/// ```rust
/// use turbot_provider::reconcile::ResourceData;
///
/// let mut data = ResourceData::new()
///     .with("policy_type", "tmod:@turbot/aws-s3#/policy/types/bucketApproved")
///     .with("value", "Skip");
///
/// assert_eq!(data.get_str("value").unwrap(), "Skip");
/// assert_eq!(data.get_str("note").unwrap(), "");
/// assert!(!data.get_bool("value_source_used").unwrap());
///
/// data.set_id("180391200585213");
/// data.clear_id();
/// assert_eq!(data.id(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    id: Option<String>,
    fields: BTreeMap<String, Value>,
}

impl ResourceData {
    /// Creates empty state with no identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates state for an existing identity, e.g. on import.
    pub fn with_id(id: impl Into<String>) -> Self {
        let mut data = Self::new();
        data.set_id(id);
        data
    }

    /// Sets a field, builder style.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns the identity, if the resource exists.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the identity or an error naming the missing id.
    pub fn require_id(&self) -> Result<&str, Error> {
        self.id()
            .ok_or_else(|| Error::invalid_argument("resource has no id"))
    }

    /// Sets the identity. An empty id clears it.
    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.id = (!id.is_empty()).then_some(id);
    }

    /// Clears the identity, marking the resource as gone.
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Returns a raw field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a string field; missing or null is `""`.
    pub fn get_str(&self, field: &str) -> Result<&str, Error> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(""),
            Some(value) => value
                .as_str()
                .map_err(|_| field_mismatch(field, "string", value)),
        }
    }

    /// Returns a boolean field; missing or null is `false`.
    pub fn get_bool(&self, field: &str) -> Result<bool, Error> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(false),
            Some(value) => value
                .as_bool()
                .map_err(|_| field_mismatch(field, "bool", value)),
        }
    }

    /// Returns a list of strings; missing or null is empty.
    pub fn get_string_list(&self, field: &str) -> Result<Vec<String>, Error> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => value
                .as_list()
                .map_err(|_| field_mismatch(field, "list", value))?
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .map_err(|_| field_mismatch(field, "list of strings", item))
                })
                .collect(),
        }
    }

    /// Returns `true` if the field holds something other than a zero value.
    pub fn is_set(&self, field: &str) -> bool {
        match self.fields.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::List(l)) => !l.is_empty(),
            Some(Value::Map(m)) => !m.is_empty(),
            Some(_) => true,
        }
    }

    /// Sets a field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Returns all fields, ordered by name.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}

fn field_mismatch(field: &str, expected: &str, found: &Value) -> Error {
    Error::new(
        crate::ErrorKind::TypeMismatch,
        format!(
            "field '{}': expected {}, found {}",
            field,
            expected,
            found.type_name()
        ),
    )
}
