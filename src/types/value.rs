//! Dynamic values for caller-defined schemas.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A dynamically typed value decoded from the Turbot API.
///
/// Policy values and resource data have a shape decided by the policy or
/// resource type schema, not by this crate. `Value` holds them without loss
/// and exposes checked accessors that fail with
/// [`ErrorKind::TypeMismatch`](crate::ErrorKind::TypeMismatch) instead of
/// panicking.
///
/// # Example
///
/// ```rust
/// use turbot_provider::Value;
///
/// let value: Value = "Skip".into();
/// assert_eq!(value.as_str().unwrap(), "Skip");
/// assert!(value.as_bool().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// Null value.
    #[default]
    Null,

    /// Boolean value.
    Bool(bool),

    /// Integer value (64-bit signed).
    Integer(i64),

    /// Floating-point value (64-bit).
    Float(f64),

    /// String value.
    String(String),

    /// List of values.
    List(Vec<Value>),

    /// Nested map, ordered by key.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Decodes YAML source text into a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turbot_provider::Value;
    ///
    /// let value = Value::from_yaml("- a\n- b\n").unwrap();
    /// assert_eq!(value.as_list().unwrap().len(), 2);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Returns the name of the variant, used in type mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns `true` if this is a null value.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean value.
    pub fn as_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::type_mismatch("bool", other.type_name())),
        }
    }

    /// Returns the integer value.
    pub fn as_i64(&self) -> Result<i64, Error> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(Error::type_mismatch("integer", other.type_name())),
        }
    }

    /// Returns the numeric value, widening integers.
    pub fn as_f64(&self) -> Result<f64, Error> {
        match self {
            Value::Float(f) => Ok(*f),
            Value::Integer(i) => Ok(*i as f64),
            other => Err(Error::type_mismatch("number", other.type_name())),
        }
    }

    /// Returns the string value.
    pub fn as_str(&self) -> Result<&str, Error> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }

    /// Returns the list.
    pub fn as_list(&self) -> Result<&[Value], Error> {
        match self {
            Value::List(list) => Ok(list),
            other => Err(Error::type_mismatch("list", other.type_name())),
        }
    }

    /// Returns the map.
    pub fn as_map(&self) -> Result<&BTreeMap<String, Value>, Error> {
        match self {
            Value::Map(map) => Ok(map),
            other => Err(Error::type_mismatch("map", other.type_name())),
        }
    }

    /// Renders the value the way it is kept in stored state.
    ///
    /// Scalars render bare (`Skip`, `42`, `true`), null renders empty, and
    /// lists and maps render as compact JSON. Complex values are compared
    /// through their `valueSource` form, so only scalars need to match the
    /// configured text exactly.
    pub fn to_plain_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            Value::List(_) | Value::Map(_) => {
                serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, v) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_accessors_match_variant() {
        assert!(Value::from(true).as_bool().unwrap());
        assert_eq!(Value::from(7_i64).as_i64().unwrap(), 7);
        assert_eq!(Value::from(7_i64).as_f64().unwrap(), 7.0);
        assert_eq!(Value::from("x").as_str().unwrap(), "x");
        assert_eq!(Value::from(vec!["a", "b"]).as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_accessor_mismatch_is_error() {
        let err = Value::from("Skip").as_bool().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.to_string(), "expected bool, found string");

        let err = Value::Null.as_map().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_deserialize_json_shapes() {
        let value: Value = serde_json::from_str(r#"{"a": [1, 2.5, "x", null, false]}"#).unwrap();
        let map = value.as_map().unwrap();
        let list = map["a"].as_list().unwrap();
        assert_eq!(list[0], Value::Integer(1));
        assert_eq!(list[1], Value::Float(2.5));
        assert_eq!(list[2], Value::String("x".into()));
        assert_eq!(list[3], Value::Null);
        assert_eq!(list[4], Value::Bool(false));
    }

    #[test]
    fn test_from_yaml_scalars() {
        assert_eq!(Value::from_yaml("'Skip'").unwrap(), Value::from("Skip"));
        assert_eq!(Value::from_yaml("Check: Tags are correct").unwrap().type_name(), "map");
        assert_eq!(Value::from_yaml("42").unwrap(), Value::Integer(42));
        assert_eq!(Value::from_yaml("true").unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_to_plain_string() {
        assert_eq!(Value::Null.to_plain_string(), "");
        assert_eq!(Value::from("Skip").to_plain_string(), "Skip");
        assert_eq!(Value::Integer(42).to_plain_string(), "42");
        assert_eq!(Value::Bool(false).to_plain_string(), "false");
        assert_eq!(Value::from(vec!["a", "b"]).to_plain_string(), r#"["a","b"]"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(vec!["a"]).to_string(), "[\"a\"]");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
