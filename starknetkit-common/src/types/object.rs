//! `deserialize_with` helpers for wallet payload fields.
//!
//! Derived struct impls also accept positional arrays, which wallet
//! payloads never use, and `Option` fields accept `null`, which wallet
//! payloads express by omitting the field.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::SchemaError;

/// Deserializes `value` as `T` after checking that it is an object.
pub fn from_object<T: DeserializeOwned>(value: Value) -> Result<T, SchemaError> {
    if !value.is_object() {
        return Err(SchemaError::Malformed(format!(
            "invalid type: {value}, expected an object"
        )));
    }
    Ok(serde_json::from_value(value)?)
}

pub fn required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    from_object(value).map_err(D::Error::custom)
}

/// Optional object field, only reached when the field is present.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    from_object(value).map(Some).map_err(D::Error::custom)
}

/// Optional field that may be omitted but not set to `null`.
///
/// Pair with `#[serde(default)]` so that a missing field is `None`.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Err(D::Error::custom("invalid type: null, expected a value")),
        value => T::deserialize(value).map(Some).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Inner {
        a: u32,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Outer {
        #[serde(deserialize_with = "required")]
        inner: Inner,
        #[serde(default, deserialize_with = "optional")]
        extra: Option<Inner>,
        #[serde(default, deserialize_with = "non_null")]
        label: Option<String>,
    }

    #[test]
    fn test_objects_are_accepted() {
        let outer: Outer = serde_json::from_value(json!({ "inner": { "a": 1 } })).unwrap();
        assert_eq!(
            outer,
            Outer {
                inner: Inner { a: 1 },
                extra: None,
                label: None
            }
        );
    }

    #[test]
    fn test_arrays_are_rejected() {
        assert!(serde_json::from_value::<Outer>(json!({ "inner": [1] })).is_err());
        assert!(serde_json::from_value::<Outer>(json!({ "inner": { "a": 1 }, "extra": [1] })).is_err());
        assert!(from_object::<Inner>(json!([1])).is_err());
    }

    #[test]
    fn test_null_is_not_an_omitted_field() {
        let inner = json!({ "a": 1 });
        assert!(serde_json::from_value::<Outer>(json!({ "inner": inner, "extra": null })).is_err());
        assert!(serde_json::from_value::<Outer>(json!({ "inner": inner, "label": null })).is_err());

        let outer: Outer =
            serde_json::from_value(json!({ "inner": inner, "label": "mail" })).unwrap();
        assert_eq!(outer.label.as_deref(), Some("mail"));
    }
}
