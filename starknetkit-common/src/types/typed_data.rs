use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::SchemaError;

const MERKLETREE_TYPE: &str = "merkletree";
const ENUM_TYPE: &str = "enum";

/// A field descriptor of a `TypedData` type definition.
///
/// Variants are resolved in order: `merkletree`, `enum`, then the generic
/// descriptor, the first structural match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeParameter {
    MerkleTree { name: String, contains: String },
    Enum { name: String, contains: String },
    Basic { name: String, r#type: String },
}

impl TypeParameter {
    pub fn name(&self) -> &str {
        match self {
            Self::MerkleTree { name, .. } | Self::Enum { name, .. } | Self::Basic { name, .. } => {
                name
            }
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::MerkleTree { .. } => MERKLETREE_TYPE,
            Self::Enum { .. } => ENUM_TYPE,
            Self::Basic { r#type, .. } => r#type,
        }
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Result<String, SchemaError> {
    match fields.remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(SchemaError::InvalidTypeDescriptor(format!(
            "field `{key}` must be a string, got {other}"
        ))),
        None => Err(SchemaError::InvalidTypeDescriptor(format!(
            "missing field `{key}`"
        ))),
    }
}

impl TryFrom<Value> for TypeParameter {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(SchemaError::InvalidTypeDescriptor(format!(
                    "expected an object, got {other}"
                )));
            }
        };
        let name = take_string(&mut fields, "name")?;
        let r#type = take_string(&mut fields, "type")?;

        Ok(match (r#type.as_str(), fields.remove("contains")) {
            (MERKLETREE_TYPE, Some(Value::String(contains))) => Self::MerkleTree { name, contains },
            (ENUM_TYPE, Some(Value::String(contains))) => Self::Enum { name, contains },
            _ => Self::Basic { name, r#type },
        })
    }
}

impl<'de> Deserialize<'de> for TypeParameter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TypeParameter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let contains = match self {
            Self::MerkleTree { contains, .. } | Self::Enum { contains, .. } => Some(contains),
            Self::Basic { .. } => None,
        };
        let mut map = serializer.serialize_map(Some(2 + usize::from(contains.is_some())))?;
        map.serialize_entry("name", self.name())?;
        map.serialize_entry("type", self.type_name())?;
        if let Some(contains) = contains {
            map.serialize_entry("contains", contains)?;
        }
        map.end()
    }
}

/// Off-chain message submitted for signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedData {
    pub types: IndexMap<String, Vec<TypeParameter>>,
    pub primary_type: String,
    pub domain: Map<String, Value>,
    #[serde(default)]
    pub message: Value,
}

impl TypedData {
    /// Returns true if `type_name` is declared in `types`.
    pub fn is_struct(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn primary_fields(&self) -> Option<&[TypeParameter]> {
        self.types.get(&self.primary_type).map(Vec::as_slice)
    }
}
