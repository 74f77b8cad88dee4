use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use starknet::core::{
    types::{Call as StarknetCall, Felt},
    utils::get_selector_from_name,
};

use crate::errors::{ConversionError, SchemaError};
use crate::types::big_numberish::BigNumberish;
use crate::types::object::from_object;

/// A single calldata entry: a scalar or one level of nested values
/// (array-typed contract parameters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CalldataItem {
    Value(BigNumberish),
    Array(Vec<BigNumberish>),
}

impl TryFrom<Value> for CalldataItem {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(BigNumberish::classify)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Array),
            scalar => BigNumberish::classify(&scalar).map(Self::Value),
        }
    }
}

impl<'de> Deserialize<'de> for CalldataItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// A contract invocation as sent by a dapp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub contract_address: String,
    pub entrypoint: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::types::object::non_null"
    )]
    pub calldata: Option<Vec<CalldataItem>>,
}

impl Call {
    /// Flattens the calldata into felts.
    ///
    /// A nested array is encoded as its length followed by its items.
    pub fn calldata_felts(&self) -> Result<Vec<Felt>, ConversionError> {
        let mut felts = Vec::new();
        for item in self.calldata.iter().flatten() {
            match item {
                CalldataItem::Value(v) => felts.push(v.to_felt()?),
                CalldataItem::Array(values) => {
                    felts.push(Felt::from(values.len() as u64));
                    for v in values {
                        felts.push(v.to_felt()?);
                    }
                }
            }
        }
        Ok(felts)
    }

    /// Builds the call consumed by a starknet account.
    pub fn to_starknet_call(&self) -> Result<StarknetCall, ConversionError> {
        let to = Felt::from_hex(&self.contract_address)
            .map_err(|_| ConversionError::FeltConversion(self.contract_address.clone()))?;
        let selector = get_selector_from_name(&self.entrypoint)
            .map_err(|_| ConversionError::SelectorConversion(self.entrypoint.clone()))?;
        Ok(StarknetCall {
            to,
            selector,
            calldata: self.calldata_felts()?,
        })
    }
}

/// Either a non-empty list of calls or a bare call.
///
/// The list form is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Calls {
    Many(Vec<Call>),
    Single(Call),
}

impl Calls {
    pub fn as_slice(&self) -> &[Call] {
        match self {
            Self::Many(calls) => calls,
            Self::Single(call) => std::slice::from_ref(call),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl TryFrom<Value> for Calls {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                if items.is_empty() {
                    return Err(SchemaError::EmptyCallsArray);
                }
                items
                    .into_iter()
                    .map(from_object::<Call>)
                    .collect::<Result<Vec<_>, _>>()
                    .map(Self::Many)
            }
            single => from_object(single).map(Self::Single),
        }
    }
}

impl<'de> Deserialize<'de> for Calls {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}
