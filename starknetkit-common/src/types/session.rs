use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SchemaError;
use crate::types::big_numberish::BigNumberish;
use crate::types::object::from_object;

/// Entrypoint that activates the pass-through of `offchainSessionDetails`.
pub const OFFCHAIN_SESSION_ENTRYPOINT: &str = "use_offchain_session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffchainSessionDetails {
    pub nonce: BigNumberish,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::types::object::non_null"
    )]
    pub max_fee: Option<BigNumberish>,
    pub version: String,
}

/// Call as it arrives over the wallet RPC wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRpcCall {
    pub contract_address: String,
    pub entrypoint: String,
    #[serde(default, deserialize_with = "crate::types::object::non_null")]
    pub calldata: Option<Vec<BigNumberish>>,
    #[serde(
        default,
        rename = "offchainSessionDetails",
        deserialize_with = "crate::types::object::optional"
    )]
    pub offchain_session_details: Option<OffchainSessionDetails>,
}

/// Normalized RPC call.
///
/// `offchain_session_details` is only ever set when the entrypoint is
/// [`OFFCHAIN_SESSION_ENTRYPOINT`], and is omitted from the serialized form
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawRpcCall")]
pub struct RpcCall {
    pub contract_address: String,
    pub entrypoint: String,
    pub calldata: Vec<BigNumberish>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offchain_session_details: Option<OffchainSessionDetails>,
}

impl From<RawRpcCall> for RpcCall {
    fn from(raw: RawRpcCall) -> Self {
        let offchain_session_details = if raw.entrypoint == OFFCHAIN_SESSION_ENTRYPOINT {
            raw.offchain_session_details
        } else {
            None
        };
        Self {
            contract_address: raw.contract_address,
            entrypoint: raw.entrypoint,
            calldata: raw.calldata.unwrap_or_default(),
            offchain_session_details,
        }
    }
}

impl RpcCall {
    /// Parses a non-empty array of wire calls.
    pub fn parse_many(value: Value) -> Result<Vec<Self>, SchemaError> {
        let items: Vec<Value> = serde_json::from_value(value)?;
        if items.is_empty() {
            return Err(SchemaError::EmptyCallsArray);
        }
        items.into_iter().map(from_object).collect()
    }
}
