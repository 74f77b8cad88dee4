//! Positional argument shapes of the validated wallet methods.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starknetkit_common::types::object;
use starknetkit_common::{BigNumberish, Calls, TypedData};

use crate::methods::StarknetMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarknetVersion {
    #[serde(rename = "v3")]
    V3,
    #[serde(rename = "v4")]
    V4,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableOptions {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub starknet_version: Option<StarknetVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStarknetChainParameters {
    pub id: String,
    pub chain_id: String,
    pub chain_name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub rpc_urls: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::optional"
    )]
    pub native_currency: Option<NativeCurrency>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub block_explorer_urls: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchStarknetChainParameters {
    pub chain_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    #[serde(rename = "ERC20")]
    Erc20,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchAssetOptions {
    pub address: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub symbol: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub decimals: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub image: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchAssetParameters {
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde(deserialize_with = "object::required")]
    pub options: WatchAssetOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestAccountsParameters {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub silent_mode: Option<bool>,
}

/// Fee and nonce overrides attached to an `execute` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteOptions {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub nonce: Option<BigNumberish>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub max_fee: Option<BigNumberish>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object::non_null"
    )]
    pub version: Option<BigNumberish>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteArguments {
    pub calls: Calls,
    pub options: Option<ExecuteOptions>,
}

/// Normalized arguments of a wallet method, one variant per method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarknetMethodArguments {
    Enable(Option<EnableOptions>),
    AddStarknetChain(AddStarknetChainParameters),
    SwitchStarknetChain(SwitchStarknetChainParameters),
    WatchAsset(WatchAssetParameters),
    RequestAccounts(RequestAccountsParameters),
    Execute(ExecuteArguments),
    SignMessage(TypedData),
}

impl StarknetMethodArguments {
    pub const fn method(&self) -> StarknetMethod {
        match self {
            Self::Enable(_) => StarknetMethod::Enable,
            Self::AddStarknetChain(_) => StarknetMethod::AddStarknetChain,
            Self::SwitchStarknetChain(_) => StarknetMethod::SwitchStarknetChain,
            Self::WatchAsset(_) => StarknetMethod::WatchAsset,
            Self::RequestAccounts(_) => StarknetMethod::RequestAccounts,
            Self::Execute(_) => StarknetMethod::Execute,
            Self::SignMessage(_) => StarknetMethod::SignMessage,
        }
    }

    /// Serializes back to a positional argument list.
    ///
    /// Absent trailing optional arguments are omitted, so validating the
    /// result again yields the same value.
    pub fn to_raw_args(&self) -> Result<Vec<Value>, serde_json::Error> {
        let args = match self {
            Self::Enable(None) => vec![],
            Self::Enable(Some(options)) => vec![serde_json::to_value(options)?],
            Self::AddStarknetChain(parameters) => vec![serde_json::to_value(parameters)?],
            Self::SwitchStarknetChain(parameters) => vec![serde_json::to_value(parameters)?],
            Self::WatchAsset(parameters) => vec![serde_json::to_value(parameters)?],
            Self::RequestAccounts(parameters) => vec![serde_json::to_value(parameters)?],
            Self::Execute(ExecuteArguments { calls, options }) => {
                let mut args = vec![serde_json::to_value(calls)?];
                if let Some(options) = options {
                    args.push(serde_json::to_value(options)?);
                }
                args
            }
            Self::SignMessage(typed_data) => vec![serde_json::to_value(typed_data)?],
        };
        Ok(args)
    }
}
