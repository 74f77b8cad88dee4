use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;

/// Account deployment payload version, only `0` and `1` exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum DeployAccountVersion {
    Zero,
    One,
}

impl TryFrom<u64> for DeployAccountVersion {
    type Error = SchemaError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(SchemaError::InvalidDeployAccountVersion(other)),
        }
    }
}

impl From<DeployAccountVersion> for u64 {
    fn from(version: DeployAccountVersion) -> Self {
        match version {
            DeployAccountVersion::Zero => 0,
            DeployAccountVersion::One => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployAccountContract {
    pub address: String,
    pub class_hash: String,
    pub salt: String,
    pub calldata: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::types::object::non_null"
    )]
    pub sigdata: Option<Vec<String>>,
    pub version: DeployAccountVersion,
}
