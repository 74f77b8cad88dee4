use thiserror::Error;

pub(crate) const UNSUPPORTED_BIG_NUMBERISH: &str =
    "Only hex, integers and bigint are supported in calldata";

/// Refinement failures raised while shaping raw wallet arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{UNSUPPORTED_BIG_NUMBERISH}, got {0}")]
    InvalidBigNumberish(String),
    #[error("The short string cannot be empty")]
    EmptyShortString,
    #[error("The short string cannot exceed 31 characters (got {0})")]
    ShortStringTooLong(usize),
    #[error("The short string must only contain ASCII characters: {0}")]
    NonAsciiShortString(String),
    #[error("The shortString should not be a hex string: {0}")]
    HexShortString(String),
    #[error("The shortString should not be an integer string: {0}")]
    DecimalShortString(String),
    #[error("Array must contain at least 1 element(s)")]
    EmptyCallsArray,
    #[error("invalid type descriptor: {0}")]
    InvalidTypeDescriptor(String),
    #[error("invalid deploy account version {0}, expected 0 or 1")]
    InvalidDeployAccountVersion(u64),
    #[error("{0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("failed to convert {0} to felt")]
    FeltConversion(String),
    #[error("failed to compute selector for entrypoint {0}")]
    SelectorConversion(String),
}
