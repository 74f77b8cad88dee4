pub mod errors;
pub mod network;
pub mod telemetry;
pub mod types;

// Re-export the argument primitives at the crate root for convenience
pub use errors::{ConversionError, SchemaError};
pub use network::{StarknetChainId, map_target_url_to_network_id};
pub use types::{
    BigNumberish, Call, CalldataItem, Calls, DeployAccountContract, DeployAccountVersion,
    OFFCHAIN_SESSION_ENTRYPOINT, OffchainSessionDetails, RpcCall, ShortString, TypeParameter,
    TypedData,
};
