pub mod big_numberish;
pub mod call;
pub mod deploy_account;
pub mod object;
pub mod session;
pub mod typed_data;

pub use big_numberish::{BigNumberish, ShortString};
pub use call::{CalldataItem, Call, Calls};
pub use deploy_account::{DeployAccountContract, DeployAccountVersion};
pub use session::{OFFCHAIN_SESSION_ENTRYPOINT, OffchainSessionDetails, RawRpcCall, RpcCall};
pub use typed_data::{TypeParameter, TypedData};
