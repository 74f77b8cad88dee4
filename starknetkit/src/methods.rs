use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Wallet methods whose arguments are validated before dispatch.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum StarknetMethod {
    Enable,
    AddStarknetChain,
    SwitchStarknetChain,
    WatchAsset,
    RequestAccounts,
    Execute,
    SignMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("enable", StarknetMethod::Enable)]
    #[case("addStarknetChain", StarknetMethod::AddStarknetChain)]
    #[case("switchStarknetChain", StarknetMethod::SwitchStarknetChain)]
    #[case("watchAsset", StarknetMethod::WatchAsset)]
    #[case("requestAccounts", StarknetMethod::RequestAccounts)]
    #[case("execute", StarknetMethod::Execute)]
    #[case("signMessage", StarknetMethod::SignMessage)]
    fn test_wire_names(#[case] name: &str, #[case] method: StarknetMethod) {
        assert_eq!(StarknetMethod::from_str(name).unwrap(), method);
        assert_eq!(method.to_string(), name);
    }

    #[test]
    fn test_unknown_names() {
        assert!(StarknetMethod::from_str("getLoginStatus").is_err());
        assert!(StarknetMethod::from_str("Execute").is_err());
        assert_eq!(StarknetMethod::iter().count(), 7);
    }
}
