use serde::{Deserialize, Serialize};
use starknet::core::types::Felt;
use strum::{AsRefStr, Display, EnumString};
use url::Url;

/// `SN_MAIN` encoded as a short string felt.
pub const MAINNET_CHAIN_ID: Felt = Felt::from_hex_unchecked("0x534e5f4d41494e");
/// `SN_SEPOLIA` encoded as a short string felt.
pub const SEPOLIA_CHAIN_ID: Felt = Felt::from_hex_unchecked("0x534e5f5345504f4c4941");

pub const MAINNET_NODE_URL: &str = "https://starknet-mainnet.public.blastapi.io";
pub const TESTNET_NODE_URL: &str = "https://starknet-testnet.public.blastapi.io";

#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum StarknetChainId {
    #[default]
    #[serde(rename = "SN_MAIN")]
    #[strum(serialize = "SN_MAIN")]
    Mainnet,
    #[serde(rename = "SN_SEPOLIA")]
    #[strum(serialize = "SN_SEPOLIA")]
    Sepolia,
}

impl StarknetChainId {
    pub const fn as_felt(&self) -> Felt {
        match self {
            Self::Mainnet => MAINNET_CHAIN_ID,
            Self::Sepolia => SEPOLIA_CHAIN_ID,
        }
    }

    pub fn from_felt(felt: &Felt) -> Option<Self> {
        if *felt == MAINNET_CHAIN_ID {
            Some(Self::Mainnet)
        } else if *felt == SEPOLIA_CHAIN_ID {
            Some(Self::Sepolia)
        } else {
            None
        }
    }

    /// Public node used when no RPC url is configured.
    pub const fn default_node_url(&self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_NODE_URL,
            Self::Sepolia => TESTNET_NODE_URL,
        }
    }
}

/// Network used while developing against a local dapp.
const DEVELOPMENT_NETWORK: StarknetChainId = StarknetChainId::Sepolia;

/// Ordered list of origin fragments and the network they map to.
const ORIGIN_NETWORKS: [(&str, StarknetChainId); 6] = [
    ("localhost", DEVELOPMENT_NETWORK),
    ("127.0.0.1", DEVELOPMENT_NETWORK),
    ("hydrogen", StarknetChainId::Sepolia),
    ("staging", StarknetChainId::Mainnet),
    ("dev", StarknetChainId::Sepolia),
    ("argent.xyz", StarknetChainId::Mainnet),
];

/// Guesses the network of a dapp from its URL origin.
///
/// Falls back to mainnet when nothing matches or the URL can't be parsed.
pub fn map_target_url_to_network_id(target: &str) -> StarknetChainId {
    match Url::parse(target) {
        Ok(url) => {
            let origin = url.origin().ascii_serialization();
            ORIGIN_NETWORKS
                .iter()
                .find(|(fragment, _)| origin.contains(fragment))
                .map_or(StarknetChainId::Mainnet, |(_, network)| *network)
        }
        Err(e) => {
            tracing::warn!(
                "Could not determine network from target URL {target} ({e}), defaulting to mainnet"
            );
            StarknetChainId::Mainnet
        }
    }
}
