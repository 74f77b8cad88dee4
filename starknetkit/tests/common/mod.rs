use rstest::fixture;
use serde_json::{Value, json};

pub fn transfer_call() -> Value {
    json!({
        "contractAddress": "0x1",
        "entrypoint": "transfer",
        "calldata": ["0x2", "100"]
    })
}

#[fixture]
pub fn typed_data() -> Value {
    json!({
        "types": {
            "StarkNetDomain": [
                { "name": "name", "type": "felt" },
                { "name": "version", "type": "felt" },
                { "name": "chainId", "type": "felt" }
            ],
            "Mail": [
                { "name": "from", "type": "felt" },
                { "name": "attachments", "type": "merkletree", "contains": "felt" },
                { "name": "kind", "type": "enum", "contains": "Kind" }
            ]
        },
        "primaryType": "Mail",
        "domain": { "name": "StarkNet Mail", "version": "1", "chainId": 1 },
        "message": { "from": "0x1", "attachments": ["0x2"], "kind": { "Letter": [] } }
    })
}

#[fixture]
pub fn chain_parameters() -> Value {
    json!({
        "id": "starknet-sepolia",
        "chainId": "SN_SEPOLIA",
        "chainName": "Starknet Sepolia",
        "rpcUrls": ["https://starknet-sepolia.public.blastapi.io"],
        "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 }
    })
}
