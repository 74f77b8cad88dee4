use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use starknetkit::parse_rpc_calls;
use starknetkit_common::{BigNumberish, OFFCHAIN_SESSION_ENTRYPOINT, SchemaError};

fn session_call(entrypoint: &str) -> Value {
    json!({
        "contract_address": "0xA",
        "entrypoint": entrypoint,
        "calldata": [],
        "offchainSessionDetails": { "nonce": "1", "version": "v1" }
    })
}

#[test]
fn test_session_details_kept_for_session_entrypoint() {
    let calls = parse_rpc_calls(json!([session_call(OFFCHAIN_SESSION_ENTRYPOINT)])).unwrap();
    let normalized = serde_json::to_value(&calls).unwrap();
    assert_eq!(
        normalized[0]["offchainSessionDetails"],
        json!({ "nonce": "1", "version": "v1" })
    );
}

#[test]
fn test_session_details_dropped_for_other_entrypoints() {
    let calls = parse_rpc_calls(json!([session_call("transfer")])).unwrap();
    let normalized = serde_json::to_value(&calls).unwrap();
    let call = normalized[0].as_object().unwrap();
    assert!(!call.contains_key("offchainSessionDetails"));
    assert_eq!(call["entrypoint"], json!("transfer"));
}

#[test]
fn test_mixed_batch() {
    let calls = parse_rpc_calls(json!([
        session_call(OFFCHAIN_SESSION_ENTRYPOINT),
        session_call("approve"),
        { "contract_address": "0xB", "entrypoint": "mint", "calldata": ["0x1", 2] }
    ]))
    .unwrap();

    assert_eq!(calls.len(), 3);
    assert!(calls[0].offchain_session_details.is_some());
    assert!(calls[1].offchain_session_details.is_none());
    assert_eq!(
        calls[2].calldata,
        vec![BigNumberish::Hex("0x1".into()), BigNumberish::Number(2)]
    );
}

#[test]
fn test_rejects_empty_and_malformed_batches() {
    assert_eq!(parse_rpc_calls(json!([])), Err(SchemaError::EmptyCallsArray));
    assert!(parse_rpc_calls(json!({ "contract_address": "0xA", "entrypoint": "a" })).is_err());
    assert!(parse_rpc_calls(json!([{ "entrypoint": "a" }])).is_err());
}
