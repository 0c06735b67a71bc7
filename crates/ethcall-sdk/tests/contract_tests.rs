//! Contract integration tests for ethcall-sdk
//!
//! Selector resolution and call encoding through the public API, with the
//! node-side hasher driven by MockTransport.

use async_trait::async_trait;
use ethcall_crypto::keccak256_hex;
use ethcall_primitives::{str_to_hex, to_hex, HexInput};
use ethcall_sdk::abi::AbiValue;
use ethcall_sdk::{ContractAbi, HashProvider, MockTransport, RpcHasher, SdkError};
use serde_json::Value;
use std::sync::Arc;

const ADDR: &str = "0x742d35cc6634c0532925a3b844bc9e7595f0ab3d";

const TOKEN_ABI: &str = r#"[
    {"type": "constructor", "inputs": [{"name": "supply", "type": "uint256"}]},
    {"type": "function", "name": "transfer", "stateMutability": "nonpayable",
     "inputs": [{"name": "to", "type": "address"}, {"name": "value", "type": "uint256"}]},
    {"type": "function", "name": "airdrop", "stateMutability": "nonpayable",
     "inputs": [{"name": "amounts", "type": "uint256[]"}]},
    {"type": "function", "name": "airdropTo", "stateMutability": "nonpayable",
     "inputs": [{"name": "recipients", "type": "address[]"},
                {"name": "amounts", "type": "uint256[]"}]},
    {"type": "function", "name": "mint", "stateMutability": "payable",
     "inputs": [{"name": "to", "type": "address"}, {"name": "ids", "type": "uint256[]"}]},
    {"type": "function", "name": "setFlag", "stateMutability": "nonpayable",
     "inputs": [{"name": "flag", "type": "bool"}]},
    {"type": "fallback", "stateMutability": "payable"}
]"#;

fn word(n: u64) -> String {
    format!("{n:064x}")
}

fn address_word(address: &str) -> String {
    format!("{:0>64}", &address[2..])
}

fn selector(signature: &str) -> String {
    let hash = keccak256_hex(&format!("0x{}", str_to_hex(signature.as_bytes()))).unwrap();
    hash[..10].to_string()
}

fn rpc_contract() -> (ContractAbi, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let contract = ContractAbi::from_json(TOKEN_ABI, RpcHasher::new(transport.clone())).unwrap();
    (contract, transport)
}

struct FailingHasher;

#[async_trait]
impl HashProvider for FailingHasher {
    async fn keccak256(&self, _data: &str) -> Result<String, SdkError> {
        Err(SdkError::Transport("connection refused".to_string()))
    }
}

// ==================== Selector Resolution Tests ====================

#[tokio::test]
async fn test_resolve_transfer_via_node() {
    let (contract, transport) = rpc_contract();

    let resolved = contract.resolve_selectors("transfer", true).await.unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved["transfer(address,uint256)"].selector, "0xa9059cbb");

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "web3_sha3");
    assert_eq!(
        calls[0].params,
        vec![Value::String(to_hex(&HexInput::text("transfer(address,uint256)")))]
    );
}

#[tokio::test]
async fn test_one_hash_request_per_match() {
    let (contract, transport) = rpc_contract();

    let resolved = contract.resolve_selectors("airdrop", false).await.unwrap();
    assert_eq!(resolved.len(), 2);
    assert_eq!(transport.call_count("web3_sha3"), 2);

    let resolved = contract.resolve_selectors("airdrop", true).await.unwrap();
    assert_eq!(resolved.len(), 1);
    assert!(resolved.contains_key("airdrop(uint256[])"));
    assert_eq!(transport.call_count("web3_sha3"), 3);
}

#[tokio::test]
async fn test_fallback_is_not_a_function_match() {
    let (contract, _) = rpc_contract();
    let result = contract.resolve_selectors("constructor", false).await;
    assert!(matches!(result, Err(SdkError::NoMatch(_))));
}

#[tokio::test]
async fn test_hash_failure_aborts_resolution() {
    let contract = ContractAbi::from_json(TOKEN_ABI, FailingHasher).unwrap();
    let result = contract.resolve_selectors("transfer", false).await;
    assert!(matches!(result, Err(SdkError::Transport(_))));

    let result = contract
        .encode_call("transfer", &[AbiValue::address(ADDR), AbiValue::from(1u64)])
        .await;
    assert!(matches!(result, Err(SdkError::Transport(_))));
}

#[tokio::test]
async fn test_malformed_hash_from_node() {
    let (contract, transport) = rpc_contract();

    transport.set_response("web3_sha3", Value::from(42));
    let result = contract.resolve_selectors("transfer", true).await;
    assert!(matches!(result, Err(SdkError::Serialization(_))));

    transport.set_response("web3_sha3", Value::String("0x12".to_string()));
    let result = contract.resolve_selectors("transfer", true).await;
    assert!(matches!(result, Err(SdkError::InvalidFormat(_))));
}

// ==================== Call Encoding Tests ====================

#[tokio::test]
async fn test_encode_transfer() {
    let (contract, _) = rpc_contract();

    let calls = contract
        .encode_call("transfer", &[AbiValue::address(ADDR), AbiValue::from(1000u64)])
        .await
        .unwrap();

    let expected = format!("0xa9059cbb{}{}", address_word(ADDR), word(1000));
    assert_eq!(calls["transfer(address,uint256)"], expected);
    assert_eq!(expected.len(), 10 + 64 + 64);
}

#[tokio::test]
async fn test_encode_wei_amount_beyond_u64() {
    let (contract, _) = rpc_contract();
    let amount = AbiValue::uint_from_decimal("100000000000000000000000").unwrap();

    let calls = contract
        .encode_call("transfer", &[AbiValue::address(ADDR), amount])
        .await
        .unwrap();

    let data = &calls["transfer(address,uint256)"];
    // 10^23 = 0x152d02c7e14af6800000
    assert!(data.ends_with("152d02c7e14af6800000"));
    assert_eq!(data.len(), 138);
}

#[tokio::test]
async fn test_encode_single_uint_array() {
    let (contract, _) = rpc_contract();

    let amounts = AbiValue::array([10u64, 20, 30].map(AbiValue::from));
    let calls = contract.encode_call("airdrop", &[amounts]).await.unwrap();

    // airdropTo needs two arguments and is skipped
    assert_eq!(calls.len(), 1);
    let expected = [
        selector("airdrop(uint256[])"),
        word(32),
        word(3),
        word(10),
        word(20),
        word(30),
    ]
    .concat();
    assert_eq!(calls["airdrop(uint256[])"], expected);
}

#[tokio::test]
async fn test_encode_two_arrays() {
    let (contract, _) = rpc_contract();
    let other = "0x0000000000000000000000000000000000000001";

    let calls = contract
        .encode_call(
            "airdropTo",
            &[
                AbiValue::array([AbiValue::address(ADDR), AbiValue::address(other)]),
                AbiValue::array([AbiValue::from(5u64), AbiValue::from(6u64)]),
            ],
        )
        .await
        .unwrap();

    let expected = [
        selector("airdropTo(address[],uint256[])"),
        word(64),
        word(160),
        word(2),
        address_word(ADDR),
        address_word(other),
        word(2),
        word(5),
        word(6),
    ]
    .concat();
    assert_eq!(calls["airdropTo(address[],uint256[])"], expected);
}

#[tokio::test]
async fn test_encode_scalar_before_array_keeps_legacy_offsets() {
    let (contract, _) = rpc_contract();

    let calls = contract
        .encode_call(
            "mint",
            &[
                AbiValue::address(ADDR),
                AbiValue::array([AbiValue::from(1u64)]),
            ],
        )
        .await
        .unwrap();

    // The address does not advance the accumulator: both head words are 64
    let expected = [
        selector("mint(address,uint256[])"),
        word(64),
        word(64),
        address_word(ADDR),
        word(1),
        word(1),
    ]
    .concat();
    assert_eq!(calls["mint(address,uint256[])"], expected);
}

#[tokio::test]
async fn test_encode_unsupported_type() {
    let (contract, _) = rpc_contract();
    let result = contract.encode_call("setFlag", &[AbiValue::from(1u64)]).await;
    assert!(matches!(result, Err(SdkError::UnsupportedType(t)) if t == "bool"));
}

#[tokio::test]
async fn test_encode_no_match() {
    let (contract, transport) = rpc_contract();
    let result = contract.encode_call("burn", &[]).await;
    assert!(matches!(result, Err(SdkError::NoMatch(_))));
    assert_eq!(transport.call_count("web3_sha3"), 0);
}

#[tokio::test]
async fn test_local_and_node_hashers_agree() {
    let (node, _) = rpc_contract();
    let local = ContractAbi::from_json(TOKEN_ABI, ethcall_sdk::LocalHasher).unwrap();

    let args = [AbiValue::array([AbiValue::address(ADDR)]), AbiValue::array([AbiValue::from(9u64)])];
    assert_eq!(
        node.encode_call("airdropTo", &args).await.unwrap(),
        local.encode_call("airdropTo", &args).await.unwrap()
    );
}
