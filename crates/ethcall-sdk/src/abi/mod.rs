//! Contract interface model and calldata encoding
//!
//! This module provides:
//! - Interface JSON types ([`AbiEntry`], [`AbiParam`])
//! - Canonical signatures and the per-kind [`SignatureIndex`]
//! - Calldata encoding for `uint`, `uint256`, `address` and
//!   one-dimensional arrays of those
//!
//! # Example
//!
//! ```rust
//! use ethcall_sdk::abi::{encode_function_call, AbiParam, AbiValue};
//!
//! let inputs = vec![AbiParam::new("to", "address"), AbiParam::new("value", "uint256")];
//! let data = encode_function_call(
//!     "0xa9059cbb",
//!     &inputs,
//!     &[
//!         AbiValue::address("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d"),
//!         AbiValue::from(1000u64),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(data.len(), 10 + 128);
//! ```

mod encode;
mod signature;
mod types;

pub use encode::{
    encode_address_word, encode_arguments, encode_function_call, encode_word, offset_table,
    parse_type, selector_from_hash, SELECTOR_HEX_LEN, WORD_BYTES, WORD_HEX_LEN,
};
pub use signature::{canonical_signature, SignatureEntry, SignatureIndex, DEFAULT_ENTRY_NAME};
pub use types::{AbiEntry, AbiParam, AbiValue, EntryKind, ParamType, StateMutability};
