//! # ethcall-crypto
//!
//! Keccak-256 hashing, as used for function selectors.
//!
//! - [`keccak256`] over raw bytes
//! - [`keccak256_hex`] over hex data, with the same contract as the node's
//!   `web3_sha3` method

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod hash;

pub use error::CryptoError;
pub use hash::{keccak256, keccak256_hex};
