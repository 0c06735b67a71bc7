//! Keccak-256 hashing

use ethcall_primitives::{has_hex_prefix, strip_hex_prefix, HEX_PREFIX};
use sha3::{Digest, Keccak256};

use crate::CryptoError;

/// Compute Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash hex-encoded data and return the digest as "0x" + 64 hex digits.
///
/// The input must carry the "0x" prefix; "0x" alone hashes the empty input.
pub fn keccak256_hex(data: &str) -> Result<String, CryptoError> {
    if !has_hex_prefix(data) {
        return Err(CryptoError::InvalidHex(format!(
            "{data} is not a prefixed hex string (0x)"
        )));
    }
    let bytes = hex::decode(strip_hex_prefix(data))
        .map_err(|e| CryptoError::InvalidHex(e.to_string()))?;

    Ok(format!("{HEX_PREFIX}{}", hex::encode(keccak256(&bytes))))
}
