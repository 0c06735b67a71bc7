//! Cryptographic errors

use thiserror::Error;

/// Hashing error
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Input is not hex data
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
}
