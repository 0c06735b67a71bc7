//! SDK error types

use ethcall_crypto::CryptoError;
use ethcall_primitives::HexError;
use thiserror::Error;

/// SDK error type
///
/// Any error out of an encode or resolve call means the calldata must not be
/// sent.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Transport/network error
    #[error("Transport error: {0}")]
    Transport(String),

    /// RPC error from node
    #[error("RPC error: {code} - {message}")]
    Rpc {
        /// Error code
        code: i64,
        /// Error message
        message: String,
    },

    /// Malformed argument to a conversion or encoding
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Hex text failed prefix, length or digit validation
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Malformed interface JSON
    #[error("Interface parse error: {0}")]
    Parse(String),

    /// No function signature matched a query
    #[error("No function matches: {0}")]
    NoMatch(String),

    /// ABI type outside uint, uint256, address and arrays of those
    #[error("Unsupported ABI type: {0}")]
    UnsupportedType(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<HexError> for SdkError {
    fn from(e: HexError) -> Self {
        match e {
            HexError::InvalidInput(msg) => SdkError::InvalidInput(msg),
            HexError::InvalidFormat(msg) => SdkError::InvalidFormat(msg),
        }
    }
}

impl From<CryptoError> for SdkError {
    fn from(e: CryptoError) -> Self {
        SdkError::InvalidFormat(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}
