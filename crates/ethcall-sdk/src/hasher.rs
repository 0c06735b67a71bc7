//! Keccak-256 providers used for selector derivation

use async_trait::async_trait;
use serde_json::Value;

use crate::transport::{deserialize_response, Transport};
use crate::SdkError;

/// Source of keccak-256 hashes.
///
/// Takes "0x"-prefixed hex data and returns "0x" + 64 hex digits.
#[async_trait]
pub trait HashProvider: Send + Sync {
    /// Hash hex-encoded bytes
    async fn keccak256(&self, data: &str) -> Result<String, SdkError>;
}

/// Hashes in-process with the `sha3` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHasher;

#[async_trait]
impl HashProvider for LocalHasher {
    async fn keccak256(&self, data: &str) -> Result<String, SdkError> {
        Ok(ethcall_crypto::keccak256_hex(data)?)
    }
}

/// Asks the node through `web3_sha3`
pub struct RpcHasher<T> {
    transport: T,
}

impl<T: Transport> RpcHasher<T> {
    /// Create a hasher over a transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[async_trait]
impl<T: Transport> HashProvider for RpcHasher<T> {
    async fn keccak256(&self, data: &str) -> Result<String, SdkError> {
        let value = self
            .transport
            .request_json("web3_sha3", vec![Value::String(data.to_string())])
            .await?;
        deserialize_response(value)
    }
}
