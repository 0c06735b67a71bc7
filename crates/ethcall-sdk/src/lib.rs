//! # ethcall-sdk
//!
//! Turn a contract function name and arguments into the calldata an
//! Ethereum-compatible node expects.
//!
//! ## Features
//!
//! - **ContractAbi**: loads an interface JSON, indexes canonical signatures,
//!   resolves 4-byte selectors and encodes calls
//! - **ABI**: calldata encoding for `uint`, `uint256`, `address` and
//!   one-dimensional arrays of those
//! - **HashProvider**: where selector hashes come from (in-process or the
//!   node's `web3_sha3`)
//! - **Transport**: the JSON-RPC seam, with a mock and an HTTP implementation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ethcall_sdk::{abi::AbiValue, ContractAbi, MockTransport, RpcHasher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let abi = r#"[{"type": "function", "name": "transfer",
//!         "inputs": [{"name": "to", "type": "address"},
//!                    {"name": "value", "type": "uint256"}]}]"#;
//!
//!     // Selectors are hashed by the node through web3_sha3
//!     let contract = ContractAbi::from_json(abi, RpcHasher::new(MockTransport::new()))?;
//!
//!     let calls = contract
//!         .encode_call(
//!             "transfer",
//!             &[
//!                 AbiValue::address("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d"),
//!                 AbiValue::uint_from_decimal("1000000000000000000")?,
//!             ],
//!         )
//!         .await?;
//!
//!     for (signature, data) in &calls {
//!         println!("{signature}: {data}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
mod config;
mod contract;
mod error;
mod hasher;
mod transport;

pub use config::TransportConfig;
pub use contract::{ContractAbi, ResolvedFunction};
pub use error::SdkError;
pub use hasher::{HashProvider, LocalHasher, RpcHasher};
pub use transport::{deserialize_response, MockTransport, RecordedCall};

/// Re-export Transport trait for custom implementations
pub use transport::Transport;

#[cfg(feature = "http")]
pub use transport::HttpTransport;

// Re-export codec types for convenience
pub use ethcall_primitives::{HexError, HexInput, Quantity};
