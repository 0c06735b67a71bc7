//! ABI type definitions

use ethcall_primitives::{parse_decimal, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::SdkError;

/// Kind of an interface entry (`type` field in the JSON)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Callable function
    Function,
    /// Log event
    Event,
    /// Constructor
    Constructor,
    /// Fallback function
    Fallback,
    /// Plain ether receive function
    Receive,
    /// Custom error
    Error,
}

/// Declared state mutability. Informational only, never affects encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    /// Reads nothing from chain state
    Pure,
    /// Reads but does not modify state
    View,
    /// Modifies state, rejects value
    Nonpayable,
    /// Modifies state, accepts value
    Payable,
}

/// One `{name, type}` parameter of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    /// Parameter name (may be empty)
    #[serde(default)]
    pub name: String,
    /// Solidity type string, e.g. `uint256` or `address[]`
    #[serde(rename = "type")]
    pub ty: String,
}

impl AbiParam {
    /// Create a parameter
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// One element of a contract interface description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEntry {
    /// Entry kind
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Entry name; empty for constructors and fallbacks
    #[serde(default)]
    pub name: String,
    /// Ordered inputs
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    /// Ordered outputs
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    /// Declared mutability
    #[serde(default, rename = "stateMutability", skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<StateMutability>,
}

/// Encodable parameter types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// `uint` / `uint256`
    Uint,
    /// 20-byte address
    Address,
    /// One-dimensional dynamic array of a base type
    Array(Box<ParamType>),
}

impl ParamType {
    /// Check if this type needs a head offset and a length-prefixed tail
    pub fn is_dynamic(&self) -> bool {
        matches!(self, ParamType::Array(_))
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Uint => write!(f, "uint256"),
            ParamType::Address => write!(f, "address"),
            ParamType::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}

/// Call argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    /// Unsigned integer of any magnitude (checked against 256 bits when encoded)
    Uint(Quantity),
    /// "0x"-prefixed 40-digit address
    Address(String),
    /// Elements of an array argument
    Array(Vec<AbiValue>),
}

impl AbiValue {
    /// Create a uint value
    pub fn uint(value: impl Into<Quantity>) -> Self {
        AbiValue::Uint(value.into())
    }

    /// Create a uint value from decimal text (e.g. a wei amount)
    pub fn uint_from_decimal(s: &str) -> Result<Self, SdkError> {
        Ok(AbiValue::Uint(parse_decimal(s)?))
    }

    /// Create an address value
    pub fn address(address: impl Into<String>) -> Self {
        AbiValue::Address(address.into())
    }

    /// Create an array value
    pub fn array(items: impl IntoIterator<Item = AbiValue>) -> Self {
        AbiValue::Array(items.into_iter().collect())
    }

    /// Short name of the value's shape, for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            AbiValue::Uint(_) => "uint",
            AbiValue::Address(_) => "address",
            AbiValue::Array(_) => "array",
        }
    }
}

impl From<u64> for AbiValue {
    fn from(value: u64) -> Self {
        AbiValue::Uint(Quantity::from(value))
    }
}

impl From<Quantity> for AbiValue {
    fn from(value: Quantity) -> Self {
        AbiValue::Uint(value)
    }
}
