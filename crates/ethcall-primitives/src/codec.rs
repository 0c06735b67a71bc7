//! Quantity and data hex encoding
//!
//! Ethereum's JSON-RPC surface distinguishes two hex shapes that look the
//! same on the wire:
//!
//! - *quantity*: a number, no leading zeros, `0x0` for zero
//! - *data*: whole bytes, two digits per byte, at least one byte

use num_traits::Zero;

use crate::{HexError, Quantity};

/// Prefix carried by every hex value on the JSON-RPC surface
pub const HEX_PREFIX: &str = "0x";

/// Value to hex-encode, tagged by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexInput {
    /// Encode as a quantity (base-16 digits of the number)
    Number(Quantity),
    /// Encode byte-for-byte (two digits per byte)
    Text(Vec<u8>),
}

impl HexInput {
    /// Build a numeric input from decimal text
    pub fn from_decimal(s: &str) -> Result<Self, HexError> {
        parse_decimal(s).map(HexInput::Number)
    }

    /// Build a byte input from a string's UTF-8 bytes
    pub fn text(s: impl AsRef<[u8]>) -> Self {
        HexInput::Text(s.as_ref().to_vec())
    }
}

impl From<u64> for HexInput {
    fn from(value: u64) -> Self {
        HexInput::Number(Quantity::from(value))
    }
}

impl From<Quantity> for HexInput {
    fn from(value: Quantity) -> Self {
        HexInput::Number(value)
    }
}

/// Encode a value as "0x"-prefixed hex.
///
/// Numbers produce no leading zeros except the single digit of zero; bytes
/// produce exactly two lowercase digits each.
pub fn to_hex(input: &HexInput) -> String {
    let digits = match input {
        HexInput::Number(value) => quantity_to_hex(value),
        HexInput::Text(bytes) => str_to_hex(bytes),
    };
    format!("{HEX_PREFIX}{digits}")
}

/// Base-16 digits of a quantity, lowercase and unprefixed
pub fn quantity_to_hex(value: &Quantity) -> String {
    value.to_str_radix(16)
}

/// Hex digits of raw bytes, lowercase and unprefixed
pub fn str_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex quantity into an arbitrary-precision number
pub fn hex_to_number(input: &str) -> Result<Quantity, HexError> {
    if !has_hex_prefix(input) {
        return Err(HexError::InvalidInput(format!(
            "{input} is not a prefixed hex string (0x)"
        )));
    }
    if !is_valid_quantity(input) {
        return Err(HexError::InvalidInput(format!(
            "{input} is not a valid quantity"
        )));
    }

    let mut value = Quantity::zero();
    for c in strip_hex_prefix(input).chars() {
        let digit = c
            .to_digit(16)
            .ok_or_else(|| HexError::InvalidInput(format!("invalid hex digit: {c}")))?;
        value = value * 16u32 + digit;
    }
    Ok(value)
}

/// Parse decimal text into a quantity
pub fn parse_decimal(s: &str) -> Result<Quantity, HexError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HexError::InvalidInput(format!("{s} is not a decimal number")));
    }
    Quantity::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| HexError::InvalidInput(format!("{s} is not a decimal number")))
}

/// Literal lowercase "0x" prefix check
pub fn has_hex_prefix(s: &str) -> bool {
    s.starts_with(HEX_PREFIX)
}

/// Drop a leading "0x" if present
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix(HEX_PREFIX).unwrap_or(s)
}

/// Prefixed, at least one digit, hex digits only. `0x0` is valid.
pub fn is_valid_quantity(s: &str) -> bool {
    if !has_hex_prefix(s) || s.len() < 3 {
        return false;
    }
    all_hex_digits(strip_hex_prefix(s))
}

/// Prefixed, whole bytes (even digit count), at least one byte.
pub fn is_valid_data(s: &str) -> bool {
    if !has_hex_prefix(s) {
        return false;
    }
    let digits = strip_hex_prefix(s);
    digits.len() >= 2 && digits.len() % 2 == 0 && all_hex_digits(digits)
}

pub(crate) fn all_hex_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}
