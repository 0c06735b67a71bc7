//! # ethcall-primitives
//!
//! Conversions between Ethereum's "0x"-prefixed hex text and native values.
//!
//! - Arbitrary-precision quantities ([`Quantity`]) to and from hex
//! - Byte strings to hex data
//! - Validators for hex quantities, hex data and 20-byte addresses
//! - Normalization of zero-padded addresses
//!
//! Everything here is a pure function and can be used from any thread.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod codec;

pub use address::{hex_to_address, is_valid_address, validate_address, ADDRESS_HEX_LEN};
pub use error::HexError;
pub use codec::{
    has_hex_prefix, hex_to_number, is_valid_data, is_valid_quantity, parse_decimal,
    quantity_to_hex, str_to_hex, strip_hex_prefix, to_hex, HexInput, HEX_PREFIX,
};

/// Non-negative integer of unbounded magnitude (wei amounts, uint256 values).
pub use num_bigint::BigUint as Quantity;
