//! Address validation and normalization

use crate::codec::{all_hex_digits, has_hex_prefix, strip_hex_prefix, HEX_PREFIX};
use crate::HexError;

/// Hex digits in a 20-byte address body
pub const ADDRESS_HEX_LEN: usize = 40;

/// Check for "0x" followed by exactly 40 hex digits
pub fn is_valid_address(address: &str) -> bool {
    has_hex_prefix(address)
        && address.len() == HEX_PREFIX.len() + ADDRESS_HEX_LEN
        && all_hex_digits(strip_hex_prefix(address))
}

/// Strict form of [`is_valid_address`]: fails instead of answering `false`
pub fn validate_address(address: &str) -> Result<(), HexError> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(HexError::InvalidFormat(format!("{address} has invalid format")))
    }
}

/// Normalize a zero-padded address, e.g. a 32-byte log topic or return word.
///
/// The prefix is optional on input. Leading zero nibbles are stripped and the
/// remainder must be exactly a 20-byte address, otherwise `None`. An address
/// whose first nibble really is zero cannot survive this and yields `None`.
pub fn hex_to_address(s: &str) -> Option<String> {
    let body = strip_hex_prefix(s);
    if !all_hex_digits(body) {
        return None;
    }

    let start = body.find(|c: char| c != '0')?;
    let address = format!("{HEX_PREFIX}{}", &body[start..]);

    is_valid_address(&address).then_some(address)
}
