//! ABI calldata encoding
//!
//! Calldata is produced as hex text: the 10-character selector, then an
//! optional offset table, then one tail segment per input. Every word is 64
//! hex digits, left-padded with zeros.

use ethcall_primitives::{
    is_valid_quantity, quantity_to_hex, strip_hex_prefix, validate_address, Quantity,
};

use super::types::{AbiParam, AbiValue, ParamType};
use crate::SdkError;

/// Hex digits in one 32-byte word
pub const WORD_HEX_LEN: usize = 64;

/// Bytes in one word
pub const WORD_BYTES: usize = 32;

/// "0x" + 8 hex digits
pub const SELECTOR_HEX_LEN: usize = 10;

/// Parse a type string. Only `uint`, `uint256`, `address` and
/// one-dimensional arrays of those are encodable.
pub fn parse_type(s: &str) -> Result<ParamType, SdkError> {
    let s = s.trim();

    if let Some(base) = s.strip_suffix("[]") {
        return match parse_type(base)? {
            ParamType::Array(_) => Err(SdkError::UnsupportedType(s.to_string())),
            inner => Ok(ParamType::Array(Box::new(inner))),
        };
    }

    match s {
        "uint" | "uint256" => Ok(ParamType::Uint),
        "address" => Ok(ParamType::Address),
        _ => Err(SdkError::UnsupportedType(s.to_string())),
    }
}

/// Take the selector (first 4 bytes) from a "0x"-prefixed keccak-256 hash
pub fn selector_from_hash(hash: &str) -> Result<String, SdkError> {
    if hash.len() < SELECTOR_HEX_LEN || !is_valid_quantity(hash) {
        return Err(SdkError::InvalidFormat(format!(
            "{hash} is not a keccak-256 hash"
        )));
    }
    Ok(hash[..SELECTOR_HEX_LEN].to_string())
}

/// Encode an unsigned integer as one word
pub fn encode_word(value: &Quantity) -> Result<String, SdkError> {
    let digits = quantity_to_hex(value);
    if digits.len() > WORD_HEX_LEN {
        return Err(SdkError::InvalidInput(format!(
            "value 0x{digits} does not fit in 256 bits"
        )));
    }
    Ok(format!("{digits:0>WORD_HEX_LEN$}"))
}

/// Encode an address as one word, right-aligned
pub fn encode_address_word(address: &str) -> Result<String, SdkError> {
    validate_address(address)?;
    Ok(format!("{:0>WORD_HEX_LEN$}", strip_hex_prefix(address)))
}

fn encode_count(count: usize) -> Result<String, SdkError> {
    encode_word(&Quantity::from(count))
}

fn encode_value(ty: &ParamType, value: &AbiValue) -> Result<String, SdkError> {
    match (ty, value) {
        (ParamType::Uint, AbiValue::Uint(n)) => encode_word(n),
        (ParamType::Address, AbiValue::Address(a)) => encode_address_word(a),
        (ParamType::Array(inner), AbiValue::Array(items)) => {
            let mut out = encode_count(items.len())?;
            for item in items {
                out.push_str(&encode_value(inner, item)?);
            }
            Ok(out)
        }
        _ => Err(SdkError::InvalidInput(format!(
            "expected {ty}, got {} value",
            value.kind_name()
        ))),
    }
}

/// Byte offsets emitted ahead of the tail data.
///
/// The accumulator starts at one head slot per input and grows by
/// `32 * (len + 1)` after each array input. Scalar inputs leave it unchanged.
/// One value is returned per input; the final accumulated total is dropped.
///
/// This is the layout existing consumers decode. It equals the standard ABI
/// head only when every input is an array.
pub fn offset_table(types: &[ParamType], args: &[AbiValue]) -> Vec<usize> {
    let mut prefix = Vec::with_capacity(types.len() + 1);
    prefix.push(WORD_BYTES * types.len());

    for (i, (ty, arg)) in types.iter().zip(args).enumerate() {
        let step = match (ty, arg) {
            (ParamType::Array(_), AbiValue::Array(items)) => WORD_BYTES * (items.len() + 1),
            _ => 0,
        };
        prefix.push(prefix[i] + step);
    }

    prefix.pop();
    prefix
}

/// Encode arguments for a list of declared inputs, without the selector
pub fn encode_arguments(inputs: &[AbiParam], args: &[AbiValue]) -> Result<String, SdkError> {
    let types = inputs
        .iter()
        .map(|p| parse_type(&p.ty))
        .collect::<Result<Vec<_>, _>>()?;

    if args.len() != types.len() {
        return Err(SdkError::InvalidInput(format!(
            "expected {} arguments, got {}",
            types.len(),
            args.len()
        )));
    }

    let mut tail = String::with_capacity(types.len() * WORD_HEX_LEN);
    for (ty, arg) in types.iter().zip(args) {
        tail.push_str(&encode_value(ty, arg)?);
    }

    if !types.iter().any(ParamType::is_dynamic) {
        return Ok(tail);
    }

    let mut out = String::with_capacity(types.len() * WORD_HEX_LEN + tail.len());
    for offset in offset_table(&types, args) {
        out.push_str(&encode_count(offset)?);
    }
    out.push_str(&tail);
    Ok(out)
}

/// Encode function call (selector + arguments)
pub fn encode_function_call(
    selector: &str,
    inputs: &[AbiParam],
    args: &[AbiValue],
) -> Result<String, SdkError> {
    Ok(format!("{selector}{}", encode_arguments(inputs, args)?))
}
