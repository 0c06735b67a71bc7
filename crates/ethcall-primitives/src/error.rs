//! Hex conversion errors

use thiserror::Error;

/// Error returned by the hex converters.
///
/// Validators (`is_valid_*`) never produce this; they answer with a `bool`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// Malformed numeric or string argument to a conversion
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Hex text fails prefix, length or digit-set validation
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}
