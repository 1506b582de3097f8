//! Integer literal parsing shared by the vector format and host tooling.
//!
//! Accepted forms: decimal, `0x`/`0X` hex, `0b`/`0B` binary, with optional
//! `_` digit separators.

use std::num::IntErrorKind;

use thiserror::Error;

/// Failure to parse an integer literal into a fixed-width value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Text is not a recognized literal.
    #[error("not a valid integer literal")]
    Invalid,
    /// Literal is well-formed but exceeds the target width.
    #[error("literal does not fit in {bits} bits")]
    OutOfRange {
        /// Width of the value the literal was parsed into.
        bits: u32,
    },
}

/// Parses a literal into the widest supported value.
///
/// # Errors
///
/// Returns [`LiteralError::Invalid`] for malformed text and
/// [`LiteralError::OutOfRange`] for digit strings above `u64::MAX`.
pub fn parse_u64(text: &str) -> Result<u64, LiteralError> {
    let text = text.trim();
    let (digits, radix) =
        if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            (hex, 16)
        } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
            (bin, 2)
        } else {
            (text, 10)
        };

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_digit(radix)) {
        return Err(LiteralError::Invalid);
    }

    u64::from_str_radix(&cleaned, radix).map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow => LiteralError::OutOfRange { bits: u64::BITS },
        _ => LiteralError::Invalid,
    })
}

/// Parses a literal that must fit in 32 bits.
///
/// # Errors
///
/// Returns [`LiteralError::Invalid`] for malformed text and
/// [`LiteralError::OutOfRange`] for values above `u32::MAX`.
pub fn parse_u32(text: &str) -> Result<u32, LiteralError> {
    narrow(parse_u64(text), u32::BITS)
}

/// Parses a literal that must fit in 8 bits.
///
/// # Errors
///
/// Same as [`parse_u32`], with `u8::MAX` as the bound.
pub fn parse_u8(text: &str) -> Result<u8, LiteralError> {
    narrow(parse_u64(text), u8::BITS)
}

fn narrow<T>(wide: Result<u64, LiteralError>, bits: u32) -> Result<T, LiteralError>
where
    T: TryFrom<u64>,
{
    match wide {
        Ok(value) => T::try_from(value).map_err(|_| LiteralError::OutOfRange { bits }),
        Err(LiteralError::OutOfRange { .. }) => Err(LiteralError::OutOfRange { bits }),
        Err(LiteralError::Invalid) => Err(LiteralError::Invalid),
    }
}
