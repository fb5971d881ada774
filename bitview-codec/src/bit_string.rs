//! # Binary digit strings
//!
//! Parsing of human-typed binary digit strings and rendering of byte
//! buffers as nibble-grouped bit strings.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BitStringError {
    #[error("`{0}` is not a binary digit.")]
    NonBinaryDigit(char),
    #[error("The binary number has more than 128 significant bits.")]
    TooWide,
}

/// Parses a binary digit string into an integer.
///
/// Non-digit characters (spaces, underscores, other separators) are
/// ignored, so inputs like `"1010 1010"` are accepted. The remaining
/// digits are interpreted as big-endian bits, most significant first.
/// An input with no digits at all parses as 0.
///
/// # Errors
///
/// Returns [`BitStringError::NonBinaryDigit`] if a digit other than `0`
/// or `1` is present, and [`BitStringError::TooWide`] if the value does
/// not fit in 128 bits.
pub fn parse_binary(text: &str) -> Result<u128, BitStringError> {
    let mut total: u128 = 0;
    for ch in text.chars() {
        if !ch.is_ascii_digit() {
            continue;
        }
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            other => return Err(BitStringError::NonBinaryDigit(other)),
        };
        total = total
            .checked_mul(2)
            .and_then(|shifted| shifted.checked_add(bit))
            .ok_or(BitStringError::TooWide)?;
    }
    Ok(total)
}

/// Renders bytes as binary digits grouped into 4-bit nibbles separated
/// by spaces, most significant bit first within each byte.
pub fn nibbles(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|byte| [byte >> 4, byte & 0x0F])
        .map(|nibble| format!("{nibble:04b}"))
        .collect::<Vec<_>>()
        .join(" ")
}
