use std::num::IntErrorKind;

use thiserror::Error;

use crate::byte_order::{ByteOrder, Endianness};

#[derive(Debug, Error, PartialEq)]
pub enum PackError {
    #[error("`{0}` is not a valid hexadecimal integer.")]
    InvalidHex(String),
    #[error("Out of range: -2147483648 <= {0} <= 2147483647 does not hold.")]
    OutOfRange(String),
}

/// A 32-bit scalar value to be packed into (or unpacked from) 4 bytes.
///
/// Exactly one variant is active per invocation: either a two's-complement
/// signed integer or an IEEE-754 single precision float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i32),
    Float(f32),
}

impl Scalar {
    /// Parses a hexadecimal string into a signed 32-bit integer.
    ///
    /// Accepts an optional sign and an optional `0x`/`0X` prefix. The text
    /// may be arbitrarily long; the numeric value must fit the signed 32-bit
    /// range.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidHex`] if the text is not a hexadecimal
    /// integer, and [`PackError::OutOfRange`] if the value falls outside
    /// `-2147483648..=2147483647`.
    pub fn from_hex(text: &str) -> Result<i32, PackError> {
        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let digits = unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
            .unwrap_or(unsigned);
        // A second sign after the one we stripped is malformed.
        if digits.starts_with(['+', '-']) {
            return Err(PackError::InvalidHex(trimmed.to_string()));
        }

        let magnitude = i128::from_str_radix(digits, 16).map_err(|e| match e.kind() {
            // Doesn't even fit in 128 bits, so it certainly doesn't fit in 32.
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                PackError::OutOfRange(trimmed.to_string())
            }
            _ => PackError::InvalidHex(trimmed.to_string()),
        })?;
        let value = if negative { -magnitude } else { magnitude };

        i32::try_from(value).map_err(|_| PackError::OutOfRange(value.to_string()))
    }

    /// Packs the scalar into its 4-byte encoding under the given byte order.
    ///
    /// Integers use two's-complement; floats use IEEE-754 single precision.
    pub fn pack(self, order: ByteOrder) -> [u8; 4] {
        match (self, order.endianness()) {
            (Self::Int(v), Endianness::Little) => v.to_le_bytes(),
            (Self::Int(v), Endianness::Big) => v.to_be_bytes(),
            (Self::Float(v), Endianness::Little) => v.to_le_bytes(),
            (Self::Float(v), Endianness::Big) => v.to_be_bytes(),
        }
    }

    /// Decodes 4 bytes as a two's-complement signed integer.
    pub const fn unpack_int(bytes: [u8; 4], order: ByteOrder) -> i32 {
        match order.endianness() {
            Endianness::Little => i32::from_le_bytes(bytes),
            Endianness::Big => i32::from_be_bytes(bytes),
        }
    }

    /// Decodes 4 bytes as an IEEE-754 single precision float.
    pub fn unpack_float(bytes: [u8; 4], order: ByteOrder) -> f32 {
        match order.endianness() {
            Endianness::Little => f32::from_le_bytes(bytes),
            Endianness::Big => f32::from_be_bytes(bytes),
        }
    }
}
