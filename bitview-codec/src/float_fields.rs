//! # IEEE-754 field inspection
//!
//! Breaks a floating-point encoding into its sign, exponent, and mantissa
//! fields for display. Supports single precision plus the two common
//! 16-bit formats (IEEE-754 half precision and bfloat16).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use half::{bf16, f16};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FloatFormatError {
    #[error("Unknown float format `{0}`. Use one of `f32`, `f16`, or `bf16`.")]
    UnknownFormat(String),
}

/// A floating-point bit layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FloatFormat {
    /// IEEE-754 single precision: 1 sign, 8 exponent, 23 mantissa bits.
    #[default]
    Single,
    /// IEEE-754 half precision: 1 sign, 5 exponent, 10 mantissa bits.
    Half,
    /// bfloat16 (truncated single precision): 1 sign, 8 exponent, 7 mantissa bits.
    Brain,
}

impl FloatFormat {
    /// Total width of the encoding in bits.
    pub const fn bit_width(self) -> usize {
        match self {
            Self::Single => 32,
            Self::Half | Self::Brain => 16,
        }
    }

    /// Width of the exponent field in bits.
    pub const fn exponent_bits(self) -> usize {
        match self {
            Self::Single | Self::Brain => 8,
            Self::Half => 5,
        }
    }

    /// Width of the mantissa field in bits.
    pub const fn mantissa_bits(self) -> usize {
        match self {
            Self::Single => 23,
            Self::Half => 10,
            Self::Brain => 7,
        }
    }

    /// The exponent bias (127 for 8-bit exponents, 15 for half precision).
    pub const fn bias(self) -> i32 {
        (1_i32 << (self.exponent_bits() - 1)) - 1
    }
}

impl FromStr for FloatFormat {
    type Err = FloatFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f32" | "float32" | "single" => Ok(Self::Single),
            "f16" | "float16" | "half" => Ok(Self::Half),
            "bf16" | "bfloat16" | "brain" => Ok(Self::Brain),
            _ => Err(FloatFormatError::UnknownFormat(s.to_string())),
        }
    }
}

impl Display for FloatFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Single => "f32",
            Self::Half => "f16",
            Self::Brain => "bf16",
        })
    }
}

/// A float encoded in one of the supported formats, with access to the
/// raw bit pattern and the individual IEEE-754 fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatFields {
    Single(u32),
    Half(u16),
    Brain(u16),
}

impl FloatFields {
    /// Encodes a value into the given format.
    ///
    /// Conversions to the 16-bit formats round to nearest even and may
    /// lose precision or overflow to infinity, same as a hardware cast.
    pub fn encode(value: f32, format: FloatFormat) -> Self {
        match format {
            FloatFormat::Single => Self::Single(value.to_bits()),
            FloatFormat::Half => Self::Half(f16::from_f32(value).to_bits()),
            FloatFormat::Brain => Self::Brain(bf16::from_f32(value).to_bits()),
        }
    }

    /// Decodes the bit pattern back into a float.
    pub fn decode(self) -> f32 {
        match self {
            Self::Single(bits) => f32::from_bits(bits),
            Self::Half(bits) => f16::from_bits(bits).to_f32(),
            Self::Brain(bits) => bf16::from_bits(bits).to_f32(),
        }
    }

    /// The layout this encoding uses.
    pub const fn format(self) -> FloatFormat {
        match self {
            Self::Single(_) => FloatFormat::Single,
            Self::Half(_) => FloatFormat::Half,
            Self::Brain(_) => FloatFormat::Brain,
        }
    }

    /// The raw bit pattern, right-aligned in 32 bits.
    pub fn bits(self) -> u32 {
        match self {
            Self::Single(bits) => bits,
            Self::Half(bits) | Self::Brain(bits) => u32::from(bits),
        }
    }

    /// The encoding as bytes, most significant byte first.
    pub fn to_be_bytes(self) -> Vec<u8> {
        match self {
            Self::Single(bits) => bits.to_be_bytes().to_vec(),
            Self::Half(bits) | Self::Brain(bits) => bits.to_be_bytes().to_vec(),
        }
    }

    /// The sign bit (0 or 1).
    pub fn sign(self) -> u32 {
        self.bits() >> (self.format().bit_width() - 1)
    }

    /// The raw (biased) exponent field.
    pub fn exponent(self) -> u32 {
        let format = self.format();
        (self.bits() >> format.mantissa_bits()) & ((1 << format.exponent_bits()) - 1)
    }

    /// The mantissa (fraction) field.
    pub fn mantissa(self) -> u32 {
        self.bits() & ((1 << self.format().mantissa_bits()) - 1)
    }
}

impl Display for FloatFields {
    /// Renders the fields as zero-padded binary groups: `sign exponent mantissa`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let format = self.format();
        write!(
            f,
            "{} {:0ew$b} {:0mw$b}",
            self.sign(),
            self.exponent(),
            self.mantissa(),
            ew = format.exponent_bits(),
            mw = format.mantissa_bits(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_one() {
        let fields = FloatFields::encode(1.0, FloatFormat::Single);
        assert_eq!(fields.bits(), 0x3F80_0000);
        assert_eq!(fields.sign(), 0);
        assert_eq!(fields.exponent(), 127);
        assert_eq!(fields.mantissa(), 0);
        assert_eq!(fields.to_be_bytes(), vec![0x3F, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_single_negative_two() {
        let fields = FloatFields::encode(-2.0, FloatFormat::Single);
        assert_eq!(fields.bits(), 0xC000_0000);
        assert_eq!(fields.sign(), 1);
        assert_eq!(fields.exponent(), 128);
        assert_eq!(fields.mantissa(), 0);
    }

    #[test]
    fn test_half_one() {
        let fields = FloatFields::encode(1.0, FloatFormat::Half);
        assert_eq!(fields.bits(), 0x3C00);
        assert_eq!(fields.sign(), 0);
        assert_eq!(fields.exponent(), 15);
        assert_eq!(fields.mantissa(), 0);
    }

    #[test]
    fn test_brain_one() {
        let fields = FloatFields::encode(1.0, FloatFormat::Brain);
        assert_eq!(fields.bits(), 0x3F80);
        assert_eq!(fields.sign(), 0);
        assert_eq!(fields.exponent(), 127);
        assert_eq!(fields.mantissa(), 0);
    }

    #[test]
    fn test_biases() {
        assert_eq!(FloatFormat::Single.bias(), 127);
        assert_eq!(FloatFormat::Half.bias(), 15);
        assert_eq!(FloatFormat::Brain.bias(), 127);
    }

    #[test]
    fn test_decode_round_trip() {
        for format in [FloatFormat::Single, FloatFormat::Half, FloatFormat::Brain] {
            // 1.5 is exactly representable in all three formats
            assert_eq!(FloatFields::encode(1.5, format).decode(), 1.5);
        }
    }

    #[test]
    fn test_display_groups() {
        let fields = FloatFields::encode(1.0, FloatFormat::Single);
        assert_eq!(
            fields.to_string(),
            "0 01111111 00000000000000000000000"
        );

        let fields = FloatFields::encode(1.0, FloatFormat::Half);
        assert_eq!(fields.to_string(), "0 01111 0000000000");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("f32".parse(), Ok(FloatFormat::Single));
        assert_eq!("HALF".parse(), Ok(FloatFormat::Half));
        assert_eq!("bfloat16".parse(), Ok(FloatFormat::Brain));
        assert!("f64".parse::<FloatFormat>().is_err());
    }
}
