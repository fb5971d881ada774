//! # bitview codec
//!
//! Conversions between human-readable numeric input (binary digit strings,
//! decimal integers, decimal floats, hexadecimal strings) and fixed-width
//! binary encodings (4-byte two's-complement integers and IEEE-754 single
//! precision floats), under a caller-selected byte order.

// Private modules by default
mod bit_string;
mod byte_order;
mod float_fields;
mod scalar;
pub mod table;

// Pub use for re-export without too many levels of hierarchy.
// Most modules only have one or two useful definitions,
// so this flattens things for better ergonomics.
pub use bit_string::{BitStringError, nibbles, parse_binary};
pub use byte_order::{ByteOrder, ByteOrderError, Endianness};
pub use float_fields::{FloatFields, FloatFormat, FloatFormatError};
pub use scalar::{PackError, Scalar};
