//! # Decimal/hex/binary lookup table
//!
//! Writes a markdown-style table of every integer in `[0, base^power)`
//! alongside its hexadecimal and binary representations.

use std::io::{self, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("{base}^{power} does not fit in 64 bits.")]
    RangeTooLarge { base: u64, power: u32 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes a `| int | hex | bin |` table for every value in `[0, base^power)`.
///
/// The hexadecimal column is uppercase and zero-padded to 2 digits; the
/// binary column is zero-padded to 8 digits. Values of 256 and above render
/// at their natural width instead.
///
/// # Errors
///
/// Returns [`TableError::RangeTooLarge`] if `base^power` overflows a `u64`,
/// and forwards any error from the underlying writer.
pub fn write_table<W: Write>(out: &mut W, base: u64, power: u32) -> Result<(), TableError> {
    let end = base
        .checked_pow(power)
        .ok_or(TableError::RangeTooLarge { base, power })?;

    writeln!(out, "| int | hex | bin |")?;
    writeln!(out, "| --- | --- | --- |")?;
    for i in 0..end {
        writeln!(out, "| {i:3} | {i:02X} | {i:08b} |")?;
    }
    Ok(())
}
