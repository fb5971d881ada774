use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ByteOrderError {
    #[error("Unrecognized byte order code `{0}`. Use one of `<`, `>`, `@`, `=`, or `!`.")]
    UnknownCode(String),
}

/// How the bytes of a multi-byte scalar are laid out when serialized.
///
/// Each mode is identified by a one-character code:
///
/// ```text
/// | Code | Byte order             | Size     | Alignment |
/// | ---- | ---------------------- | -------- | --------- |
/// | @    | native                 | native   | native    |
/// | =    | native                 | standard | none      |
/// | <    | little-endian          | standard | none      |
/// | >    | big-endian             | standard | none      |
/// | !    | network (= big-endian) | standard | none      |
/// ```
///
/// The two native modes resolve through the host byte order and are therefore
/// not portable across architectures. For the 4-byte scalars handled by this
/// crate they behave identically, since alignment and native sizing only
/// matter for compound layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// `@`: native byte order, native size and alignment.
    #[default]
    NativeAligned,
    /// `=`: native byte order, standard size, no alignment.
    NativeStandard,
    /// `<`: little-endian, standard size, no alignment.
    LittleEndian,
    /// `>`: big-endian, standard size, no alignment.
    BigEndian,
    /// `!`: network byte order, an alias for big-endian.
    Network,
}

/// The byte ordering a [`ByteOrder`] mode resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// The host's native byte ordering.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }
}

impl ByteOrder {
    /// The one-character code identifying this mode.
    pub const fn code(self) -> char {
        match self {
            Self::NativeAligned => '@',
            Self::NativeStandard => '=',
            Self::LittleEndian => '<',
            Self::BigEndian => '>',
            Self::Network => '!',
        }
    }

    /// Resolves the mode to a concrete byte ordering.
    pub const fn endianness(self) -> Endianness {
        match self {
            Self::LittleEndian => Endianness::Little,
            Self::BigEndian | Self::Network => Endianness::Big,
            Self::NativeAligned | Self::NativeStandard => Endianness::native(),
        }
    }
}

impl FromStr for ByteOrder {
    type Err = ByteOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "@" => Ok(Self::NativeAligned),
            "=" => Ok(Self::NativeStandard),
            "<" => Ok(Self::LittleEndian),
            ">" => Ok(Self::BigEndian),
            "!" => Ok(Self::Network),
            other => Err(ByteOrderError::UnknownCode(other.to_string())),
        }
    }
}

impl Display for ByteOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.code()))
    }
}
