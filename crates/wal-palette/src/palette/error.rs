//! Error types for color parsing and palette assembly

use std::fmt;
use std::num::ParseIntError;

/// A color code (as printed by ImageMagick or schemer2) that isn't valid
/// hex.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Neither `RGB` nor `RRGGBB` once the leading `#` is stripped
    InvalidLength,
    /// Multi-byte characters where hex digits should be
    NonAscii,
    /// A digit outside `0-9a-fA-F`
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        Self::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("color code must have 3 or 6 hex digits"),
            Self::NonAscii => f.write_str("color code is not ASCII"),
            Self::InvalidHex(err) => write!(f, "color code has a bad hex digit: {err}"),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidHex(err) => Some(err),
            Self::InvalidLength | Self::NonAscii => None,
        }
    }
}

/// A backend assembled the wrong number of colors.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Not exactly [`PALETTE_SIZE`](crate::PALETTE_SIZE) entries (or fewer
    /// than a layout step needs)
    WrongLength { expected: usize, actual: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "palette must have {expected} colors, got {actual}")
            }
        }
    }
}

impl std::error::Error for PaletteError {}
