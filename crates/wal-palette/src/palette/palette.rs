//! Fixed-size terminal palette

use super::error::PaletteError;
use crate::color::Rgb;

/// Number of entries in a terminal palette (8 normal + 8 bright colors).
pub const PALETTE_SIZE: usize = 16;

/// A 16-color terminal palette.
///
/// Index 0 is the background, index 7 and 15 the foreground, 8 the
/// "bright black" used for comments and borders. The length is enforced at
/// construction time, so every accessor is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette from exactly [`PALETTE_SIZE`] colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::WrongLength`] for any other number of colors.
    ///
    /// # Example
    ///
    /// ```
    /// use wal_palette::{Palette, Rgb};
    ///
    /// let palette = Palette::new(vec![Rgb::BLACK; 16]).unwrap();
    /// assert_eq!(palette.background(), Rgb::BLACK);
    ///
    /// assert!(Palette::new(vec![Rgb::BLACK; 8]).is_err());
    /// ```
    pub fn new(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        let actual = colors.len();
        let colors: [Rgb; PALETTE_SIZE] =
            colors.try_into().map_err(|_| PaletteError::WrongLength {
                expected: PALETTE_SIZE,
                actual,
            })?;
        Ok(Self { colors })
    }

    /// All 16 colors in terminal order.
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// Color at `index`, if it is in range.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Background color (entry 0).
    pub fn background(&self) -> Rgb {
        self.colors[0]
    }

    /// Foreground color (entry 15).
    pub fn foreground(&self) -> Rgb {
        self.colors[PALETTE_SIZE - 1]
    }

    /// Iterate over the colors in terminal order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }

    /// Lowercase `#rrggbb` codes in terminal order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.iter().map(Rgb::to_hex).collect()
    }

    pub(crate) fn colors_mut(&mut self) -> &mut [Rgb; PALETTE_SIZE] {
        &mut self.colors
    }
}
