//! wal-palette: color math and quantizers for terminal palette generation
//!
//! This crate turns a bag of pixels into the 16-color palette a terminal
//! theme needs. It does not decode images; callers hand it plain [`Rgb`]
//! pixels.
//!
//! # Quick Start
//!
//! ```
//! use wal_palette::{generic_adjust, quantize, sort_by_yiq, Rgb};
//!
//! let pixels: Vec<Rgb> = (0..=255u8).map(|v| Rgb::new(v, v / 2, 255 - v)).collect();
//!
//! let mut colors = quantize::colors(&quantize::median_cut(&pixels, 8, 1));
//! sort_by_yiq(&mut colors);
//! colors.resize(8, Rgb::BLACK);
//!
//! let raw: Vec<Rgb> = colors.iter().chain(colors.iter()).copied().collect();
//! let palette = generic_adjust(raw, false).unwrap();
//! assert_eq!(palette.colors().len(), 16);
//! ```
//!
//! # Palette Layout
//!
//! | Index | Role |
//! |-------|------|
//! | 0 | background |
//! | 1..=6 | accent colors |
//! | 7 | foreground |
//! | 8 | "bright black" (comments, borders) |
//! | 9..=14 | bright accents |
//! | 15 | bright foreground |
//!
//! # Rounding
//!
//! Color adjustments ([`Rgb::darken`], [`Rgb::lighten`], [`Rgb::blend`])
//! truncate toward zero after scaling. Palettes are
//! compared by hex code downstream, so changing this to rounding shifts
//! many colors by one step.

pub mod color;
pub mod palette;
pub mod quantize;

pub use color::Rgb;
pub use palette::{
    generic_adjust, sort_by_hue, sort_by_yiq, Palette, PaletteError, ParseColorError,
    PALETTE_SIZE,
};
pub use quantize::Swatch;
