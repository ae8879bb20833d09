//! Palette types and the adjustment passes that turn raw backend colors
//! into a 16-entry terminal palette.

mod adjust;
mod error;
mod palette;

pub use adjust::{generic_adjust, sort_by_hue, sort_by_yiq};
pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PALETTE_SIZE};
