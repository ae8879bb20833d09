//! Shared palette adjustment passes

use std::cmp::Ordering;

use super::error::PaletteError;
use super::palette::Palette;
use crate::color::Rgb;

/// Sort colors dark to light by their YIQ coordinates.
///
/// The sort is stable, so equal colors keep their relative order.
pub fn sort_by_yiq(colors: &mut [Rgb]) {
    colors.sort_by(|a, b| a.yiq().partial_cmp(&b.yiq()).unwrap_or(Ordering::Equal));
}

/// Sort colors by HSV hue, red first.
pub fn sort_by_hue(colors: &mut [Rgb]) {
    colors.sort_by(|a, b| a.hsv().0.partial_cmp(&b.hsv().0).unwrap_or(Ordering::Equal));
}

/// Fix up background, foreground and "bright black" for a dark or light
/// theme.
///
/// Dark themes darken entry 0 into the background and derive the foreground
/// (7 and 15) and entry 8 by lightening it again. Light themes mirror this.
/// Each step reads the already-adjusted background.
///
/// # Errors
///
/// Returns [`PaletteError::WrongLength`] unless exactly 16 colors are given.
pub fn generic_adjust(colors: Vec<Rgb>, light: bool) -> Result<Palette, PaletteError> {
    let mut palette = Palette::new(colors)?;
    let c = palette.colors_mut();

    if light {
        c[0] = c[0].lighten(0.95);
        c[7] = c[0].darken(0.75);
        c[8] = c[0].darken(0.25);
    } else {
        c[0] = c[0].darken(0.80);
        c[7] = c[0].lighten(0.75);
        c[8] = c[0].lighten(0.25);
    }
    c[15] = c[7];

    Ok(palette)
}
