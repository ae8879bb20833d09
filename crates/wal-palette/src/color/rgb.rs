//! 8-bit sRGB color type
//!
//! Every palette the backends produce is a list of these. The adjustment
//! helpers (`darken`, `lighten`, `blend`) truncate toward zero after
//! scaling, so the same input always yields the same hex code.

use std::fmt;
use std::str::FromStr;

use super::space::{hsv_to_rgb, rgb_to_hsv};
use crate::palette::ParseColorError;

/// A color as three 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure white, `#ffffff`.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Pure black, `#000000`.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from float channels in 0.0..=255.0.
    ///
    /// Channels are truncated toward zero and clamped to the u8 range.
    #[inline]
    pub fn from_f64_truncated(r: f64, g: f64, b: f64) -> Self {
        Self::new(truncate(r), truncate(g), truncate(b))
    }

    /// Lowercase `#rrggbb` representation.
    ///
    /// # Example
    /// ```
    /// use wal_palette::Rgb;
    /// assert_eq!(Rgb::new(255, 0, 16).to_hex(), "#ff0010");
    /// ```
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Scale every channel by `1 - amount`.
    ///
    /// # Example
    /// ```
    /// use wal_palette::Rgb;
    /// assert_eq!(Rgb::new(200, 100, 50).darken(0.5), Rgb::new(100, 50, 25));
    /// ```
    pub fn darken(self, amount: f64) -> Self {
        self.map(|c| c * (1.0 - amount))
    }

    /// Move every channel `amount` of the way toward 255.
    pub fn lighten(self, amount: f64) -> Self {
        self.map(|c| c + (255.0 - c) * amount)
    }

    /// Channel-wise midpoint of two colors.
    pub fn blend(self, other: Rgb) -> Self {
        Self::from_f64_truncated(
            0.5 * f64::from(self.r) + 0.5 * f64::from(other.r),
            0.5 * f64::from(self.g) + 0.5 * f64::from(other.g),
            0.5 * f64::from(self.b) + 0.5 * f64::from(other.b),
        )
    }

    /// HSV coordinates, each in 0.0..=1.0.
    pub fn hsv(self) -> (f64, f64, f64) {
        rgb_to_hsv(self.unit())
    }

    /// Clamp the HSV value into `min_v..=max_v` (0..=255 scale), keeping hue
    /// and saturation.
    ///
    /// Used to keep extracted colors readable on a dark background.
    pub fn clamp_value(self, min_v: u8, max_v: u8) -> Self {
        let (h, s, v) = self.hsv();
        let v = v.max(f64::from(min_v) / 255.0).min(f64::from(max_v) / 255.0);
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self::from_f64_truncated(r * 255.0, g * 255.0, b * 255.0)
    }

    /// YIQ coordinates computed on the 0..=255 channel values.
    ///
    /// `y` is the luma, so sorting by this tuple orders colors dark to light.
    pub fn yiq(self) -> (f64, f64, f64) {
        let (r, g, b) = (f64::from(self.r), f64::from(self.g), f64::from(self.b));
        let y = 0.30 * r + 0.59 * g + 0.11 * b;
        let i = 0.74 * (r - y) - 0.27 * (b - y);
        let q = 0.48 * (r - y) + 0.41 * (b - y);
        (y, i, q)
    }

    /// Channels scaled to 0.0..=1.0.
    #[inline]
    pub(crate) fn unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_f64_truncated(
            f(f64::from(self.r)),
            f(f64::from(self.g)),
            f(f64::from(self.b)),
        )
    }
}

#[inline]
fn truncate(value: f64) -> u8 {
    value.trunc().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive, with
    /// surrounding whitespace trimmed.
    ///
    /// ```
    /// use wal_palette::Rgb;
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::NonAscii);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Rgb = "#FFFFFF".parse().unwrap();
        assert_eq!(white, Rgb::WHITE);

        let black: Rgb = "000000".parse().unwrap();
        assert_eq!(black, Rgb::BLACK);

        let color: Rgb = "#1a2B3c".parse().unwrap();
        assert_eq!(color, Rgb::new(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let color: Rgb = "#ABC".parse().unwrap();
        assert_eq!(color, Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength)));
        assert!(matches!(
            "#ééé".parse::<Rgb>(),
            Err(ParseColorError::NonAscii)
        ));
    }

    #[test]
    fn test_hex_output_is_lowercase() {
        assert_eq!(Rgb::new(0xAB, 0xCD, 0xEF).to_hex(), "#abcdef");
        assert_eq!(Rgb::new(0xAB, 0xCD, 0xEF).to_string(), "#abcdef");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn test_darken_truncates() {
        assert_eq!(Rgb::new(200, 100, 50).darken(0.5), Rgb::new(100, 50, 25));
        // 3 * 0.5 = 1.5 -> 1
        assert_eq!(Rgb::new(3, 3, 3).darken(0.5), Rgb::new(1, 1, 1));
        assert_eq!(Rgb::new(10, 20, 30).darken(0.0), Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_lighten() {
        assert_eq!(Rgb::BLACK.lighten(0.5), Rgb::new(127, 127, 127));
        assert_eq!(Rgb::new(100, 100, 100).lighten(1.0), Rgb::WHITE);
        assert_eq!(Rgb::new(100, 0, 200).lighten(0.0), Rgb::new(100, 0, 200));
    }

    #[test]
    fn test_blend() {
        let blended = Rgb::new(0, 100, 255).blend(Rgb::new(255, 101, 0));
        assert_eq!(blended, Rgb::new(127, 100, 127));
    }

    #[test]
    fn test_clamp_value_raises_dark_colors() {
        let clamped = Rgb::new(40, 20, 20).clamp_value(170, 255);
        // Float round trip may land one below the bound
        assert!(clamped.r.abs_diff(170) <= 1);
        assert_eq!(clamped.g, clamped.b);
        assert!(clamped.g < clamped.r);
    }

    #[test]
    fn test_clamp_value_keeps_in_range_colors() {
        // v = 200/255 is already inside the range; truncation may shave 1 LSB
        let color = Rgb::new(200, 100, 0);
        let clamped = color.clamp_value(170, 255);
        assert!(clamped.r.abs_diff(200) <= 1);
        assert!(clamped.g.abs_diff(100) <= 1);
        assert_eq!(clamped.b, 0);
    }

    #[test]
    fn test_yiq_orders_by_luma() {
        let dark = Rgb::new(10, 10, 10).yiq();
        let light = Rgb::new(240, 240, 240).yiq();
        assert!(dark.0 < light.0);

        // Green contributes most to luma
        assert!(Rgb::new(0, 255, 0).yiq().0 > Rgb::new(255, 0, 0).yiq().0);
    }
}
