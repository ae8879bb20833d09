use std::path::Path;

use wal_palette::quantize::{self, median_cut};
use wal_palette::{sort_by_yiq, Palette, PaletteError, Rgb};

use crate::error::BackendError;
use crate::models::{AppConfig, BackendKind};
use crate::services::{load_pixels, Backend};

/// Colors the palette is built from
const BASE_COLORS: usize = 8;

/// Increasing median-cut sizes tried before giving up
const ATTEMPTS: usize = 10;

/// Median-cut quantization on a thumbnail of the image
pub struct ColorThiefBackend {
    thumbnail_size: u32,
    quality: usize,
}

impl ColorThiefBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            thumbnail_size: config.thumbnail_size,
            quality: config.colorthief_quality as usize,
        }
    }

    /// First `BASE_COLORS` swatches of the smallest median cut that yields
    /// enough of them
    fn extract(&self, pixels: &[Rgb]) -> Result<[Rgb; BASE_COLORS], BackendError> {
        let mut found = 0;
        for attempt in 0..ATTEMPTS {
            let count = BASE_COLORS + attempt;
            let swatches = median_cut(pixels, count, self.quality);
            tracing::debug!(count, found = swatches.len(), "Median cut");

            let colors = quantize::colors(&swatches);
            if let Some(base) = colors.get(..BASE_COLORS) {
                let mut result = [Rgb::BLACK; BASE_COLORS];
                result.copy_from_slice(base);
                return Ok(result);
            }

            found = colors.len();
            tracing::warn!(
                found,
                next = count + 1,
                "ColorThief couldn't generate a suitable palette, trying a larger palette size"
            );
        }

        Err(BackendError::InsufficientColors {
            backend: BackendKind::ColorThief,
            found,
            needed: BASE_COLORS,
        })
    }
}

impl Backend for ColorThiefBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::ColorThief
    }

    fn generate(&self, image: &Path, light: bool) -> Result<Palette, BackendError> {
        let pixels = load_pixels(image, self.thumbnail_size)?;
        let colors = self.extract(&pixels)?;
        Ok(adjust(colors, light)?)
    }
}

/// Sort dark to light, repeat to 16 entries and derive background and
/// foreground from the darkest color.
pub fn adjust(mut colors: [Rgb; BASE_COLORS], light: bool) -> Result<Palette, PaletteError> {
    sort_by_yiq(&mut colors);
    let darkest = colors[0];

    let mut raw: Vec<Rgb> = colors.iter().chain(colors.iter()).copied().collect();
    if light {
        raw[0] = darkest.lighten(0.90);
        raw[7] = darkest.darken(0.75);
    } else {
        raw[0] = darkest.darken(0.80);
        raw[7] = darkest.lighten(0.60);
    }
    raw[8] = raw[0].blend(raw[7]);
    raw[15] = raw[7];

    Palette::new(raw)
}
