use std::path::Path;

use wal_palette::quantize::{self, bucket_average};
use wal_palette::{generic_adjust, sort_by_yiq, Palette, PaletteError, Rgb};

use crate::error::BackendError;
use crate::models::{AppConfig, BackendKind};
use crate::services::{load_pixels, Backend};

const GROUPS: usize = 8;

/// Dominant colors of a coarse 3×3×3 grid over the color cube
pub struct HaishokuBackend {
    thumbnail_size: u32,
}

impl HaishokuBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            thumbnail_size: config.thumbnail_size,
        }
    }
}

impl Backend for HaishokuBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Haishoku
    }

    fn generate(&self, image: &Path, light: bool) -> Result<Palette, BackendError> {
        let pixels = load_pixels(image, self.thumbnail_size)?;
        let colors = quantize::colors(&bucket_average(&pixels, GROUPS));
        tracing::debug!(found = colors.len(), "Bucket averages");

        let found = colors.len();
        let colors: [Rgb; GROUPS] = colors
            .try_into()
            .map_err(|_| BackendError::InsufficientColors {
                backend: BackendKind::Haishoku,
                found,
                needed: GROUPS,
            })?;

        Ok(adjust(colors, light)?)
    }
}

/// Sort dark to light, repeat to 16 entries and lift the background before
/// the shared adjustment.
pub fn adjust(mut colors: [Rgb; GROUPS], light: bool) -> Result<Palette, PaletteError> {
    sort_by_yiq(&mut colors);

    let mut raw: Vec<Rgb> = colors.iter().chain(colors.iter()).copied().collect();
    raw[0] = colors[0].lighten(0.40);

    generic_adjust(raw, light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_lifts_background_before_darkening() {
        let colors = [
            Rgb::new(200, 200, 200),
            Rgb::new(0, 0, 0),
            Rgb::new(100, 0, 0),
            Rgb::new(0, 100, 0),
            Rgb::new(0, 0, 100),
            Rgb::new(150, 150, 0),
            Rgb::new(0, 150, 150),
            Rgb::new(150, 0, 150),
        ];
        let palette = adjust(colors, false).unwrap();

        let background = Rgb::BLACK.lighten(0.40).darken(0.80);
        assert_eq!(palette.background(), background);
        assert_eq!(palette.foreground(), background.lighten(0.75));
        assert_eq!(palette.get(8), Some(background.lighten(0.25)));
        assert_eq!(palette.get(1), palette.get(9));
    }

    #[test]
    fn test_generate_rejects_flat_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.png");
        image::RgbaImage::from_pixel(8, 8, image::Rgba([30, 60, 90, 255]))
            .save(&path)
            .unwrap();

        let backend = HaishokuBackend::new(&AppConfig::default());
        assert!(matches!(
            backend.generate(&path, false),
            Err(BackendError::InsufficientColors {
                found: 1,
                needed: GROUPS,
                ..
            })
        ));
    }
}
