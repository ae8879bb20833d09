use std::path::Path;

use wal_palette::quantize::{self, kmeans};
use wal_palette::{generic_adjust, sort_by_hue, Palette, PaletteError, Rgb};

use crate::error::BackendError;
use crate::models::{AppConfig, BackendKind};
use crate::services::{load_pixels, Backend};

const CLUSTERS: usize = 6;
const MAX_ITERATIONS: usize = 20;

/// HSV value range (0..=255) extracted colors are clamped into
const MIN_VALUE: u8 = 170;
const MAX_VALUE: u8 = 255;

/// k-means clustering on a thumbnail of the image
pub struct ColorzBackend {
    thumbnail_size: u32,
}

impl ColorzBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            thumbnail_size: config.thumbnail_size,
        }
    }
}

impl Backend for ColorzBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Colorz
    }

    fn generate(&self, image: &Path, light: bool) -> Result<Palette, BackendError> {
        let pixels = load_pixels(image, self.thumbnail_size)?;
        let colors = extract(&pixels)?;
        Ok(adjust(colors, light)?)
    }
}

/// Cluster centroids, brightened into the readable value range and ordered
/// by hue
fn extract(pixels: &[Rgb]) -> Result<[Rgb; CLUSTERS], BackendError> {
    let swatches = kmeans(pixels, CLUSTERS, MAX_ITERATIONS);
    let mut colors: Vec<Rgb> = quantize::colors(&swatches)
        .into_iter()
        .map(|c| c.clamp_value(MIN_VALUE, MAX_VALUE))
        .collect();
    sort_by_hue(&mut colors);
    tracing::debug!(found = colors.len(), "k-means clusters");

    let found = colors.len();
    colors
        .try_into()
        .map_err(|_| BackendError::InsufficientColors {
            backend: BackendKind::Colorz,
            found,
            needed: CLUSTERS,
        })
}

/// Lay the six colors out as both the normal and bright rows, with white
/// and black filling the remaining slots.
pub fn adjust(colors: [Rgb; CLUSTERS], light: bool) -> Result<Palette, PaletteError> {
    let mut raw = Vec::with_capacity(wal_palette::PALETTE_SIZE);
    raw.push(colors[0]);
    raw.extend(colors);
    raw.extend([Rgb::WHITE, Rgb::BLACK]);
    raw.extend(colors);
    raw.push(Rgb::WHITE);

    generic_adjust(raw, light)
}
