use std::path::Path;

use wal_palette::Rgb;

use crate::error::BackendError;

/// Pixels with lower alpha are treated as transparent and skipped
const MIN_ALPHA: u8 = 125;

/// Decode an image, shrink it so neither edge exceeds `max_edge`, and return
/// its opaque pixels in row-major order.
///
/// A `max_edge` of 0 keeps the original size. Only the first frame of
/// animated formats is used.
pub fn load_pixels(path: &Path, max_edge: u32) -> Result<Vec<Rgb>, BackendError> {
    let image = image::open(path).map_err(|source| {
        tracing::debug!(path = %path.display(), error = %source, "Failed to load image");
        BackendError::Image {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let (width, height) = (image.width(), image.height());
    let image = if max_edge > 0 && (width > max_edge || height > max_edge) {
        image.thumbnail(max_edge, max_edge)
    } else {
        image
    };

    let pixels: Vec<Rgb> = image
        .to_rgba8()
        .pixels()
        .filter(|pixel| pixel.0[3] >= MIN_ALPHA)
        .map(|pixel| Rgb::new(pixel.0[0], pixel.0[1], pixel.0[2]))
        .collect();

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        sampled_width = image.width(),
        sampled_height = image.height(),
        opaque = pixels.len(),
        "Loaded image"
    );

    Ok(pixels)
}
