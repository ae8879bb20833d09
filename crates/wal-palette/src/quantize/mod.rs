//! Color quantizers
//!
//! Each quantizer reduces a slice of pixels to a handful of representative
//! [`Swatch`]es. They differ in how they partition the color cube:
//!
//! - [`median_cut`]: recursive population-median splits of a 5-bit histogram
//! - [`kmeans`]: Lloyd's algorithm with deterministic farthest-point seeding
//! - [`bucket_average`]: fixed 3×3×3 grid, weighted mean per cell

mod buckets;
mod kmeans;
mod median_cut;

pub use buckets::bucket_average;
pub use kmeans::kmeans;
pub use median_cut::median_cut;

use crate::color::Rgb;

/// A representative color and the number of pixels it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Representative color
    pub color: Rgb,
    /// Number of sampled pixels assigned to this color
    pub population: u64,
}

/// Strip swatches down to their colors, keeping order.
pub fn colors(swatches: &[Swatch]) -> Vec<Rgb> {
    swatches.iter().map(|s| s.color).collect()
}
