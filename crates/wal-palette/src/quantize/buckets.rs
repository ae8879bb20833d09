//! Fixed-grid color grouping

use super::Swatch;
use crate::color::Rgb;

/// Ranges per channel; the cube is cut into `DIVISIONS³` cells.
const DIVISIONS: usize = 3;

/// Lower bound of each channel range: 0, 85, 170.
const BOUNDS: [u8; DIVISIONS] = [0, 85, 170];

fn range_of(value: u8) -> usize {
    BOUNDS.iter().rposition(|&bound| value >= bound).unwrap_or(0)
}

fn cell_of(color: Rgb) -> usize {
    (range_of(color.r) * DIVISIONS + range_of(color.g)) * DIVISIONS + range_of(color.b)
}

/// Group `pixels` into a 3×3×3 grid and return the `max` most populated
/// cells.
///
/// Each swatch color is the population-weighted mean of the pixels in its
/// cell, truncated to whole channel values. Ties in population keep grid
/// order (dark red-green-blue corner first).
pub fn bucket_average(pixels: &[Rgb], max: usize) -> Vec<Swatch> {
    let mut sums = [[0u64; 3]; DIVISIONS * DIVISIONS * DIVISIONS];
    let mut populations = [0u64; DIVISIONS * DIVISIONS * DIVISIONS];

    for pixel in pixels {
        let cell = cell_of(*pixel);
        populations[cell] += 1;
        sums[cell][0] += u64::from(pixel.r);
        sums[cell][1] += u64::from(pixel.g);
        sums[cell][2] += u64::from(pixel.b);
    }

    let mut swatches: Vec<Swatch> = sums
        .iter()
        .zip(populations)
        .filter(|(_, population)| *population > 0)
        .map(|(sum, population)| Swatch {
            color: Rgb::new(
                (sum[0] / population) as u8,
                (sum[1] / population) as u8,
                (sum[2] / population) as u8,
            ),
            population,
        })
        .collect();

    swatches.sort_by(|a, b| b.population.cmp(&a.population));
    swatches.truncate(max);
    swatches
}
