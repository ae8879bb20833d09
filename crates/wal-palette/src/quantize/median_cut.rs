//! Modified median cut quantization (MMCQ)
//!
//! Pixels are binned into a 5-bit-per-channel histogram. The color cube is
//! then split repeatedly at the population median along its longest axis.
//! The first 75% of the boxes are produced by splitting the most populated
//! box; the rest by splitting the box with the largest population × volume,
//! which pulls out smaller but distinct color regions.

use super::Swatch;
use crate::color::Rgb;

const SIGBITS: u32 = 5;
const RSHIFT: u32 = 8 - SIGBITS;
const SIDE: usize = 1 << SIGBITS;
const HISTOGRAM_SIZE: usize = 1 << (3 * SIGBITS);
const MAX_ITERATIONS: usize = 1000;
const FRACTION_BY_POPULATION: f64 = 0.75;

/// Channel value above which a pixel counts as "near white" and is skipped.
const WHITE_THRESHOLD: u8 = 250;

#[inline]
fn histogram_index(r: usize, g: usize, b: usize) -> usize {
    (r << (2 * SIGBITS)) + (g << SIGBITS) + b
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Red,
    Green,
    Blue,
}

/// An axis-aligned box in the quantized color cube, bounds inclusive.
#[derive(Debug, Clone)]
struct ColorBox {
    lo: [usize; 3],
    hi: [usize; 3],
    population: u64,
}

impl ColorBox {
    fn new(lo: [usize; 3], hi: [usize; 3], histogram: &[u64]) -> Self {
        let mut population = 0;
        for r in lo[0]..=hi[0] {
            for g in lo[1]..=hi[1] {
                for b in lo[2]..=hi[2] {
                    population += histogram[histogram_index(r, g, b)];
                }
            }
        }
        Self {
            lo,
            hi,
            population,
        }
    }

    fn volume(&self) -> u64 {
        (0..3).map(|i| (self.hi[i] - self.lo[i] + 1) as u64).product()
    }

    fn longest_axis(&self) -> Axis {
        let width = |i: usize| self.hi[i] - self.lo[i];
        let (r, g, b) = (width(0), width(1), width(2));
        if r >= g && r >= b {
            Axis::Red
        } else if g >= r && g >= b {
            Axis::Green
        } else {
            Axis::Blue
        }
    }

    /// Population-weighted mean color of the box.
    fn average(&self, histogram: &[u64]) -> Rgb {
        let mult = f64::from(1u32 << RSHIFT);
        let mut total = 0u64;
        let mut sums = [0.0f64; 3];

        for r in self.lo[0]..=self.hi[0] {
            for g in self.lo[1]..=self.hi[1] {
                for b in self.lo[2]..=self.hi[2] {
                    let h = histogram[histogram_index(r, g, b)];
                    if h == 0 {
                        continue;
                    }
                    total += h;
                    let weight = h as f64;
                    sums[0] += weight * (r as f64 + 0.5) * mult;
                    sums[1] += weight * (g as f64 + 0.5) * mult;
                    sums[2] += weight * (b as f64 + 0.5) * mult;
                }
            }
        }

        if total == 0 {
            let center = |i: usize| mult * (self.lo[i] + self.hi[i] + 1) as f64 / 2.0;
            return Rgb::from_f64_truncated(center(0), center(1), center(2));
        }

        let total = total as f64;
        Rgb::from_f64_truncated(sums[0] / total, sums[1] / total, sums[2] / total)
    }

    /// Population of the slab at `position` along `axis`.
    fn slab_population(&self, axis: Axis, position: usize, histogram: &[u64]) -> u64 {
        let mut lo = self.lo;
        let mut hi = self.hi;
        let i = axis as usize;
        lo[i] = position;
        hi[i] = position;
        ColorBox::new(lo, hi, histogram).population
    }

    /// Split at the population median along the longest axis.
    ///
    /// Returns `None` when the box cannot be split any further: it holds
    /// fewer than two pixels or covers a single histogram cell. Either half
    /// may come back empty; callers drop those.
    fn split(&self, histogram: &[u64]) -> Option<(ColorBox, ColorBox)> {
        if self.population < 2 {
            return None;
        }

        let axis = self.longest_axis();
        let i = axis as usize;
        let (lo, hi) = (self.lo[i], self.hi[i]);
        if lo == hi {
            return None;
        }

        // Cumulative population up to and including each slab
        let mut partial = vec![0u64; hi + 1];
        let mut total = 0u64;
        for position in lo..=hi {
            total += self.slab_population(axis, position, histogram);
            partial[position] = total;
        }
        let remaining = |position: usize| total - partial[position];

        let median = (lo..=hi).find(|&p| partial[p] as f64 > total as f64 / 2.0)?;

        // Cut away from the median toward the larger side
        let left = median - lo;
        let right = hi - median;
        let mut cut = if left <= right {
            median + right / 2
        } else {
            median.saturating_sub(1 + left.div_ceil(2))
        }
        .clamp(lo, hi - 1);

        while cut < hi - 1 && partial[cut] == 0 {
            cut += 1;
        }
        while cut > lo && remaining(cut) == 0 && partial[cut - 1] != 0 {
            cut -= 1;
        }

        let mut first_hi = self.hi;
        first_hi[i] = cut;
        let mut second_lo = self.lo;
        second_lo[i] = cut + 1;

        Some((
            ColorBox::new(self.lo, first_hi, histogram),
            ColorBox::new(second_lo, self.hi, histogram),
        ))
    }
}

/// Repeatedly split the active box with the highest `priority` until
/// `target` non-empty boxes exist, nothing is left to split, or the
/// iteration cap is hit.
fn split_until<F>(
    active: &mut Vec<ColorBox>,
    settled: &mut Vec<ColorBox>,
    target: usize,
    histogram: &[u64],
    priority: F,
) where
    F: Fn(&ColorBox) -> u64,
{
    for _ in 0..MAX_ITERATIONS {
        if active.len() + settled.len() >= target {
            return;
        }
        let Some((index, _)) = active
            .iter()
            .enumerate()
            .max_by_key(|(_, color_box)| priority(color_box))
        else {
            return;
        };
        let color_box = active.swap_remove(index);

        match color_box.split(histogram) {
            Some((first, second)) => {
                active.extend([first, second].into_iter().filter(|b| b.population > 0));
            }
            None => settled.push(color_box),
        }
    }
}

/// Quantize `pixels` down to at most `count` representative colors.
///
/// Every `quality`-th pixel is sampled (1 samples all of them); near-white
/// pixels are ignored. Returns swatches ordered by population, most
/// populated first. Empty boxes are never reported, so images with few
/// distinct colors yield fewer than `count` entries.
///
/// # Example
///
/// ```
/// use wal_palette::{quantize::median_cut, Rgb};
///
/// let mut pixels = vec![Rgb::new(200, 20, 20); 100];
/// pixels.extend(vec![Rgb::new(20, 20, 200); 50]);
///
/// let swatches = median_cut(&pixels, 2, 1);
/// assert_eq!(swatches.len(), 2);
/// assert_eq!(swatches[0].population, 100);
/// ```
pub fn median_cut(pixels: &[Rgb], count: usize, quality: usize) -> Vec<Swatch> {
    if count == 0 {
        return Vec::new();
    }

    let mut histogram = vec![0u64; HISTOGRAM_SIZE];
    let mut lo = [SIDE - 1; 3];
    let mut hi = [0usize; 3];
    let mut sampled = 0usize;

    for pixel in pixels.iter().step_by(quality.max(1)) {
        if pixel.r > WHITE_THRESHOLD && pixel.g > WHITE_THRESHOLD && pixel.b > WHITE_THRESHOLD {
            continue;
        }
        let q = [
            (pixel.r >> RSHIFT) as usize,
            (pixel.g >> RSHIFT) as usize,
            (pixel.b >> RSHIFT) as usize,
        ];
        histogram[histogram_index(q[0], q[1], q[2])] += 1;
        for i in 0..3 {
            lo[i] = lo[i].min(q[i]);
            hi[i] = hi[i].max(q[i]);
        }
        sampled += 1;
    }

    if sampled == 0 {
        return Vec::new();
    }

    let mut active = vec![ColorBox::new(lo, hi, &histogram)];
    let mut settled = Vec::new();
    let by_population = (FRACTION_BY_POPULATION * count as f64).ceil() as usize;
    split_until(&mut active, &mut settled, by_population, &histogram, |b| {
        b.population
    });
    split_until(&mut active, &mut settled, count, &histogram, |b| {
        b.population * b.volume()
    });

    let mut swatches: Vec<Swatch> = active
        .iter()
        .chain(settled.iter())
        .map(|b| Swatch {
            color: b.average(&histogram),
            population: b.population,
        })
        .collect();
    swatches.sort_by(|a, b| b.population.cmp(&a.population));
    swatches.truncate(count);
    swatches
}
