//! k-means clustering in RGB

use super::Swatch;
use crate::color::Rgb;

/// Centroid movement (in 0..=255 units) below which iteration stops.
const CONVERGENCE_THRESHOLD: f64 = 0.5;

type Point = [f64; 3];

fn to_point(color: Rgb) -> Point {
    [f64::from(color.r), f64::from(color.g), f64::from(color.b)]
}

fn luma(p: &Point) -> f64 {
    0.30 * p[0] + 0.59 * p[1] + 0.11 * p[2]
}

fn distance_sq(a: &Point, b: &Point) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}

fn nearest(centroids: &[Point], p: &Point) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let d = distance_sq(c, p);
        if d < best_distance {
            best = i;
            best_distance = d;
        }
    }
    best
}

/// Farthest-point seeding.
///
/// Starts from the median-luminance pixel, then repeatedly adds the pixel
/// farthest from every seed chosen so far. Stops early once every pixel
/// coincides with a seed, so an image with fewer than `k` distinct colors
/// starts (and ends) with fewer clusters.
fn seed(points: &[Point], k: usize) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| luma(a).total_cmp(&luma(b)));
    let first = sorted[sorted.len() / 2];

    let mut seeds = vec![first];
    let mut distances: Vec<f64> = points.iter().map(|p| distance_sq(p, &first)).collect();

    while seeds.len() < k {
        let (index, farthest) = distances
            .iter()
            .enumerate()
            .fold((0, 0.0f64), |best, (i, &d)| if d > best.1 { (i, d) } else { best });
        if farthest == 0.0 {
            break;
        }

        let next = points[index];
        for (d, p) in distances.iter_mut().zip(points) {
            *d = d.min(distance_sq(p, &next));
        }
        seeds.push(next);
    }
    seeds
}

/// Cluster `pixels` into at most `k` groups.
///
/// Runs Lloyd's algorithm for up to `max_iterations` rounds. Clusters that
/// lose all their pixels are dropped. Returns one swatch per surviving
/// cluster, most populated first; centroid channels are rounded.
///
/// The result is deterministic for a given input.
pub fn kmeans(pixels: &[Rgb], k: usize, max_iterations: usize) -> Vec<Swatch> {
    if pixels.is_empty() || k == 0 {
        return Vec::new();
    }

    let points: Vec<Point> = pixels.iter().copied().map(to_point).collect();
    let mut centroids = seed(&points, k);
    let mut populations = vec![0u64; centroids.len()];

    for _ in 0..max_iterations.max(1) {
        let mut sums = vec![[0.0f64; 3]; centroids.len()];
        populations = vec![0u64; centroids.len()];

        for p in &points {
            let i = nearest(&centroids, p);
            populations[i] += 1;
            for c in 0..3 {
                sums[i][c] += p[c];
            }
        }

        let mut moved = 0.0f64;
        let mut next = Vec::with_capacity(centroids.len());
        let mut next_populations = Vec::with_capacity(centroids.len());
        for ((old, sum), population) in centroids.iter().zip(&sums).zip(&populations) {
            if *population == 0 {
                continue;
            }
            let n = *population as f64;
            let mean = [sum[0] / n, sum[1] / n, sum[2] / n];
            moved = moved.max(distance_sq(old, &mean).sqrt());
            next.push(mean);
            next_populations.push(*population);
        }

        let dropped = next.len() != centroids.len();
        centroids = next;
        populations = next_populations;
        if !dropped && moved < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    let mut swatches: Vec<Swatch> = centroids
        .iter()
        .zip(&populations)
        .map(|(c, &population)| Swatch {
            color: Rgb::new(
                c[0].round().clamp(0.0, 255.0) as u8,
                c[1].round().clamp(0.0, 255.0) as u8,
                c[2].round().clamp(0.0, 255.0) as u8,
            ),
            population,
        })
        .collect();
    swatches.sort_by(|a, b| b.population.cmp(&a.population));
    swatches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(kmeans(&[], 3, 10).is_empty());
        assert!(kmeans(&[Rgb::BLACK], 0, 10).is_empty());
    }

    #[test]
    fn test_fewer_distinct_colors_than_k() {
        let pixels = vec![Rgb::new(10, 20, 30); 50];
        let swatches = kmeans(&pixels, 6, 20);
        assert_eq!(swatches.len(), 1);
        assert_eq!(swatches[0].color, Rgb::new(10, 20, 30));
        assert_eq!(swatches[0].population, 50);
    }

    #[test]
    fn test_separates_three_clusters() {
        let mut pixels = Vec::new();
        for i in 0..30u8 {
            pixels.push(Rgb::new(200 + i % 5, 10, 10));
            pixels.push(Rgb::new(10, 200 + i % 5, 10));
        }
        for i in 0..10u8 {
            pixels.push(Rgb::new(10, 10, 200 + i % 5));
        }

        let swatches = kmeans(&pixels, 3, 20);
        assert_eq!(swatches.len(), 3);

        let populations: Vec<u64> = swatches.iter().map(|s| s.population).collect();
        assert_eq!(populations, vec![30, 30, 10]);

        let blue = swatches[2].color;
        assert_eq!((blue.r, blue.g), (10, 10));
        assert_eq!(blue.b, 202);
    }

    #[test]
    fn test_deterministic() {
        let pixels: Vec<Rgb> = (0..=255u8).map(|v| Rgb::new(v, 255 - v, v / 2)).collect();
        assert_eq!(kmeans(&pixels, 6, 20), kmeans(&pixels, 6, 20));
    }
}
