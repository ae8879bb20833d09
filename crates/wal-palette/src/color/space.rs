//! HSV conversions
//!
//! All functions work on unit floats: channels, hue, saturation and value
//! are in 0.0..=1.0. Hue wraps, so 1.0 and 0.0 are the same angle.

/// Convert unit RGB to (hue, saturation, value).
pub(crate) fn rgb_to_hsv((r, g, b): (f64, f64, f64)) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let rangec = maxc - minc;
    let v = maxc;

    if minc == maxc {
        return (0.0, 0.0, v);
    }

    (hue(r, g, b, maxc, rangec), rangec / maxc, v)
}

/// Convert (hue, saturation, value) back to unit RGB.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Hue in 0.0..1.0. Requires `rangec > 0`.
fn hue(r: f64, g: f64, b: f64, maxc: f64, rangec: f64) -> f64 {
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;

    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    (h / 6.0).rem_euclid(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: (f64, f64, f64), b: (f64, f64, f64)) {
        let eps = 1e-9;
        assert!(
            (a.0 - b.0).abs() < eps && (a.1 - b.1).abs() < eps && (a.2 - b.2).abs() < eps,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_hsv_primaries() {
        assert_close(rgb_to_hsv((1.0, 0.0, 0.0)), (0.0, 1.0, 1.0));
        assert_close(rgb_to_hsv((0.0, 1.0, 0.0)), (1.0 / 3.0, 1.0, 1.0));
        assert_close(rgb_to_hsv((0.0, 0.0, 1.0)), (2.0 / 3.0, 1.0, 1.0));
    }

    #[test]
    fn test_hsv_gray_has_no_saturation() {
        let (h, s, v) = rgb_to_hsv((0.25, 0.25, 0.25));
        assert_eq!((h, s, v), (0.0, 0.0, 0.25));
    }

    #[test]
    fn test_hsv_inverse() {
        for rgb in [(0.2, 0.4, 0.6), (0.9, 0.1, 0.5), (0.7, 0.7, 0.1), (0.3, 0.3, 0.3)] {
            let (h, s, v) = rgb_to_hsv(rgb);
            assert_close(hsv_to_rgb(h, s, v), rgb);
        }
    }

    #[test]
    fn test_hsv_value_is_max_channel() {
        let (_, _, v) = rgb_to_hsv((0.2, 0.8, 0.4));
        assert_eq!(v, 0.8);
    }
}
