//! Longitude arithmetic shared by every classifier.

pub const FULL_CIRCLE: f64 = 360.0;

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(FULL_CIRCLE);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0 and keeps -0.0
    if normalized >= FULL_CIRCLE || normalized == 0.0 {
        0.0
    } else {
        normalized
    }
}

/// Split the circle into `segments` equal arcs and locate `longitude` in it.
///
/// Returns the 0-based arc index and the fraction `[0, 1)` already traversed
/// inside that arc. Scaling by `segments / 360` before flooring keeps exact
/// boundaries (10°, 40°, 120°) on the arc that starts there.
pub fn segment(longitude: f64, segments: usize) -> (usize, f64) {
    let lon = normalize_degrees(longitude);
    let scaled = lon * segments as f64 / FULL_CIRCLE;
    let floor = scaled.floor();
    let index = (floor as usize) % segments;
    let fraction = if floor as usize >= segments {
        0.0
    } else {
        scaled - floor
    };
    (index, fraction)
}

/// Index of the `parts`-way subdivision a fraction falls into.
pub(crate) fn fraction_part(fraction: f64, parts: usize) -> usize {
    ((fraction * parts as f64).floor() as usize).min(parts - 1)
}
