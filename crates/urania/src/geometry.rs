//! Circular-angle primitives shared by every other module.

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Unsigned separation between two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Shortest signed difference `a - b`, in (-180, 180].
///
/// Positive when `a` lies ahead of `b` in zodiacal order.
pub fn signed_difference(a: f64, b: f64) -> f64 {
    let d = (a - b + 180.0).rem_euclid(360.0) - 180.0;
    if d <= -180.0 {
        d + 360.0
    } else {
        d
    }
}

/// Midpoint of the shorter arc between two longitudes.
///
/// 10° and 350° meet at 0°, not at the naive average of 180°. An exact
/// 180° separation takes the direct branch, so 0° and 180° give 90°.
pub fn short_arc_midpoint(a: f64, b: f64) -> f64 {
    if (a - b).abs() <= 180.0 {
        normalize_degrees((a + b) / 2.0)
    } else {
        normalize_degrees((a + b + 360.0) / 2.0)
    }
}
