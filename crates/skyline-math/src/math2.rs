//! Scalar helpers used throughout the geodesy and interpolation code.

use std::f64::consts::PI;

/// A full turn, in radians.
pub const PI2: f64 = 2.0 * PI;

/// Square of `x`.
#[inline]
pub fn sq(x: f64) -> f64 {
    x * x
}

/// Floored remainder: the result has the sign of `y`.
#[inline]
pub fn floor_mod(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

/// Haversine of `x`, `sin²(x / 2)`.
#[inline]
pub fn haversin(x: f64) -> f64 {
    sq((x / 2.0).sin())
}

/// Signed shortest angular difference from `a1` to `a2`, in `[-π, π)`.
#[inline]
pub fn angular_distance(a1: f64, a2: f64) -> f64 {
    floor_mod(a2 - a1 + PI, PI2) - PI
}

/// Linear interpolation between `y0` (at 0) and `y1` (at 1).
#[inline]
pub fn lerp(y0: f64, y1: f64, x: f64) -> f64 {
    (y1 - y0) * x + y0
}

/// Bilinear interpolation over the unit square.
///
/// `zXY` is the value at corner `(X, Y)`. Interpolates along x first, between
/// `z00`/`z10` and between `z01`/`z11`, then along y between those results.
#[inline]
pub fn bilerp(z00: f64, z10: f64, z01: f64, z11: f64, x: f64, y: f64) -> f64 {
    let bottom = lerp(z00, z10, x);
    let top = lerp(z01, z11, x);
    lerp(bottom, top, y)
}
