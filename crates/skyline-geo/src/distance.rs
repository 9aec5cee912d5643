//! Conversions between surface distances in meters and central angles.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Central angle, in radians, subtended by `meters` along the surface.
#[inline]
pub fn to_radians(meters: f64) -> f64 {
    meters / EARTH_RADIUS
}

/// Surface distance, in meters, of a central angle in radians.
#[inline]
pub fn to_meters(radians: f64) -> f64 {
    radians * EARTH_RADIUS
}
