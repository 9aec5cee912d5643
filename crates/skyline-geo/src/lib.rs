//! Spherical geodesy: azimuths, surface distances and points on the Earth.
//!
//! All angles are radians. Azimuths are measured clockwise from north and kept
//! in the canonical range `[0, 2π)`; "mathematical" angles are measured
//! counter-clockwise from east.

pub mod azimuth;
pub mod distance;
mod geo_point;

pub use distance::EARTH_RADIUS;
pub use geo_point::GeoPoint;
