//! Points on the Earth's surface in spherical coordinates.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use skyline_math::{SkylineError, haversin};

use crate::{azimuth, distance};

/// A point on the surface of the Earth, modelled as a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// Longitude in radians. Range: \[-π, π\].
    longitude: f64,
    /// Latitude in radians. Range: \[-π/2, π/2\].
    latitude: f64,
}

impl GeoPoint {
    /// Creates a point from a longitude and latitude in radians.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if either coordinate is out of range.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, SkylineError> {
        SkylineError::check((-PI..=PI).contains(&longitude), || {
            format!("longitude {longitude} outside [-pi, pi]")
        })?;
        SkylineError::check((-FRAC_PI_2..=FRAC_PI_2).contains(&latitude), || {
            format!("latitude {latitude} outside [-pi/2, pi/2]")
        })?;
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Creates a point from a longitude and latitude in degrees.
    pub fn from_degrees(longitude: f64, latitude: f64) -> Result<Self, SkylineError> {
        Self::new(longitude.to_radians(), latitude.to_radians())
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Great-circle distance to `that`, in meters, by the haversine formula.
    pub fn distance_to(&self, that: &GeoPoint) -> f64 {
        let a = haversin(self.latitude - that.latitude)
            + self.latitude.cos() * that.latitude.cos() * haversin(self.longitude - that.longitude);
        distance::to_meters(2.0 * a.sqrt().asin())
    }

    /// Initial bearing of the great circle from `self` to `that`, as a
    /// canonical azimuth.
    pub fn azimuth_to(&self, that: &GeoPoint) -> f64 {
        let delta_lon = self.longitude - that.longitude;
        let beta = (delta_lon.sin() * that.latitude.cos()).atan2(
            self.latitude.cos() * that.latitude.sin()
                - self.latitude.sin() * that.latitude.cos() * delta_lon.cos(),
        );
        azimuth::canonicalize(-beta)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4},{:.4})",
            self.longitude.to_degrees(),
            self.latitude.to_degrees()
        )
    }
}
