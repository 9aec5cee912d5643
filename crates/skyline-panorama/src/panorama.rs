//! The computed sample grid and its builder.

use skyline_math::SkylineError;

use crate::PanoramaParameters;

/// Per-pixel terrain samples of a panorama: slant distance to the terrain
/// hit, its position, elevation and slope.
///
/// A distance of `f32::INFINITY` marks a pixel where the ray reached the
/// sky.
pub struct Panorama {
    parameters: PanoramaParameters,
    distance: Box<[f32]>,
    longitude: Box<[f32]>,
    latitude: Box<[f32]>,
    elevation: Box<[f32]>,
    slope: Box<[f32]>,
}

impl Panorama {
    pub fn parameters(&self) -> &PanoramaParameters {
        &self.parameters
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, SkylineError> {
        index_in(&self.parameters, x, y)
    }

    /// Slant distance in meters from the observer to the terrain seen at
    /// `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`SkylineError::IndexOutOfRange`] outside the grid.
    pub fn distance_at(&self, x: i32, y: i32) -> Result<f32, SkylineError> {
        Ok(self.distance[self.index(x, y)?])
    }

    /// Like [`Self::distance_at`], but returns `default` outside the grid.
    pub fn distance_at_or(&self, x: i32, y: i32, default: f32) -> f32 {
        self.index(x, y).map_or(default, |i| self.distance[i])
    }

    /// Longitude in radians of the terrain seen at `(x, y)`.
    pub fn longitude_at(&self, x: i32, y: i32) -> Result<f32, SkylineError> {
        Ok(self.longitude[self.index(x, y)?])
    }

    /// Latitude in radians of the terrain seen at `(x, y)`.
    pub fn latitude_at(&self, x: i32, y: i32) -> Result<f32, SkylineError> {
        Ok(self.latitude[self.index(x, y)?])
    }

    /// Elevation in meters of the terrain seen at `(x, y)`.
    pub fn elevation_at(&self, x: i32, y: i32) -> Result<f32, SkylineError> {
        Ok(self.elevation[self.index(x, y)?])
    }

    /// Slope in radians of the terrain seen at `(x, y)`.
    pub fn slope_at(&self, x: i32, y: i32) -> Result<f32, SkylineError> {
        Ok(self.slope[self.index(x, y)?])
    }
}

fn index_in(parameters: &PanoramaParameters, x: i32, y: i32) -> Result<usize, SkylineError> {
    if parameters.is_valid_sample_index(x, y) {
        Ok(parameters.linear_sample_index(x, y))
    } else {
        Err(SkylineError::IndexOutOfRange {
            x: i64::from(x),
            y: i64::from(y),
        })
    }
}

/// Accumulates samples for a [`Panorama`].
///
/// Every distance starts at infinity and every other channel at 0.
/// [`PanoramaBuilder::build`] consumes the builder, so the grid cannot be
/// modified once built:
///
/// ```compile_fail
/// # use skyline_geo::GeoPoint;
/// # use skyline_panorama::{PanoramaBuilder, PanoramaParameters};
/// # let observer = GeoPoint::from_degrees(7.65, 46.73).unwrap();
/// # let parameters = PanoramaParameters::new(observer, 600, 0.0, 1.0, 1000, 10, 10).unwrap();
/// let mut builder = PanoramaBuilder::new(parameters);
/// let panorama = builder.build();
/// builder.set_distance_at(0, 0, 10.0);
/// ```
///
/// ```
/// # use skyline_geo::GeoPoint;
/// # use skyline_panorama::{PanoramaBuilder, PanoramaParameters};
/// # let observer = GeoPoint::from_degrees(7.65, 46.73).unwrap();
/// # let parameters = PanoramaParameters::new(observer, 600, 0.0, 1.0, 1000, 10, 10).unwrap();
/// let mut builder = PanoramaBuilder::new(parameters);
/// builder.set_distance_at(0, 0, 10.0)?.set_elevation_at(0, 0, 812.0)?;
/// let panorama = builder.build();
/// assert_eq!(panorama.distance_at(0, 0)?, 10.0);
/// assert_eq!(panorama.distance_at(1, 0)?, f32::INFINITY);
/// # Ok::<(), skyline_math::SkylineError>(())
/// ```
pub struct PanoramaBuilder {
    parameters: PanoramaParameters,
    distance: Vec<f32>,
    longitude: Vec<f32>,
    latitude: Vec<f32>,
    elevation: Vec<f32>,
    slope: Vec<f32>,
}

impl PanoramaBuilder {
    pub fn new(parameters: PanoramaParameters) -> Self {
        let size = parameters.width() as usize * parameters.height() as usize;
        Self {
            parameters,
            distance: vec![f32::INFINITY; size],
            longitude: vec![0.0; size],
            latitude: vec![0.0; size],
            elevation: vec![0.0; size],
            slope: vec![0.0; size],
        }
    }

    pub fn parameters(&self) -> &PanoramaParameters {
        &self.parameters
    }

    /// # Errors
    ///
    /// [`SkylineError::IndexOutOfRange`] outside the grid.
    pub fn set_distance_at(&mut self, x: i32, y: i32, distance: f32) -> Result<&mut Self, SkylineError> {
        let i = index_in(&self.parameters, x, y)?;
        self.distance[i] = distance;
        Ok(self)
    }

    pub fn set_longitude_at(&mut self, x: i32, y: i32, longitude: f32) -> Result<&mut Self, SkylineError> {
        let i = index_in(&self.parameters, x, y)?;
        self.longitude[i] = longitude;
        Ok(self)
    }

    pub fn set_latitude_at(&mut self, x: i32, y: i32, latitude: f32) -> Result<&mut Self, SkylineError> {
        let i = index_in(&self.parameters, x, y)?;
        self.latitude[i] = latitude;
        Ok(self)
    }

    pub fn set_elevation_at(&mut self, x: i32, y: i32, elevation: f32) -> Result<&mut Self, SkylineError> {
        let i = index_in(&self.parameters, x, y)?;
        self.elevation[i] = elevation;
        Ok(self)
    }

    pub fn set_slope_at(&mut self, x: i32, y: i32, slope: f32) -> Result<&mut Self, SkylineError> {
        let i = index_in(&self.parameters, x, y)?;
        self.slope[i] = slope;
        Ok(self)
    }

    /// Freezes the accumulated samples.
    pub fn build(self) -> Panorama {
        Panorama {
            parameters: self.parameters,
            distance: self.distance.into_boxed_slice(),
            longitude: self.longitude.into_boxed_slice(),
            latitude: self.latitude.into_boxed_slice(),
            elevation: self.elevation.into_boxed_slice(),
            slope: self.slope.into_boxed_slice(),
        }
    }
}
