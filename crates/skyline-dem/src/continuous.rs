//! Continuous elevation and slope over a discrete source by bilinear
//! interpolation.

use skyline_geo::{GeoPoint, distance};
use skyline_math::{Interval2D, SkylineError, bilerp, sq};

use crate::{DiscreteElevationModel, SAMPLES_PER_RADIAN, sample_index};

/// Spacing in meters between adjacent samples along a meridian.
fn sample_spacing() -> f64 {
    distance::to_meters(1.0 / SAMPLES_PER_RADIAN)
}

/// Elevation and slope at arbitrary points, interpolated from the four
/// surrounding samples of a discrete source. Samples outside the source's
/// extent read as elevation 0.
pub struct ContinuousElevationModel<D> {
    dem: D,
}

impl<D: DiscreteElevationModel> ContinuousElevationModel<D> {
    pub fn new(dem: D) -> Self {
        Self { dem }
    }

    pub fn extent(&self) -> Interval2D {
        self.dem.extent()
    }

    /// Elevation of sample `(x, y)`, or 0 when outside the extent.
    ///
    /// # Errors
    ///
    /// Whatever the source reports for an index inside its extent.
    pub fn elevation_sample(&self, x: i32, y: i32) -> Result<f64, SkylineError> {
        if self.dem.extent().contains(x, y) {
            self.dem.elevation_sample(x, y)
        } else {
            Ok(0.0)
        }
    }

    /// Terrain slope at sample `(x, y)`, in radians, from the differences to
    /// its northern and eastern neighbours.
    fn slope_sample(&self, x: i32, y: i32) -> Result<f64, SkylineError> {
        let d = sample_spacing();
        let z = self.elevation_sample(x, y)?;
        let dz_north = self.elevation_sample(x, y.saturating_add(1))? - z;
        let dz_east = self.elevation_sample(x.saturating_add(1), y)? - z;
        Ok((d / (sq(d) + sq(dz_north) + sq(dz_east)).sqrt()).min(1.0).acos())
    }

    /// Bilinear interpolation of `sample` around `point`.
    fn interpolate(
        &self,
        point: &GeoPoint,
        sample: impl Fn(i32, i32) -> Result<f64, SkylineError>,
    ) -> Result<f64, SkylineError> {
        let x = sample_index(point.longitude());
        let y = sample_index(point.latitude());
        let (xf, yf) = (x.floor(), y.floor());
        let (x0, y0) = (xf as i32, yf as i32);
        let (x1, y1) = (x0.saturating_add(1), y0.saturating_add(1));
        Ok(bilerp(
            sample(x0, y0)?,
            sample(x1, y0)?,
            sample(x0, y1)?,
            sample(x1, y1)?,
            x - xf,
            y - yf,
        ))
    }

    /// Elevation in meters at `point`.
    pub fn elevation_at(&self, point: &GeoPoint) -> Result<f64, SkylineError> {
        self.interpolate(point, |x, y| self.elevation_sample(x, y))
    }

    /// Terrain slope in radians at `point`, in `[0, π/2]`.
    pub fn slope_at(&self, point: &GeoPoint) -> Result<f64, SkylineError> {
        self.interpolate(point, |x, y| self.slope_sample(x, y))
    }
}
