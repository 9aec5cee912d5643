//! The discrete elevation model capability: an integer sample extent and
//! per-sample elevation lookup.

use skyline_math::{Interval2D, PI2, SkylineError};

use crate::CompositeDiscreteElevationModel;

/// Number of samples per degree of longitude or latitude (one arc-second).
pub const SAMPLES_PER_DEGREE: i32 = 3600;

/// Number of samples per radian of longitude or latitude.
pub const SAMPLES_PER_RADIAN: f64 = SAMPLES_PER_DEGREE as f64 * 360.0 / PI2;

/// Fractional sample index corresponding to an angle in radians.
#[inline]
pub fn sample_index(angle: f64) -> f64 {
    angle * SAMPLES_PER_RADIAN
}

/// A source of elevation samples addressed by integer `(x, y)` indices, where
/// `x` counts arc-seconds of longitude and `y` arc-seconds of latitude.
///
/// Sources are read-only once built and may be shared across threads.
/// Releasing the backing store happens on drop.
pub trait DiscreteElevationModel: Send + Sync {
    /// Integer sample indices covered by this source.
    fn extent(&self) -> Interval2D;

    /// Elevation in meters of sample `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if `(x, y)` is outside [`Self::extent`].
    fn elevation_sample(&self, x: i32, y: i32) -> Result<f64, SkylineError>;

    /// Merges this source with `that` into one logical source.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if the two extents are not
    /// unionable, which would leave gaps in the merged grid.
    fn union<D>(self, that: D) -> Result<CompositeDiscreteElevationModel, SkylineError>
    where
        Self: Sized + 'static,
        D: DiscreteElevationModel + 'static,
    {
        CompositeDiscreteElevationModel::new(Box::new(self), Box::new(that))
    }
}

impl DiscreteElevationModel for Box<dyn DiscreteElevationModel> {
    fn extent(&self) -> Interval2D {
        (**self).extent()
    }

    fn elevation_sample(&self, x: i32, y: i32) -> Result<f64, SkylineError> {
        (**self).elevation_sample(x, y)
    }
}

/// Fails with [`SkylineError::InvalidArgument`] unless `extent` contains `(x, y)`.
pub(crate) fn check_in_extent(extent: &Interval2D, x: i32, y: i32) -> Result<(), SkylineError> {
    SkylineError::check(extent.contains(x, y), || {
        format!("sample ({x}, {y}) outside extent {extent}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_per_radian() {
        let expected = 3600.0 * 180.0 / std::f64::consts::PI;
        assert!((SAMPLES_PER_RADIAN - expected).abs() < 1e-9);
    }

    #[test]
    fn test_sample_index_of_one_degree() {
        let idx = sample_index(1f64.to_radians());
        assert!((idx - 3600.0).abs() < 1e-9, "got {idx}");
    }

    #[test]
    fn test_sample_index_of_negative_angle() {
        let idx = sample_index(-(7.5f64.to_radians()));
        assert!((idx + 27_000.0).abs() < 1e-6, "got {idx}");
    }
}
