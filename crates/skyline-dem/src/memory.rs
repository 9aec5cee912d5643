//! Dense in-memory sample grids.

use skyline_math::{Interval2D, SkylineError};

use crate::DiscreteElevationModel;
use crate::discrete::check_in_extent;

/// Elevation samples stored row-major, starting at the south-west corner of
/// the extent.
pub struct InMemoryElevationModel {
    extent: Interval2D,
    samples: Box<[f64]>,
}

impl InMemoryElevationModel {
    /// Wraps `samples`, listed row by row from `(ix.from, iy.from)`.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if the number of samples does not
    /// match the size of `extent`.
    pub fn new(extent: Interval2D, samples: Vec<f64>) -> Result<Self, SkylineError> {
        SkylineError::check(samples.len() as i128 == extent.size(), || {
            format!(
                "{} samples supplied for extent {extent} of size {}",
                samples.len(),
                extent.size()
            )
        })?;
        Ok(Self {
            extent,
            samples: samples.into_boxed_slice(),
        })
    }

    /// A grid where every sample has elevation `value`.
    pub fn filled(extent: Interval2D, value: f64) -> Self {
        Self::from_fn(extent, |_, _| value)
    }

    /// A grid whose sample `(x, y)` is `f(x, y)`.
    pub fn from_fn(extent: Interval2D, mut f: impl FnMut(i32, i32) -> f64) -> Self {
        let (ix, iy) = (extent.ix(), extent.iy());
        let mut samples = Vec::with_capacity(usize::try_from(extent.size()).unwrap_or(0));
        for y in iy.included_from()..=iy.included_to() {
            for x in ix.included_from()..=ix.included_to() {
                samples.push(f(x, y));
            }
        }
        Self {
            extent,
            samples: samples.into_boxed_slice(),
        }
    }

    fn offset(&self, x: i32, y: i32) -> usize {
        let width = self.extent.ix().size();
        let dx = i64::from(x) - i64::from(self.extent.ix().included_from());
        let dy = i64::from(y) - i64::from(self.extent.iy().included_from());
        (dy * width + dx) as usize
    }
}

impl DiscreteElevationModel for InMemoryElevationModel {
    fn extent(&self) -> Interval2D {
        self.extent
    }

    fn elevation_sample(&self, x: i32, y: i32) -> Result<f64, SkylineError> {
        check_in_extent(&self.extent, x, y)?;
        Ok(self.samples[self.offset(x, y)])
    }
}

impl Drop for InMemoryElevationModel {
    fn drop(&mut self) {
        tracing::debug!(extent = %self.extent, "released in-memory elevation samples");
    }
}

#[cfg(test)]
mod tests {
    use skyline_math::Interval1D;

    use super::*;

    fn extent(x0: i32, x1: i32, y0: i32, y1: i32) -> Interval2D {
        Interval2D::new(
            Interval1D::new(x0, x1).unwrap(),
            Interval1D::new(y0, y1).unwrap(),
        )
    }

    #[test]
    fn test_new_rejects_wrong_sample_count() {
        let e = extent(0, 2, 0, 1);
        assert!(InMemoryElevationModel::new(e, vec![0.0; 5]).is_err());
        assert!(InMemoryElevationModel::new(e, vec![0.0; 6]).is_ok());
    }

    #[test]
    fn test_row_major_layout() {
        let e = extent(10, 12, -1, 0);
        let dem = InMemoryElevationModel::new(e, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(dem.elevation_sample(10, -1).unwrap(), 1.0);
        assert_eq!(dem.elevation_sample(12, -1).unwrap(), 3.0);
        assert_eq!(dem.elevation_sample(10, 0).unwrap(), 4.0);
        assert_eq!(dem.elevation_sample(12, 0).unwrap(), 6.0);
    }

    #[test]
    fn test_out_of_extent_is_invalid_argument() {
        let dem = InMemoryElevationModel::filled(extent(0, 3, 0, 3), 500.0);
        assert_eq!(dem.elevation_sample(3, 3).unwrap(), 500.0);
        assert!(matches!(
            dem.elevation_sample(4, 0),
            Err(SkylineError::InvalidArgument(_))
        ));
        assert!(dem.elevation_sample(0, -1).is_err());
    }

    #[test]
    fn test_from_fn_visits_every_sample() {
        let dem = InMemoryElevationModel::from_fn(extent(-2, 2, 5, 7), |x, y| f64::from(x * 100 + y));
        for y in 5..=7 {
            for x in -2..=2 {
                assert_eq!(dem.elevation_sample(x, y).unwrap(), f64::from(x * 100 + y));
            }
        }
    }
}
