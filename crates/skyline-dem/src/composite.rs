//! Composition of two unionable elevation sources into one.

use skyline_math::{Interval2D, SkylineError};

use crate::DiscreteElevationModel;

/// Two elevation sources with unionable extents behind a single extent.
///
/// Lookups go to the first source whose extent contains the index. Dropping
/// the composite drops both children.
pub struct CompositeDiscreteElevationModel {
    first: Box<dyn DiscreteElevationModel>,
    second: Box<dyn DiscreteElevationModel>,
    extent: Interval2D,
}

impl CompositeDiscreteElevationModel {
    /// Combines `first` and `second`.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if their extents are not unionable.
    pub fn new(
        first: Box<dyn DiscreteElevationModel>,
        second: Box<dyn DiscreteElevationModel>,
    ) -> Result<Self, SkylineError> {
        let extent = first.extent().union(&second.extent())?;
        tracing::debug!(%extent, "merged elevation sources");
        Ok(Self {
            first,
            second,
            extent,
        })
    }
}

impl DiscreteElevationModel for CompositeDiscreteElevationModel {
    fn extent(&self) -> Interval2D {
        self.extent
    }

    fn elevation_sample(&self, x: i32, y: i32) -> Result<f64, SkylineError> {
        if self.first.extent().contains(x, y) {
            self.first.elevation_sample(x, y)
        } else if self.second.extent().contains(x, y) {
            self.second.elevation_sample(x, y)
        } else {
            Err(SkylineError::invalid(format!(
                "sample ({x}, {y}) outside extent {}",
                self.extent
            )))
        }
    }
}

/// Folds `sources` left to right into nested composites.
///
/// # Errors
///
/// [`SkylineError::InvalidArgument`] if `sources` is empty or the running
/// union is not unionable with the next source.
pub fn union_all(
    sources: Vec<Box<dyn DiscreteElevationModel>>,
) -> Result<Box<dyn DiscreteElevationModel>, SkylineError> {
    let mut iter = sources.into_iter();
    let mut merged = iter
        .next()
        .ok_or_else(|| SkylineError::invalid("no elevation sources to merge"))?;
    for next in iter {
        merged = Box::new(CompositeDiscreteElevationModel::new(merged, next)?);
    }
    Ok(merged)
}
