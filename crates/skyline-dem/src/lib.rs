//! Elevation models: discrete sample grids, their composition, and the
//! continuous interpolated view used to sample terrain along a ray.
//!
//! Sources form a small hierarchy:
//!
//! 1. **Leaf tiles**: [`InMemoryElevationModel`], [`SyntheticElevationModel`].
//! 2. **Composite**: [`CompositeDiscreteElevationModel`], two unionable
//!    sources behind one extent.
//! 3. **Continuous**: [`ContinuousElevationModel`], bilinear interpolation of
//!    elevation and slope over any discrete source.
//!
//! [`ElevationProfile`] walks a continuous model along a great circle.

mod composite;
mod continuous;
mod discrete;
mod memory;
mod profile;
mod synthetic;

pub use composite::{CompositeDiscreteElevationModel, union_all};
pub use continuous::ContinuousElevationModel;
pub use discrete::{DiscreteElevationModel, SAMPLES_PER_DEGREE, SAMPLES_PER_RADIAN, sample_index};
pub use memory::InMemoryElevationModel;
pub use profile::ElevationProfile;
pub use synthetic::{SyntheticElevationModel, SyntheticTerrainParams};
