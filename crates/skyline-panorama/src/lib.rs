//! Panorama computation: the pixel/angle projection of a view, the dense
//! per-pixel sample grid, and the ray/terrain intersection search that fills
//! it.

mod computer;
mod panorama;
mod parameters;
pub mod predefined;
mod user_parameters;

pub use computer::{PanoramaComputer, ray_to_ground_distance};
pub use panorama::{Panorama, PanoramaBuilder};
pub use parameters::PanoramaParameters;
pub use user_parameters::{PanoramaUserParameters, UserParameter, UserParameterValues};
