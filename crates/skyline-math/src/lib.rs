//! Scalar primitives, closed integer intervals, a bracketing root finder and the
//! error taxonomy shared by every skyline crate.

mod error;
mod interval;
mod math2;
mod root;

pub use error::SkylineError;
pub use interval::{Interval1D, Interval2D};
pub use math2::{PI2, angular_distance, bilerp, floor_mod, haversin, lerp, sq};
pub use root::{first_interval_containing_root, improve_root};
