//! Named summits and which of them a panorama can see.

mod summit;
mod visibility;

pub use summit::Summit;
pub use visibility::{VisibleSummit, visible_summits};
