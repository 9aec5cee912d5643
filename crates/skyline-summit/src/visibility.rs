//! Placement of summits in a panorama and line-of-sight checks.

use skyline_dem::{ContinuousElevationModel, DiscreteElevationModel, ElevationProfile};
use skyline_math::{SkylineError, angular_distance, first_interval_containing_root};
use skyline_panorama::{PanoramaParameters, ray_to_ground_distance};

use crate::Summit;

/// Step in meters of the search for terrain hiding a summit.
const SEARCH_STEP: f64 = 64.0;
/// Terrain closer than this to a summit does not hide it.
const OBSTRUCTION_TOLERANCE: f64 = 200.0;

/// A summit seen from the observer, with the pixel it appears at.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleSummit {
    pub summit: Summit,
    pub x: i32,
    pub y: i32,
}

/// The summits visible in the panorama described by `parameters`, sorted
/// top to bottom and, on the same row, highest first.
///
/// A summit is visible when it lies within the field of view and the
/// maximum distance, and the sight line from the observer to it does not
/// meet the terrain earlier than 200 m before the summit.
pub fn visible_summits<D: DiscreteElevationModel>(
    model: &ContinuousElevationModel<D>,
    parameters: &PanoramaParameters,
    summits: &[Summit],
) -> Result<Vec<VisibleSummit>, SkylineError> {
    let observer = parameters.observer_position();
    let observer_elevation = f64::from(parameters.observer_elevation());
    let half_horizontal = parameters.horizontal_field_of_view() / 2.0;
    let half_vertical = parameters.vertical_field_of_view() / 2.0;

    let mut visible = Vec::new();
    for summit in summits {
        let distance = observer.distance_to(&summit.position());
        if distance <= 0.0 || distance > f64::from(parameters.max_distance()) {
            continue;
        }
        let azimuth = observer.azimuth_to(&summit.position());
        if angular_distance(parameters.center_azimuth(), azimuth).abs() > half_horizontal {
            continue;
        }

        let profile = ElevationProfile::new(model, observer, azimuth, distance)?;
        let elevation_difference = -ray_to_ground_distance(&profile, observer_elevation, 0.0)(distance)?;
        let altitude = elevation_difference.atan2(distance);
        if altitude.abs() > half_vertical {
            continue;
        }

        let sight_line = ray_to_ground_distance(&profile, observer_elevation, elevation_difference / distance);
        let obstruction = first_interval_containing_root(&sight_line, 0.0, distance, SEARCH_STEP)?;
        if obstruction < distance - OBSTRUCTION_TOLERANCE {
            tracing::trace!(summit = summit.name(), obstruction, "summit hidden");
            continue;
        }

        let x = parameters.x_for_azimuth(azimuth)?.round() as i32;
        let y = parameters.y_for_altitude(altitude)?.round() as i32;
        if parameters.is_valid_sample_index(x, y) {
            visible.push(VisibleSummit {
                summit: summit.clone(),
                x,
                y,
            });
        }
    }

    visible.sort_by(|a, b| {
        a.y.cmp(&b.y)
            .then_with(|| b.summit.elevation().cmp(&a.summit.elevation()))
    });
    tracing::debug!(candidates = summits.len(), visible = visible.len(), "labelled summits");
    Ok(visible)
}
