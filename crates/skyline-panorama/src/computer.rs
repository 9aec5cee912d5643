//! The ray/terrain intersection search that fills a panorama.

use std::time::Instant;

use skyline_dem::{ContinuousElevationModel, DiscreteElevationModel, ElevationProfile};
use skyline_geo::EARTH_RADIUS;
use skyline_math::{SkylineError, first_interval_containing_root, improve_root, sq};

use crate::{Panorama, PanoramaBuilder, PanoramaParameters};

/// Atmospheric refraction coefficient.
const REFRACTION: f64 = 0.13;
/// Combined curvature and refraction drop of a sight line, per squared meter.
const CURVATURE: f64 = (1.0 - REFRACTION) / (2.0 * EARTH_RADIUS);

/// Step in meters of the coarse search for a terrain crossing.
const SEARCH_STEP: f64 = 64.0;
/// Precision in meters of a refined terrain crossing.
const ROOT_PRECISION: f64 = 4.0;

/// Height of a ray above the terrain at horizontal distance `x` along
/// `profile`, for a ray leaving at height `ray0` with slope `ray_slope`.
///
/// Negative where the ray is underground.
pub fn ray_to_ground_distance<D: DiscreteElevationModel>(
    profile: &ElevationProfile<'_, D>,
    ray0: f64,
    ray_slope: f64,
) -> impl Fn(f64) -> Result<f64, SkylineError> {
    move |x| Ok(ray0 + x * ray_slope - profile.elevation_at(x)? + CURVATURE * sq(x))
}

/// Computes panoramas over one terrain model.
pub struct PanoramaComputer<'a, D> {
    model: &'a ContinuousElevationModel<D>,
}

impl<'a, D: DiscreteElevationModel> PanoramaComputer<'a, D> {
    pub fn new(model: &'a ContinuousElevationModel<D>) -> Self {
        Self { model }
    }

    /// Finds, for every pixel, the first point at which its ray meets the
    /// terrain within the maximum distance.
    ///
    /// Rows of a column are searched bottom-up and each search starts at
    /// the previous row's hit, since a higher ray cannot meet the terrain
    /// closer. The first row without a hit ends its column: every pixel
    /// above it is left as sky.
    pub fn compute_panorama(&self, parameters: &PanoramaParameters) -> Result<Panorama, SkylineError> {
        let span = tracing::info_span!(
            "compute_panorama",
            width = parameters.width(),
            height = parameters.height(),
            max_distance = parameters.max_distance(),
        );
        let _enter = span.enter();
        let start = Instant::now();

        let mut builder = PanoramaBuilder::new(*parameters);
        let max_distance = f64::from(parameters.max_distance());
        let ray0 = f64::from(parameters.observer_elevation());
        let mut total_hits = 0usize;

        for x in 0..parameters.width() {
            let azimuth = parameters.azimuth_for_x(f64::from(x))?;
            let profile = ElevationProfile::new(
                self.model,
                parameters.observer_position(),
                azimuth,
                max_distance,
            )?;

            let mut last_hit = 0.0;
            let mut hits = 0usize;
            for y in (0..parameters.height()).rev() {
                let altitude = parameters.altitude_for_y(f64::from(y))?;
                let f = ray_to_ground_distance(&profile, ray0, altitude.tan());

                let lower = first_interval_containing_root(&f, last_hit, max_distance, SEARCH_STEP)?;
                if lower.is_infinite() {
                    break;
                }
                let root = improve_root(&f, lower, lower + SEARCH_STEP, ROOT_PRECISION)?;

                let position = profile.position_at(root)?;
                builder
                    .set_distance_at(x, y, (root / altitude.cos()) as f32)?
                    .set_longitude_at(x, y, position.longitude() as f32)?
                    .set_latitude_at(x, y, position.latitude() as f32)?
                    .set_elevation_at(x, y, self.model.elevation_at(&position)? as f32)?
                    .set_slope_at(x, y, self.model.slope_at(&position)? as f32)?;

                last_hit = root;
                hits += 1;
            }
            tracing::debug!(x, hits, "column done");
            total_hits += hits;
        }

        tracing::info!(
            hits = total_hits,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "panorama computed"
        );
        Ok(builder.build())
    }
}
