//! Terrain the panorama is computed over.

use skyline_config::{SummitConfig, TerrainConfig};
use skyline_dem::{DiscreteElevationModel, SyntheticElevationModel, union_all};
use skyline_geo::GeoPoint;
use skyline_math::SkylineError;
use skyline_panorama::PanoramaParameters;
use skyline_summit::Summit;

/// Margin in meters added around the maximum sight distance so rays never
/// leave the terrain.
const MARGIN: f64 = 1000.0;

/// Synthetic tiles covering every point within sight of the observer,
/// merged into one source.
pub fn build(
    config: &TerrainConfig,
    parameters: &PanoramaParameters,
) -> Result<Box<dyn DiscreteElevationModel>, SkylineError> {
    let radius = f64::from(parameters.max_distance()) + MARGIN;
    let tiles = SyntheticElevationModel::tiles_around(
        parameters.observer_position(),
        radius,
        &config.synthetic_params(),
        config.tiles.max(1),
    )?;
    let sources = tiles
        .into_iter()
        .map(|tile| Box::new(tile) as Box<dyn DiscreteElevationModel>)
        .collect();
    let terrain = union_all(sources)?;
    tracing::info!(extent = %terrain.extent(), tiles = config.tiles.max(1), "terrain ready");
    Ok(terrain)
}

pub fn summits(configs: &[SummitConfig]) -> Result<Vec<Summit>, SkylineError> {
    configs
        .iter()
        .map(|s| {
            let position = GeoPoint::from_degrees(s.longitude, s.latitude)?;
            Ok(Summit::new(s.name.clone(), position, s.elevation))
        })
        .collect()
}
