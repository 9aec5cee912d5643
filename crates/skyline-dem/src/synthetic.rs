//! Procedural terrain tiles from fractal Brownian motion over simplex noise.
//!
//! Noise is sampled at the sample's position on a sphere of Earth radius, so
//! neighbouring tiles built with the same parameters agree on shared samples
//! and join without seams.

use glam::DVec3;
use noise::{NoiseFn, Simplex};
use skyline_geo::{EARTH_RADIUS, GeoPoint};
use skyline_math::{Interval1D, Interval2D, SkylineError};

use crate::discrete::check_in_extent;
use crate::{DiscreteElevationModel, SAMPLES_PER_RADIAN, sample_index};

/// Configuration of the multi-octave noise behind a synthetic tile.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticTerrainParams {
    /// Seed for deterministic generation.
    pub seed: u32,
    /// Number of noise octaves to composite.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Frequency of the first octave, in cycles per meter.
    pub base_frequency: f64,
    /// Amplitude of the first octave, in meters.
    pub amplitude: f64,
    /// Elevation the noise is added to, in meters.
    pub base_elevation: f64,
}

impl Default for SyntheticTerrainParams {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 6,
            lacunarity: 2.0,
            persistence: 0.5,
            base_frequency: 1.0 / 40_000.0,
            amplitude: 1500.0,
            base_elevation: 900.0,
        }
    }
}

/// A deterministic elevation tile over a caller-supplied extent.
pub struct SyntheticElevationModel {
    extent: Interval2D,
    noise: Simplex,
    params: SyntheticTerrainParams,
}

impl SyntheticElevationModel {
    pub fn new(extent: Interval2D, params: SyntheticTerrainParams) -> Self {
        let noise = Simplex::new(params.seed);
        Self {
            extent,
            noise,
            params,
        }
    }

    /// Splits the square region of half-width `radius` meters around
    /// `center` into `count` side-by-side tiles.
    ///
    /// Consecutive tiles share their boundary column, so each is unionable
    /// with the union of the tiles before it.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if `radius` is not positive, `count`
    /// is zero, or the region is narrower than `count` columns.
    pub fn tiles_around(
        center: GeoPoint,
        radius: f64,
        params: &SyntheticTerrainParams,
        count: usize,
    ) -> Result<Vec<Self>, SkylineError> {
        SkylineError::check(radius > 0.0, || format!("radius {radius} must be positive"))?;
        SkylineError::check(count > 0, || "tile count must be positive".to_string())?;

        let half_lat = sample_index(radius / EARTH_RADIUS).ceil() + 1.0;
        let cos_lat = center.latitude().cos().max(1e-6);
        let half_lon = sample_index(radius / (EARTH_RADIUS * cos_lat)).ceil() + 1.0;

        let cx = sample_index(center.longitude()).round();
        let cy = sample_index(center.latitude()).round();
        let max_y = sample_index(std::f64::consts::FRAC_PI_2).floor();

        let y0 = (cy - half_lat).max(-max_y) as i32;
        let y1 = (cy + half_lat).min(max_y) as i32;
        let x0 = (cx - half_lon) as i32;
        let x1 = (cx + half_lon) as i32;

        let columns = i64::from(x1) - i64::from(x0);
        SkylineError::check(columns >= count as i64, || {
            format!("cannot split {columns} columns into {count} tiles")
        })?;

        let iy = Interval1D::new(y0, y1)?;
        let mut tiles = Vec::with_capacity(count);
        for k in 0..count as i64 {
            let from = i64::from(x0) + columns * k / count as i64;
            let to = i64::from(x0) + columns * (k + 1) / count as i64;
            let ix = Interval1D::new(from as i32, to as i32)?;
            tiles.push(Self::new(Interval2D::new(ix, iy), params.clone()));
        }
        tracing::debug!(count, radius, %center, "created synthetic terrain tiles");
        Ok(tiles)
    }

    pub fn params(&self) -> &SyntheticTerrainParams {
        &self.params
    }

    /// Sums the noise octaves at a point in meters.
    fn fbm(&self, point: DVec3) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.params.base_frequency;
        let mut amplitude = self.params.amplitude;

        for _ in 0..self.params.octaves {
            let p = point * frequency;
            total += self.noise.get([p.x, p.y, p.z]) * amplitude;
            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        total
    }
}

/// Position of sample `(x, y)` on the sphere of Earth radius.
fn sphere_point(x: i32, y: i32) -> DVec3 {
    let lon = f64::from(x) / SAMPLES_PER_RADIAN;
    let lat = f64::from(y) / SAMPLES_PER_RADIAN;
    DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()) * EARTH_RADIUS
}

impl DiscreteElevationModel for SyntheticElevationModel {
    fn extent(&self) -> Interval2D {
        self.extent
    }

    fn elevation_sample(&self, x: i32, y: i32) -> Result<f64, SkylineError> {
        check_in_extent(&self.extent, x, y)?;
        let elevation = self.params.base_elevation + self.fbm(sphere_point(x, y));
        Ok(elevation.max(0.0))
    }
}

impl Drop for SyntheticElevationModel {
    fn drop(&mut self) {
        tracing::debug!(extent = %self.extent, "released synthetic elevation tile");
    }
}
