//! Terrain sampled along a great circle leaving an origin at a fixed azimuth.

use skyline_geo::{GeoPoint, azimuth, distance};
use skyline_math::{PI2, SkylineError, floor_mod, lerp};

use crate::{ContinuousElevationModel, DiscreteElevationModel};

/// log2 of the spacing between precomputed positions.
const STEP_EXPONENT: i32 = 12;
/// Spacing in meters between precomputed positions.
const STEP: f64 = (1 << STEP_EXPONENT) as f64;

/// The terrain a ray passes over: positions along the great circle are
/// precomputed every 4096 m and interpolated in between.
pub struct ElevationProfile<'a, D> {
    model: &'a ContinuousElevationModel<D>,
    origin: GeoPoint,
    azimuth: f64,
    length: f64,
    /// `(longitude, latitude)` in radians at multiples of [`STEP`].
    positions: Vec<(f64, f64)>,
}

impl<'a, D: DiscreteElevationModel> ElevationProfile<'a, D> {
    /// Precomputes the positions along the great circle from `origin`
    /// heading `azimuth`, up to `length` meters.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if `azimuth` is not canonical or
    /// `length` is not a positive finite distance.
    pub fn new(
        model: &'a ContinuousElevationModel<D>,
        origin: GeoPoint,
        azimuth: f64,
        length: f64,
    ) -> Result<Self, SkylineError> {
        SkylineError::check(length > 0.0 && length.is_finite(), || {
            format!("profile length {length} must be positive and finite")
        })?;
        let alpha = azimuth::to_math(azimuth)?;

        let (sin_alpha, cos_alpha) = alpha.sin_cos();
        let (sin_lat0, cos_lat0) = origin.latitude().sin_cos();
        let lon0 = origin.longitude();

        let count = (length / STEP + 1.0).ceil() as usize;
        let positions = (0..count)
            .map(|i| {
                if i == 0 {
                    return (lon0, origin.latitude());
                }
                let x = distance::to_radians(i as f64 * STEP);
                let (sin_x, cos_x) = x.sin_cos();
                let lat = (sin_lat0 * cos_x + cos_lat0 * sin_x * cos_alpha)
                    .clamp(-1.0, 1.0)
                    .asin();
                let dlon = (sin_alpha * sin_x / lat.cos()).clamp(-1.0, 1.0).asin();
                let lon = floor_mod(lon0 - dlon + std::f64::consts::PI, PI2) - std::f64::consts::PI;
                (lon, lat)
            })
            .collect();

        Ok(Self {
            model,
            origin,
            azimuth,
            length,
            positions,
        })
    }

    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    fn check_distance(&self, x: f64) -> Result<(), SkylineError> {
        SkylineError::check((0.0..=self.length).contains(&x), || {
            format!("distance {x} outside profile [0, {}]", self.length)
        })
    }

    /// Position `x` meters along the profile.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if `x` is outside `[0, length]`.
    pub fn position_at(&self, x: f64) -> Result<GeoPoint, SkylineError> {
        self.check_distance(x)?;
        let scaled = x / STEP;
        let i = scaled.floor() as usize;
        let (lon0, lat0) = self.positions[i];
        if scaled == i as f64 {
            return GeoPoint::new(lon0, lat0);
        }
        let (lon1, lat1) = self.positions[i + 1];
        let t = scaled - i as f64;
        GeoPoint::new(lerp(lon0, lon1, t), lerp(lat0, lat1, t))
    }

    /// Terrain elevation `x` meters along the profile.
    pub fn elevation_at(&self, x: f64) -> Result<f64, SkylineError> {
        self.model.elevation_at(&self.position_at(x)?)
    }

    /// Terrain slope `x` meters along the profile.
    pub fn slope_at(&self, x: f64) -> Result<f64, SkylineError> {
        self.model.slope_at(&self.position_at(x)?)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use skyline_math::{Interval1D, Interval2D};

    use super::*;
    use crate::{InMemoryElevationModel, sample_index};

    const EPSILON_M: f64 = 1e-3;

    fn flat_model_around(origin: &GeoPoint, half: i32, elevation: f64) -> ContinuousElevationModel<InMemoryElevationModel> {
        let cx = sample_index(origin.longitude()).round() as i32;
        let cy = sample_index(origin.latitude()).round() as i32;
        let extent = Interval2D::new(
            Interval1D::new(cx - half, cx + half).unwrap(),
            Interval1D::new(cy - half, cy + half).unwrap(),
        );
        ContinuousElevationModel::new(InMemoryElevationModel::filled(extent, elevation))
    }

    fn origin() -> GeoPoint {
        GeoPoint::from_degrees(7.65, 46.73).unwrap()
    }

    #[test]
    fn test_rejects_invalid_construction() {
        let model = flat_model_around(&origin(), 10, 0.0);
        assert!(ElevationProfile::new(&model, origin(), 0.0, 0.0).is_err());
        assert!(ElevationProfile::new(&model, origin(), -0.1, 1000.0).is_err());
        assert!(ElevationProfile::new(&model, origin(), PI2, 1000.0).is_err());
    }

    #[test]
    fn test_rejects_infinite_length() {
        let model = flat_model_around(&origin(), 10, 0.0);
        assert!(matches!(
            ElevationProfile::new(&model, origin(), 0.0, f64::INFINITY),
            Err(SkylineError::InvalidArgument(_))
        ));
        assert!(ElevationProfile::new(&model, origin(), 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_position_zero_is_origin() {
        let model = flat_model_around(&origin(), 10, 0.0);
        let profile = ElevationProfile::new(&model, origin(), 1.0, 10_000.0).unwrap();
        assert_eq!(profile.position_at(0.0).unwrap(), origin());

        let profile = ElevationProfile::new(&model, origin(), 4.0, 10_000.0).unwrap();
        assert_eq!(profile.position_at(0.0).unwrap(), origin());
    }

    #[test]
    fn test_positions_lie_at_requested_distance() {
        let model = flat_model_around(&origin(), 10, 0.0);
        let profile = ElevationProfile::new(&model, origin(), 2.2, 100_000.0).unwrap();
        for x in [4096.0, 8192.0, 40_960.0] {
            let d = origin().distance_to(&profile.position_at(x).unwrap());
            assert!((d - x).abs() < EPSILON_M, "at {x}: {d}");
        }
        // Interpolated positions drift off the great circle only slightly.
        let d = origin().distance_to(&profile.position_at(50_000.0).unwrap());
        assert!((d - 50_000.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_positions_follow_azimuth() {
        let model = flat_model_around(&origin(), 10, 0.0);
        for azimuth in [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2, 0.7] {
            let profile = ElevationProfile::new(&model, origin(), azimuth, 20_000.0).unwrap();
            let p = profile.position_at(8192.0).unwrap();
            let back = origin().azimuth_to(&p);
            let diff = skyline_math::angular_distance(azimuth, back).abs();
            assert!(diff < 1e-6, "azimuth {azimuth}: got {back}");
        }
    }

    #[test]
    fn test_east_heading_increases_longitude() {
        let model = flat_model_around(&origin(), 10, 0.0);
        let profile = ElevationProfile::new(&model, origin(), FRAC_PI_2, 20_000.0).unwrap();
        let p = profile.position_at(10_000.0).unwrap();
        assert!(p.longitude() > origin().longitude());
    }

    #[test]
    fn test_distance_outside_length_fails() {
        let model = flat_model_around(&origin(), 10, 0.0);
        let profile = ElevationProfile::new(&model, origin(), 0.0, 5000.0).unwrap();
        assert!(profile.position_at(5000.0).is_ok());
        assert!(matches!(
            profile.position_at(5000.5),
            Err(SkylineError::InvalidArgument(_))
        ));
        assert!(profile.elevation_at(-1.0).is_err());
        assert!(profile.slope_at(6000.0).is_err());
    }

    #[test]
    fn test_flat_profile_elevation_and_slope() {
        let model = flat_model_around(&origin(), 400, 1000.0);
        let profile = ElevationProfile::new(&model, origin(), 0.3, 5000.0).unwrap();
        for x in [0.0, 1234.5, 4096.0, 5000.0] {
            assert!((profile.elevation_at(x).unwrap() - 1000.0).abs() < 1e-9);
            assert!(profile.slope_at(x).unwrap().abs() < 1e-9);
        }
    }

    #[test]
    fn test_accessors() {
        let model = flat_model_around(&origin(), 10, 0.0);
        let profile = ElevationProfile::new(&model, origin(), 1.5, 7000.0).unwrap();
        assert_eq!(profile.origin(), origin());
        assert_eq!(profile.azimuth(), 1.5);
        assert_eq!(profile.length(), 7000.0);
    }
}
