//! Panorama parameters as a user enters them: bounded integers in human
//! units, converted to [`PanoramaParameters`] on demand.

use serde::{Deserialize, Serialize};
use skyline_geo::GeoPoint;
use skyline_math::{PI2, SkylineError};

use crate::PanoramaParameters;

/// One user-facing parameter together with its inclusive bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserParameter {
    /// Ten-thousandths of a degree.
    ObserverLongitude,
    /// Ten-thousandths of a degree.
    ObserverLatitude,
    /// Meters.
    ObserverElevation,
    /// Degrees.
    CenterAzimuth,
    /// Degrees.
    HorizontalFieldOfView,
    /// Kilometers.
    MaxDistance,
    /// Pixels.
    Width,
    /// Pixels.
    Height,
    /// Power of two the image dimensions are multiplied by.
    SuperSamplingExponent,
}

impl UserParameter {
    pub const ALL: [UserParameter; 9] = [
        UserParameter::ObserverLongitude,
        UserParameter::ObserverLatitude,
        UserParameter::ObserverElevation,
        UserParameter::CenterAzimuth,
        UserParameter::HorizontalFieldOfView,
        UserParameter::MaxDistance,
        UserParameter::Width,
        UserParameter::Height,
        UserParameter::SuperSamplingExponent,
    ];

    pub fn min(self) -> i32 {
        self.bounds().0
    }

    pub fn max(self) -> i32 {
        self.bounds().1
    }

    fn bounds(self) -> (i32, i32) {
        match self {
            UserParameter::ObserverLongitude => (60_000, 120_000),
            UserParameter::ObserverLatitude => (450_000, 480_000),
            UserParameter::ObserverElevation => (300, 10_000),
            UserParameter::CenterAzimuth => (0, 359),
            UserParameter::HorizontalFieldOfView => (1, 360),
            UserParameter::MaxDistance => (10, 600),
            UserParameter::Width => (30, 16_000),
            UserParameter::Height => (10, 4_000),
            UserParameter::SuperSamplingExponent => (0, 2),
        }
    }

    /// Clamps `value` into this parameter's bounds.
    pub fn sanitize(self, value: i32) -> i32 {
        let (min, max) = self.bounds();
        value.clamp(min, max)
    }
}

/// Raw, unchecked values of every [`UserParameter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserParameterValues {
    pub observer_longitude: i32,
    pub observer_latitude: i32,
    pub observer_elevation: i32,
    pub center_azimuth: i32,
    pub horizontal_field_of_view: i32,
    pub max_distance: i32,
    pub width: i32,
    pub height: i32,
    pub super_sampling_exponent: i32,
}

impl UserParameterValues {
    pub fn get(&self, parameter: UserParameter) -> i32 {
        match parameter {
            UserParameter::ObserverLongitude => self.observer_longitude,
            UserParameter::ObserverLatitude => self.observer_latitude,
            UserParameter::ObserverElevation => self.observer_elevation,
            UserParameter::CenterAzimuth => self.center_azimuth,
            UserParameter::HorizontalFieldOfView => self.horizontal_field_of_view,
            UserParameter::MaxDistance => self.max_distance,
            UserParameter::Width => self.width,
            UserParameter::Height => self.height,
            UserParameter::SuperSamplingExponent => self.super_sampling_exponent,
        }
    }

    fn get_mut(&mut self, parameter: UserParameter) -> &mut i32 {
        match parameter {
            UserParameter::ObserverLongitude => &mut self.observer_longitude,
            UserParameter::ObserverLatitude => &mut self.observer_latitude,
            UserParameter::ObserverElevation => &mut self.observer_elevation,
            UserParameter::CenterAzimuth => &mut self.center_azimuth,
            UserParameter::HorizontalFieldOfView => &mut self.horizontal_field_of_view,
            UserParameter::MaxDistance => &mut self.max_distance,
            UserParameter::Width => &mut self.width,
            UserParameter::Height => &mut self.height,
            UserParameter::SuperSamplingExponent => &mut self.super_sampling_exponent,
        }
    }
}

/// A validated set of user parameters.
///
/// Every value is clamped into its bounds, then the height is capped so the
/// vertical field of view stays below 170 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "UserParameterValues", into = "UserParameterValues")]
pub struct PanoramaUserParameters {
    values: UserParameterValues,
}

impl PanoramaUserParameters {
    pub fn new(mut values: UserParameterValues) -> Self {
        for parameter in UserParameter::ALL {
            let value = values.get_mut(parameter);
            *value = parameter.sanitize(*value);
        }
        let max_height = 170 * (values.width - 1) / values.horizontal_field_of_view + 1;
        values.height = values.height.min(max_height);
        Self { values }
    }

    /// Copy with `parameter` replaced by `value`, sanitized again.
    pub fn with(&self, parameter: UserParameter, value: i32) -> Self {
        let mut values = self.values;
        *values.get_mut(parameter) = value;
        Self::new(values)
    }

    pub fn get(&self, parameter: UserParameter) -> i32 {
        self.values.get(parameter)
    }

    pub fn values(&self) -> UserParameterValues {
        self.values
    }

    pub fn observer_longitude(&self) -> i32 {
        self.values.observer_longitude
    }

    pub fn observer_latitude(&self) -> i32 {
        self.values.observer_latitude
    }

    pub fn observer_elevation(&self) -> i32 {
        self.values.observer_elevation
    }

    pub fn center_azimuth(&self) -> i32 {
        self.values.center_azimuth
    }

    pub fn horizontal_field_of_view(&self) -> i32 {
        self.values.horizontal_field_of_view
    }

    pub fn max_distance(&self) -> i32 {
        self.values.max_distance
    }

    pub fn width(&self) -> i32 {
        self.values.width
    }

    pub fn height(&self) -> i32 {
        self.values.height
    }

    pub fn super_sampling_exponent(&self) -> i32 {
        self.values.super_sampling_exponent
    }

    /// Parameters of the computed panorama, dimensions scaled by
    /// `2^super_sampling_exponent`.
    pub fn panorama_parameters(&self) -> Result<PanoramaParameters, SkylineError> {
        self.to_parameters(self.super_sampling_exponent())
    }

    /// Parameters of the panorama as displayed, without super-sampling.
    pub fn panorama_display_parameters(&self) -> Result<PanoramaParameters, SkylineError> {
        self.to_parameters(0)
    }

    fn to_parameters(&self, exponent: i32) -> Result<PanoramaParameters, SkylineError> {
        let v = &self.values;
        let position = GeoPoint::from_degrees(
            f64::from(v.observer_longitude) / 10_000.0,
            f64::from(v.observer_latitude) / 10_000.0,
        )?;
        let scale = 1 << exponent;
        PanoramaParameters::new(
            position,
            v.observer_elevation,
            f64::from(v.center_azimuth).to_radians(),
            f64::from(v.horizontal_field_of_view).to_radians().min(PI2),
            v.max_distance * 1000,
            v.width * scale,
            v.height * scale,
        )
    }
}

impl From<UserParameterValues> for PanoramaUserParameters {
    fn from(values: UserParameterValues) -> Self {
        Self::new(values)
    }
}

impl From<PanoramaUserParameters> for UserParameterValues {
    fn from(parameters: PanoramaUserParameters) -> Self {
        parameters.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> UserParameterValues {
        UserParameterValues {
            observer_longitude: 76_500,
            observer_latitude: 467_300,
            observer_elevation: 600,
            center_azimuth: 180,
            horizontal_field_of_view: 110,
            max_distance: 300,
            width: 2500,
            height: 800,
            super_sampling_exponent: 0,
        }
    }

    #[test]
    fn test_sanitize_clamps_to_bounds() {
        assert_eq!(UserParameter::Width.sanitize(5), 30);
        assert_eq!(UserParameter::Width.sanitize(20_000), 16_000);
        assert_eq!(UserParameter::CenterAzimuth.sanitize(359), 359);
        assert_eq!(UserParameter::CenterAzimuth.sanitize(360), 359);
        assert_eq!(UserParameter::ObserverLatitude.sanitize(0), 450_000);
        for p in UserParameter::ALL {
            assert!(p.min() <= p.max(), "{p:?}");
        }
    }

    #[test]
    fn test_construction_sanitizes_every_value() {
        let p = PanoramaUserParameters::new(UserParameterValues {
            observer_longitude: 0,
            observer_elevation: 20_000,
            max_distance: 1,
            super_sampling_exponent: 5,
            ..values()
        });
        assert_eq!(p.observer_longitude(), 60_000);
        assert_eq!(p.observer_elevation(), 10_000);
        assert_eq!(p.max_distance(), 10);
        assert_eq!(p.super_sampling_exponent(), 2);
    }

    #[test]
    fn test_height_capped_by_vertical_field_of_view() {
        let p = PanoramaUserParameters::new(UserParameterValues {
            horizontal_field_of_view: 60,
            width: 301,
            height: 4000,
            ..values()
        });
        // 170 * 300 / 60 + 1
        assert_eq!(p.height(), 851);

        let untouched = PanoramaUserParameters::new(values());
        assert_eq!(untouched.height(), 800);
    }

    #[test]
    fn test_with_replaces_and_sanitizes() {
        let p = PanoramaUserParameters::new(values()).with(UserParameter::Width, 10);
        assert_eq!(p.width(), 30);
        assert_eq!(p.get(UserParameter::Width), 30);
        // 170 * 29 / 110 + 1
        assert_eq!(p.height(), 45);
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(PanoramaUserParameters::new(values()), PanoramaUserParameters::new(values()));
        assert_ne!(
            PanoramaUserParameters::new(values()),
            PanoramaUserParameters::new(values()).with(UserParameter::CenterAzimuth, 10)
        );
    }

    #[test]
    fn test_panorama_parameters_conversion() {
        let p = PanoramaUserParameters::new(UserParameterValues {
            super_sampling_exponent: 1,
            ..values()
        });
        let computed = p.panorama_parameters().unwrap();
        assert_eq!(computed.width(), 5000);
        assert_eq!(computed.height(), 1600);
        assert_eq!(computed.max_distance(), 300_000);
        assert_eq!(computed.observer_elevation(), 600);
        assert!((computed.observer_position().longitude() - 7.65f64.to_radians()).abs() < 1e-12);
        assert!((computed.observer_position().latitude() - 46.73f64.to_radians()).abs() < 1e-12);
        assert!((computed.center_azimuth() - std::f64::consts::PI).abs() < 1e-12);

        let display = p.panorama_display_parameters().unwrap();
        assert_eq!(display.width(), 2500);
        assert_eq!(display.height(), 800);
    }

    #[test]
    fn test_full_circle_field_of_view_is_accepted() {
        let p = PanoramaUserParameters::new(UserParameterValues {
            horizontal_field_of_view: 360,
            ..values()
        });
        let computed = p.panorama_parameters().unwrap();
        assert!(computed.horizontal_field_of_view() <= PI2);
    }

    #[test]
    fn test_deserialization_sanitizes() {
        let text = "(observer_longitude: 76500, observer_latitude: 467300, observer_elevation: 600, \
                    center_azimuth: 400, horizontal_field_of_view: 110, max_distance: 300, \
                    width: 2500, height: 800, super_sampling_exponent: 0)";
        let p: PanoramaUserParameters = ron::from_str(text).unwrap();
        assert_eq!(p.center_azimuth(), 359);
    }
}
