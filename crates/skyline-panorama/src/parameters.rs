//! Geometry of a panorama view and the projection between pixels and angles.

use skyline_geo::{GeoPoint, azimuth};
use skyline_math::{PI2, SkylineError, angular_distance};

/// Observer, viewing direction and image dimensions of a panorama.
///
/// Pixels are square in angle: both axes advance by
/// `horizontal_field_of_view / (width - 1)` per pixel, which fixes the
/// vertical field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanoramaParameters {
    observer_position: GeoPoint,
    observer_elevation: i32,
    center_azimuth: f64,
    horizontal_field_of_view: f64,
    max_distance: i32,
    width: i32,
    height: i32,
    vertical_field_of_view: f64,
}

impl PanoramaParameters {
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if `center_azimuth` is not
    /// canonical, `horizontal_field_of_view` is outside `(0, 2π]`, or any of
    /// `max_distance`, `width`, `height` is not positive.
    pub fn new(
        observer_position: GeoPoint,
        observer_elevation: i32,
        center_azimuth: f64,
        horizontal_field_of_view: f64,
        max_distance: i32,
        width: i32,
        height: i32,
    ) -> Result<Self, SkylineError> {
        SkylineError::check(azimuth::is_canonical(center_azimuth), || {
            format!("center azimuth {center_azimuth} is not canonical")
        })?;
        SkylineError::check(
            horizontal_field_of_view > 0.0 && horizontal_field_of_view <= PI2,
            || format!("horizontal field of view {horizontal_field_of_view} outside (0, 2pi]"),
        )?;
        SkylineError::check(max_distance > 0, || {
            format!("max distance {max_distance} must be positive")
        })?;
        SkylineError::check(width > 0 && height > 0, || {
            format!("dimensions {width}x{height} must be positive")
        })?;

        let delta = horizontal_field_of_view / f64::from((width - 1).max(1));
        Ok(Self {
            observer_position,
            observer_elevation,
            center_azimuth,
            horizontal_field_of_view,
            max_distance,
            width,
            height,
            vertical_field_of_view: delta * f64::from(height - 1),
        })
    }

    pub fn observer_position(&self) -> GeoPoint {
        self.observer_position
    }

    /// Observer elevation in meters.
    pub fn observer_elevation(&self) -> i32 {
        self.observer_elevation
    }

    pub fn center_azimuth(&self) -> f64 {
        self.center_azimuth
    }

    pub fn horizontal_field_of_view(&self) -> f64 {
        self.horizontal_field_of_view
    }

    pub fn vertical_field_of_view(&self) -> f64 {
        self.vertical_field_of_view
    }

    /// Maximum sight distance in meters.
    pub fn max_distance(&self) -> i32 {
        self.max_distance
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Angle in radians covered by one pixel along either axis.
    fn delta(&self) -> f64 {
        self.horizontal_field_of_view / f64::from((self.width - 1).max(1))
    }

    /// Canonical azimuth seen at column `x`.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if `x` is outside `[0, width - 1]`.
    pub fn azimuth_for_x(&self, x: f64) -> Result<f64, SkylineError> {
        SkylineError::check(x >= 0.0 && x <= f64::from(self.width - 1), || {
            format!("column {x} outside [0, {}]", self.width - 1)
        })?;
        Ok(azimuth::canonicalize(
            x * self.delta() - self.horizontal_field_of_view / 2.0 + self.center_azimuth,
        ))
    }

    /// Fractional column at which `azimuth` is seen.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if `azimuth` is more than half the
    /// horizontal field of view away from the center azimuth.
    pub fn x_for_azimuth(&self, azimuth: f64) -> Result<f64, SkylineError> {
        let half = self.horizontal_field_of_view / 2.0;
        // A full circle sees the antipode at both edges; it maps to column 0.
        let offset = angular_distance(self.center_azimuth, azimuth);
        SkylineError::check(offset.abs() <= half + 1e-12, || {
            format!("azimuth {azimuth} outside the field of view")
        })?;
        Ok(((offset + half) / self.delta()).clamp(0.0, f64::from(self.width - 1)))
    }

    /// Altitude angle seen at row `y`; positive above the horizontal.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if `y` is outside `[0, height - 1]`.
    pub fn altitude_for_y(&self, y: f64) -> Result<f64, SkylineError> {
        SkylineError::check(y >= 0.0 && y <= f64::from(self.height - 1), || {
            format!("row {y} outside [0, {}]", self.height - 1)
        })?;
        Ok(self.vertical_field_of_view / 2.0 - y * self.delta())
    }

    /// Fractional row at which `altitude` is seen.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidArgument`] if `altitude` is outside the
    /// vertical field of view.
    pub fn y_for_altitude(&self, altitude: f64) -> Result<f64, SkylineError> {
        let half = self.vertical_field_of_view / 2.0;
        SkylineError::check(altitude.abs() <= half + 1e-12, || {
            format!("altitude {altitude} outside the field of view")
        })?;
        Ok(((half - altitude) / self.delta()).clamp(0.0, f64::from(self.height - 1)))
    }

    pub fn is_valid_sample_index(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Row-major index of pixel `(x, y)`, which must be valid.
    pub fn linear_sample_index(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.is_valid_sample_index(x, y));
        (y as usize) * (self.width as usize) + x as usize
    }
}
