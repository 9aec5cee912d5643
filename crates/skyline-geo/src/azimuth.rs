//! Canonical azimuths and conversion to the mathematical angle convention.

use std::f64::consts::PI;

use skyline_math::{PI2, SkylineError, floor_mod};

/// Returns true if `azimuth` lies in `[0, 2π)`.
#[inline]
pub fn is_canonical(azimuth: f64) -> bool {
    (0.0..PI2).contains(&azimuth)
}

/// Maps any angle onto its equivalent in `[0, 2π)`.
pub fn canonicalize(azimuth: f64) -> f64 {
    if is_canonical(azimuth) {
        return azimuth;
    }
    let a = floor_mod(azimuth, PI2);
    // floor_mod can round up to exactly 2π for tiny negative inputs.
    if a >= PI2 { 0.0 } else { a }
}

fn check_canonical(angle: f64) -> Result<(), SkylineError> {
    SkylineError::check(is_canonical(angle), || {
        format!("angle {angle} is not in [0, 2pi)")
    })
}

/// Converts a canonical azimuth (clockwise from north) to a mathematical
/// angle (counter-clockwise from east).
///
/// # Errors
///
/// [`SkylineError::InvalidArgument`] if `azimuth` is not canonical.
pub fn to_math(azimuth: f64) -> Result<f64, SkylineError> {
    check_canonical(azimuth)?;
    Ok(canonicalize(-azimuth))
}

/// Converts a canonical mathematical angle back to an azimuth.
///
/// # Errors
///
/// [`SkylineError::InvalidArgument`] if `angle` is not canonical.
pub fn from_math(angle: f64) -> Result<f64, SkylineError> {
    check_canonical(angle)?;
    Ok(canonicalize(-angle))
}

/// Names the compass octant containing `azimuth`, composing the intercardinal
/// names from the given cardinal ones (`n` + `e` for north-east, ...).
///
/// Cardinal octants include their boundaries.
///
/// # Errors
///
/// [`SkylineError::InvalidArgument`] if `azimuth` is not canonical.
pub fn to_octant_string(
    azimuth: f64,
    n: &str,
    e: &str,
    s: &str,
    w: &str,
) -> Result<String, SkylineError> {
    check_canonical(azimuth)?;
    let eighth = PI / 8.0;
    let name = if azimuth <= eighth || azimuth >= 15.0 * eighth {
        n.to_string()
    } else if azimuth < 3.0 * eighth {
        format!("{n}{e}")
    } else if azimuth <= 5.0 * eighth {
        e.to_string()
    } else if azimuth < 7.0 * eighth {
        format!("{s}{e}")
    } else if azimuth <= 9.0 * eighth {
        s.to_string()
    } else if azimuth < 11.0 * eighth {
        format!("{s}{w}")
    } else if azimuth <= 13.0 * eighth {
        w.to_string()
    } else {
        format!("{n}{w}")
    };
    Ok(name)
}
