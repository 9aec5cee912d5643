//! Two-phase root finding: a coarse fixed-step bracket search followed by
//! bisection refinement.
//!
//! The bracket search only sees sign changes at the sampled steps, so a
//! function that crosses zero twice inside one step is reported as having no
//! root there. Terrain height functions sampled at a few tens of meters are
//! assumed not to do that.
//!
//! Both functions accept fallible closures so that evaluation errors from the
//! sampled function (for instance a profile queried past its length)
//! propagate to the caller instead of being folded into the search.

use crate::SkylineError;

/// Returns the lower bound of the first interval `[a, a + dx]` inside
/// `[min_x, max_x]` over which `f` changes sign (or touches zero).
///
/// Intervals start at `min_x` and advance by `dx`; an interval whose upper
/// bound would exceed `max_x` is not examined. Returns `f64::INFINITY` when no
/// sign change is found.
///
/// # Errors
///
/// [`SkylineError::InvalidArgument`] if `max_x < min_x` or `dx <= 0`, or any
/// error returned by `f`.
pub fn first_interval_containing_root<F>(
    mut f: F,
    min_x: f64,
    max_x: f64,
    dx: f64,
) -> Result<f64, SkylineError>
where
    F: FnMut(f64) -> Result<f64, SkylineError>,
{
    SkylineError::check(max_x >= min_x, || {
        format!("search range [{min_x}, {max_x}] is empty")
    })?;
    SkylineError::check(dx > 0.0, || format!("step {dx} must be positive"))?;

    let mut lower = min_x;
    let mut f_lower = f(lower)?;
    loop {
        let upper = lower + dx;
        if upper > max_x {
            return Ok(f64::INFINITY);
        }
        let f_upper = f(upper)?;
        if f_lower * f_upper <= 0.0 {
            return Ok(lower);
        }
        lower = upper;
        f_lower = f_upper;
    }
}

/// Refines a root of `f` bracketed by `[x1, x2]` by bisection until the
/// bracket is no wider than `epsilon`, returning its lower bound.
///
/// Returns immediately when an endpoint or a midpoint evaluates to exactly 0.
///
/// # Errors
///
/// [`SkylineError::InvalidArgument`] if `f(x1)` and `f(x2)` have the same
/// sign (both nonzero) or `epsilon <= 0`, or any error returned by `f`.
pub fn improve_root<F>(mut f: F, x1: f64, x2: f64, epsilon: f64) -> Result<f64, SkylineError>
where
    F: FnMut(f64) -> Result<f64, SkylineError>,
{
    SkylineError::check(epsilon > 0.0, || {
        format!("epsilon {epsilon} must be positive")
    })?;

    let mut a = x1;
    let mut b = x2;
    let mut fa = f(a)?;
    if fa == 0.0 {
        return Ok(a);
    }
    let fb = f(b)?;
    if fb == 0.0 {
        return Ok(b);
    }
    SkylineError::check(fa * fb < 0.0, || {
        format!("[{x1}, {x2}] does not bracket a root")
    })?;

    while (b - a).abs() > epsilon {
        let c = (a + b) / 2.0;
        let fc = f(c)?;
        if fc == 0.0 {
            return Ok(c);
        }
        if fc * fa > 0.0 {
            a = c;
            fa = fc;
        } else {
            b = c;
        }
    }
    Ok(a.min(b))
}
