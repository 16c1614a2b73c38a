//! Resampling of light curves onto per-row query points.

use super::error::{check_len, LightCurveError};
use transit_core::math::interpolators::GridInterpolator;
use transit_core::types::Scalar;

/// Interpolate row `m` of the row-major `M×N` matrix `y` at `t[m]`.
///
/// Returns the values `z` and the slopes `dz = ∂z/∂t`; queries outside
/// `[x[0], x[N-1]]` take the end value with zero slope.
///
/// # Arguments
///
/// * `t` - Query points (length `M`)
/// * `x` - Shared grid, strictly increasing (length `N`)
/// * `y` - Ordinates, row-major `M×N`
/// * `check_sorted` - Validate that `x` is strictly increasing
///
/// # Errors
///
/// - `Interpolation(InsufficientData)` for an empty grid
/// - `Interpolation(NonMonotonicData)` for an unsorted grid
/// - `Interpolation(ShapeMismatch)` if `y.len() != M·N`
///
/// # Examples
/// ```
/// use transit_models::light_curve::interp;
///
/// let x = [0.0, 1.0, 2.0];
/// let y = [0.0, 1.0, 4.0, 1.0, 1.0, 1.0];
/// let (z, dz) = interp::<f64>(&[1.5_f64, 0.5], &x, &y, true).unwrap();
/// assert_eq!(z, vec![2.5, 1.0]);
/// assert_eq!(dz, vec![3.0, 0.0]);
/// ```
pub fn interp<S: Scalar>(
    t: &[S],
    x: &[S::Real],
    y: &[S],
    check_sorted: bool,
) -> Result<(Vec<S>, Vec<S>), LightCurveError> {
    let grid = GridInterpolator::new(x, check_sorted).map_err(|e| {
        tracing::warn!(error = %e, "invalid interpolation grid");
        e
    })?;
    tracing::debug!(rows = t.len(), grid = grid.len(), "interp");
    Ok(grid.resample(t, y)?)
}

/// Reverse of [`interp`] with respect to the query points: `bt = bz·dz`.
///
/// # Errors
///
/// `LightCurveError::ShapeMismatch` if `bz` and `dz` differ in length.
pub fn interp_rev(dz: &[f64], bz: &[f64]) -> Result<Vec<f64>, LightCurveError> {
    check_len("bz", bz, dz.len())?;
    Ok(dz.iter().zip(bz).map(|(d, b)| d * b).collect())
}
