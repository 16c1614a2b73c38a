//! Elementwise flux over equal-length parameter slices.

use super::error::{check_len, LightCurveError};
use crate::limb_darkening::quad;
use transit_core::types::Scalar;

/// Evaluate [`quad`] at every index of `(g1, g2, p, z)`.
///
/// # Errors
///
/// `LightCurveError::ShapeMismatch` if the slices differ in length.
///
/// # Examples
/// ```
/// use transit_models::light_curve::quad_batch;
///
/// let flux = quad_batch(&[0.4, 0.4], &[0.3, 0.3], &[0.1, 0.1], &[0.0, 2.0]).unwrap();
/// assert!(flux[0] < 1.0);
/// assert_eq!(flux[1], 1.0);
/// ```
pub fn quad_batch<S: Scalar>(
    g1: &[S],
    g2: &[S],
    p: &[S],
    z: &[S],
) -> Result<Vec<S>, LightCurveError> {
    let len = z.len();
    check_len("g1", g1, len)?;
    check_len("g2", g2, len)?;
    check_len("p", p, len)?;
    tracing::debug!(len, "quad_batch");

    Ok(g1
        .iter()
        .zip(g2)
        .zip(p)
        .zip(z)
        .map(|(((c1, c2), p), d)| quad(c1.clone(), c2.clone(), p.clone(), d.clone()))
        .collect())
}
