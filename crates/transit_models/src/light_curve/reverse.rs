//! Vector-Jacobian product of the batched light curve.
//!
//! Layout: `N` light curves, each with its own `(g1, g2, p)`, sampled at `M`
//! separations. `z` and the output cotangent `bflux` are row-major `[n][m]`.

use super::error::{check_len, LightCurveError};
use crate::limb_darkening::quad_grad;

/// Cotangents of the light-curve inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LightCurveCotangent {
    /// Per-curve cotangent of `g1` (length `N`).
    pub bg1: Vec<f64>,
    /// Per-curve cotangent of `g2` (length `N`).
    pub bg2: Vec<f64>,
    /// Per-curve cotangent of `p` (length `N`).
    pub bp: Vec<f64>,
    /// Per-sample cotangent of `z` (length `N·M`).
    pub bz: Vec<f64>,
}

/// Pull `bflux` back through the light curve.
///
/// `bg1[n] = Σ_m bflux[n][m] ∂flux/∂c1`, likewise `bg2`, `bp`;
/// `bz[n][m] = bflux[n][m] ∂flux/∂d`.
///
/// # Errors
///
/// `LightCurveError::ShapeMismatch` if `g2`, `p` differ in length from `g1`,
/// `z` is not a multiple of `N` long, or `bflux` differs in length from `z`.
///
/// # Examples
/// ```
/// use transit_models::light_curve::quad_rev;
///
/// let cot = quad_rev(&[0.4], &[0.3], &[0.1], &[0.0, 0.5, 2.0], &[1.0, 1.0, 1.0]).unwrap();
/// assert!(cot.bp[0] < 0.0);
/// assert_eq!(cot.bz[2], 0.0);
/// ```
pub fn quad_rev(
    g1: &[f64],
    g2: &[f64],
    p: &[f64],
    z: &[f64],
    bflux: &[f64],
) -> Result<LightCurveCotangent, LightCurveError> {
    let curves = g1.len();
    check_len("g2", g2, curves)?;
    check_len("p", p, curves)?;
    check_len("bflux", bflux, z.len())?;

    let samples = if curves == 0 { 0 } else { z.len() / curves };
    check_len("z", z, curves * samples)?;
    tracing::debug!(curves, samples, "quad_rev");

    let mut cot = LightCurveCotangent {
        bg1: vec![0.0; curves],
        bg2: vec![0.0; curves],
        bp: vec![0.0; curves],
        bz: vec![0.0; z.len()],
    };
    if samples == 0 {
        return Ok(cot);
    }

    let rows = z.chunks_exact(samples).zip(bflux.chunks_exact(samples));
    for (n, (row_z, row_b)) in rows.enumerate() {
        let offset = n * samples;
        for (m, (&d, &b)) in row_z.iter().zip(row_b).enumerate() {
            let g = quad_grad(g1[n], g2[n], p[n], d);
            cot.bg1[n] += b * g.d_c1;
            cot.bg2[n] += b * g.d_c2;
            cot.bp[n] += b * g.d_p;
            cot.bz[offset + m] = b * g.d_d;
        }
    }
    Ok(cot)
}
