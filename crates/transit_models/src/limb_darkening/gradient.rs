//! Flux together with its four partial derivatives.
//!
//! One forward pass with a four-channel dual number seeds `c1`, `c2`, `p`
//! and `d` and reads all partials at once.

use super::quad::quad_with;
use transit_core::math::elliptic::{Agm, EllipticBackend};
use transit_core::types::dual::{gradient, seed, GradientDual};
use transit_core::types::Scalar;

/// Flux value and its partial derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluxGradient {
    /// Normalised flux.
    pub flux: f64,
    /// ∂flux/∂c1.
    pub d_c1: f64,
    /// ∂flux/∂c2.
    pub d_c2: f64,
    /// ∂flux/∂p.
    pub d_p: f64,
    /// ∂flux/∂d.
    pub d_d: f64,
}

impl FluxGradient {
    /// Partials in argument order `[c1, c2, p, d]`.
    #[inline]
    pub fn as_array(&self) -> [f64; 4] {
        [self.d_c1, self.d_c2, self.d_p, self.d_d]
    }
}

/// Flux and gradient with respect to `(c1, c2, p, d)`.
///
/// # Examples
/// ```
/// use transit_models::limb_darkening::{quad, quad_grad};
///
/// let g = quad_grad(0.4, 0.3, 0.1, 0.5);
/// assert!((g.flux - quad(0.4, 0.3, 0.1, 0.5)).abs() < 1e-14);
/// // A larger occulter blocks more light
/// assert!(g.d_p < 0.0);
/// ```
#[inline]
pub fn quad_grad(c1: f64, c2: f64, p: f64, d: f64) -> FluxGradient {
    quad_grad_with::<Agm>(c1, c2, p, d)
}

/// [`quad_grad`] with an explicit elliptic integral backend.
pub fn quad_grad_with<B: EllipticBackend>(c1: f64, c2: f64, p: f64, d: f64) -> FluxGradient {
    let flux: GradientDual<4> = quad_with::<B, _>(
        seed::<4>(c1, 0),
        seed::<4>(c2, 1),
        seed::<4>(p, 2),
        seed::<4>(d, 3),
    );
    let [d_c1, d_c2, d_p, d_d] = gradient(&flux);
    FluxGradient {
        flux: flux.value(),
        d_c1,
        d_c2,
        d_p,
        d_d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limb_darkening::{occultation, quad, Regime};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const H: f64 = 1e-6;

    fn central_difference_with(args: [f64; 4], i: usize, h: f64) -> f64 {
        let mut hi = args;
        let mut lo = args;
        hi[i] += h;
        lo[i] -= h;
        (quad(hi[0], hi[1], hi[2], hi[3]) - quad(lo[0], lo[1], lo[2], lo[3])) / (2.0 * h)
    }

    fn central_difference(args: [f64; 4], i: usize) -> f64 {
        central_difference_with(args, i, H)
    }

    #[test]
    fn test_reference_gradient() {
        let g = quad_grad(0.5, 0.2, 0.7, 0.5);
        assert_relative_eq!(g.flux, 0.5466215450677099, max_relative = 1e-10);
        let expected = [-0.05428658, -0.03467965, -0.91410893, 0.50463555];
        for (got, want) in g.as_array().iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_matches_finite_differences() {
        let points = [
            [0.4, 0.3, 0.1, 0.05],
            [0.4, 0.3, 0.1, 0.5],
            [0.2, 0.1, 0.3, 0.95],
            [0.3, 0.3, 0.7, 0.9],
            [0.1, 0.4, 1.3, 0.8],
            [0.4, 0.3, 0.1, 1.05],
            [0.6, 0.1, 0.5, 0.2],
        ];
        for args in points {
            let g = quad_grad(args[0], args[1], args[2], args[3]).as_array();
            for i in 0..4 {
                assert_relative_eq!(
                    g[i],
                    central_difference(args, i),
                    max_relative = 1e-5,
                    epsilon = 1e-8
                );
            }
        }
    }

    #[test]
    fn test_edge_at_center_matches_finite_differences() {
        // The general formulas lose precision right next to d == p, so step wider.
        for &p in &[0.1, 0.3, 0.7, 1.2, 2.0] {
            assert!(matches!(
                occultation(p, p).regime,
                Regime::EdgeAtCenterInner | Regime::EdgeAtCenterOuter
            ));
            let args = [0.4, 0.3, p, p];
            let g = quad_grad(args[0], args[1], args[2], args[3]).as_array();
            for i in 0..4 {
                assert_relative_eq!(
                    g[i],
                    central_difference_with(args, i, 1e-4),
                    max_relative = 1e-5,
                    epsilon = 1e-7
                );
            }
        }
    }

    #[test]
    fn test_touching_limb_matches_finite_differences() {
        // The flux has a (d - d0)^{3/2} term at internal tangency, so central
        // differences converge like sqrt(h); extrapolate that term away.
        let h = 1e-4;
        for &p in &[0.1, 0.3, 0.5, 0.6, 0.8] {
            let d: f64 = 1.0 - p;
            assert!(matches!(
                occultation(p, d).regime,
                Regime::TransitTouchingLimb | Regime::EdgeAtCenterHalf
            ));
            let args = [0.4, 0.3, p, d];
            let g = quad_grad(args[0], args[1], args[2], args[3]).as_array();
            for i in 0..4 {
                let coarse = central_difference_with(args, i, h);
                let fine = central_difference_with(args, i, h / 4.0);
                assert_abs_diff_eq!(g[i], 2.0 * fine - coarse, epsilon = 2e-6);
            }
        }
    }

    #[test]
    fn test_snapped_separation_keeps_direction() {
        // d = 0.9 with p = 0.1 sits on the default curve grid.
        let touching = quad_grad(0.4, 0.3, 0.1, 0.9);
        assert!(touching.d_d > 0.0);
        assert_relative_eq!(touching.d_d, 0.0245691317, max_relative = 1e-6);

        let edge = quad_grad(0.4, 0.3, 0.3, 0.3);
        assert!(edge.d_d > 0.0);
        assert_relative_eq!(edge.d_d, 0.0168411820, max_relative = 1e-6);
    }

    #[test]
    fn test_negative_separation_flips_sign() {
        let pos = quad_grad(0.4, 0.3, 0.2, 0.6);
        let neg = quad_grad(0.4, 0.3, 0.2, -0.6);
        assert_eq!(pos.flux, neg.flux);
        assert_relative_eq!(pos.d_d, -neg.d_d, max_relative = 1e-12);
        assert_relative_eq!(pos.d_p, neg.d_p, max_relative = 1e-12);
    }

    #[test]
    fn test_unocculted_gradient_is_zero() {
        let g = quad_grad(0.4, 0.3, 0.1, 2.0);
        assert_eq!(g.flux, 1.0);
        assert_eq!(g.as_array(), [0.0; 4]);
    }

    #[test]
    fn test_full_occultation_has_no_geometric_gradient() {
        let g = quad_grad(0.4, 0.3, 1.5, 0.1);
        assert_eq!(g.d_p, 0.0);
        assert_eq!(g.d_d, 0.0);
    }
}
