//! Mandel–Agol occultation of a quadratically limb-darkened star.
//!
//! The flux is assembled from three partial integrals of the occulted area:
//! `lambda_e` (uniform source), `lambda_d` (linear term) and `eta_d`
//! (quadratic term). Which closed form applies depends on the geometry,
//! see [`Regime`].
//!
//! All branches compare values only, so the same code runs on plain floats
//! and on dual numbers.
//!
//! The closed forms for `d == p` and `d == 1 - p` are written with `d`
//! already substituted, so they carry no derivative in `d`. Their `lambda_d`
//! is evaluated on the value component and its partials in `p` and `d` are
//! attached from the boundary integral of the occulter's rim (see
//! `lambda_d_partials`).

use super::regime::Regime;
use num_traits::{Float, FloatConst, One, Zero};
use std::f64::consts::PI;
use transit_core::math::elliptic::{grad, Agm, EllipticBackend};
use transit_core::types::scalar::real;
use transit_core::types::Scalar;

const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Classified geometry with its partial occultation integrals.
///
/// `lambda_d` includes the `2/3` correction applied when the occulter covers
/// the stellar centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Occultation<S> {
    /// Geometric configuration.
    pub regime: Regime,
    /// Occulted fraction of a uniform source.
    pub lambda_e: S,
    /// Linear limb-darkening integral.
    pub lambda_d: S,
    /// Quadratic limb-darkening integral.
    pub eta_d: S,
}

impl<S: Scalar> Occultation<S> {
    fn new(regime: Regime, lambda_e: S, lambda_d: S, eta_d: S) -> Self {
        Self {
            regime,
            lambda_e,
            lambda_d,
            eta_d,
        }
    }

    fn unocculted() -> Self {
        Self::new(
            Regime::Unocculted,
            S::constant(0.0),
            S::constant(0.0),
            S::constant(0.0),
        )
    }

    /// Normalised flux for limb-darkening coefficients `(c1, c2)`:
    ///
    /// ```text
    /// 1 - [(1 - c1 - 2c2) lambda_e + (c1 + 2c2) lambda_d + c2 eta_d] / omega
    /// omega = 1 - c1/3 - c2/6
    /// ```
    ///
    /// Unocculted configurations return exactly 1. `omega == 0` yields a
    /// non-finite flux.
    pub fn flux(&self, c1: &S, c2: &S) -> S {
        if self.regime == Regime::Unocculted {
            return S::constant(1.0);
        }

        let one = S::constant(1.0);
        let two_c2 = S::constant(2.0) * c2.clone();
        let omega = one.clone() - c1.clone() / S::constant(3.0) - c2.clone() / S::constant(6.0);
        let uniform = one.clone() - c1.clone() - two_c2.clone();
        let linear = c1.clone() + two_c2;
        one - (uniform * self.lambda_e.clone()
            + linear * self.lambda_d.clone()
            + c2.clone() * self.eta_d.clone())
            / omega
    }
}

/// Relative flux of a quadratically limb-darkened star occulted by a disk.
///
/// # Arguments
///
/// * `c1`, `c2` - Quadratic limb-darkening coefficients
/// * `p` - Occulter-to-star radius ratio, `p >= 0`
/// * `d` - Centre separation in stellar radii (sign ignored)
///
/// # Examples
/// ```
/// use transit_models::limb_darkening::quad;
///
/// assert_eq!(quad(0.4, 0.3, 0.1, 1.2), 1.0);
///
/// let depth = 1.0 - quad(0.4, 0.3, 0.1, 0.0);
/// assert!(depth > 0.01 && depth < 0.02);
/// ```
#[inline]
pub fn quad<S: Scalar>(c1: S, c2: S, p: S, d: S) -> S {
    quad_with::<Agm, S>(c1, c2, p, d)
}

/// [`quad`] with an explicit elliptic integral backend.
#[inline]
pub fn quad_with<B: EllipticBackend, S: Scalar>(c1: S, c2: S, p: S, d: S) -> S {
    occultation_with::<B, S>(&p, &d).flux(&c1, &c2)
}

/// Classify the geometry and evaluate the partial integrals.
///
/// # Examples
/// ```
/// use transit_models::limb_darkening::{occultation, Regime};
///
/// let occ = occultation(1.5_f64, 0.2);
/// assert_eq!(occ.regime, Regime::FullyOcculted);
/// assert_eq!(occ.lambda_e, 1.0);
/// ```
#[inline]
pub fn occultation<S: Scalar>(p: S, d: S) -> Occultation<S> {
    occultation_with::<Agm, S>(&p, &d)
}

/// [`occultation`] with an explicit elliptic integral backend.
pub fn occultation_with<B: EllipticBackend, S: Scalar>(p: &S, d: &S) -> Occultation<S> {
    let c = |x: f64| S::constant(x);
    let r = |x: f64| real::<S::Real>(x);
    let zero = S::Real::zero();
    let one = S::Real::one();
    let half = real::<S::Real>(0.5);
    let pi = S::from_value(S::Real::PI());

    let p = p.clone();
    let pv = p.value();
    let d = normalize_separation(d, pv);
    let dv = d.value();

    if dv >= one + pv {
        return Occultation::unocculted();
    }

    if pv >= one && dv <= pv - one {
        return Occultation::new(Regime::FullyOcculted, c(1.0), c(TWO_THIRDS), c(0.5));
    }

    let p2 = p.clone() * p.clone();
    let d2 = d.clone() * d.clone();
    let x1 = square(p.clone() - d.clone());
    let x2 = square(p.clone() + d.clone());
    let x3 = p2.clone() - d2.clone();

    let mut lambda_e = c(0.0);
    let mut kap0 = c(0.0);
    let mut kap1 = c(0.0);
    if dv >= (one - pv).abs() && dv <= one + pv {
        kap1 = ((c(1.0) - p2.clone() + d2.clone()) / c(2.0) / d.clone())
            .clamp_real(-one, one)
            .acos();
        kap0 = ((p2.clone() + d2.clone() - c(1.0)) / c(2.0) / p.clone() / d.clone())
            .clamp_real(-one, one)
            .acos();
        let chord = (c(4.0) * d2.clone() - square(c(1.0) + d2.clone() - p2.clone()))
            .max_real(zero)
            .sqrt();
        lambda_e = (p2.clone() * kap0.clone() + kap1.clone() - c(0.5) * chord) / pi.clone();
    }

    let p2v = pv * pv;
    let lambda_d_at = |value: S::Real| {
        S::chain2(&p, &d, value, || lambda_d_partials::<B, S::Real>(pv, dv))
    };

    if dv == pv {
        let inside_eta = || p2.clone() / c(2.0) * (p2.clone() + c(2.0) * d2.clone());

        if dv < half {
            let q = r(2.0) * pv;
            let value = r(1.0 / 3.0)
                + r(2.0 / 9.0 / PI)
                    * (r(4.0) * (r(2.0) * p2v - one) * B::second_kind(q)
                        + (one - r(4.0) * p2v) * B::first_kind(q));
            return Occultation::new(
                Regime::EdgeAtCenterInner,
                p2.clone(),
                lambda_d_at(value),
                inside_eta(),
            );
        }

        if dv > half {
            let q = half / pv;
            let value = r(1.0 / 3.0)
                + r(16.0 / 9.0 / PI) * pv * (r(2.0) * p2v - one) * B::second_kind(q)
                - (r(32.0) * p2v * p2v - r(20.0) * p2v + r(3.0)) / (r(9.0 * PI) * pv)
                    * B::first_kind(q);
            let eta_d = limb_eta(&p2, &d2, &x1, &x2, &kap0, &kap1);
            return Occultation::new(
                Regime::EdgeAtCenterOuter,
                lambda_e,
                lambda_d_at(value),
                eta_d,
            );
        }

        // p = d = 1/2 also touches the limb from inside.
        return Occultation::new(
            Regime::EdgeAtCenterHalf,
            p2.clone(),
            lambda_d_at(r(1.0 / 3.0 - 4.0 / 9.0 / PI)),
            inside_eta(),
        );
    }

    let crosses_limb = (dv > half + (pv - half).abs() && dv < one + pv)
        || (pv > half && dv > (one - pv).abs() && dv < pv);
    if crosses_limb {
        let q = ((c(1.0) - x1.clone()) / c(4.0) / d.clone() / p.clone())
            .max_real(zero)
            .sqrt();
        let kk = grad::first_kind::<B, S>(&q);
        let ek = grad::second_kind::<B, S>(&q);
        let n = c(1.0) / x1.clone() - c(1.0);
        let pk = grad::third_kind::<B, S>(&(-n), &q);

        let mut lambda_d = c(1.0 / 9.0) / pi.clone() / (p.clone() * d.clone()).sqrt()
            * ((((c(1.0) - x2.clone()) * (c(2.0) * x2.clone() + x1.clone() - c(3.0)))
                - c(3.0) * x3.clone() * (x2.clone() - c(2.0)))
                * kk
                + c(4.0) * p.clone() * d.clone() * (d2.clone() + c(7.0) * p2.clone() - c(4.0)) * ek
                - c(3.0) * x3.clone() / x1.clone() * pk);
        if dv < pv {
            lambda_d = lambda_d + c(TWO_THIRDS);
        }
        let eta_d = limb_eta(&p2, &d2, &x1, &x2, &kap0, &kap1);
        return Occultation::new(Regime::LimbCrossing, lambda_e, lambda_d, eta_d);
    }

    if pv <= one && dv <= one - pv {
        let eta_d = p2.clone() / c(2.0) * (p2.clone() + c(2.0) * d2.clone());

        let (regime, mut lambda_d) = if (pv + dv - one).abs() <= S::Real::epsilon() {
            // Elliptic modulus is exactly 1 here; use the closed form.
            let chord_angle = (one - r(2.0) * pv).max(-one).min(one).acos();
            let mut value = r(2.0 / 3.0 / PI) * chord_angle
                - r(4.0 / 9.0 / PI)
                    * (pv * (one - pv)).max(zero).sqrt()
                    * (r(3.0) + r(2.0) * pv - r(8.0) * p2v);
            if pv > half {
                value = value - r(TWO_THIRDS);
            }
            (Regime::TransitTouchingLimb, lambda_d_at(value))
        } else {
            let q = ((x2.clone() - x1.clone()) / (c(1.0) - x1.clone()))
                .max_real(zero)
                .sqrt();
            let kk = grad::first_kind::<B, S>(&q);
            let ek = grad::second_kind::<B, S>(&q);
            let n = x2.clone() / x1.clone() - c(1.0);
            let pk = grad::third_kind::<B, S>(&(-n), &q);
            let lambda_d = c(2.0 / 9.0) / pi.clone() / (c(1.0) - x1.clone()).sqrt()
                * ((c(1.0) - c(5.0) * d2.clone() + p2.clone() + x3.clone() * x3.clone()) * kk
                    + (c(1.0) - x1.clone()) * (d2.clone() + c(7.0) * p2.clone() - c(4.0)) * ek
                    - c(3.0) * x3.clone() / x1.clone() * pk);
            (Regime::Transit, lambda_d)
        };
        if dv < pv {
            lambda_d = lambda_d + c(TWO_THIRDS);
        }
        return Occultation::new(regime, p2, lambda_d, eta_d);
    }

    Occultation::new(Regime::Unclassified, lambda_e, c(0.0), c(0.0))
}

/// `d := |d|`, then snap onto the regime boundaries `p`, `p - 1`, `1 - p`
/// and `0` when within machine epsilon. Snapping replaces the value only.
fn normalize_separation<S: Scalar>(d: &S, p: S::Real) -> S {
    let one = S::Real::one();
    let eps = S::Real::epsilon();

    let mut d = d.abs();
    if (p - d.value()).abs() < eps {
        d = with_value(&d, p);
    }
    if (p - one - d.value()).abs() < eps {
        d = with_value(&d, p - one);
    }
    if (one - p - d.value()).abs() < eps {
        d = with_value(&d, one - p);
    }
    if d.value() < eps {
        d = S::from_value(S::Real::zero());
    }
    d
}

#[inline]
fn with_value<S: Scalar>(x: &S, value: S::Real) -> S {
    x.chain(value, || S::Real::one())
}

#[inline]
fn square<S: Scalar>(x: S) -> S {
    x.clone() * x
}

/// Partial derivatives `(∂/∂p, ∂/∂d)` of `lambda_d` at a configuration
/// with `p, d > 0` that overlaps the stellar disk.
///
/// Moving the occulter changes `π·lambda_d = ∫ μ dA` only along its rim:
///
/// ```text
/// ∂/∂p = p/π ∮ μ dφ      ∂/∂d = p/π ∮ μ cos φ dφ
/// μ = sqrt(1 - r²),  r² = d² + p² + 2dp cos φ
/// ```
///
/// over the part of the rim inside the star. With `m = (1 - (d-p)²)/(4dp)`
/// both integrals reduce to complete integrals of modulus `sqrt(m)` when the
/// occulter crosses the limb (`m < 1`) and `1/sqrt(m)` otherwise.
fn lambda_d_partials<B: EllipticBackend, T: Float + FloatConst>(p: T, d: T) -> (T, T) {
    let zero = T::zero();
    let one = T::one();
    if p <= zero || d <= zero {
        return (zero, zero);
    }
    let two = one + one;
    let three = two + one;
    let m = (one - (d - p) * (d - p)) / (real::<T>(4.0) * d * p);
    // (1 - k²) K(k) vanishes as k -> 1 although K diverges.
    let damped_k = |k: T, kc2: T| {
        if k < one && kc2 > zero {
            kc2 * B::first_kind(k)
        } else {
            zero
        }
    };

    let (rim, rim_cos) = if m < one {
        let k = m.sqrt();
        let kc2_k = damped_k(k, one - m);
        let e = B::second_kind(k);
        let rim = e - kc2_k;
        let weighted = ((two - m) * e - two * kc2_k) / three;
        (rim, two * weighted - rim)
    } else {
        let inv = one / m;
        let modulus = inv.sqrt();
        let kc2_k = damped_k(modulus, one - inv);
        let e = B::second_kind(modulus);
        let k = m.sqrt();
        (k * e, k * (two * kc2_k - (two - inv) * e) / (three * inv))
    };

    let scale = real::<T>(8.0) * (d * p).sqrt() * p / T::PI();
    (scale * rim, scale * rim_cos)
}

/// `eta_d` for configurations where the occulter crosses the limb.
fn limb_eta<S: Scalar>(p2: &S, d2: &S, x1: &S, x2: &S, kap0: &S, kap1: &S) -> S {
    let c = |x: f64| S::constant(x);
    let radicand = ((c(1.0) - x1.clone()) * (x2.clone() - c(1.0))).max_real(S::Real::zero());
    c(0.5 / PI)
        * (kap1.clone() + p2.clone() * (p2.clone() + c(2.0) * d2.clone()) * kap0.clone()
            - (c(1.0) + c(5.0) * p2.clone() + d2.clone()) / c(4.0) * radicand.sqrt())
}
