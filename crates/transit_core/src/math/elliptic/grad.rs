//! Lifting of the elliptic integrals to [`Scalar`] types.
//!
//! The integrals are evaluated once on the value component with a plain
//! backend, then the derivatives are attached through closed-form identities:
//!
//! ```text
//! dK/dk  = (E/(1-k²) - K) / k
//! dE/dk  = (E - K) / k
//! ∂Π/∂n  = [E + (K(k²-n) + Π(n²-k²))/n] / (2(n-1)(k²-n))
//! ∂Π/∂k  = -k (E/(k²-1) + Π) / (k²-n)
//! ```
//!
//! Removable singularities use their limits: `dK/dk = dE/dk = 0` at `k = 0`,
//! `∂Π/∂n = (K-E)/k²` at `n = 0` (`π/4` if also `k = 0`) and `∂Π/∂k = 0` at
//! `k = n = 0`. For plain floats the derivative closures are never run, so
//! the extra K/E evaluations cost nothing.

use super::EllipticBackend;
use crate::types::Scalar;
use num_traits::{Float, FloatConst, One, Zero};

/// K(k) with derivatives.
pub fn first_kind<B: EllipticBackend, S: Scalar>(k: &S) -> S {
    let kv = k.value();
    let big_k = B::first_kind(kv);
    k.chain(big_k, || {
        if kv == S::Real::zero() {
            S::Real::zero()
        } else {
            let e = B::second_kind(kv);
            (e / (S::Real::one() - kv * kv) - big_k) / kv
        }
    })
}

/// E(k) with derivatives.
pub fn second_kind<B: EllipticBackend, S: Scalar>(k: &S) -> S {
    let kv = k.value();
    let e = B::second_kind(kv);
    k.chain(e, || {
        if kv == S::Real::zero() {
            S::Real::zero()
        } else {
            (e - B::first_kind(kv)) / kv
        }
    })
}

/// Π(n, k) with derivatives in both arguments.
pub fn third_kind<B: EllipticBackend, S: Scalar>(n: &S, k: &S) -> S {
    let nv = n.value();
    let kv = k.value();
    let pi = B::third_kind(nv, kv);
    S::chain2(n, k, pi, || third_kind_partials::<B, S::Real>(nv, kv, pi))
}

fn third_kind_partials<B: EllipticBackend, T: Float + FloatConst>(n: T, k: T, pi: T) -> (T, T) {
    let zero = T::zero();
    let one = T::one();
    let half = one / (one + one);
    let big_k = B::first_kind(k);
    let e = B::second_kind(k);
    let k2 = k * k;

    let d_n = if n == zero {
        if k == zero {
            T::FRAC_PI_4()
        } else {
            (big_k - e) / k2
        }
    } else {
        half * (e + (big_k * (k2 - n) + pi * (n * n - k2)) / n) / (n - one) / (k2 - n)
    };

    let d_k = if k == zero && n == zero {
        zero
    } else {
        -k * (e / (k2 - one) + pi) / (k2 - n)
    };

    (d_n, d_k)
}

#[cfg(all(test, feature = "num-dual-mode"))]
mod tests {
    use super::*;
    use crate::math::elliptic::{agm, Agm};
    use crate::types::dual::{gradient, seed, DualNumber};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    const H: f64 = 1e-6;

    fn central<F: Fn(f64) -> f64>(f: F, x: f64) -> f64 {
        (f(x + H) - f(x - H)) / (2.0 * H)
    }

    #[test]
    fn test_first_kind_derivative() {
        for &k in &[0.1, 0.4, 0.7, 0.95] {
            let y = first_kind::<Agm, _>(&DualNumber::new(k, 1.0));
            assert_relative_eq!(y.re, agm::first_kind(k), max_relative = 1e-14);
            assert_relative_eq!(y.eps, central(agm::first_kind, k), max_relative = 1e-5);
        }
    }

    #[test]
    fn test_second_kind_derivative() {
        for &k in &[0.1, 0.4, 0.7, 0.95] {
            let y = second_kind::<Agm, _>(&DualNumber::new(k, 1.0));
            assert_relative_eq!(y.eps, central(agm::second_kind, k), max_relative = 1e-5);
        }
    }

    #[test]
    fn test_third_kind_partials() {
        for &(n, k) in &[(-2.0, 0.5), (-0.3, 0.2), (0.3, 0.6), (0.5, 0.9)] {
            let pi = third_kind::<Agm, _>(&seed::<2>(n, 0), &seed::<2>(k, 1));
            let g = gradient(&pi);
            let d_n = central(|x| agm::third_kind(x, k), n);
            let d_k = central(|x| agm::third_kind(n, x), k);
            assert_relative_eq!(g[0], d_n, max_relative = 1e-5);
            assert_relative_eq!(g[1], d_k, max_relative = 1e-5);
        }
    }

    #[test]
    fn test_removable_singularities() {
        let k0 = DualNumber::new(0.0, 1.0);
        assert_eq!(first_kind::<Agm, _>(&k0).eps, 0.0);
        assert_eq!(second_kind::<Agm, _>(&k0).eps, 0.0);

        let pi = third_kind::<Agm, _>(&seed::<2>(0.0, 0), &seed::<2>(0.0, 1));
        let g = gradient(&pi);
        assert_relative_eq!(g[0], FRAC_PI_4, epsilon = 1e-12);
        assert_eq!(g[1], 0.0);

        let k = 0.6;
        let pi = third_kind::<Agm, _>(&seed::<2>(0.0, 0), &seed::<2>(k, 1));
        let g = gradient(&pi);
        let expected = (agm::first_kind(k) - agm::second_kind(k)) / (k * k);
        assert_relative_eq!(g[0], expected, max_relative = 1e-10);
        assert_relative_eq!(g[0], central(|x| agm::third_kind(x, k), 0.0), max_relative = 1e-5);
    }

    #[test]
    fn test_plain_float_passthrough() {
        assert_eq!(first_kind::<Agm, f64>(&0.5), agm::first_kind(0.5));
        assert_eq!(third_kind::<Agm, f64>(&-0.5, &0.5), agm::third_kind(-0.5, 0.5));
    }
}
