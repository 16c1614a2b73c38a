//! Arithmetic-geometric mean evaluation of the complete elliptic integrals.
//!
//! Each integral runs its own AGM-type recurrence on the complementary
//! modulus `kc = sqrt(1 - k²)`. Iteration stops when the relative change
//! drops below the configured tolerance; if the budget is exhausted the last
//! iterate is returned.
//!
//! At `k = 1` (`kc == 0`) the recurrences degenerate, so the endpoints are
//! returned directly: `K = Π = +inf`, `E = 1`.

use super::config::{EllipticConfig, EllipticEstimate};
use num_traits::{Float, FloatConst};

#[inline]
fn two<T: Float>() -> T {
    T::one() + T::one()
}

/// `sqrt(1 - k²)` with the radicand clamped at zero.
#[inline]
pub(crate) fn complementary_modulus<T: Float>(k: T) -> T {
    (T::one() - k * k).max(T::zero()).sqrt()
}

/// Complete elliptic integral of the first kind K(k).
///
/// # Example
/// ```
/// use transit_core::math::elliptic::agm;
///
/// let k = agm::first_kind(0.5_f64);
/// assert!((k - 1.685750354812596).abs() < 1e-9);
/// ```
pub fn first_kind<T: Float + FloatConst>(k: T) -> T {
    first_kind_with(k, &EllipticConfig::default()).value
}

/// K(k) with explicit iteration settings and diagnostics.
pub fn first_kind_with<T: Float + FloatConst>(
    k: T,
    config: &EllipticConfig<T>,
) -> EllipticEstimate<T> {
    let mut kc = complementary_modulus(k);
    if kc == T::zero() {
        return EllipticEstimate::exact(T::infinity());
    }

    let half = T::one() / two();
    let mut m = T::one();
    for i in 0..config.max_iterations {
        let h = m;
        m = m + kc;
        if (h - kc).abs() / h <= config.tolerance {
            return EllipticEstimate {
                value: T::PI() / m,
                iterations: i + 1,
                converged: true,
            };
        }
        kc = (h * kc).sqrt();
        m = m * half;
    }

    EllipticEstimate {
        value: T::PI() / m,
        iterations: config.max_iterations,
        converged: false,
    }
}

/// Complete elliptic integral of the second kind E(k).
///
/// # Example
/// ```
/// use transit_core::math::elliptic::agm;
///
/// let e = agm::second_kind(0.5_f64);
/// assert!((e - 1.4674622093394274).abs() < 1e-9);
/// assert_eq!(agm::second_kind(1.0_f64), 1.0);
/// ```
pub fn second_kind<T: Float + FloatConst>(k: T) -> T {
    second_kind_with(k, &EllipticConfig::default()).value
}

/// E(k) with explicit iteration settings and diagnostics.
pub fn second_kind_with<T: Float + FloatConst>(
    k: T,
    config: &EllipticConfig<T>,
) -> EllipticEstimate<T> {
    let mut b = (T::one() - k * k).max(T::zero());
    let mut kc = b.sqrt();
    if kc == T::zero() {
        return EllipticEstimate::exact(T::one());
    }

    let two = two::<T>();
    let mut m = T::one();
    let mut c = T::one();
    let mut a = b + T::one();
    for i in 0..config.max_iterations {
        b = two * (c * kc + b);
        c = a;
        let m0 = m;
        m = m + kc;
        a = a + b / m;
        if (m0 - kc).abs() / m0 <= config.tolerance {
            return EllipticEstimate {
                value: T::FRAC_PI_4() * a / m,
                iterations: i + 1,
                converged: true,
            };
        }
        kc = two * (kc * m0).sqrt();
    }

    EllipticEstimate {
        value: T::FRAC_PI_4() * a / m,
        iterations: config.max_iterations,
        converged: false,
    }
}

/// Complete elliptic integral of the third kind Π(n, k).
///
/// Convention: `Π(n, k) = ∫ dθ / ((1 - n sin²θ) sqrt(1 - k² sin²θ))`.
/// Documented for `0 <= n < 1`; negative `n` is accepted.
///
/// # Example
/// ```
/// use transit_core::math::elliptic::agm;
///
/// let pi = agm::third_kind(-0.5_f64, 0.5);
/// assert!((pi - 1.366473953004597).abs() < 1e-9);
/// ```
pub fn third_kind<T: Float + FloatConst>(n: T, k: T) -> T {
    third_kind_with(n, k, &EllipticConfig::default()).value
}

/// Π(n, k) with explicit iteration settings and diagnostics.
pub fn third_kind_with<T: Float + FloatConst>(
    n: T,
    k: T,
    config: &EllipticConfig<T>,
) -> EllipticEstimate<T> {
    let mut kc = complementary_modulus(k);
    if kc == T::zero() {
        return EllipticEstimate::exact(T::infinity());
    }

    let one = T::one();
    let two = two::<T>();
    let mut p = (one - n).sqrt();
    let mut m0 = one;
    let mut c = one;
    let mut d = one / p;
    let mut e = kc;
    for i in 0..config.max_iterations {
        let f = c;
        c = c + d / p;
        let g = e / p;
        d = two * (f * g + d);
        p = g + p;
        let previous = m0;
        m0 = kc + m0;
        if (one - kc / previous).abs() <= config.tolerance {
            return EllipticEstimate {
                value: T::FRAC_PI_2() * (c * m0 + d) / (m0 * (m0 + p)),
                iterations: i + 1,
                converged: true,
            };
        }
        kc = two * e.sqrt();
        e = kc * m0;
    }

    EllipticEstimate {
        value: T::FRAC_PI_2() * (c * m0 + d) / (m0 * (m0 + p)),
        iterations: config.max_iterations,
        converged: false,
    }
}
