//! Reference backend: Hastings polynomial approximations for K and E and
//! Bulirsch's recurrence for Π.
//!
//! Used to cross-validate the AGM backend. K and E come from the
//! Abramowitz & Stegun 17.3.34/17.3.36 polynomials, accurate to about `1e-8`
//! relative, and are independent of the AGM recurrences. Π is not: Bulirsch's
//! iteration is the same Gauss transformation as [`agm::third_kind`] with the
//! characteristic negated, so agreement on Π only checks the sign convention.
//! Π itself is pinned against quadrature in the integration tests.
//!
//! [`agm::third_kind`]: super::agm::third_kind
//!
//! Bulirsch's routine takes the characteristic with the opposite sign,
//! `ellpic(n, k) = Π(-n, k)`. [`third_kind`] converts so that both backends
//! share one convention.

use super::agm::complementary_modulus;
use super::config::{EllipticConfig, EllipticEstimate};
use num_traits::{Float, FloatConst};

#[inline]
fn c<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Evaluate `a0 + m(a1 + m(a2 + m(a3 + m a4)))`.
#[inline]
fn horner<T: Float>(m: T, coefficients: [f64; 5]) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &a| acc * m + c(a))
}

/// K(k) by Hastings' approximation.
pub fn first_kind<T: Float + FloatConst>(k: T) -> T {
    let m1 = (T::one() - k * k).max(T::zero());
    let ek1 = horner(
        m1,
        [
            1.38629436112,
            0.09666344259,
            0.03590092383,
            0.03742563713,
            0.01451196212,
        ],
    );
    let ek2 = horner(
        m1,
        [
            0.5,
            0.12498593597,
            0.06880248576,
            0.03328355346,
            0.00441787012,
        ],
    );
    ek1 - ek2 * m1.ln()
}

/// E(k) by Hastings' approximation.
pub fn second_kind<T: Float + FloatConst>(k: T) -> T {
    let m1 = (T::one() - k * k).max(T::zero());
    if m1 == T::zero() {
        return T::one();
    }
    let ee1 = horner(
        m1,
        [
            1.0,
            0.44325141463,
            0.06260601220,
            0.04757383546,
            0.01736506451,
        ],
    );
    let ee2 = m1
        * horner(
            m1,
            [
                0.24998368310,
                0.09200180037,
                0.04069697526,
                0.00526449639,
                0.0,
            ],
        );
    ee1 + ee2 * (T::one() / m1).ln()
}

/// Π(n, k) in the shared convention (see module docs).
pub fn third_kind<T: Float + FloatConst>(n: T, k: T) -> T {
    third_kind_with(n, k, &EllipticConfig::bulirsch()).value
}

/// Π(n, k) with explicit iteration settings and diagnostics.
pub fn third_kind_with<T: Float + FloatConst>(
    n: T,
    k: T,
    config: &EllipticConfig<T>,
) -> EllipticEstimate<T> {
    ellpic(-n, k, config)
}

/// Bulirsch's Π with characteristic convention `1 + n` under the root.
fn ellpic<T: Float + FloatConst>(
    n: T,
    k: T,
    config: &EllipticConfig<T>,
) -> EllipticEstimate<T> {
    let mut kc = complementary_modulus(k);
    if kc == T::zero() {
        return EllipticEstimate::exact(T::infinity());
    }

    let one = T::one();
    let two = one + one;
    let mut p = (n + one).sqrt();
    let mut m0 = one;
    let mut c = one;
    let mut d = one / p;
    let mut e = kc;
    for i in 0..config.max_iterations {
        let f = c;
        c = d / p + c;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::elliptic::agm;
    use approx::assert_relative_eq;

    #[test]
    fn test_hastings_matches_agm() {
        for i in 0..=99 {
            let k = i as f64 / 100.0;
            assert_relative_eq!(first_kind(k), agm::first_kind(k), max_relative = 5e-8);
            assert_relative_eq!(second_kind(k), agm::second_kind(k), max_relative = 5e-8);
        }
    }

    #[test]
    fn test_third_kind_matches_agm() {
        for &n in &[-4.0, -1.0, -0.3, 0.0, 0.4, 0.8] {
            for &k in &[0.0, 0.3, 0.6, 0.9, 0.99] {
                assert_relative_eq!(
                    third_kind(n, k),
                    agm::third_kind(n, k),
                    max_relative = 1e-10
                );
            }
        }
    }

    #[test]
    fn test_sign_convention() {
        let config = EllipticConfig::bulirsch();
        let direct = ellpic(0.5_f64, 0.5, &config).value;
        assert_relative_eq!(direct, agm::third_kind(-0.5_f64, 0.5), max_relative = 1e-10);
        assert_relative_eq!(direct, 1.366473953004597, max_relative = 1e-9);
    }

    #[test]
    fn test_endpoints() {
        assert!(first_kind(1.0_f64).is_infinite());
        assert_eq!(second_kind(1.0_f64), 1.0);
        assert!(third_kind(0.1_f64, 1.0).is_infinite());
    }
}
