//! Complete elliptic integrals of the first, second and third kind.
//!
//! This module provides:
//! - [`ellint_1`], [`ellint_2`], [`ellint_3`]: K(k), E(k), Π(n, k) generic over
//!   [`Scalar`], so the same call serves plain floats and dual numbers
//! - [`EllipticBackend`]: strategy trait with the [`Agm`] (primary) and
//!   [`Bulirsch`] (independent K and E for cross-validation) implementations
//! - [`try_ellint_1`], [`try_ellint_2`], [`try_ellint_3`]: checked variants
//!   that validate the domain and report non-convergence
//!
//! ## Conventions
//!
//! `k` is the modulus (not the parameter `m = k²`) and
//! `Π(n, k) = ∫₀^{π/2} dθ / ((1 - n sin²θ) sqrt(1 - k² sin²θ))`.
//!
//! The unchecked functions trust the caller: they do not validate arguments
//! and return the last iterate if the recurrence does not converge.
//!
//! ## Example
//!
//! ```
//! use transit_core::math::elliptic::{ellint_1, ellint_3, Bulirsch, EllipticBackend};
//!
//! let k = ellint_1(0.5_f64);
//! assert!((k - Bulirsch::first_kind(0.5_f64)).abs() < 1e-7);
//!
//! // Π(0, k) = K(k)
//! assert!((ellint_3(0.0_f64, 0.5) - k).abs() < 1e-12);
//! ```

pub mod agm;
pub mod bulirsch;
mod config;
pub mod grad;

pub use config::{EllipticConfig, EllipticEstimate};

use crate::types::{EllipticError, Scalar};
use num_traits::{Float, FloatConst};

/// Strategy for evaluating the plain (value-only) integrals.
pub trait EllipticBackend {
    /// K(k).
    fn first_kind<T: Float + FloatConst>(k: T) -> T;
    /// E(k).
    fn second_kind<T: Float + FloatConst>(k: T) -> T;
    /// Π(n, k).
    fn third_kind<T: Float + FloatConst>(n: T, k: T) -> T;
}

/// Arithmetic-geometric mean recurrences (tolerance `1e-8`, 200 steps).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Agm;

/// Hastings approximations for K and E, Bulirsch recurrence for Π.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bulirsch;

impl EllipticBackend for Agm {
    #[inline]
    fn first_kind<T: Float + FloatConst>(k: T) -> T {
        agm::first_kind(k)
    }

    #[inline]
    fn second_kind<T: Float + FloatConst>(k: T) -> T {
        agm::second_kind(k)
    }

    #[inline]
    fn third_kind<T: Float + FloatConst>(n: T, k: T) -> T {
        agm::third_kind(n, k)
    }
}

impl EllipticBackend for Bulirsch {
    #[inline]
    fn first_kind<T: Float + FloatConst>(k: T) -> T {
        bulirsch::first_kind(k)
    }

    #[inline]
    fn second_kind<T: Float + FloatConst>(k: T) -> T {
        bulirsch::second_kind(k)
    }

    #[inline]
    fn third_kind<T: Float + FloatConst>(n: T, k: T) -> T {
        bulirsch::third_kind(n, k)
    }
}

/// Complete elliptic integral of the first kind, K(k), for `0 <= k <= 1`.
///
/// `K(1) = +inf`.
#[inline]
pub fn ellint_1<S: Scalar>(k: S) -> S {
    grad::first_kind::<Agm, S>(&k)
}

/// Complete elliptic integral of the second kind, E(k), for `0 <= k <= 1`.
///
/// `E(1) = 1`.
#[inline]
pub fn ellint_2<S: Scalar>(k: S) -> S {
    grad::second_kind::<Agm, S>(&k)
}

/// Complete elliptic integral of the third kind, Π(n, k).
///
/// Documented for `0 <= k <= 1` and `0 <= n < 1`; negative `n` is accepted.
#[inline]
pub fn ellint_3<S: Scalar>(n: S, k: S) -> S {
    grad::third_kind::<Agm, S>(&n, &k)
}

fn check_modulus<T: Float>(k: T) -> Result<(), EllipticError> {
    if k.is_finite() && k >= T::zero() && k <= T::one() {
        Ok(())
    } else {
        Err(EllipticError::domain("k", k.to_f64().unwrap_or(f64::NAN)))
    }
}

fn converged<T>(estimate: EllipticEstimate<T>) -> Result<T, EllipticError> {
    if estimate.converged {
        Ok(estimate.value)
    } else {
        Err(EllipticError::NotConverged {
            iterations: estimate.iterations,
        })
    }
}

/// Checked K(k).
///
/// # Errors
/// - [`EllipticError::DomainError`] if `k` is not finite or outside `[0, 1]`
/// - [`EllipticError::NotConverged`] if the AGM recurrence exhausts its budget
///
/// # Example
/// ```
/// use transit_core::math::elliptic::try_ellint_1;
///
/// assert!(try_ellint_1(0.5_f64).is_ok());
/// assert!(try_ellint_1(1.5_f64).is_err());
/// ```
pub fn try_ellint_1<T: Float + FloatConst>(k: T) -> Result<T, EllipticError> {
    check_modulus(k)?;
    converged(agm::first_kind_with(k, &EllipticConfig::default()))
}

/// Checked E(k). Same error conditions as [`try_ellint_1`].
pub fn try_ellint_2<T: Float + FloatConst>(k: T) -> Result<T, EllipticError> {
    check_modulus(k)?;
    converged(agm::second_kind_with(k, &EllipticConfig::default()))
}

/// Checked Π(n, k).
///
/// # Errors
/// - [`EllipticError::DomainError`] if `k` is outside `[0, 1]` or `n` is not
///   finite or `n >= 1`
/// - [`EllipticError::NotConverged`] if the recurrence exhausts its budget
pub fn try_ellint_3<T: Float + FloatConst>(n: T, k: T) -> Result<T, EllipticError> {
    check_modulus(k)?;
    if !n.is_finite() || n >= T::one() {
        return Err(EllipticError::domain("n", n.to_f64().unwrap_or(f64::NAN)));
    }
    converged(agm::third_kind_with(n, k, &EllipticConfig::default()))
}
