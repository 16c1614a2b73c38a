//! Dual number integration for automatic differentiation.
//!
//! Implements [`Scalar`] for num-dual's first-order dual numbers and
//! provides helpers to seed and read multi-channel gradients.
//!
//! ## Usage
//!
//! ```
//! use transit_core::types::dual::{gradient, seed, DualNumber};
//! use transit_core::types::Scalar;
//!
//! // d/dx sqrt(x) at x = 4
//! let x = DualNumber::new(4.0, 1.0);
//! let y = x.sqrt();
//! assert!((y.re - 2.0).abs() < 1e-15);
//! assert!((y.eps - 0.25).abs() < 1e-15);
//!
//! // Gradient of a*b with respect to (a, b)
//! let a = seed::<2>(3.0, 0);
//! let b = seed::<2>(5.0, 1);
//! let g = gradient(&(a * b));
//! assert_eq!(g, [5.0, 3.0]);
//! ```

use super::scalar::Scalar;
use nalgebra::{Const, SVector, U1};
use num_dual::{Derivative, Dual64, DualSVec64};

/// Type alias for num-dual's Dual64 (f64-based, single derivative direction).
///
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative)
pub type DualNumber = Dual64;

/// Dual number carrying `N` derivative channels.
pub type GradientDual<const N: usize> = DualSVec64<N>;

impl Scalar for Dual64 {
    type Real = f64;

    #[inline]
    fn value(&self) -> f64 {
        self.re
    }

    #[inline]
    fn from_value(value: f64) -> Self {
        Dual64::new(value, 0.0)
    }

    #[inline]
    fn chain<G>(&self, f0: f64, df: G) -> Self
    where
        G: FnOnce() -> f64,
    {
        if self.eps == 0.0 {
            Dual64::new(f0, 0.0)
        } else {
            Dual64::new(f0, self.eps * df())
        }
    }

    #[inline]
    fn chain2<G>(x: &Self, y: &Self, f0: f64, df: G) -> Self
    where
        G: FnOnce() -> (f64, f64),
    {
        if x.eps == 0.0 && y.eps == 0.0 {
            return Dual64::new(f0, 0.0);
        }
        let (dx, dy) = df();
        let mut eps = 0.0;
        if x.eps != 0.0 {
            eps += x.eps * dx;
        }
        if y.eps != 0.0 {
            eps += y.eps * dy;
        }
        Dual64::new(f0, eps)
    }
}

impl<const N: usize> Scalar for DualSVec64<N> {
    type Real = f64;

    #[inline]
    fn value(&self) -> f64 {
        self.re
    }

    #[inline]
    fn from_value(value: f64) -> Self {
        DualSVec64::new(value, Derivative::none())
    }
}

/// Create a variable with value `value` whose derivative is the unit vector
/// along `channel`.
///
/// # Panics
/// Panics if `channel >= N`.
pub fn seed<const N: usize>(value: f64, channel: usize) -> GradientDual<N> {
    let mut direction = SVector::<f64, N>::zeros();
    direction[channel] = 1.0;
    DualSVec64::new(value, Derivative::some(direction))
}

/// Read the `N` derivative channels of a dual number.
///
/// A number that never touched a seeded variable has all-zero gradient.
pub fn gradient<const N: usize>(x: &GradientDual<N>) -> [f64; N] {
    let derivative = x.eps.clone().unwrap_generic(Const::<N>, U1);
    let mut out = [0.0; N];
    for (slot, d) in out.iter_mut().zip(derivative.iter()) {
        *slot = *d;
    }
    out
}
