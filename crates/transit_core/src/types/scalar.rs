//! Scalar abstraction shared by plain floats and dual numbers.
//!
//! The flux model and the elliptic integrals are written once against
//! [`Scalar`] and instantiated with `f32`, `f64` or a dual number. The trait
//! separates two concerns that `num_traits::Float` merges:
//!
//! - the *value* of a number, used for every branch decision
//!   ([`Scalar::value`]), and
//! - the propagation of derivatives through elementary functions
//!   ([`Scalar::chain`]).
//!
//! Plain floats carry no derivatives, so their `chain` simply returns the
//! function value and never evaluates the derivative closure. Dual numbers
//! use the provided `chain`, which only needs arithmetic, so a new dual type
//! implements `value` and `from_value` and inherits everything else.
//!
//! ## Clamped functions
//!
//! `sqrt`, `acos` and the clamps treat the derivative as zero at the edge of
//! their domain. The flux model clamps radicands and `acos` arguments to
//! suppress floating-point overshoot; the derivative of the clamp is zero
//! there, not the (infinite) derivative of the unclamped function.

use num_traits::{Float, FloatConst, One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Convert an `f64` literal into the value type `R`.
///
/// # Examples
/// ```
/// use transit_core::types::scalar::real;
///
/// let half: f32 = real(0.5);
/// assert_eq!(half, 0.5_f32);
/// ```
#[inline]
pub fn real<R: Float>(x: f64) -> R {
    R::from(x).unwrap_or_else(R::nan)
}

/// A number the transit model can be evaluated with.
///
/// Implemented for `f32`, `f64` and (with the `num-dual-mode` feature)
/// `num_dual::Dual64` and `num_dual::DualSVec64<N>`.
///
/// # Examples
/// ```
/// use transit_core::types::Scalar;
///
/// fn hypot<S: Scalar>(a: S, b: S) -> S {
///     (a.clone() * a + b.clone() * b).sqrt()
/// }
///
/// assert!((hypot(3.0_f64, 4.0) - 5.0).abs() < 1e-12);
/// ```
pub trait Scalar:
    Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Underlying real type of the value component.
    type Real: Float + FloatConst + Debug;

    /// Value component, used for all comparisons.
    fn value(&self) -> Self::Real;

    /// Lift a real into a scalar with zero derivatives.
    fn from_value(value: Self::Real) -> Self;

    /// Lift an `f64` literal into a scalar with zero derivatives.
    #[inline]
    fn constant(x: f64) -> Self {
        Self::from_value(real(x))
    }

    /// Apply a scalar function with known value `f0` and derivative `df`
    /// at `self.value()`.
    ///
    /// The result has value `f0` and derivatives `self' * df`. The closure is
    /// only evaluated by types that carry derivatives.
    #[inline]
    fn chain<G>(&self, f0: Self::Real, df: G) -> Self
    where
        G: FnOnce() -> Self::Real,
    {
        let offset = self.clone() - Self::from_value(self.value());
        Self::from_value(f0) + offset * Self::from_value(df())
    }

    /// Two-argument form of [`Scalar::chain`]: value `f0`, partial
    /// derivatives `(df/dx, df/dy)`.
    #[inline]
    fn chain2<G>(x: &Self, y: &Self, f0: Self::Real, df: G) -> Self
    where
        G: FnOnce() -> (Self::Real, Self::Real),
    {
        let (dx, dy) = df();
        let offset_x = x.clone() - Self::from_value(x.value());
        let offset_y = y.clone() - Self::from_value(y.value());
        Self::from_value(f0) + offset_x * Self::from_value(dx) + offset_y * Self::from_value(dy)
    }

    /// Square root. The derivative is zero at (and below) the origin.
    #[inline]
    fn sqrt(&self) -> Self {
        let v = self.value();
        let root = v.sqrt();
        self.chain(root, || {
            if v > Self::Real::zero() {
                real::<Self::Real>(0.5) / root
            } else {
                Self::Real::zero()
            }
        })
    }

    /// Arc cosine. The derivative is zero for `|x| >= 1`.
    #[inline]
    fn acos(&self) -> Self {
        let v = self.value();
        self.chain(v.acos(), || {
            let one = Self::Real::one();
            if v.abs() < one {
                -one / (one - v * v).sqrt()
            } else {
                Self::Real::zero()
            }
        })
    }

    /// Absolute value.
    #[inline]
    fn abs(&self) -> Self {
        let v = self.value();
        self.chain(v.abs(), || {
            if v < Self::Real::zero() {
                -Self::Real::one()
            } else {
                Self::Real::one()
            }
        })
    }

    /// `max(self, lower)` with a constant result when the clamp is active.
    #[inline]
    fn max_real(&self, lower: Self::Real) -> Self {
        if self.value() > lower {
            self.clone()
        } else {
            Self::from_value(lower)
        }
    }

    /// `min(self, upper)` with a constant result when the clamp is active.
    #[inline]
    fn min_real(&self, upper: Self::Real) -> Self {
        if self.value() < upper {
            self.clone()
        } else {
            Self::from_value(upper)
        }
    }

    /// Clamp the value into `[lower, upper]`.
    #[inline]
    fn clamp_real(&self, lower: Self::Real, upper: Self::Real) -> Self {
        self.max_real(lower).min_real(upper)
    }
}

macro_rules! impl_scalar_for_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            type Real = $t;

            #[inline]
            fn value(&self) -> $t {
                *self
            }

            #[inline]
            fn from_value(value: $t) -> Self {
                value
            }

            #[inline]
            fn chain<G>(&self, f0: $t, _df: G) -> Self
            where
                G: FnOnce() -> $t,
            {
                f0
            }

            #[inline]
            fn chain2<G>(_x: &Self, _y: &Self, f0: $t, _df: G) -> Self
            where
                G: FnOnce() -> ($t, $t),
            {
                f0
            }

            #[inline]
            fn sqrt(&self) -> Self {
                <$t>::sqrt(*self)
            }

            #[inline]
            fn acos(&self) -> Self {
                <$t>::acos(*self)
            }

            #[inline]
            fn abs(&self) -> Self {
                <$t>::abs(*self)
            }
        }
    )*};
}

impl_scalar_for_float!(f32, f64);
