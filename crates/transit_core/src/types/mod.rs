//! Core numeric and error types.
//!
//! This module provides:
//! - `scalar`: The [`Scalar`] trait that lets one algorithm serve `f32`, `f64` and dual numbers
//! - `dual`: Dual number integration with num-dual for automatic differentiation (when `num-dual-mode` feature is enabled)
//! - `error`: Structured error types for elliptic integral and interpolation operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Scalar`] from `scalar`
//! - [`EllipticError`], [`InterpolationError`] from `error`

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;
pub mod scalar;

// Re-export commonly used types at module level
pub use error::{EllipticError, InterpolationError};
pub use scalar::Scalar;
