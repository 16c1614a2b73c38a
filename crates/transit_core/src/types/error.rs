//! Error types for structured error handling.
//!
//! This module provides:
//! - `EllipticError`: Errors from the checked elliptic integral entry points
//! - `InterpolationError`: Errors from grid interpolation operations
//!
//! The unchecked numeric paths (`ellint_*`, the flux model) never return
//! errors; these types are only produced by the validating wrappers.

use thiserror::Error;

/// Elliptic integral errors.
///
/// # Variants
/// - `DomainError`: An argument lies outside the documented domain
/// - `NotConverged`: The iteration budget was exhausted
///
/// # Examples
/// ```
/// use transit_core::types::EllipticError;
///
/// let err = EllipticError::NotConverged { iterations: 200 };
/// assert_eq!(format!("{}", err), "Elliptic integral did not converge after 200 iterations");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EllipticError {
    /// Argument outside the documented domain (`k` in `[0, 1]`, `n < 1`).
    #[error("Argument {parameter} = {value} outside valid domain")]
    DomainError {
        /// Name of the offending argument
        parameter: String,
        /// The value that was rejected
        value: f64,
    },

    /// Iteration budget exhausted before reaching the tolerance.
    #[error("Elliptic integral did not converge after {iterations} iterations")]
    NotConverged {
        /// Number of iterations performed
        iterations: usize,
    },
}

impl EllipticError {
    /// Shorthand for a [`EllipticError::DomainError`].
    pub fn domain(parameter: &str, value: f64) -> Self {
        EllipticError::DomainError {
            parameter: parameter.to_string(),
            value,
        }
    }
}

/// Interpolation errors.
///
/// # Variants
/// - `InsufficientData`: Fewer grid points than the method needs
/// - `NonMonotonicData`: Grid abscissae not strictly increasing
/// - `ShapeMismatch`: Value array length inconsistent with the grid
///
/// # Examples
/// ```
/// use transit_core::types::InterpolationError;
///
/// let err = InterpolationError::NonMonotonicData { index: 3 };
/// assert_eq!(format!("{}", err), "Data is not monotonic at index 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Data is not monotonic when monotonicity is required.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Array length does not match the grid layout.
    #[error("Shape mismatch: expected {expected} values, got {got}")]
    ShapeMismatch {
        /// Expected number of values
        expected: usize,
        /// Number of values provided
        got: usize,
    },
}
