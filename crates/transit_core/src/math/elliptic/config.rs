//! Iteration settings and diagnostics for the elliptic integral recurrences.

use num_traits::Float;

/// Configuration for the iterative elliptic integral algorithms.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use transit_core::math::elliptic::EllipticConfig;
///
/// // Default AGM settings
/// let config: EllipticConfig<f64> = EllipticConfig::default();
/// assert_eq!(config.tolerance, 1e-8);
/// assert_eq!(config.max_iterations, 200);
///
/// // Custom configuration
/// let custom = EllipticConfig {
///     tolerance: 1e-12,
///     max_iterations: 400,
/// };
/// assert!(custom.tolerance < config.tolerance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipticConfig<T: Float> {
    /// Relative convergence tolerance of the recurrence.
    pub tolerance: T,

    /// Maximum number of iterations. On exhaustion the last iterate is
    /// reported with `converged == false`.
    pub max_iterations: usize,
}

impl<T: Float> Default for EllipticConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-8 (or the machine epsilon of `T` if larger)
    /// - `max_iterations`: 200
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: 200,
        }
    }
}

impl<T: Float> EllipticConfig<T> {
    /// Settings of the Bulirsch Π recurrence: same tolerance, 10000
    /// iterations.
    pub fn bulirsch() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: 10_000,
        }
    }
}

fn default_tolerance<T: Float>() -> T {
    T::from(1e-8).unwrap_or_else(T::epsilon).max(T::epsilon())
}

/// Result of an elliptic integral evaluation with convergence diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipticEstimate<T> {
    /// The integral value (last iterate if not converged).
    pub value: T,
    /// Number of iterations performed; 0 for closed-form endpoints.
    pub iterations: usize,
    /// Whether the tolerance was reached.
    pub converged: bool,
}

impl<T> EllipticEstimate<T> {
    /// An estimate obtained without iterating (endpoint or closed form).
    pub fn exact(value: T) -> Self {
        Self {
            value,
            iterations: 0,
            converged: true,
        }
    }
}
