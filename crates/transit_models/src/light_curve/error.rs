//! Errors raised by the light-curve adapters.

use thiserror::Error;
use transit_core::types::InterpolationError;

/// Light-curve adapter errors.
///
/// # Examples
/// ```
/// use transit_models::light_curve::LightCurveError;
///
/// let err = LightCurveError::ShapeMismatch { argument: "z", expected: 4, got: 3 };
/// assert_eq!(format!("{}", err), "Argument z: expected 4 elements, got 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LightCurveError {
    /// An input slice has the wrong length for the batch layout.
    #[error("Argument {argument}: expected {expected} elements, got {got}")]
    ShapeMismatch {
        /// Name of the offending argument
        argument: &'static str,
        /// Required length
        expected: usize,
        /// Provided length
        got: usize,
    },

    /// Grid validation or resampling failed.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}

/// Ensure `values` has exactly `expected` elements.
pub(crate) fn check_len<T>(
    argument: &'static str,
    values: &[T],
    expected: usize,
) -> Result<(), LightCurveError> {
    if values.len() == expected {
        Ok(())
    } else {
        tracing::warn!(argument, expected, got = values.len(), "shape mismatch");
        Err(LightCurveError::ShapeMismatch {
            argument,
            expected,
            got: values.len(),
        })
    }
}
