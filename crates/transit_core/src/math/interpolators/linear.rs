//! Piecewise linear interpolation on a shared, strictly increasing grid.

use crate::types::{InterpolationError, Scalar};
use num_traits::Float;

/// Piecewise linear interpolator over a borrowed abscissa grid.
///
/// One grid serves many ordinate rows: a light curve sampled on a common
/// time grid is resampled row by row, each row at its own query point.
/// Queries outside the grid return the end value with zero slope.
///
/// # Type Parameters
///
/// * `T` - Floating-point type of the grid (e.g., `f64`)
///
/// # Example
///
/// ```
/// use transit_core::math::interpolators::GridInterpolator;
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let grid = GridInterpolator::new(&xs, true).unwrap();
/// assert_eq!(grid.domain(), (0.0, 3.0));
///
/// let (z, dz) = grid.evaluate(&1.5_f64, &[0.0_f64, 1.0, 4.0, 9.0]).unwrap();
/// assert!((z - 2.5).abs() < 1e-12);
/// assert!((dz - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridInterpolator<'a, T: Float> {
    xs: &'a [T],
}

impl<'a, T: Float> GridInterpolator<'a, T> {
    /// Wrap a grid of abscissae.
    ///
    /// # Arguments
    ///
    /// * `xs` - Grid points, strictly increasing
    /// * `check_sorted` - Verify strict monotonicity (skip for trusted grids)
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Empty grid
    /// * `Err(InterpolationError::NonMonotonicData)` - `xs[i] <= xs[i-1]`
    ///   for some `i` (only with `check_sorted`)
    pub fn new(xs: &'a [T], check_sorted: bool) -> Result<Self, InterpolationError> {
        if xs.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }

        if check_sorted {
            if let Some(index) = (1..xs.len()).find(|&i| !(xs[i] > xs[i - 1])) {
                return Err(InterpolationError::NonMonotonicData { index });
            }
        }

        Ok(Self { xs })
    }

    /// Returns the grid points.
    #[inline]
    pub fn xs(&self) -> &'a [T] {
        self.xs
    }

    /// Returns the number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// First and last grid point.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Index of the right end of the interval containing `t`, for
    /// `xs[0] < t < xs[n-1]`.
    #[inline]
    fn bracket(&self, t: T) -> usize {
        let n = self.xs.len();
        self.xs.partition_point(|&x| x < t).clamp(1, n - 1)
    }

    /// Interpolate one ordinate row at `t`.
    ///
    /// Returns `(z, dz)`: the interpolated value and the slope of the active
    /// segment (zero outside the grid).
    ///
    /// # Errors
    ///
    /// `InterpolationError::ShapeMismatch` if `row.len()` differs from the
    /// grid length.
    pub fn evaluate<S>(&self, t: &S, row: &[S]) -> Result<(S, S), InterpolationError>
    where
        S: Scalar<Real = T>,
    {
        let n = self.xs.len();
        if row.len() != n {
            return Err(InterpolationError::ShapeMismatch {
                expected: n,
                got: row.len(),
            });
        }

        let tv = t.value();
        let (x_min, x_max) = self.domain();
        if n == 1 || tv <= x_min {
            return Ok((row[0].clone(), S::from_value(T::zero())));
        }
        if tv >= x_max {
            return Ok((row[n - 1].clone(), S::from_value(T::zero())));
        }

        let right = self.bracket(tv);
        let left = right - 1;
        let dz = (row[right].clone() - row[left].clone())
            / S::from_value(self.xs[right] - self.xs[left]);
        let z = (t.clone() - S::from_value(self.xs[left])) * dz.clone() + row[left].clone();
        Ok((z, dz))
    }

    /// Resample a row-major `M×N` matrix: row `m` is interpolated at `t[m]`.
    ///
    /// # Errors
    ///
    /// `InterpolationError::ShapeMismatch` if `y.len() != t.len() * N`.
    pub fn resample<S>(&self, t: &[S], y: &[S]) -> Result<(Vec<S>, Vec<S>), InterpolationError>
    where
        S: Scalar<Real = T>,
    {
        let n = self.xs.len();
        if y.len() != t.len() * n {
            return Err(InterpolationError::ShapeMismatch {
                expected: t.len() * n,
                got: y.len(),
            });
        }

        let mut z = Vec::with_capacity(t.len());
        let mut dz = Vec::with_capacity(t.len());
        for (tm, row) in t.iter().zip(y.chunks_exact(n)) {
            let (value, slope) = self.evaluate(tm, row)?;
            z.push(value);
            dz.push(slope);
        }
        Ok((z, dz))
    }
}
