//! Interpolation on monotone grids.
//!
//! ## Available Interpolators
//!
//! - [`GridInterpolator`]: Piecewise linear interpolation of many ordinate
//!   rows over one shared abscissa grid, returning value and slope
//!
//! ## AD Compatibility
//!
//! Query points and ordinates are generic over
//! [`Scalar`](crate::types::Scalar); the grid itself is a plain float slice.
//! A dual query point therefore carries `dz/dt` in its derivative part.
//!
//! ## Example
//!
//! ```
//! use transit_core::math::interpolators::GridInterpolator;
//!
//! let xs = [0.0_f64, 1.0, 2.0];
//! let y = [0.0_f64, 1.0, 4.0, 1.0, 1.0, 1.0];
//! let grid = GridInterpolator::new(&xs, true).unwrap();
//!
//! let (z, dz) = grid.resample(&[1.5_f64, 0.5], &y).unwrap();
//! assert!((z[0] - 2.5).abs() < 1e-12);
//! assert_eq!(dz[1], 0.0);
//! ```

mod linear;


// Re-export public types at module level
pub use linear::GridInterpolator;
