//! Mathematical building blocks.
//!
//! - `elliptic`: Complete elliptic integrals K, E, Π and their derivatives
//! - `interpolators`: Piecewise linear resampling on monotone grids

pub mod elliptic;
pub mod interpolators;
