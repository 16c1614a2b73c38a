//! # transit_core: Numerical Foundation for Transit Light Curves
//!
//! ## Layer 1 (Foundation) Role
//!
//! transit_core serves as the bottom layer of the workspace, providing:
//! - The [`Scalar`](types::Scalar) abstraction shared by plain floats and dual numbers (`types::scalar`)
//! - Dual number type integration (`types::dual`)
//! - Complete elliptic integrals K, E and Π with closed-form derivatives (`math::elliptic`)
//! - Monotone grid interpolation for light-curve resampling (`math::interpolators`)
//! - Error types: `EllipticError`, `InterpolationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other transit_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual number types and automatic differentiation (optional)
//! - nalgebra: Derivative storage of vector dual numbers (optional, follows num-dual)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use transit_core::math::elliptic::{ellint_1, ellint_2};
//! use std::f64::consts::FRAC_PI_2;
//!
//! // K(0) = E(0) = π/2
//! assert!((ellint_1(0.0_f64) - FRAC_PI_2).abs() < 1e-12);
//! assert!((ellint_2(0.0_f64) - FRAC_PI_2).abs() < 1e-12);
//!
//! // K grows with the modulus, E shrinks
//! assert!(ellint_1(0.5_f64) > FRAC_PI_2);
//! assert!(ellint_2(0.5_f64) < FRAC_PI_2);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): `Scalar` implementations for num-dual's `Dual64` and `DualSVec64<N>`
//! - `serde`: Enable serialisation for configuration and diagnostic types

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
