//! # transit_models: Occultation Light Curves (L2: Model)
//!
//! Closed-form flux of a quadratically limb-darkened star occulted by an
//! opaque disk, its gradient, and the batched light-curve adapters built on
//! top of it.
//!
//! This crate provides:
//! - Regime classification of the occulter/star geometry (`limb_darkening::Regime`)
//! - The flux model generic over plain floats and dual numbers (`limb_darkening::quad`)
//! - Flux plus partial derivatives in one forward pass (`limb_darkening::quad_grad`)
//! - Batch, vector-Jacobian and resampling adapters (`light_curve`)
//!
//! ## Design Principles
//!
//! - **Generic over `Scalar`**: one implementation serves `f32`, `f64` and duals
//! - **Value-only branching**: derivatives never influence the case analysis
//! - **Backend as type parameter**: `quad_with::<Bulirsch, _>` cross-checks the
//!   primary AGM elliptic integrals
//!
//! ## Usage Examples
//!
//! ```rust
//! use transit_models::limb_darkening::{quad, quad_grad};
//!
//! let flux = quad(0.4, 0.3, 0.1, 0.3);
//! assert!(flux < 1.0 && flux > 0.98);
//!
//! let g = quad_grad(0.4, 0.3, 0.1, 0.3);
//! assert!((g.flux - flux).abs() < 1e-14);
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod light_curve;
pub mod limb_darkening;
