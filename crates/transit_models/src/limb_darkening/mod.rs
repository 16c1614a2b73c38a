//! Quadratic limb-darkening occultation model.
//!
//! This module provides:
//! - `regime`: Classification of the occulter/star geometry
//! - `quad`: Flux evaluation generic over [`Scalar`](transit_core::types::Scalar)
//! - `gradient`: Flux plus partial derivatives in one forward pass
//!
//! ## Model
//!
//! For limb-darkening law `I(mu) = 1 - c1 (1 - mu) - c2 (1 - mu)^2`, the
//! relative flux of a star of unit radius occulted by a dark disk of radius
//! `p` at centre separation `d` is
//!
//! ```text
//! F = 1 - [(1 - c1 - 2 c2) lambda_e + (c1 + 2 c2) lambda_d + c2 eta_d] / (1 - c1/3 - c2/6)
//! ```
//!
//! ## Usage
//!
//! ```
//! use transit_models::limb_darkening::{occultation, quad, Regime};
//!
//! let occ = occultation(0.1_f64, 1.05);
//! assert_eq!(occ.regime, Regime::LimbCrossing);
//! assert!(quad(0.4, 0.3, 0.1, 1.05) < 1.0);
//! ```

mod gradient;
mod quad;
mod regime;

pub use gradient::{quad_grad, quad_grad_with, FluxGradient};
pub use quad::{occultation, occultation_with, quad, quad_with, Occultation};
pub use regime::Regime;
