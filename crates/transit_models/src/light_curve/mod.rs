//! Batched light-curve adapters around the scalar flux model.
//!
//! This module provides:
//! - `batch`: Elementwise flux over parameter slices ([`quad_batch`])
//! - `reverse`: Vector-Jacobian product of the batched layout ([`quad_rev`])
//! - `resample`: Monotone-grid resampling and its reverse ([`interp`], [`interp_rev`])
//! - `error`: [`LightCurveError`] for shape and grid validation
//!
//! Every adapter is a sequential loop over independent scalar calls.
//! Parallelising over elements is left to the caller.

mod batch;
mod error;
mod resample;
mod reverse;

pub use batch::quad_batch;
pub use error::LightCurveError;
pub use resample::{interp, interp_rev};
pub use reverse::{quad_rev, LightCurveCotangent};
