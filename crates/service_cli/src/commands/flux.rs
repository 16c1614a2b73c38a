//! Flux command implementation
//!
//! Evaluates a single flux value, optionally with its gradient.

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;
use transit_core::math::elliptic::{Agm, Bulirsch, EllipticBackend};
use transit_models::limb_darkening::{occultation_with, quad_grad_with, FluxGradient, Regime};

use crate::config::TransitConfig;
use crate::Result;

/// Elliptic integral backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Arithmetic-geometric mean iteration
    Agm,
    /// Hastings approximations and Bulirsch's Π recurrence
    Bulirsch,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Single-point evaluation result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluxReport {
    pub c1: f64,
    pub c2: f64,
    pub p: f64,
    pub d: f64,
    pub regime: Regime,
    pub flux: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<FluxGradient>,
}

/// Evaluate the configured model at separation `d`
pub fn evaluate(config: &TransitConfig, d: f64, backend: Backend) -> FluxReport {
    match backend {
        Backend::Agm => evaluate_with::<Agm>(config, d),
        Backend::Bulirsch => evaluate_with::<Bulirsch>(config, d),
    }
}

fn evaluate_with<B: EllipticBackend>(config: &TransitConfig, d: f64) -> FluxReport {
    let occ = occultation_with::<B, f64>(&config.p, &d);
    let flux = occ.flux(&config.c1, &config.c2);
    let gradient = config
        .gradient
        .then(|| quad_grad_with::<B>(config.c1, config.c2, config.p, d));

    FluxReport {
        c1: config.c1,
        c2: config.c2,
        p: config.p,
        d,
        regime: occ.regime,
        flux,
        gradient,
    }
}

/// Run the flux command
pub fn run(config: &TransitConfig, d: f64, backend: Backend, format: OutputFormat) -> Result<()> {
    info!(
        c1 = config.c1,
        c2 = config.c2,
        p = config.p,
        d,
        ?backend,
        "Evaluating flux"
    );

    let report = evaluate(config, d, backend);
    info!(regime = %report.regime, "Occultation classified");

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("regime  {}", report.regime);
            println!("flux    {:.12}", report.flux);
            if let Some(g) = &report.gradient {
                println!("d/dc1   {:.12}", g.d_c1);
                println!("d/dc2   {:.12}", g.d_c2);
                println!("d/dp    {:.12}", g.d_p);
                println!("d/dd    {:.12}", g.d_d);
            }
        }
    }

    Ok(())
}
