//! Curve command implementation
//!
//! Samples the light curve on a uniform separation grid and writes it as CSV.

use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use tracing::{info, warn};
use transit_models::light_curve::quad_batch;
use transit_models::limb_darkening::quad_grad;

use crate::config::TransitConfig;
use crate::Result;

#[derive(Debug, Serialize)]
struct FluxRow {
    d: f64,
    flux: f64,
}

#[derive(Debug, Serialize)]
struct GradientRow {
    d: f64,
    flux: f64,
    d_c1: f64,
    d_c2: f64,
    d_p: f64,
    d_d: f64,
}

/// Write the configured light curve as CSV; returns the minimum flux.
pub fn write_curve<W: Write>(config: &TransitConfig, out: W) -> Result<f64> {
    let d = config.separations();
    let mut writer = csv::Writer::from_writer(out);
    let mut min_flux = f64::INFINITY;

    if config.gradient {
        for &di in &d {
            let g = quad_grad(config.c1, config.c2, config.p, di);
            min_flux = min_flux.min(g.flux);
            writer.serialize(GradientRow {
                d: di,
                flux: g.flux,
                d_c1: g.d_c1,
                d_c2: g.d_c2,
                d_p: g.d_p,
                d_d: g.d_d,
            })?;
        }
    } else {
        let n = d.len();
        let flux = quad_batch(
            &vec![config.c1; n],
            &vec![config.c2; n],
            &vec![config.p; n],
            &d,
        )?;
        for (&di, &fi) in d.iter().zip(flux.iter()) {
            min_flux = min_flux.min(fi);
            writer.serialize(FluxRow { d: di, flux: fi })?;
        }
    }

    writer.flush()?;
    Ok(min_flux)
}

/// Run the curve command
pub fn run(config: &TransitConfig) -> Result<()> {
    info!(
        samples = config.samples,
        d_min = config.d_min,
        d_max = config.d_max,
        gradient = config.gradient,
        "Sampling light curve"
    );

    let min_flux = match &config.output {
        Some(path) => {
            info!("Writing light curve to: {}", path.display());
            write_curve(config, File::create(path)?)?
        }
        None => write_curve(config, io::stdout().lock())?,
    };

    if min_flux >= 1.0 {
        warn!("No occultation on the sampled separations");
    }
    info!(depth = 1.0 - min_flux, "Light curve complete");
    Ok(())
}
