//! transit CLI - Command Line Front End for Transit Light Curves
//!
//! # Commands
//!
//! - `transit flux --d <D>` - Evaluate one flux value (optionally with gradient)
//! - `transit curve` - Write a light curve as CSV
//! - `transit check` - Cross-check the elliptic integral backends
//!
//! # Configuration
//!
//! Parameters are layered: TOML file (`--config`), then `TRANSIT_*`
//! environment variables, then command-line flags.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::flux::{Backend, OutputFormat};
use config::{build_config, CliArgs};

/// Quadratic limb-darkened transit light curves
#[derive(Parser)]
#[command(name = "transit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, env = "TRANSIT_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Model parameters shared by the evaluation commands
#[derive(clap::Args, Debug, Default)]
struct ModelArgs {
    /// Linear limb-darkening coefficient
    #[arg(long, allow_negative_numbers = true)]
    c1: Option<f64>,

    /// Quadratic limb-darkening coefficient
    #[arg(long, allow_negative_numbers = true)]
    c2: Option<f64>,

    /// Occulter-to-star radius ratio
    #[arg(long)]
    p: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the flux at one separation
    Flux {
        #[command(flatten)]
        model: ModelArgs,

        /// Centre separation in stellar radii
        #[arg(long, allow_negative_numbers = true)]
        d: f64,

        /// Also report partial derivatives
        #[arg(short, long)]
        gradient: bool,

        /// Elliptic integral backend
        #[arg(short, long, value_enum, default_value = "agm")]
        backend: Backend,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a light curve over a uniform separation grid as CSV
    Curve {
        #[command(flatten)]
        model: ModelArgs,

        /// Number of samples
        #[arg(short, long)]
        samples: Option<usize>,

        /// Also write partial derivatives
        #[arg(short, long)]
        gradient: bool,

        /// Output file (stdout when absent)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Compare the AGM and Bulirsch elliptic integral backends
    Check {
        /// Number of moduli on the check grid
        #[arg(short, long, default_value = "201")]
        points: usize,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            ..Default::default()
        };
        let model = match &self.command {
            Commands::Flux { model, gradient, .. } => {
                args.gradient = *gradient;
                Some(model)
            }
            Commands::Curve {
                model,
                samples,
                gradient,
                output,
            } => {
                args.samples = *samples;
                args.gradient = *gradient;
                args.output = output.clone();
                Some(model)
            }
            Commands::Check { .. } => None,
        };
        if let Some(model) = model {
            args.c1 = model.c1;
            args.c2 = model.c2;
            args.p = model.p;
        }
        args
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());
    info!("transit v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Flux {
            d,
            backend,
            format,
            ..
        } => commands::flux::run(&config, d, backend, format),
        Commands::Curve { .. } => commands::curve::run(&config),
        Commands::Check { points } => commands::check::run(points),
    }
}
