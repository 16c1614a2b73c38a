//! CLI error types

use thiserror::Error;
use transit_core::types::EllipticError;
use transit_models::light_curve::LightCurveError;

use crate::config::ConfigError;

/// CLI result type
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the `transit` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Light-curve CSV output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON report serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Batched flux evaluation rejected its inputs
    #[error("Light curve error: {0}")]
    LightCurve(#[from] LightCurveError),

    /// Checked elliptic integral failed
    #[error("Elliptic integral error: {0}")]
    Elliptic(#[from] EllipticError),

    /// Command-line argument out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Backends disagree beyond tolerance
    #[error("Backend check failed: {0}")]
    CheckFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: CliError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid log level: loud. Must be one of: trace, debug, info, warn, error"
        );

        let err: CliError = EllipticError::NotConverged { iterations: 200 }.into();
        assert_eq!(
            err.to_string(),
            "Elliptic integral error: Elliptic integral did not converge after 200 iterations"
        );
    }
}
