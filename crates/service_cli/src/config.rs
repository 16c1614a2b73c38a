//! CLI configuration management
//!
//! Handles loading configuration from TOML files, `TRANSIT_*` environment
//! variables and command-line arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Model or grid parameter out of range
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Config file could not be read or parsed
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment override could not be parsed
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Light-curve configuration
///
/// The curve is sampled on `samples` uniformly spaced separations in
/// `[d_min, d_max]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Linear limb-darkening coefficient
    pub c1: f64,
    /// Quadratic limb-darkening coefficient
    pub c2: f64,
    /// Radius ratio
    pub p: f64,
    /// First separation of the curve
    pub d_min: f64,
    /// Last separation of the curve
    pub d_max: f64,
    /// Number of curve samples
    pub samples: usize,
    /// Whether to emit partial derivatives alongside the flux
    pub gradient: bool,
    /// CSV output path (stdout when absent)
    pub output: Option<PathBuf>,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            c1: 0.4,
            c2: 0.3,
            p: 0.1,
            d_min: 0.0,
            d_max: 1.5,
            samples: 301,
            gradient: false,
            output: None,
        }
    }
}

const ENV_LOG_LEVEL: &str = "TRANSIT_LOG_LEVEL";
const ENV_C1: &str = "TRANSIT_C1";
const ENV_C2: &str = "TRANSIT_C2";
const ENV_P: &str = "TRANSIT_P";
const ENV_D_MIN: &str = "TRANSIT_D_MIN";
const ENV_D_MAX: &str = "TRANSIT_D_MAX";
const ENV_SAMPLES: &str = "TRANSIT_SAMPLES";
const ENV_GRADIENT: &str = "TRANSIT_GRADIENT";

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::EnvError(format!("{}={}: {}", key, value, e)))
}

impl TransitConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from `TRANSIT_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Override fields from a variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(v) = lookup(ENV_C1) {
            self.c1 = parse_env(ENV_C1, &v)?;
        }
        if let Some(v) = lookup(ENV_C2) {
            self.c2 = parse_env(ENV_C2, &v)?;
        }
        if let Some(v) = lookup(ENV_P) {
            self.p = parse_env(ENV_P, &v)?;
        }
        if let Some(v) = lookup(ENV_D_MIN) {
            self.d_min = parse_env(ENV_D_MIN, &v)?;
        }
        if let Some(v) = lookup(ENV_D_MAX) {
            self.d_max = parse_env(ENV_D_MAX, &v)?;
        }
        if let Some(v) = lookup(ENV_SAMPLES) {
            self.samples = parse_env(ENV_SAMPLES, &v)?;
        }
        if let Some(v) = lookup(ENV_GRADIENT) {
            self.gradient = v.to_lowercase() == "true";
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(c1) = cli.c1 {
            self.c1 = c1;
        }
        if let Some(c2) = cli.c2 {
            self.c2 = c2;
        }
        if let Some(p) = cli.p {
            self.p = p;
        }
        if let Some(samples) = cli.samples {
            self.samples = samples;
        }
        if cli.gradient {
            self.gradient = true;
        }
        if let Some(output) = &cli.output {
            self.output = Some(output.clone());
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("c1", self.c1), ("c2", self.c2), ("p", self.p)] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: format!("{} is not finite", value),
                });
            }
        }

        if self.p < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "p",
                reason: format!("radius ratio {} is negative", self.p),
            });
        }

        if self.omega() == 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "c1",
                reason: "1 - c1/3 - c2/6 must be nonzero".to_string(),
            });
        }

        if self.samples < 2 {
            return Err(ConfigError::InvalidParameter {
                name: "samples",
                reason: format!("need at least 2 samples, got {}", self.samples),
            });
        }

        if !(self.d_max > self.d_min) {
            return Err(ConfigError::InvalidParameter {
                name: "d_max",
                reason: format!("d_max {} must exceed d_min {}", self.d_max, self.d_min),
            });
        }

        Ok(())
    }

    /// Flux normalisation `1 - c1/3 - c2/6`
    pub fn omega(&self) -> f64 {
        1.0 - self.c1 / 3.0 - self.c2 / 6.0
    }

    /// Uniform separation grid
    pub fn separations(&self) -> Vec<f64> {
        let step = (self.d_max - self.d_min) / (self.samples - 1) as f64;
        (0..self.samples)
            .map(|i| self.d_min + step * i as f64)
            .collect()
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Linear coefficient override
    pub c1: Option<f64>,
    /// Quadratic coefficient override
    pub c2: Option<f64>,
    /// Radius ratio override
    pub p: Option<f64>,
    /// Sample count override
    pub samples: Option<usize>,
    /// Force gradient output
    pub gradient: bool,
    /// Output path override
    pub output: Option<PathBuf>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<TransitConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        TransitConfig::from_file(config_path)?
    } else {
        TransitConfig::default()
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = TransitConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.c1, 0.4);
        assert_eq!(config.c2, 0.3);
        assert_eq!(config.p, 0.1);
        assert_eq!(config.samples, 301);
        assert!(!config.gradient);
        assert!(config.output.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            c1 = 0.2
            c2 = 0.1
            p = 0.05
            d_max = 1.2
            samples = 11
            gradient = true
            output = "curve.csv"
        "#;

        let config = TransitConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.c1, 0.2);
        assert_eq!(config.p, 0.05);
        assert_eq!(config.d_min, 0.0);
        assert_eq!(config.d_max, 1.2);
        assert_eq!(config.samples, 11);
        assert!(config.gradient);
        assert_eq!(config.output, Some(PathBuf::from("curve.csv")));
    }

    #[test]
    fn test_toml_rejects_unknown_and_invalid() {
        assert!(TransitConfig::from_toml("radius = 0.1").is_err());
        assert!(TransitConfig::from_toml("log_level = \"loud\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TRANSIT_P", "0.2"),
            ("TRANSIT_SAMPLES", " 50 "),
            ("TRANSIT_GRADIENT", "TRUE"),
            ("TRANSIT_LOG_LEVEL", "warn"),
        ]
        .into_iter()
        .collect();

        let mut config = TransitConfig::default();
        config
            .apply_env_with(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.p, 0.2);
        assert_eq!(config.samples, 50);
        assert!(config.gradient);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.c1, 0.4);
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = TransitConfig::default();
        let err = config
            .apply_env_with(|key| (key == "TRANSIT_C1").then(|| "abc".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = TransitConfig::default();
        let cli = CliArgs {
            log_level: Some("debug".to_string()),
            p: Some(0.3),
            samples: Some(5),
            gradient: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.p, 0.3);
        assert_eq!(config.samples, 5);
        assert!(config.gradient);
        assert_eq!(config.c2, 0.3);
    }

    #[test]
    fn test_validate() {
        let mut config = TransitConfig::default();
        config.samples = 1;
        assert!(config.validate().is_err());

        let mut config = TransitConfig::default();
        config.p = -0.1;
        assert!(config.validate().is_err());

        let mut config = TransitConfig::default();
        config.d_max = config.d_min;
        assert!(config.validate().is_err());

        let mut config = TransitConfig::default();
        config.c1 = 3.0;
        config.c2 = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter { name: "c1", .. })
        ));

        let mut config = TransitConfig::default();
        config.c2 = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_separations() {
        let config = TransitConfig {
            d_min: 0.5,
            d_max: 1.5,
            samples: 5,
            ..Default::default()
        };
        assert_eq!(config.separations(), vec![0.5, 0.75, 1.0, 1.25, 1.5]);
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/transit.toml")),
            ..Default::default()
        };
        assert!(matches!(build_config(&cli), Err(ConfigError::FileError(_))));
    }
}
