//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.

use numlab_core::integration::{DEFAULT_EVENT_COUNT, MAX_EVENTS};
use numlab_core::math::solvers::DEFAULT_PRECISION;
use numlab_core::variates::DEFAULT_CLT_TERMS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::output::OutputFormat;
use crate::{CliError, Result};

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "NUMLAB_LOG_LEVEL";

/// Environment variable overriding the default seed
pub const ENV_SEED: &str = "NUMLAB_SEED";

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidLogLevel(s.to_string())),
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

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default seed for commands that sample; `None` draws from entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Default number of events for integration
    pub n_evt: usize,
    /// Default number of uniforms averaged by the CLT generators
    pub n_sum: usize,
    /// Default search precision
    pub precision: f64,
    /// Default output format
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            seed: None,
            n_evt: DEFAULT_EVENT_COUNT,
            n_sum: DEFAULT_CLT_TERMS,
            precision: DEFAULT_PRECISION,
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides using `lookup` to read variables
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            let seed = seed.trim().parse().map_err(|_| {
                CliError::InvalidConfig(format!("{} must be an unsigned integer, got '{}'", ENV_SEED, seed))
            })?;
            self.seed = Some(seed);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(CliError::InvalidConfig(format!(
                "precision must be positive, got {}",
                self.precision
            )));
        }
        if self.n_sum == 0 {
            return Err(CliError::InvalidConfig("n_sum must be at least 1".to_string()));
        }
        if self.n_evt == 0 || self.n_evt > MAX_EVENTS {
            return Err(CliError::InvalidConfig(format!(
                "n_evt must be in [1, {}], got {}",
                MAX_EVENTS, self.n_evt
            )));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<()> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        Ok(())
    }
}

/// Global CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Force debug logging
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (skipped when it does not exist)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with environment variables read through `lookup`
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) if path.exists() => CliConfig::from_file(path)?,
        Some(path) => {
            debug!(path = %path.display(), "config file not found, using defaults");
            CliConfig::default()
        }
        None => CliConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
