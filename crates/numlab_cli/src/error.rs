//! CLI error types.

use numlab_core::types::{ConfigError, SamplingError, SolverError};
use thiserror::Error;

/// Errors surfaced by the `numlab` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Line {line}: cannot parse '{token}' as a number")]
    Parse { line: usize, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Parameter(#[from] ConfigError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_convert() {
        let err: CliError = SolverError::MaxIterationsExceeded { iterations: 5 }.into();
        assert!(matches!(err, CliError::Solver(_)));
        assert!(err.to_string().contains("5 iterations"));

        let err: CliError = ConfigError::InvalidEventCount(0).into();
        assert!(matches!(err, CliError::Parameter(_)));
    }

    #[test]
    fn test_parse_error_display() {
        let err = CliError::Parse {
            line: 3,
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Line 3: cannot parse 'abc' as a number");
    }
}
