//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from bisection and golden-section search
//! - `SamplingError`: Errors from capped acceptance-rejection and Poisson sampling
//! - `ConfigError`: Errors from building an integration configuration
//!
//! Generators and estimators that keep the unchecked contract never return
//! these; they only surface through the opt-in checked variants.

use thiserror::Error;

/// Scalar search errors.
///
/// # Examples
/// ```
/// use numlab_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The bracket did not shrink below the precision within the iteration cap.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have the same strict sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
}

/// Sampling errors raised by the capped generators.
///
/// # Examples
/// ```
/// use numlab_core::types::SamplingError;
///
/// let err = SamplingError::NotConverged { attempts: 1_000 };
/// assert_eq!(format!("{}", err), "No sample accepted after 1000 attempts");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingError {
    /// The attempt cap was reached before a value was produced.
    #[error("No sample accepted after {attempts} attempts")]
    NotConverged {
        /// Number of attempts consumed
        attempts: usize,
    },
}

/// Configuration error for the integrators and searches.
///
/// These errors occur at build time when invalid parameters are provided.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Event count outside valid range [1, 100_000_000].
    #[error("Invalid event count {0}: must be in range [1, 100_000_000]")]
    InvalidEventCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
