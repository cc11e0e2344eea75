//! Shared types for the numerical layers.
//!
//! This module provides:
//! - `error`: Structured error types for sampling, integration configuration and scalar search
//!
//! # Re-exports
//!
//! [`ConfigError`], [`SamplingError`] and [`SolverError`] are re-exported at this level.

pub mod error;

pub use error::{ConfigError, SamplingError, SolverError};
