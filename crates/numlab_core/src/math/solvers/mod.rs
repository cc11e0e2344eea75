//! Bracketing solvers for scalar functions on an interval.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: root of a function whose endpoint values differ in sign
//! - [`GoldenSectionSolver`]: minimum or maximum of a unimodal function
//!
//! ## Configuration
//!
//! Both solvers use [`SearchConfig`]:
//! - `precision`: bracket width at which the search stops (default: 1e-4)
//! - `max_iterations`: hard cap on iterations (default: 10 000)
//!
//! Both return the midpoint of the final bracket and converge in
//! `O(log(initial_width / precision))` iterations for a valid bracket.
//!
//! ## Examples
//!
//! ```
//! use numlab_core::math::solvers::{BisectionSolver, GoldenSectionSolver, SearchConfig};
//!
//! let config = SearchConfig::new(1e-8, 1_000);
//!
//! // Root of x² - 2 in [0, 2]
//! let root = BisectionSolver::new(config)
//!     .find_root(|x: f64| x * x - 2.0, 0.0, 2.0)
//!     .unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
//!
//! // Minimum of (x - 1)² in [-5, 5]
//! let min = GoldenSectionSolver::new(config)
//!     .find_extremum(|x: f64| (x - 1.0).powi(2), -5.0, 5.0, true)
//!     .unwrap();
//! assert!((min - 1.0).abs() < 1e-6);
//! ```

mod bisection;
mod config;
mod golden;

pub use bisection::BisectionSolver;
pub use config::{SearchConfig, DEFAULT_PRECISION};
pub use golden::{GoldenSectionSolver, GOLDEN_RATIO};
