//! # numlab_core: Numerical Primitives for Computational Physics
//!
//! ## Role
//!
//! numlab_core is the foundation layer of the workspace, providing:
//! - A seeded uniform source with an explicit reseed lifecycle (`rng`)
//! - Non-uniform variate generators (`variates`)
//! - Hit-or-miss and crude Monte Carlo integration (`integration`)
//! - Bisection and golden-section search on scalar functions (`math::solvers`)
//! - Descriptive statistics, likelihoods and histogram binning (`stats`)
//! - Error types: `SolverError`, `SamplingError`, `ConfigError` (`types::error`)
//!
//! ## Caller Contract
//!
//! Numerical preconditions (a sign-changing bracket, a box that bounds the
//! density, `hi > lo`, `lambda > 0`) are the caller's responsibility and are
//! not validated by the default entry points. Checked or capped variants are
//! provided where a silent failure would be expensive:
//! [`BisectionSolver::find_root_bracketed`](math::solvers::BisectionSolver::find_root_bracketed),
//! [`try_rejection_box`](variates::try_rejection_box) and
//! [`try_poisson_count`](variates::try_poisson_count).
//!
//! ## Usage Examples
//!
//! ```rust
//! use numlab_core::integration::{CrudeMonteCarloIntegrator, IntegrationConfig};
//! use numlab_core::math::solvers::{BisectionSolver, SearchConfig};
//! use numlab_core::rng::UniformSource;
//! use numlab_core::variates::exponential_inverse;
//!
//! let mut source = UniformSource::from_seed(42);
//!
//! // Sampling
//! let decays = exponential_inverse(&mut source, 2.0, 10_000, None);
//! let mean = decays.iter().sum::<f64>() / decays.len() as f64;
//! assert!((mean - 2.0).abs() < 0.2);
//!
//! // Integration
//! let integral = CrudeMonteCarloIntegrator::new(IntegrationConfig::default())
//!     .integrate(&mut source, |x| x * x, 0.0, 3.0);
//! assert!((integral.estimate - 9.0).abs() < 5.0 * integral.uncertainty);
//!
//! // Root finding
//! let root = BisectionSolver::new(SearchConfig::with_precision(1e-6))
//!     .find_root(|x: f64| x.exp() - 2.0, 0.0, 1.0)
//!     .unwrap();
//! assert!((root - 2.0f64.ln()).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `IntegralResult`, `Summary` and `Histogram`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod integration;
pub mod math;
pub mod rng;
pub mod stats;
pub mod types;
pub mod variates;
