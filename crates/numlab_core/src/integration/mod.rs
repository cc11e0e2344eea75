//! Monte Carlo estimators of one-dimensional definite integrals.
//!
//! # Architecture
//!
//! ```text
//! HitOrMissIntegrator / CrudeMonteCarloIntegrator
//! ├── IntegrationConfig  (event count, optional seed)
//! ├── UniformSource      (borrowed per call)
//! └── IntegralResult     (estimate, uncertainty)
//! ```
//!
//! Both estimators are unbiased. For the same `n_evt`, hit-or-miss has the
//! larger variance unless `f` is close to a step function: it throws away
//! the height information that crude Monte Carlo keeps. Neither retries or
//! adapts; each call is a single pass of exactly `n_evt` draws.
//!
//! # Examples
//!
//! ```rust
//! use numlab_core::integration::{
//!     CrudeMonteCarloIntegrator, HitOrMissIntegrator, IntegrationConfig,
//! };
//! use numlab_core::rng::UniformSource;
//!
//! let config = IntegrationConfig::builder()
//!     .n_evt(200_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let mut source = UniformSource::from_entropy();
//!
//! let hom = HitOrMissIntegrator::new(config).integrate(&mut source, |x| x, 0.0, 10.0, 10.0);
//! let crude = CrudeMonteCarloIntegrator::new(config).integrate(&mut source, |x| x, 0.0, 10.0);
//!
//! assert!(crude.uncertainty < hom.uncertainty);
//! ```

mod config;
mod crude;
mod hit_or_miss;
mod result;

pub use config::{IntegrationConfig, IntegrationConfigBuilder, DEFAULT_EVENT_COUNT, MAX_EVENTS};
pub use crude::CrudeMonteCarloIntegrator;
pub use hit_or_miss::HitOrMissIntegrator;
pub use result::IntegralResult;
