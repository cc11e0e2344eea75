//! Crude (sample-mean) Monte Carlo integral estimator.

use super::{IntegralResult, IntegrationConfig};
use crate::rng::UniformSource;

/// Sample-mean estimator of `∫[x_min, x_max] f(x) dx`.
///
/// Draws `n_evt` abscissae uniformly in `[x_min, x_max]`. With `L = x_max - x_min`:
///
/// - estimate = `L · mean(f)`
/// - uncertainty = `L · s / sqrt(n_evt)`, where `s²` is the Bessel-corrected
///   sample variance of the `f(x)` values
///
/// The moments are accumulated with Welford's online update rather than by
/// storing the values; the result agrees with [`stats::variance`](crate::stats::variance) with
/// Bessel correction enabled.
///
/// # Example
///
/// ```
/// use numlab_core::integration::{CrudeMonteCarloIntegrator, IntegrationConfig};
/// use numlab_core::rng::UniformSource;
///
/// let integrator = CrudeMonteCarloIntegrator::new(IntegrationConfig::default());
/// let mut source = UniformSource::from_seed(42);
///
/// // ∫[0, π] sin x dx = 2
/// let result = integrator.integrate(&mut source, f64::sin, 0.0, std::f64::consts::PI);
/// assert!((result.estimate - 2.0).abs() < 5.0 * result.uncertainty);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CrudeMonteCarloIntegrator {
    config: IntegrationConfig,
}

impl CrudeMonteCarloIntegrator {
    /// Creates an integrator with the given configuration.
    pub fn new(config: IntegrationConfig) -> Self {
        Self { config }
    }

    /// Estimates the integral of `f` over `[x_min, x_max]`.
    pub fn integrate<F>(
        &self,
        source: &mut UniformSource,
        f: F,
        x_min: f64,
        x_max: f64,
    ) -> IntegralResult
    where
        F: Fn(f64) -> f64,
    {
        source.apply_seed(self.config.seed());
        let n_evt = self.config.n_evt();
        let n = n_evt as f64;

        // Welford's online update keeps the spread accurate for integrands
        // with a large constant offset.
        let mut mean = 0.0;
        let mut m2 = 0.0;
        for k in 1..=n_evt {
            let value = f(source.gen_range(x_min, x_max));
            let delta = value - mean;
            mean += delta / k as f64;
            m2 += delta * (value - mean);
        }

        let variance = if n_evt > 1 { m2 / (n - 1.0) } else { 0.0 };

        let length = x_max - x_min;
        let estimate = mean * length;
        let uncertainty = (variance / n).sqrt() * length.abs();

        tracing::debug!(n_evt, estimate, uncertainty, "crude Monte Carlo integration");
        IntegralResult::new(estimate, uncertainty)
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }
}
