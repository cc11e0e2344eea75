//! Hit-or-miss integral estimator.

use super::{IntegralResult, IntegrationConfig};
use crate::rng::UniformSource;

/// Hit-or-miss estimator of `∫[x_min, x_max] f(x) dx`.
///
/// Draws `n_evt` points uniformly in `[x_min, x_max] × [0, y_max]` and counts
/// the fraction `p` strictly under the curve. With `A = (x_max - x_min) · y_max`:
///
/// - estimate = `A · p`
/// - uncertainty = `sqrt(A² · p · (1 - p) / n_evt)` (binomial variance of `p`)
///
/// `y_max` must bound `f` on the interval and `f` must be non-negative there;
/// neither is checked.
///
/// # Example
///
/// ```
/// use numlab_core::integration::{HitOrMissIntegrator, IntegrationConfig};
/// use numlab_core::rng::UniformSource;
///
/// let config = IntegrationConfig::builder().n_evt(50_000).build().unwrap();
/// let integrator = HitOrMissIntegrator::new(config);
/// let mut source = UniformSource::from_seed(42);
///
/// // ∫[0, 1] x² dx = 1/3
/// let result = integrator.integrate(&mut source, |x| x * x, 0.0, 1.0, 1.0);
/// assert!((result.estimate - 1.0 / 3.0).abs() < 5.0 * result.uncertainty);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HitOrMissIntegrator {
    config: IntegrationConfig,
}

impl HitOrMissIntegrator {
    /// Creates an integrator with the given configuration.
    pub fn new(config: IntegrationConfig) -> Self {
        Self { config }
    }

    /// Estimates the integral of `f` over `[x_min, x_max]`, bounded above by `y_max`.
    pub fn integrate<F>(
        &self,
        source: &mut UniformSource,
        f: F,
        x_min: f64,
        x_max: f64,
        y_max: f64,
    ) -> IntegralResult
    where
        F: Fn(f64) -> f64,
    {
        source.apply_seed(self.config.seed());
        let n_evt = self.config.n_evt();

        let mut hits: usize = 0;
        for _ in 0..n_evt {
            let x = source.gen_range(x_min, x_max);
            let y = source.gen_range(0.0, y_max);
            if y < f(x) {
                hits += 1;
            }
        }

        let area = (x_max - x_min) * y_max;
        let fraction = hits as f64 / n_evt as f64;
        let estimate = area * fraction;
        let uncertainty = (area * area * fraction * (1.0 - fraction) / n_evt as f64).sqrt();

        tracing::debug!(hits, n_evt, estimate, uncertainty, "hit-or-miss integration");
        IntegralResult::new(estimate, uncertainty)
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }
}
