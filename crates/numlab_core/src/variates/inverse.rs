//! Inverse-transform samplers.

use crate::rng::UniformSource;
use crate::types::SamplingError;

/// Exponential(1) waiting time `-ln(1 - u)`.
#[inline]
fn unit_waiting_time(source: &mut UniformSource) -> f64 {
    -(1.0 - source.gen_uniform()).ln()
}

/// Draws `n` exponential variates with characteristic time (mean) `t0`.
///
/// Exact inverse-CDF method: `-ln(1 - u) · t0`. Since `u ∈ [0, 1)`,
/// `1 - u ∈ (0, 1]` and the logarithm is always finite.
///
/// # Examples
///
/// ```
/// use numlab_core::rng::UniformSource;
/// use numlab_core::variates::exponential_inverse;
///
/// let mut source = UniformSource::from_seed(1);
/// let times = exponential_inverse(&mut source, 2.5, 100, None);
/// assert!(times.iter().all(|t| t.is_finite() && *t >= 0.0));
/// ```
pub fn exponential_inverse(
    source: &mut UniformSource,
    t0: f64,
    n: usize,
    seed: Option<u64>,
) -> Vec<f64> {
    source.apply_seed(seed);
    (0..n).map(|_| unit_waiting_time(source) * t0).collect()
}

/// Draws one Poisson count with expectation `lambda`.
///
/// Accumulates Exponential(1) waiting times until their running sum exceeds
/// `lambda`; the count is the number of waiting times consumed minus one.
///
/// `lambda > 0` is the caller's responsibility; a negative `lambda` yields 0
/// after one draw, as in [`try_poisson_count`]. The loop has no iteration cap;
/// use [`try_poisson_count`] to bound it.
pub fn poisson_count(source: &mut UniformSource, lambda: f64) -> u64 {
    let mut elapsed = unit_waiting_time(source);
    let mut count: u64 = 0;
    while elapsed <= lambda {
        elapsed += unit_waiting_time(source);
        count += 1;
    }
    count
}

/// Draws one Poisson count, giving up after `max_draws` waiting times.
///
/// # Errors
///
/// Returns [`SamplingError::NotConverged`] when the running sum has not
/// exceeded `lambda` after `max_draws` draws.
pub fn try_poisson_count(
    source: &mut UniformSource,
    lambda: f64,
    max_draws: usize,
) -> Result<u64, SamplingError> {
    let mut elapsed = 0.0;
    for draws in 1..=max_draws {
        elapsed += unit_waiting_time(source);
        if elapsed > lambda {
            return Ok(draws as u64 - 1);
        }
    }
    Err(SamplingError::NotConverged {
        attempts: max_draws,
    })
}

/// Draws `n` Poisson counts with expectation `lambda`, reseeding once if
/// `seed` is given.
///
/// # Examples
///
/// ```
/// use numlab_core::rng::UniformSource;
/// use numlab_core::variates::poisson_inverse;
///
/// let mut source = UniformSource::from_seed(9);
/// let counts = poisson_inverse(&mut source, 3.0, 1_000, None);
/// let mean = counts.iter().sum::<u64>() as f64 / counts.len() as f64;
/// assert!((mean - 3.0).abs() < 0.5);
/// ```
pub fn poisson_inverse(
    source: &mut UniformSource,
    lambda: f64,
    n: usize,
    seed: Option<u64>,
) -> Vec<u64> {
    source.apply_seed(seed);
    (0..n).map(|_| poisson_count(source, lambda)).collect()
}

/// Draws `n` values as `inverse_cdf(u)` for fresh uniforms `u ∈ [0, 1)`.
///
/// Pure delegation: the output follows the intended distribution only if
/// `inverse_cdf` is a true inverse CDF.
///
/// # Examples
///
/// ```
/// use numlab_core::rng::UniformSource;
/// use numlab_core::variates::inverse_transform;
///
/// // Uniform on [0, 1) mapped to the triangular density 2x on [0, 1).
/// let mut source = UniformSource::from_seed(5);
/// let sample = inverse_transform(&mut source, |u| u.sqrt(), 100, None);
/// assert!(sample.iter().all(|&x| (0.0..1.0).contains(&x)));
/// ```
pub fn inverse_transform<F>(
    source: &mut UniformSource,
    inverse_cdf: F,
    n: usize,
    seed: Option<u64>,
) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    source.apply_seed(seed);
    (0..n).map(|_| inverse_cdf(source.gen_uniform())).collect()
}
