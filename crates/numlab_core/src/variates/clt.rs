//! Central-limit approximations to the Gaussian.
//!
//! Two distinct generators live here and must not be confused:
//!
//! - [`clt_mean_sigma`] scales the uniform range so that the average of
//!   `n_sum` draws has exactly the requested standard deviation.
//! - [`clt_min_max`] averages uniforms over the caller's `[lo, hi)` with no
//!   scaling. Its spread shrinks as `1/sqrt(n_sum)` and it is not
//!   calibrated to any particular sigma.

use crate::rng::UniformSource;

/// Number of uniform draws averaged per output value.
pub const DEFAULT_CLT_TERMS: usize = 10;

/// Averages `n_sum` uniform draws from `[lo, hi)`.
#[inline]
fn average_uniforms(source: &mut UniformSource, lo: f64, hi: f64, n_sum: usize) -> f64 {
    let mut total = 0.0;
    for _ in 0..n_sum {
        total += source.gen_range(lo, hi);
    }
    total / n_sum as f64
}

/// Draws one approximately Gaussian value with the given mean and sigma.
///
/// Averages `n_sum` uniforms over `[mean - δ, mean + δ)` with
/// `δ = sqrt(3 · n_sum) · sigma`. Each uniform then has variance
/// `n_sum · sigma²`, so their average has variance `sigma²`.
///
/// # Examples
///
/// ```
/// use numlab_core::rng::UniformSource;
/// use numlab_core::variates::{clt_mean_sigma, DEFAULT_CLT_TERMS};
///
/// let mut source = UniformSource::from_seed(3);
/// let x = clt_mean_sigma(&mut source, 10.0, 0.5, DEFAULT_CLT_TERMS);
/// let delta = (3.0 * DEFAULT_CLT_TERMS as f64).sqrt() * 0.5;
/// assert!(x >= 10.0 - delta && x < 10.0 + delta);
/// ```
pub fn clt_mean_sigma(source: &mut UniformSource, mean: f64, sigma: f64, n_sum: usize) -> f64 {
    let delta = (3.0 * n_sum as f64).sqrt() * sigma;
    average_uniforms(source, mean - delta, mean + delta, n_sum)
}

/// Draws `n` values with [`clt_mean_sigma`], reseeding once if `seed` is given.
pub fn clt_mean_sigma_sequence(
    source: &mut UniformSource,
    mean: f64,
    sigma: f64,
    n: usize,
    n_sum: usize,
    seed: Option<u64>,
) -> Vec<f64> {
    source.apply_seed(seed);
    (0..n)
        .map(|_| clt_mean_sigma(source, mean, sigma, n_sum))
        .collect()
}

/// Draws one value as the average of `n_sum` uniforms over `[lo, hi)`.
///
/// The result is centred on `(lo + hi) / 2` with standard deviation
/// `(hi - lo) / sqrt(12 · n_sum)`.
pub fn clt_min_max(source: &mut UniformSource, lo: f64, hi: f64, n_sum: usize) -> f64 {
    average_uniforms(source, lo, hi, n_sum)
}

/// Draws `n` values with [`clt_min_max`], reseeding once if `seed` is given.
pub fn clt_min_max_sequence(
    source: &mut UniformSource,
    lo: f64,
    hi: f64,
    n: usize,
    n_sum: usize,
    seed: Option<u64>,
) -> Vec<f64> {
    source.apply_seed(seed);
    (0..n).map(|_| clt_min_max(source, lo, hi, n_sum)).collect()
}
