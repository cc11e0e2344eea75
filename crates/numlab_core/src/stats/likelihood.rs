//! Likelihood of an i.i.d. sample under a one-parameter density.
//!
//! The density is any `Fn(x, parameter) -> f64`.

/// Product of `pdf(x, parameter)` over the sample.
///
/// Underflows to zero for long samples; prefer [`log_likelihood`] there.
///
/// # Examples
///
/// ```
/// use numlab_core::stats::likelihood;
///
/// let exp_pdf = |x: f64, tau: f64| (-x / tau).exp() / tau;
/// let l = likelihood(&[1.0, 2.0], 1.0, exp_pdf);
/// assert!((l - (-3.0f64).exp()).abs() < 1e-12);
/// ```
pub fn likelihood<F>(sample: &[f64], parameter: f64, pdf: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    sample.iter().map(|&x| pdf(x, parameter)).product()
}

/// Sum of `ln pdf(x, parameter)` over the sample.
///
/// Points where the density is not strictly positive are skipped rather
/// than contributing `-inf`.
pub fn log_likelihood<F>(sample: &[f64], parameter: f64, pdf: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    sample
        .iter()
        .map(|&x| pdf(x, parameter))
        .filter(|&density| density > 0.0)
        .map(f64::ln)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::solvers::{GoldenSectionSolver, SearchConfig};
    use approx::assert_relative_eq;

    fn exp_pdf(x: f64, tau: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            (-x / tau).exp() / tau
        }
    }

    #[test]
    fn test_log_of_likelihood_matches() {
        let sample = [0.3, 1.2, 0.8, 2.5];
        let l = likelihood(&sample, 1.5, exp_pdf);
        let ll = log_likelihood(&sample, 1.5, exp_pdf);
        assert_relative_eq!(l.ln(), ll, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_density_points_skipped() {
        let with_negative = [-1.0, 0.5, 1.0];
        let without = [0.5, 1.0];
        assert_relative_eq!(
            log_likelihood(&with_negative, 2.0, exp_pdf),
            log_likelihood(&without, 2.0, exp_pdf)
        );
        assert_eq!(likelihood(&with_negative, 2.0, exp_pdf), 0.0);
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(likelihood(&[], 1.0, exp_pdf), 1.0);
        assert_eq!(log_likelihood(&[], 1.0, exp_pdf), 0.0);
    }

    #[test]
    fn test_maximum_likelihood_of_exponential_is_sample_mean() {
        let sample = [0.2, 0.9, 1.7, 0.4, 3.1, 1.1];
        let sample_mean = sample.iter().sum::<f64>() / sample.len() as f64;

        let solver = GoldenSectionSolver::new(SearchConfig::new(1e-7, 1_000));
        let tau = solver
            .find_extremum(|tau| log_likelihood(&sample, tau, exp_pdf), 0.1, 10.0, false)
            .unwrap();

        assert_relative_eq!(tau, sample_mean, epsilon = 1e-5);
    }
}
