//! Moments of a sample.

/// Arithmetic mean, or `None` for an empty sample.
pub fn mean(sample: &[f64]) -> Option<f64> {
    if sample.is_empty() {
        return None;
    }
    Some(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Sum of `(x - mean)^power` over the sample.
fn central_moment_sum(sample: &[f64], mean: f64, power: i32) -> f64 {
    sample.iter().map(|x| (x - mean).powi(power)).sum()
}

/// Sample variance.
///
/// Two-pass: the mean is computed first and squared deviations are summed
/// around it. With `bessel` the sum is divided by `n - 1` (needs `n >= 2`),
/// otherwise by `n` (needs `n >= 1`).
pub fn variance(sample: &[f64], bessel: bool) -> Option<f64> {
    let n = sample.len();
    let denominator = if bessel { n.checked_sub(1)? } else { n };
    if denominator == 0 {
        return None;
    }
    let m = mean(sample)?;
    Some(central_moment_sum(sample, m, 2) / denominator as f64)
}

/// Square root of [`variance`].
pub fn std_dev(sample: &[f64], bessel: bool) -> Option<f64> {
    variance(sample, bessel).map(f64::sqrt)
}

/// Standard error of the mean, `sqrt(variance / n)`.
pub fn std_error(sample: &[f64], bessel: bool) -> Option<f64> {
    variance(sample, bessel).map(|v| (v / sample.len() as f64).sqrt())
}

/// Adjusted Fisher-Pearson skewness `G1 = sqrt(n(n-1)) / (n-2) · m3 / m2^1.5`.
///
/// `m2`, `m3` are the biased central moments. Needs `n >= 3` and a
/// non-degenerate sample.
pub fn skewness(sample: &[f64]) -> Option<f64> {
    let n = sample.len();
    if n < 3 {
        return None;
    }
    let nf = n as f64;
    let m = mean(sample)?;
    let m2 = central_moment_sum(sample, m, 2) / nf;
    if m2 == 0.0 {
        return None;
    }
    let m3 = central_moment_sum(sample, m, 3) / nf;
    let g1 = m3 / m2.powf(1.5);
    Some((nf * (nf - 1.0)).sqrt() / (nf - 2.0) * g1)
}

/// Bias-corrected excess kurtosis `G2`; zero for a Gaussian.
///
/// `G2 = (n-1) / ((n-2)(n-3)) · ((n+1) g2 + 6)` with `g2 = m4 / m2² - 3`.
/// Needs `n >= 4` and a non-degenerate sample.
pub fn kurtosis(sample: &[f64]) -> Option<f64> {
    let n = sample.len();
    if n < 4 {
        return None;
    }
    let nf = n as f64;
    let m = mean(sample)?;
    let m2 = central_moment_sum(sample, m, 2) / nf;
    if m2 == 0.0 {
        return None;
    }
    let m4 = central_moment_sum(sample, m, 4) / nf;
    let g2 = m4 / (m2 * m2) - 3.0;
    Some((nf - 1.0) / ((nf - 2.0) * (nf - 3.0)) * ((nf + 1.0) * g2 + 6.0))
}

/// One-line summary of a sample, Bessel-corrected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Standard error of the mean.
    pub std_error: f64,
    /// Adjusted skewness, if defined.
    pub skewness: Option<f64>,
    /// Excess kurtosis, if defined.
    pub kurtosis: Option<f64>,
}

impl Summary {
    /// Summarises `sample`; `None` when it has fewer than two values.
    pub fn of(sample: &[f64]) -> Option<Self> {
        Some(Self {
            count: sample.len(),
            mean: mean(sample)?,
            std_dev: std_dev(sample, true)?,
            std_error: std_error(sample, true)?,
            skewness: skewness(sample),
            kurtosis: kurtosis(sample),
        })
    }
}
