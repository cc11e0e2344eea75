//! Integral estimate with its statistical uncertainty.

use std::fmt;

/// Result of a Monte Carlo integral estimate.
///
/// `uncertainty` is one standard deviation of the estimator and is never
/// negative.
///
/// # Examples
///
/// ```
/// use numlab_core::integration::IntegralResult;
///
/// let result = IntegralResult::new(50.0, 0.5);
/// assert_eq!(result.relative_uncertainty(), 0.01);
/// assert_eq!(result.to_string(), "50 ± 0.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegralResult {
    /// Estimated value of the integral.
    pub estimate: f64,
    /// Standard deviation of the estimate.
    pub uncertainty: f64,
}

impl IntegralResult {
    /// Creates a result from an estimate and its uncertainty.
    #[inline]
    pub fn new(estimate: f64, uncertainty: f64) -> Self {
        Self {
            estimate,
            uncertainty,
        }
    }

    /// Uncertainty as a fraction of the estimate's magnitude.
    ///
    /// Infinite when the estimate is exactly zero and the uncertainty is not.
    pub fn relative_uncertainty(&self) -> f64 {
        self.uncertainty / self.estimate.abs()
    }

    /// Number of standard deviations separating the estimate from `reference`.
    pub fn pull(&self, reference: f64) -> f64 {
        (self.estimate - reference) / self.uncertainty
    }
}

impl From<IntegralResult> for (f64, f64) {
    fn from(result: IntegralResult) -> Self {
        (result.estimate, result.uncertainty)
    }
}

impl fmt::Display for IntegralResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} ± {:.*}", p, self.estimate, p, self.uncertainty),
            None => write!(f, "{} ± {}", self.estimate, self.uncertainty),
        }
    }
}
