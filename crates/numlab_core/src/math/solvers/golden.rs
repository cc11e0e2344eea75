//! Golden-section extremum search.

use super::SearchConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Fraction of the bracket kept at each step.
pub const GOLDEN_RATIO: f64 = 0.618;

/// Golden-section search for the minimum or maximum of a unimodal function.
///
/// Two interior points `x1 = b - r(b - a)` and `x2 = a + r(b - a)` with
/// `r = 0.618` split the bracket `[a, b]`. The side beyond the dominated
/// interior point is discarded, so the bracket shrinks by `r` per step.
/// When the bracket width is `<= precision` its midpoint is returned.
///
/// On a function that is not unimodal over the bracket the search still
/// terminates, at a local extremum or at an endpoint. Seeking the maximum of
/// a convex function converges to the endpoint with the larger value.
///
/// # Example
///
/// ```
/// use numlab_core::math::solvers::{GoldenSectionSolver, SearchConfig};
///
/// let solver = GoldenSectionSolver::new(SearchConfig::new(1e-6, 1_000));
/// let x = solver.find_extremum(|x: f64| (x - 2.0).powi(2), -10.0, 10.0, true).unwrap();
/// assert!((x - 2.0).abs() <= 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct GoldenSectionSolver<T: Float> {
    /// Solver configuration
    config: SearchConfig<T>,
}

impl<T: Float> GoldenSectionSolver<T> {
    /// Create a new golden-section solver with the given configuration.
    pub fn new(config: SearchConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration (precision 1e-4).
    pub fn with_defaults() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Locate an extremum of `f` in `[x_min, x_max]`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to search
    /// * `x_min` - Left bracket endpoint
    /// * `x_max` - Right bracket endpoint
    /// * `minimum` - `true` to seek the minimum, `false` for the maximum
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Midpoint of the final bracket of width `<= precision`
    /// * `Err(SolverError::MaxIterationsExceeded)` - The bracket stopped
    ///   shrinking before reaching the precision
    pub fn find_extremum<F>(&self, f: F, x_min: T, x_max: T, minimum: bool) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let ratio = T::from(GOLDEN_RATIO).unwrap_or_else(|| T::one() / (T::one() + T::one()));
        let two = T::one() + T::one();
        let mut a = x_min;
        let mut b = x_max;
        let mut iterations = 0;

        while b - a > self.config.precision {
            if iterations == self.config.max_iterations {
                return Err(SolverError::MaxIterationsExceeded { iterations });
            }

            let width = b - a;
            let x1 = b - ratio * width;
            let x2 = a + ratio * width;
            let (f1, f2) = (f(x1), f(x2));

            // Keep [a, x2] when x1 is the better point, otherwise [x1, b].
            let x1_better = if minimum { f1 < f2 } else { f1 > f2 };
            if x1_better {
                b = x2;
            } else {
                a = x1;
            }
            iterations += 1;
        }

        tracing::debug!(iterations, minimum, "golden-section search converged");
        Ok((a + b) / two)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SearchConfig<T> {
        &self.config
    }
}

impl<T: Float> Default for GoldenSectionSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn solver(precision: f64) -> GoldenSectionSolver<f64> {
        GoldenSectionSolver::new(SearchConfig::new(precision, 10_000))
    }

    #[test]
    fn test_parabola_minimum() {
        let x = solver(1e-6)
            .find_extremum(|x| (x - 2.0).powi(2), -10.0, 10.0, true)
            .unwrap();
        assert_abs_diff_eq!(x, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_parabola_maximum_goes_to_larger_endpoint() {
        // (x - 2)² is 144 at -10 and 64 at 10.
        let x = solver(1e-6)
            .find_extremum(|x| (x - 2.0).powi(2), -10.0, 10.0, false)
            .unwrap();
        assert_abs_diff_eq!(x, -10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_concave_maximum() {
        let x = solver(1e-6)
            .find_extremum(|x| -(x + 1.5).powi(2) + 4.0, -6.0, 3.0, false)
            .unwrap();
        assert_abs_diff_eq!(x, -1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_sine_maximum() {
        let x = solver(1e-6)
            .find_extremum(f64::sin, 0.0, std::f64::consts::PI, false)
            .unwrap();
        assert_abs_diff_eq!(x, std::f64::consts::FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn test_default_precision() {
        let solver: GoldenSectionSolver<f64> = GoldenSectionSolver::default();
        let x = solver
            .find_extremum(|x| (x - 0.3).abs(), -1.0, 1.0, true)
            .unwrap();
        assert_abs_diff_eq!(x, 0.3, epsilon = 1e-4);
    }

    #[test]
    fn test_iteration_cap() {
        let solver = GoldenSectionSolver::new(SearchConfig::new(1e-6, 5));
        let err = solver
            .find_extremum(|x: f64| x * x, -10.0, 10.0, true)
            .unwrap_err();
        assert_eq!(err, SolverError::MaxIterationsExceeded { iterations: 5 });
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_minimum_within_precision(
            centre in -50.0f64..50.0,
            left in 0.5f64..20.0,
            right in 0.5f64..20.0,
            curvature in 0.1f64..10.0,
        ) {
            let precision = 1e-6;
            let x = solver(precision)
                .find_extremum(|x| curvature * (x - centre).powi(2), centre - left, centre + right, true)
                .unwrap();
            prop_assert!((x - centre).abs() <= precision, "{} vs {}", x, centre);
        }
    }
}
