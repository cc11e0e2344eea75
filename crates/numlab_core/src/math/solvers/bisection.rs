//! Bisection root-finding solver.

use super::SearchConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder.
///
/// Halves the bracket `[x_min, x_max]` until its width is `<= precision`
/// and returns the midpoint of the final bracket.
///
/// # Bracket Update
///
/// At each step the midpoint `m` replaces `x_min` when `f(m) · f(x_min) > 0`,
/// and replaces `x_max` otherwise. A product of exactly zero therefore moves
/// `x_max`, which keeps a root found at `m` inside the bracket.
///
/// # Preconditions
///
/// `f(x_min)` and `f(x_max)` must have opposite signs. [`find_root`](Self::find_root)
/// does not check this and converges to an endpoint when it is violated;
/// [`find_root_bracketed`](Self::find_root_bracketed) checks first.
///
/// # Example
///
/// ```
/// use numlab_core::math::solvers::{BisectionSolver, SearchConfig};
///
/// let solver = BisectionSolver::new(SearchConfig::new(1e-6, 1_000));
/// let root = solver.find_root(|x: f64| x - 3.0, 0.0, 10.0).unwrap();
/// assert!((root - 3.0).abs() <= 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    /// Solver configuration
    config: SearchConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SearchConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration (precision 1e-4).
    pub fn with_defaults() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Find a root of `f` in `[x_min, x_max]` without checking the bracket.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Midpoint of the final bracket of width `<= precision`
    /// * `Err(SolverError::MaxIterationsExceeded)` - The bracket stopped
    ///   shrinking before reaching the precision
    pub fn find_root<F>(&self, f: F, x_min: T, x_max: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let two = T::one() + T::one();
        let mut lo = x_min;
        let mut hi = x_max;
        let mut iterations = 0;

        while hi - lo > self.config.precision {
            if iterations == self.config.max_iterations {
                return Err(SolverError::MaxIterationsExceeded { iterations });
            }

            let mid = (lo + hi) / two;
            if f(mid) * f(lo) > T::zero() {
                lo = mid;
            } else {
                hi = mid;
            }
            iterations += 1;
        }

        tracing::debug!(iterations, "bisection converged");
        Ok((lo + hi) / two)
    }

    /// Find a root of `f` after checking that `[x_min, x_max]` brackets one.
    ///
    /// # Returns
    ///
    /// * `Err(SolverError::NoBracket)` - `f(x_min)` and `f(x_max)` share a strict sign
    /// * otherwise the result of [`find_root`](Self::find_root)
    pub fn find_root_bracketed<F>(&self, f: F, x_min: T, x_max: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        if f(x_min) * f(x_max) > T::zero() {
            return Err(SolverError::NoBracket {
                a: x_min.to_f64().unwrap_or(f64::NAN),
                b: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        self.find_root(f, x_min, x_max)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SearchConfig<T> {
        &self.config
    }
}

impl<T: Float> Default for BisectionSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
