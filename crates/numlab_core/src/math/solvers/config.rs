//! Search configuration types.

use crate::types::ConfigError;
use num_traits::Float;

/// Default bracket width at which a search stops.
pub const DEFAULT_PRECISION: f64 = 1e-4;

/// Configuration for bracketing searches.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the precision (e.g., `f64`)
///
/// # Example
///
/// ```
/// use numlab_core::math::solvers::SearchConfig;
///
/// let config: SearchConfig<f64> = SearchConfig::default();
/// assert_eq!(config.precision, 1e-4);
///
/// let custom = SearchConfig {
///     precision: 1e-9,
///     max_iterations: 500,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig<T: Float> {
    /// The search stops once the bracket width is `<= precision`.
    pub precision: T,

    /// Maximum number of bracket reductions before giving up.
    ///
    /// Only reachable when the bracket stops shrinking because the precision
    /// is below the floating-point spacing at the bracket's magnitude.
    pub max_iterations: usize,
}

impl<T: Float> Default for SearchConfig<T> {
    /// Default values:
    /// - `precision`: 1e-4
    /// - `max_iterations`: 10 000
    fn default() -> Self {
        Self {
            precision: T::from(DEFAULT_PRECISION).unwrap_or_else(T::epsilon),
            max_iterations: 10_000,
        }
    }
}

impl<T: Float> SearchConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `precision <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use numlab_core::math::solvers::SearchConfig;
    ///
    /// let config = SearchConfig::new(1e-6, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(precision: T, max_iterations: usize) -> Self {
        assert!(precision > T::zero(), "precision must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            precision,
            max_iterations,
        }
    }

    /// Fallible counterpart of [`new`](Self::new) for user-supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `precision` is not a
    /// positive finite number or `max_iterations == 0`.
    pub fn try_new(precision: T, max_iterations: usize) -> Result<Self, ConfigError> {
        if !(precision > T::zero() && precision.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "precision",
                value: format!(
                    "must be positive and finite, got {}",
                    precision.to_f64().unwrap_or(f64::NAN)
                ),
            });
        }
        if max_iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_iterations",
                value: "must be > 0".to_string(),
            });
        }
        Ok(Self {
            precision,
            max_iterations,
        })
    }

    /// Default iteration cap with the given precision.
    ///
    /// # Panics
    ///
    /// Panics if `precision <= 0`.
    pub fn with_precision(precision: T) -> Self {
        Self::new(precision, Self::default().max_iterations)
    }
}
