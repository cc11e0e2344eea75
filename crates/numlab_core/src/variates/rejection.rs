//! Acceptance-rejection sampling inside a bounding box.
//!
//! The box must bound the target density from above over the whole x range
//! (`f(x) <= y_max`). This is not checked. A box that does not bound `f`
//! biases the sample; a density that is zero almost everywhere in the box
//! makes [`rejection_box`] loop for arbitrarily long. [`try_rejection_box`]
//! caps the number of candidate points for callers that need a guarantee.

use crate::rng::UniformSource;
use crate::types::SamplingError;

/// Rectangular sampling region `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingBox {
    /// Lower bound of the horizontal axis.
    pub x_min: f64,
    /// Upper bound of the horizontal axis.
    pub x_max: f64,
    /// Lower bound of the vertical axis.
    pub y_min: f64,
    /// Upper bound of the vertical axis; must bound the density.
    pub y_max: f64,
}

impl SamplingBox {
    /// Creates a box from its four bounds.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Creates the box `[x_min, x_max] × [0, y_max]` used for non-negative densities.
    pub fn with_zero_floor(x_min: f64, x_max: f64, y_max: f64) -> Self {
        Self::new(x_min, x_max, 0.0, y_max)
    }

    /// Area of the box.
    pub fn area(&self) -> f64 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    #[inline]
    fn draw_point(&self, source: &mut UniformSource) -> (f64, f64) {
        let x = source.gen_range(self.x_min, self.x_max);
        let y = source.gen_range(self.y_min, self.y_max);
        (x, y)
    }
}

/// Draws one value distributed according to `density` by acceptance-rejection.
///
/// Candidate points `(x, y)` are drawn uniformly in `bounds` until
/// `y <= density(x)`; the accepted `x` is returned. Reseeds first if `seed`
/// is given. There is no iteration cap.
///
/// # Examples
///
/// ```
/// use numlab_core::rng::UniformSource;
/// use numlab_core::variates::{rejection_box, SamplingBox};
///
/// let mut source = UniformSource::from_seed(10);
/// let bounds = SamplingBox::with_zero_floor(0.0, std::f64::consts::PI, 1.0);
/// let x = rejection_box(&mut source, f64::sin, bounds, None);
/// assert!((0.0..=std::f64::consts::PI).contains(&x));
/// ```
pub fn rejection_box<F>(
    source: &mut UniformSource,
    density: F,
    bounds: SamplingBox,
    seed: Option<u64>,
) -> f64
where
    F: Fn(f64) -> f64,
{
    source.apply_seed(seed);
    loop {
        let (x, y) = bounds.draw_point(source);
        if y <= density(x) {
            return x;
        }
    }
}

/// Draws `n` accepted values, reseeding once if `seed` is given.
pub fn rejection_box_sequence<F>(
    source: &mut UniformSource,
    density: F,
    bounds: SamplingBox,
    n: usize,
    seed: Option<u64>,
) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    source.apply_seed(seed);
    (0..n)
        .map(|_| rejection_box(source, &density, bounds, None))
        .collect()
}

/// Acceptance-rejection with a cap on the number of candidate points.
///
/// Consumes the same draws as [`rejection_box`] and returns the same value
/// whenever a point is accepted within `max_attempts`.
///
/// # Errors
///
/// Returns [`SamplingError::NotConverged`] when no candidate is accepted
/// within `max_attempts`.
pub fn try_rejection_box<F>(
    source: &mut UniformSource,
    density: F,
    bounds: SamplingBox,
    max_attempts: usize,
    seed: Option<u64>,
) -> Result<f64, SamplingError>
where
    F: Fn(f64) -> f64,
{
    source.apply_seed(seed);
    for attempt in 1..=max_attempts {
        let (x, y) = bounds.draw_point(source);
        if y <= density(x) {
            tracing::trace!(attempt, "rejection sampling accepted a point");
            return Ok(x);
        }
    }
    Err(SamplingError::NotConverged {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_box_area() {
        let bounds = SamplingBox::new(-1.0, 3.0, 0.5, 2.5);
        assert_abs_diff_eq!(bounds.area(), 8.0);
        assert_eq!(SamplingBox::with_zero_floor(0.0, 1.0, 2.0).y_min, 0.0);
    }

    #[test]
    fn test_uniform_density_accepts_everything() {
        let mut source = UniformSource::from_seed(1);
        let bounds = SamplingBox::with_zero_floor(2.0, 4.0, 1.0);
        let sample = rejection_box_sequence(&mut source, |_| 1.0, bounds, 10_000, None);

        assert!(sample.iter().all(|&x| (2.0..=4.0).contains(&x)));
        let mean = sample.iter().sum::<f64>() / sample.len() as f64;
        assert_abs_diff_eq!(mean, 3.0, epsilon = 0.03);
    }

    #[test]
    fn test_triangular_density_mean() {
        // f(x) = x on [0, 1] has mean 2/3.
        let mut source = UniformSource::from_seed(55);
        let bounds = SamplingBox::with_zero_floor(0.0, 1.0, 1.0);
        let sample = rejection_box_sequence(&mut source, |x| x, bounds, 50_000, None);
        let mean = sample.iter().sum::<f64>() / sample.len() as f64;
        assert_abs_diff_eq!(mean, 2.0 / 3.0, epsilon = 0.01);
    }

    #[test]
    fn test_capped_matches_uncapped() {
        let bounds = SamplingBox::with_zero_floor(0.0, 2.0, 1.0);
        let density = |x: f64| (-x).exp();
        let a = rejection_box(&mut UniformSource::from_entropy(), density, bounds, Some(8));
        let b = try_rejection_box(&mut UniformSource::from_entropy(), density, bounds, 1_000, Some(8))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_capped_reports_not_converged() {
        let mut source = UniformSource::from_seed(2);
        let bounds = SamplingBox::new(0.0, 1.0, 1.0, 2.0);
        // Density never reaches the box floor.
        let err = try_rejection_box(&mut source, |_| 0.0, bounds, 100, None).unwrap_err();
        assert_eq!(err, SamplingError::NotConverged { attempts: 100 });
    }

    #[test]
    fn test_sequence_reproducible_with_seed() {
        let bounds = SamplingBox::with_zero_floor(-1.0, 1.0, 1.0);
        let density = |x: f64| 1.0 - x * x;
        let mut source = UniformSource::from_entropy();
        let a = rejection_box_sequence(&mut source, density, bounds, 300, Some(19));
        let b = rejection_box_sequence(&mut source, density, bounds, 300, Some(19));
        assert_eq!(a, b);
    }
}
