//! Unit tests for the uniform source.
//!
//! This module contains tests verifying:
//! - Seed reproducibility and reseed semantics
//! - Range bounds of single and batch draws
//! - Equivalence of the `[0, 1)` and `[lo, hi)` paths
//! - Statistical properties via property-based testing

use super::*;
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

/// Verifies that the same seed produces identical sequences.
#[test]
fn test_seed_reproducibility() {
    let mut source1 = UniformSource::from_seed(12345);
    let mut source2 = UniformSource::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(source1.gen_uniform(), source2.gen_uniform());
    }
}

#[test]
fn test_seed_is_tracked() {
    let mut source = UniformSource::from_seed(42);
    assert_eq!(source.seed(), Some(42));

    source.reseed(7);
    assert_eq!(source.seed(), Some(7));

    let entropy = UniformSource::from_entropy();
    assert_eq!(entropy.seed(), None);
}

/// A reseed mid-stream restarts the sequence from the beginning.
#[test]
fn test_reseed_restarts_stream() {
    let mut source = UniformSource::from_seed(99);
    let first: Vec<f64> = (0..10).map(|_| source.gen_uniform()).collect();

    source.reseed(99);
    let second: Vec<f64> = (0..10).map(|_| source.gen_uniform()).collect();

    assert_eq!(first, second);
}

/// `None` continues the stream instead of restarting it.
#[test]
fn test_apply_seed_none_continues() {
    let mut source = UniformSource::from_seed(5);
    let first = source.uniform01(10, None);
    let second = source.uniform01(10, None);
    assert_ne!(first, second);

    let mut reference = UniformSource::from_seed(5);
    let joined = reference.uniform01(20, None);
    assert_eq!(&joined[..10], &first[..]);
    assert_eq!(&joined[10..], &second[..]);
}

/// `Some(0)` is a real seed, not a sentinel.
#[test]
fn test_zero_seed_reseeds() {
    let mut source = UniformSource::from_seed(1);
    let _ = source.gen_uniform();
    let a = source.uniform01(5, Some(0));
    let b = UniformSource::from_seed(0).uniform01(5, None);
    assert_eq!(a, b);
}

/// Verifies that uniform values are in the correct range [0, 1).
#[test]
fn test_uniform_range() {
    let mut source = UniformSource::from_seed(42);

    for _ in 0..10_000 {
        let value = source.gen_uniform();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

#[test]
fn test_fill_uniform_and_empty_buffer() {
    let mut source = UniformSource::from_seed(42);
    let mut buffer = vec![0.0; 1000];
    source.fill_uniform(&mut buffer);
    assert!(buffer.iter().all(|&v| (0.0..1.0).contains(&v)));

    let mut empty: Vec<f64> = vec![];
    source.fill_uniform(&mut empty);
    assert!(source.uniform01(0, Some(3)).is_empty());
}

/// The `[0, 1)` sequence and the `[0, 1)` range sequence share the same draws.
#[test]
fn test_uniform01_matches_unit_range_sequence() {
    let mut source = UniformSource::from_seed(2024);
    let unit = source.uniform01(1000, Some(11));
    let ranged = source.uniform_range_sequence(0.0, 1.0, 1000, Some(11));
    assert_eq!(unit, ranged);
}

#[test]
fn test_uniform_moments() {
    let mut source = UniformSource::from_seed(8);
    let n = 100_000;
    let sample = source.uniform_range_sequence(2.0, 6.0, n, None);

    let mean = sample.iter().sum::<f64>() / n as f64;
    let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    // Uniform on [2, 6): mean 4, variance 16/12
    assert_abs_diff_eq!(mean, 4.0, epsilon = 0.02);
    assert_abs_diff_eq!(variance, 16.0 / 12.0, epsilon = 0.02);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_gen_range_within_bounds(
        seed in any::<u64>(),
        lo in -1.0e6f64..1.0e6,
        width in 1.0e-3f64..1.0e6,
    ) {
        let hi = lo + width;
        let mut source = UniformSource::from_seed(seed);
        for _ in 0..50 {
            let x = source.gen_range(lo, hi);
            prop_assert!(x >= lo && x <= hi, "{} outside [{}, {})", x, lo, hi);
        }
    }

    #[test]
    fn test_batches_reproducible(seed in any::<u64>(), n in 0usize..200) {
        let mut a = UniformSource::from_entropy();
        let mut b = UniformSource::from_entropy();
        prop_assert_eq!(a.uniform01(n, Some(seed)), b.uniform01(n, Some(seed)));
    }
}
