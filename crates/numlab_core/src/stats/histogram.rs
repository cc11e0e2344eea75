//! Equal-width histogram binning.
//!
//! Produces bin edges and counts for a plotting front end; rendering itself
//! is not done here.

/// Sturges' rule: `ceil(log2 n) + 1` bins for `n` values.
///
/// Returns 1 for `n <= 1`.
///
/// # Examples
///
/// ```
/// use numlab_core::stats::sturges_bin_count;
///
/// assert_eq!(sturges_bin_count(1_000), 11);
/// assert_eq!(sturges_bin_count(1_024), 11);
/// assert_eq!(sturges_bin_count(1_025), 12);
/// ```
pub fn sturges_bin_count(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    // ceil(log2 n) for n >= 2, exact in integer arithmetic
    let ceil_log2 = (usize::BITS - (n - 1).leading_zeros()) as usize;
    ceil_log2 + 1
}

/// Equal-width histogram over `[min, max]` of a sample.
///
/// The last bin is closed on the right so the maximum is counted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl Histogram {
    /// Bins `sample` into `bins` equal-width bins spanning its range.
    ///
    /// Non-finite values are ignored. Returns `None` when `bins == 0` or no
    /// finite value is present. A sample with a single distinct value gets a
    /// unit-width range centred on it.
    pub fn new(sample: &[f64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }
        let finite = || sample.iter().copied().filter(|x| x.is_finite());
        let mut lo = finite().fold(f64::INFINITY, f64::min);
        let mut hi = finite().fold(f64::NEG_INFINITY, f64::max);
        if !lo.is_finite() {
            return None;
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * width).collect();
        let mut counts = vec![0u64; bins];
        for x in finite() {
            let index = (((x - lo) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        Some(Self { edges, counts })
    }

    /// Bins `sample` with the Sturges bin count.
    pub fn sturges(sample: &[f64]) -> Option<Self> {
        Self::new(sample, sturges_bin_count(sample.len()))
    }

    /// Bin edges; one more than the number of bins.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Counts per bin.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Midpoint of each bin.
    pub fn centres(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    /// Total number of values binned.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
