//! Descriptive statistics over samples.
//!
//! All functions take `&[f64]` and return `None` when the sample is too
//! small for the statistic to be defined.
//!
//! ## Modules
//!
//! - `descriptive`: mean, variance, standard deviation and error, skewness, kurtosis
//! - `likelihood`: likelihood and log-likelihood of an i.i.d. sample under a pdf
//! - `histogram`: equal-width binning and the Sturges bin-count rule
//!
//! ## Bessel Correction
//!
//! Functions with a `bessel` flag divide by `n - 1` when it is `true` and by
//! `n` otherwise.
//!
//! ```
//! use numlab_core::stats;
//!
//! let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(stats::mean(&sample), Some(5.0));
//! assert_eq!(stats::variance(&sample, false), Some(4.0));
//! assert_eq!(stats::std_dev(&sample, false), Some(2.0));
//! ```

mod descriptive;
mod histogram;
mod likelihood;

pub use descriptive::{kurtosis, mean, skewness, std_dev, std_error, variance, Summary};
pub use histogram::{sturges_bin_count, Histogram};
pub use likelihood::{likelihood, log_likelihood};
