//! # Uniform Random Source
//!
//! Every sampler and estimator in this crate draws from a [`UniformSource`],
//! a seeded wrapper around `rand::rngs::StdRng`.
//!
//! ## Reseed Lifecycle
//!
//! The source is an explicit value, not hidden global state. Callers that
//! share one source observe each other's reseeds exactly as a process-wide
//! generator would; callers that need isolation hold their own instance.
//!
//! - `Some(seed)` passed to a batch operation reseeds once before the batch
//! - `None` continues from the current state of the stream
//!
//! ## Usage Example
//!
//! ```rust
//! use numlab_core::rng::UniformSource;
//!
//! let mut source = UniformSource::from_seed(12345);
//!
//! // Single draws
//! let u = source.gen_uniform();
//! let x = source.gen_range(-1.0, 1.0);
//! assert!((0.0..1.0).contains(&u));
//! assert!((-1.0..1.0).contains(&x));
//!
//! // Reproducible batches
//! let a = source.uniform01(100, Some(7));
//! let b = source.uniform01(100, Some(7));
//! assert_eq!(a, b);
//! ```

mod source;

pub use source::UniformSource;

#[cfg(test)]
mod tests;
