//! Non-uniform variate generators built on [`UniformSource`](crate::rng::UniformSource).
//!
//! ## Available Generators
//!
//! ### Central-limit approximations
//!
//! - [`clt_mean_sigma`]: Gaussian with the requested mean and standard deviation
//! - [`clt_min_max`]: average of uniforms over an explicit range (not a calibrated Gaussian)
//!
//! ### Inverse-transform
//!
//! - [`exponential_inverse`]: exact exponential via `-ln(1 - u) * t0`
//! - [`poisson_inverse`]: Poisson counts from Exponential(1) waiting times
//! - [`inverse_transform`]: any distribution given its inverse CDF
//!
//! ### Acceptance-rejection
//!
//! - [`rejection_box`]: samples an unnormalised density bounded by a [`SamplingBox`]
//!
//! ## Seeding
//!
//! Every batch function takes `seed: Option<u64>` and reseeds at most once,
//! before the first element of the batch.
//!
//! ## Examples
//!
//! ```
//! use numlab_core::rng::UniformSource;
//! use numlab_core::variates::{clt_mean_sigma_sequence, exponential_inverse, DEFAULT_CLT_TERMS};
//!
//! let mut source = UniformSource::from_seed(42);
//!
//! let gauss = clt_mean_sigma_sequence(&mut source, 5.0, 1.0, 1_000, DEFAULT_CLT_TERMS, None);
//! let decays = exponential_inverse(&mut source, 2.0, 1_000, None);
//!
//! assert_eq!(gauss.len(), 1_000);
//! assert!(decays.iter().all(|&t| t >= 0.0));
//! ```

mod clt;
mod inverse;
mod rejection;

pub use clt::{
    clt_mean_sigma, clt_mean_sigma_sequence, clt_min_max, clt_min_max_sequence,
    DEFAULT_CLT_TERMS,
};
pub use inverse::{
    exponential_inverse, inverse_transform, poisson_count, poisson_inverse, try_poisson_count,
};
pub use rejection::{rejection_box, rejection_box_sequence, try_rejection_box, SamplingBox};
