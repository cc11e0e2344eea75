//! Monte Carlo integration configuration.

use crate::types::ConfigError;

/// Default number of random points per estimate.
pub const DEFAULT_EVENT_COUNT: usize = 100_000;

/// Maximum number of random points allowed.
pub const MAX_EVENTS: usize = 100_000_000;

/// Monte Carlo integration configuration.
///
/// Immutable once built. Use [`IntegrationConfigBuilder`] to construct
/// instances, or [`IntegrationConfig::default`] for 100 000 events and no
/// reseed.
///
/// # Examples
///
/// ```rust
/// use numlab_core::integration::IntegrationConfig;
///
/// let config = IntegrationConfig::builder()
///     .n_evt(200_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_evt(), 200_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegrationConfig {
    /// Number of random points drawn per estimate.
    n_evt: usize,
    /// Optional seed applied once before drawing.
    seed: Option<u64>,
}

impl IntegrationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> IntegrationConfigBuilder {
        IntegrationConfigBuilder::default()
    }

    /// Returns the number of random points per estimate.
    #[inline]
    pub fn n_evt(&self) -> usize {
        self.n_evt
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEventCount` if `n_evt` is 0 or greater
    /// than 100 000 000.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_evt == 0 || self.n_evt > MAX_EVENTS {
            return Err(ConfigError::InvalidEventCount(self.n_evt));
        }
        Ok(())
    }
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            n_evt: DEFAULT_EVENT_COUNT,
            seed: None,
        }
    }
}

/// Builder for [`IntegrationConfig`].
#[derive(Clone, Debug, Default)]
pub struct IntegrationConfigBuilder {
    n_evt: Option<usize>,
    seed: Option<u64>,
}

impl IntegrationConfigBuilder {
    /// Sets the number of random points per estimate.
    ///
    /// # Arguments
    ///
    /// * `n_evt` - Number of points in [1, 100_000_000]
    #[inline]
    pub fn n_evt(mut self, n_evt: usize) -> Self {
        self.n_evt = Some(n_evt);
        self
    }

    /// Sets the seed applied before each estimate.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_evt` is outside [1, 100_000_000].
    pub fn build(self) -> Result<IntegrationConfig, ConfigError> {
        let config = IntegrationConfig {
            n_evt: self.n_evt.unwrap_or(DEFAULT_EVENT_COUNT),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IntegrationConfig::default();
        assert_eq!(config.n_evt(), 100_000);
        assert_eq!(config.seed(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let built = IntegrationConfig::builder().build().unwrap();
        assert_eq!(built, IntegrationConfig::default());
    }

    #[test]
    fn test_builder_with_seed() {
        let config = IntegrationConfig::builder()
            .n_evt(1_000)
            .seed(42)
            .build()
            .unwrap();
        assert_eq!(config.n_evt(), 1_000);
        assert_eq!(config.seed(), Some(42));

        let cleared = IntegrationConfig::builder()
            .seed(42)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(cleared.seed(), None);
    }

    #[test]
    fn test_builder_rejects_zero_events() {
        let result = IntegrationConfig::builder().n_evt(0).build();
        assert_eq!(result, Err(ConfigError::InvalidEventCount(0)));
    }

    #[test]
    fn test_builder_rejects_too_many_events() {
        let result = IntegrationConfig::builder().n_evt(MAX_EVENTS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidEventCount(_))));
    }
}
