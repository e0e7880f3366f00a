//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use engine_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(100_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 100_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPathCount` if `n_paths` is 0 or
    /// greater than [`MAX_PATHS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API with validation at build time.
///
/// # Examples
///
/// ```rust
/// use engine_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 10_000_000]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` is not set or invalid.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_paths,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
