//! Simulation configuration.

use super::error::SimError;

/// Maximum number of simulated paths.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps per path.
pub const MAX_STEPS: usize = 10_000;

/// Immutable Monte Carlo run configuration.
///
/// Built through [`SimConfigBuilder`], which validates at build time.
///
/// # Examples
/// ```
/// use hedgelab_sim::SimConfig;
///
/// let config = SimConfig::builder()
///     .n_steps(252)
///     .n_paths(300)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    n_steps: usize,
    n_paths: usize,
    seed: Option<u64>,
}

impl SimConfig {
    /// Creates a configuration builder.
    #[inline]
    pub fn builder() -> SimConfigBuilder {
        SimConfigBuilder::default()
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the seed, if one was fixed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builder for [`SimConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimConfigBuilder {
    n_steps: Option<usize>,
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl SimConfigBuilder {
    /// Sets the number of time steps per path (in [1, MAX_STEPS]).
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the number of paths (in [1, MAX_PATHS]).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Fixes the base seed for reproducible runs. Without it, a fresh
    /// seed is drawn from entropy on every run.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// - `SimError::InvalidStepCount` if `n_steps` is missing, zero, or
    ///   above `MAX_STEPS`
    /// - `SimError::InvalidPathCount` if `n_paths` is missing, zero, or
    ///   above `MAX_PATHS`
    pub fn build(self) -> Result<SimConfig, SimError> {
        let n_steps = self.n_steps.unwrap_or(0);
        if n_steps == 0 || n_steps > MAX_STEPS {
            return Err(SimError::InvalidStepCount(n_steps));
        }

        let n_paths = self.n_paths.unwrap_or(0);
        if n_paths == 0 || n_paths > MAX_PATHS {
            return Err(SimError::InvalidPathCount(n_paths));
        }

        Ok(SimConfig {
            n_steps,
            n_paths,
            seed: self.seed,
        })
    }
}
