//! Simulation error types.

use thiserror::Error;

/// Validation errors for simulation configuration and parameters.
///
/// Raised fail-fast before any path is generated; a degenerate
/// simulation (non-positive maturity, zero steps, zero paths) is
/// rejected rather than silently producing an empty result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Path count outside [1, MAX_PATHS].
    #[error("invalid path count {0}: must be in [1, 10000000]")]
    InvalidPathCount(usize),

    /// Step count outside [1, MAX_STEPS].
    #[error("invalid step count {0}: must be in [1, 10000]")]
    InvalidStepCount(usize),

    /// Time to maturity is non-positive or non-finite.
    #[error("invalid maturity: T = {maturity} (must be positive)")]
    InvalidMaturity {
        /// The rejected maturity value
        maturity: f64,
    },

    /// Some other parameter failed validation.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}
