//! Error types for the analytical layer.

use thiserror::Error;

/// Errors raised by pricing and Greek computation.
///
/// These are validation errors: they are raised immediately on invalid
/// input and never retried. A failed computation returns no partial
/// result.
///
/// # Examples
/// ```
/// use hedgelab_core::OptionType;
/// use hedgelab_models::{bs_price, AnalyticalError};
///
/// let err = bs_price(-100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 0.0).unwrap_err();
/// assert!(matches!(err, AnalyticalError::InvalidSpot { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticalError {
    /// Spot price is non-positive.
    #[error("invalid spot: S = {spot} (must be positive)")]
    InvalidSpot {
        /// The rejected spot value
        spot: f64,
    },

    /// Strike price is non-positive.
    #[error("invalid strike: K = {strike} (must be positive)")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },

    /// An input is NaN or infinite.
    #[error("non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Parameter name (S, K, T, r, sigma or q)
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}
