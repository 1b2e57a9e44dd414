//! Core error types.

use thiserror::Error;

/// Errors raised by the foundation layer.
///
/// # Variants
/// - `InvalidOptionType`: a string did not parse as "call" or "put"
///
/// # Examples
/// ```
/// use hedgelab_core::types::{CoreError, OptionType};
///
/// let err = "straddle".parse::<OptionType>().unwrap_err();
/// assert!(matches!(err, CoreError::InvalidOptionType { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Option type string was neither "call" nor "put".
    #[error("invalid option type '{value}': expected 'call' or 'put'")]
    InvalidOptionType {
        /// The rejected input string
        value: String,
    },
}
