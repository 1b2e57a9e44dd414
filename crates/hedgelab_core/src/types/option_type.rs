//! Option type enumeration.
//!
//! Replaces the string comparison against "call"/"put" found in loosely
//! typed front ends with a closed two-variant enum, so an invalid option
//! type is a construction-time error rather than a runtime string match.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::CoreError;

/// European option flavour.
///
/// # Examples
/// ```
/// use hedgelab_core::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert!(call.is_call());
///
/// // Intrinsic value: max(S - K, 0) for a call
/// assert_eq!(call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(call.intrinsic(90.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: pays max(S - K, 0) at expiry.
    Call,
    /// Put option: pays max(K - S, 0) at expiry.
    Put,
}

impl OptionType {
    /// Returns the intrinsic (immediate exercise) value.
    ///
    /// - Call: max(S - K, 0)
    /// - Put: max(K - S, 0)
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (spot - strike).max(zero),
            OptionType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(CoreError::InvalidOptionType {
                value: s.to_string(),
            }),
        }
    }
}
