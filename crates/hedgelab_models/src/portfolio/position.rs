//! Validated option position.

use chrono::NaiveDate;
use thiserror::Error;

use hedgelab_core::OptionType;

/// Time-to-expiry floor in years, applied when a position's expiry date
/// has passed or falls on the valuation date.
pub(crate) const MIN_YEAR_FRACTION: f64 = 1e-6;

/// Position construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PositionError {
    /// Strike price is non-positive.
    #[error("invalid strike: K = {strike} (must be positive)")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },

    /// Implied volatility is non-positive or non-finite.
    #[error("invalid implied volatility: sigma = {volatility} (must be positive)")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// Premium is negative or non-finite.
    #[error("invalid premium: {premium} (must be non-negative)")]
    InvalidPremium {
        /// The rejected premium value
        premium: f64,
    },
}

/// One option position in a portfolio.
///
/// Immutable after construction: replacing a position means removing it
/// from the portfolio and adding a new one. `quantity` is signed
/// (positive = long, negative = short).
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use hedgelab_core::OptionType;
/// use hedgelab_models::OptionPosition;
///
/// let expiry = NaiveDate::from_ymd_opt(2026, 10, 22).unwrap();
/// let pos = OptionPosition::new(OptionType::Call, 100.0, expiry, 1, 0.25, 5.0).unwrap();
/// assert_eq!(pos.quantity(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPosition {
    option_type: OptionType,
    strike: f64,
    expiry: NaiveDate,
    quantity: i64,
    implied_volatility: f64,
    premium: f64,
}

impl OptionPosition {
    /// Creates a position with validation.
    ///
    /// # Errors
    /// - `PositionError::InvalidStrike` if `strike <= 0` or non-finite
    /// - `PositionError::InvalidVolatility` if
    ///   `implied_volatility <= 0` or non-finite
    /// - `PositionError::InvalidPremium` if `premium < 0` or non-finite
    pub fn new(
        option_type: OptionType,
        strike: f64,
        expiry: NaiveDate,
        quantity: i64,
        implied_volatility: f64,
        premium: f64,
    ) -> Result<Self, PositionError> {
        if !(strike.is_finite() && strike > 0.0) {
            return Err(PositionError::InvalidStrike { strike });
        }
        if !(implied_volatility.is_finite() && implied_volatility > 0.0) {
            return Err(PositionError::InvalidVolatility {
                volatility: implied_volatility,
            });
        }
        if !(premium.is_finite() && premium >= 0.0) {
            return Err(PositionError::InvalidPremium { premium });
        }

        Ok(Self {
            option_type,
            strike,
            expiry,
            quantity,
            implied_volatility,
            premium,
        })
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the expiry date.
    #[inline]
    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    /// Returns the signed quantity (positive = long, negative = short).
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns the implied volatility (0-1 scale).
    #[inline]
    pub fn implied_volatility(&self) -> f64 {
        self.implied_volatility
    }

    /// Returns the premium paid (long) or received (short) at entry.
    #[inline]
    pub fn premium(&self) -> f64 {
        self.premium
    }

    /// ACT/365 year fraction from `valuation_date` to expiry, floored
    /// at 1e-6 years so near-expiry positions stay evaluable.
    pub fn year_fraction(&self, valuation_date: NaiveDate) -> f64 {
        let days = (self.expiry - valuation_date).num_days() as f64;
        (days / 365.0).max(MIN_YEAR_FRACTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 22).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let pos = OptionPosition::new(OptionType::Put, 90.0, expiry(), -2, 0.3, 4.0).unwrap();
        assert_eq!(pos.option_type(), OptionType::Put);
        assert_eq!(pos.strike(), 90.0);
        assert_eq!(pos.quantity(), -2);
        assert_eq!(pos.implied_volatility(), 0.3);
        assert_eq!(pos.premium(), 4.0);
    }

    #[test]
    fn test_new_invalid_strike() {
        let result = OptionPosition::new(OptionType::Call, 0.0, expiry(), 1, 0.25, 5.0);
        assert!(matches!(result, Err(PositionError::InvalidStrike { .. })));
    }

    #[test]
    fn test_new_invalid_volatility() {
        let result = OptionPosition::new(OptionType::Call, 100.0, expiry(), 1, -0.25, 5.0);
        assert!(matches!(
            result,
            Err(PositionError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_new_invalid_premium() {
        let result = OptionPosition::new(OptionType::Call, 100.0, expiry(), 1, 0.25, -1.0);
        assert!(matches!(result, Err(PositionError::InvalidPremium { .. })));
    }

    #[test]
    fn test_year_fraction() {
        let pos = OptionPosition::new(OptionType::Call, 100.0, expiry(), 1, 0.25, 5.0).unwrap();

        let valuation = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let days = (expiry() - valuation).num_days() as f64;
        assert_eq!(pos.year_fraction(valuation), days / 365.0);
    }

    #[test]
    fn test_year_fraction_floored_after_expiry() {
        let pos = OptionPosition::new(OptionType::Call, 100.0, expiry(), 1, 0.25, 5.0).unwrap();

        // On expiry and beyond, the floor keeps T strictly positive
        assert_eq!(pos.year_fraction(expiry()), MIN_YEAR_FRACTION);
        let later = expiry() + chrono::Days::new(30);
        assert_eq!(pos.year_fraction(later), MIN_YEAR_FRACTION);
    }
}
