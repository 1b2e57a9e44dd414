//! Black-Scholes-Merton pricing for European options.
//!
//! ## Formulas
//!
//! With continuous dividend yield q:
//!
//! ```text
//! d1 = (ln(S/K) + (r - q + sigma^2/2) T) / (sigma sqrt(T))
//! d2 = d1 - sigma sqrt(T)
//! call = S e^(-qT) Phi(d1) - K e^(-rT) Phi(d2)
//! put  = K e^(-rT) Phi(-d2) - S e^(-qT) Phi(-d1)
//! ```
//!
//! ## Degenerate inputs
//!
//! Evaluated in this precedence order:
//! 1. `T <= 0`: the option has expired; the undiscounted intrinsic value
//!    is returned.
//! 2. `sigma <= 0`: the terminal price is deterministic; the discounted
//!    intrinsic value `e^(-rT) max(...)` is returned.

use num_traits::Float;

use hedgelab_core::{norm_cdf, OptionType};

use super::error::AnalyticalError;

/// Validates that a scalar is finite, recording its parameter name on
/// failure.
#[inline]
fn require_finite<T: Float>(name: &'static str, value: T) -> Result<(), AnalyticalError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalyticalError::NonFiniteInput {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}

/// Computes the Black-Scholes-Merton price of a European option.
///
/// Pure function of its inputs: no state, no side effects, and
/// bit-identical results on repeated calls.
///
/// # Arguments
/// * `spot` - Current spot price S (must be positive)
/// * `strike` - Strike price K (must be positive)
/// * `expiry` - Time to maturity T in years (may be <= 0: expired)
/// * `rate` - Risk-free rate r (any sign)
/// * `volatility` - Volatility sigma (<= 0 triggers the deterministic
///   fallback)
/// * `option_type` - Call or put
/// * `dividend_yield` - Continuous dividend yield q
///
/// # Errors
/// - `AnalyticalError::NonFiniteInput` if any input is NaN or infinite
/// - `AnalyticalError::InvalidSpot` / `InvalidStrike` if S or K is
///   non-positive
///
/// # Examples
/// ```
/// use hedgelab_core::OptionType;
/// use hedgelab_models::bs_price;
///
/// let call: f64 = bs_price(100.0, 105.0, 1.0, 0.05, 0.2, OptionType::Call, 0.0).unwrap();
/// assert!((call - 8.0214).abs() < 1e-3);
/// ```
pub fn bs_price<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
    dividend_yield: T,
) -> Result<T, AnalyticalError> {
    require_finite("S", spot)?;
    require_finite("K", strike)?;
    require_finite("T", expiry)?;
    require_finite("r", rate)?;
    require_finite("sigma", volatility)?;
    require_finite("q", dividend_yield)?;

    let zero = T::zero();
    if spot <= zero {
        return Err(AnalyticalError::InvalidSpot {
            spot: spot.to_f64().unwrap_or(f64::NAN),
        });
    }
    if strike <= zero {
        return Err(AnalyticalError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }

    // Expired: intrinsic value, no discounting
    if expiry <= zero {
        return Ok(option_type.intrinsic(spot, strike));
    }

    // Deterministic terminal price: discounted intrinsic value
    if volatility <= zero {
        let discount = (-rate * expiry).exp();
        return Ok(discount * option_type.intrinsic(spot, strike));
    }

    let half = T::from(0.5).unwrap();
    let sqrt_t = expiry.sqrt();
    let vol_sqrt_t = volatility * sqrt_t;

    let d1 = ((spot / strike).ln()
        + (rate - dividend_yield + half * volatility * volatility) * expiry)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    let df_rate = (-rate * expiry).exp();
    let df_div = (-dividend_yield * expiry).exp();

    let price = match option_type {
        OptionType::Call => spot * df_div * norm_cdf(d1) - strike * df_rate * norm_cdf(d2),
        OptionType::Put => strike * df_rate * norm_cdf(-d2) - spot * df_div * norm_cdf(-d1),
    };

    Ok(price)
}
