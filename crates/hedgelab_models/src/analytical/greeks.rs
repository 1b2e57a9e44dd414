//! Analytic Greeks with cached d1/d2.
//!
//! [`GreekCalculator`] is an immutable value object built once per
//! (S, K, T, r, sigma, type) tuple. The d1/d2 terms are computed at
//! construction (q = 0 form) and every accessor is a pure function over
//! the cached values.

use num_traits::Float;

use hedgelab_core::{norm_cdf, norm_pdf, OptionType};

use super::error::AnalyticalError;

/// The five first-order sensitivities for one option at one market
/// point.
///
/// Derived on demand, never persisted. Iteration order is fixed:
/// delta, gamma, vega, theta, rho.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekSet<T> {
    /// dV/dS
    pub delta: T,
    /// d2V/dS2
    pub gamma: T,
    /// dV/dsigma
    pub vega: T,
    /// Calendar decay (negative of dV/dT)
    pub theta: T,
    /// dV/dr
    pub rho: T,
}

impl<T: Copy> GreekSet<T> {
    /// Iterates the Greeks as (name, value) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, T)> {
        [
            ("delta", self.delta),
            ("gamma", self.gamma),
            ("vega", self.vega),
            ("theta", self.theta),
            ("rho", self.rho),
        ]
        .into_iter()
    }
}

/// Immutable Black-Scholes Greek calculator (q = 0).
///
/// Precomputes
///
/// ```text
/// d1 = (ln(S/K) + (r + sigma^2/2) T) / (sigma sqrt(T))
/// d2 = d1 - sigma sqrt(T)
/// ```
///
/// at construction and exposes pure accessors over the cached terms.
///
/// Unlike [`bs_price`](super::bs_price), the calculator has no fallback
/// for `T <= 0` or `sigma <= 0`: in those cases d1/d2 are NaN or
/// infinite and the accessors propagate that. Callers wanting a total
/// function must floor T (as the portfolio aggregator does) or use
/// `bs_price`.
///
/// # Examples
/// ```
/// use hedgelab_core::OptionType;
/// use hedgelab_models::GreekCalculator;
///
/// let calc = GreekCalculator::<f64>::new(100.0, 105.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert!((calc.delta() - 0.5422).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreekCalculator<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
    d1: T,
    d2: T,
}

impl<T: Float> GreekCalculator<T> {
    /// Creates a calculator, validating inputs and caching d1/d2.
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteInput` if any input is NaN or
    ///   infinite
    /// - `AnalyticalError::InvalidSpot` / `InvalidStrike` if S or K is
    ///   non-positive
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        for (name, value) in [
            ("S", spot),
            ("K", strike),
            ("T", expiry),
            ("r", rate),
            ("sigma", volatility),
        ] {
            if !value.is_finite() {
                return Err(AnalyticalError::NonFiniteInput {
                    name,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

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

        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = volatility * expiry.sqrt();
        let d1 = ((spot / strike).ln() + (rate + half * volatility * volatility) * expiry)
            / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
            d1,
            d2,
        })
    }

    /// Returns the cached d1 term.
    #[inline]
    pub fn d1(&self) -> T {
        self.d1
    }

    /// Returns the cached d2 term.
    #[inline]
    pub fn d2(&self) -> T {
        self.d2
    }

    /// Delta: Phi(d1) for a call, Phi(d1) - 1 for a put.
    #[inline]
    pub fn delta(&self) -> T {
        let n_d1 = norm_cdf(self.d1);
        match self.option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - T::one(),
        }
    }

    /// Gamma: phi(d1) / (S sigma sqrt(T)), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> T {
        norm_pdf(self.d1) / (self.spot * self.volatility * self.expiry.sqrt())
    }

    /// Vega: S phi(d1) sqrt(T), identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> T {
        self.spot * norm_pdf(self.d1) * self.expiry.sqrt()
    }

    /// Theta: -(S phi(d1) sigma) / (2 sqrt(T)) minus the rate carry term
    /// for a call, plus it for a put.
    #[inline]
    pub fn theta(&self) -> T {
        let two = T::from(2.0).unwrap();
        let decay = -(self.spot * norm_pdf(self.d1) * self.volatility)
            / (two * self.expiry.sqrt());
        let carry = self.rate * self.strike * (-self.rate * self.expiry).exp();
        match self.option_type {
            OptionType::Call => decay - carry * norm_cdf(self.d2),
            OptionType::Put => decay + carry * norm_cdf(-self.d2),
        }
    }

    /// Rho: K T e^(-rT) Phi(d2) for a call, -K T e^(-rT) Phi(-d2) for a
    /// put.
    #[inline]
    pub fn rho(&self) -> T {
        let df = self.strike * self.expiry * (-self.rate * self.expiry).exp();
        match self.option_type {
            OptionType::Call => df * norm_cdf(self.d2),
            OptionType::Put => -df * norm_cdf(-self.d2),
        }
    }

    /// Evaluates all five Greeks into a [`GreekSet`].
    pub fn greek_set(&self) -> GreekSet<T> {
        GreekSet {
            delta: self.delta(),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(),
            rho: self.rho(),
        }
    }
}
