//! Quantity-weighted Greek and payoff aggregation across a spot grid.

use chrono::NaiveDate;

use crate::analytical::{AnalyticalError, GreekCalculator};

use super::book::Portfolio;

/// Aggregated portfolio exposures, one value per grid point.
///
/// `payoff` is an expiry-payoff diagram: per position it accumulates
/// `quantity * (intrinsic_value_at_S - premium)`, with no discounting or
/// theta decay between the valuation date and expiry. The Greek curves
/// are evaluated at the valuation date with each position's remaining
/// time to expiry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioProfile {
    /// The spot grid the profile was evaluated on.
    pub spots: Vec<f64>,
    /// Net PnL at expiry per grid point.
    pub payoff: Vec<f64>,
    /// Net delta per grid point.
    pub delta: Vec<f64>,
    /// Net gamma per grid point.
    pub gamma: Vec<f64>,
    /// Net vega per grid point.
    pub vega: Vec<f64>,
    /// Net theta per grid point.
    pub theta: Vec<f64>,
    /// Net rho per grid point.
    pub rho: Vec<f64>,
}

/// Evaluates a portfolio over a spot grid.
///
/// For every position and every grid spot S, per-unit Greeks are
/// computed via [`GreekCalculator`] with the position's implied
/// volatility and its time to expiry relative to `valuation_date`
/// (floored at 1e-6 years), scaled by the signed quantity, and summed.
/// Aggregation is plain summation; there is no weighting or
/// normalisation.
///
/// # Errors
/// Propagates the first [`AnalyticalError`] encountered (for example a
/// non-positive grid spot); a failed evaluation returns no partial
/// profile.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use hedgelab_core::OptionType;
/// use hedgelab_models::{aggregate, OptionPosition, Portfolio};
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
/// let expiry = today + chrono::Days::new(60);
/// let mut book = Portfolio::new();
/// book.push(OptionPosition::new(OptionType::Call, 100.0, expiry, 1, 0.25, 5.0).unwrap());
///
/// let grid = book.spot_grid(200).unwrap();
/// let profile = aggregate(&book, &grid, 0.05, today).unwrap();
/// assert_eq!(profile.payoff.len(), 200);
/// ```
pub fn aggregate(
    portfolio: &Portfolio,
    grid: &[f64],
    rate: f64,
    valuation_date: NaiveDate,
) -> Result<PortfolioProfile, AnalyticalError> {
    let n = grid.len();
    let mut profile = PortfolioProfile {
        spots: grid.to_vec(),
        payoff: vec![0.0; n],
        delta: vec![0.0; n],
        gamma: vec![0.0; n],
        vega: vec![0.0; n],
        theta: vec![0.0; n],
        rho: vec![0.0; n],
    };

    for position in portfolio.iter() {
        let strike = position.strike();
        let sigma = position.implied_volatility();
        let quantity = position.quantity() as f64;
        let premium = position.premium();
        let option_type = position.option_type();
        let expiry = position.year_fraction(valuation_date);

        for (i, &spot) in grid.iter().enumerate() {
            let calc = GreekCalculator::new(spot, strike, expiry, rate, sigma, option_type)?;

            let intrinsic = option_type.intrinsic(spot, strike);
            profile.payoff[i] += quantity * (intrinsic - premium);
            profile.delta[i] += quantity * calc.delta();
            profile.gamma[i] += quantity * calc.gamma();
            profile.vega[i] += quantity * calc.vega();
            profile.theta[i] += quantity * calc.theta();
            profile.rho[i] += quantity * calc.rho();
        }
    }

    Ok(profile)
}
