//! # hedgelab_models
//!
//! Analytical layer for the hedgelab workspace.
//!
//! - [`analytical`]: closed-form Black-Scholes-Merton pricing and the
//!   cached-d1/d2 Greek calculator
//! - [`portfolio`]: validated option positions, insertion-ordered
//!   portfolios, and grid aggregation of quantity-weighted exposures
//!
//! All computation here is deterministic and side-effect free; the same
//! inputs always produce bit-identical outputs.

pub mod analytical;
pub mod portfolio;

pub use analytical::{bs_price, AnalyticalError, GreekCalculator, GreekSet};
pub use portfolio::{aggregate, OptionPosition, Portfolio, PortfolioProfile, PositionError};
