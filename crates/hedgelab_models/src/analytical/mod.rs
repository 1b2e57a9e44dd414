//! Closed-form Black-Scholes-Merton pricing and Greeks.

mod black_scholes;
mod error;
mod greeks;

pub use black_scholes::bs_price;
pub use error::AnalyticalError;
pub use greeks::{GreekCalculator, GreekSet};
