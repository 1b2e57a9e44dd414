//! Option positions, portfolios, and grid aggregation.

mod aggregator;
mod book;
mod position;

pub use aggregator::{aggregate, PortfolioProfile};
pub use book::Portfolio;
pub use position::{OptionPosition, PositionError};
