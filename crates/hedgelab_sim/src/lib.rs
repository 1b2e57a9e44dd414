//! # hedgelab_sim
//!
//! Monte Carlo simulation of a discretely rebalanced delta-hedging
//! strategy under Geometric Brownian Motion.
//!
//! The simulator generates GBM asset paths, walks each path rebalancing
//! the stock position to the Black-Scholes delta at the remaining time
//! to maturity, accrues risk-free interest on the cash account, and
//! reports the terminal replication PnL together with the full stock and
//! delta trajectories.
//!
//! Randomness is injected through a seedable generator ([`SimRng`]) so
//! that a fixed seed reproduces the PnL sequence exactly, whether the
//! paths are simulated serially or in parallel.

mod config;
mod error;
mod hedge;
mod rng;

pub use config::{SimConfig, SimConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::SimError;
pub use hedge::{bs_delta, HedgeParams, HedgeSimulator, SimulationResult};
pub use rng::SimRng;
