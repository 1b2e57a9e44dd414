//! Delta-hedge replication under Geometric Brownian Motion.
//!
//! ## Path model
//!
//! Log-space exact GBM step with drift mu (real-world, not risk-neutral):
//!
//! ```text
//! S(t+dt) = S(t) * exp((mu - sigma^2/2) dt + sigma sqrt(dt) Z)
//! ```
//!
//! ## Hedge bookkeeping
//!
//! At each step i the stock position is rebalanced to the Black-Scholes
//! delta at the remaining maturity tau = T - i*dt; the rebalancing trade
//! debits the cash account at the current spot and the account then
//! accrues one step of risk-free interest:
//!
//! ```text
//! cash -= (delta_i - delta_{i-1}) * S_i
//! cash *= exp(r dt)
//! ```
//!
//! At termination the realised PnL per path is
//! `(delta_last * S_T + cash - payoff) * quantity - premium * quantity`.

use rayon::prelude::*;

use hedgelab_core::{norm_cdf, OptionType};

use super::config::SimConfig;
use super::error::SimError;
use super::rng::SimRng;

/// Reduced closed-form Black-Scholes delta at remaining maturity `tau`.
///
/// Call: Phi(d1); put: -Phi(-d1). When `tau <= 0` or `volatility <= 0`
/// the formula degenerates to the intrinsic indicator (call: 1 in the
/// money, else 0; put: -1 in the money, else 0), which keeps the
/// zero-volatility hedge well defined instead of dividing by zero.
#[inline]
pub fn bs_delta(
    spot: f64,
    strike: f64,
    tau: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    if tau <= 0.0 || volatility <= 0.0 {
        return match option_type {
            OptionType::Call => {
                if spot > strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::Put => {
                if spot < strike {
                    -1.0
                } else {
                    0.0
                }
            }
        };
    }

    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * tau)
        / (volatility * tau.sqrt());

    match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => -norm_cdf(-d1),
    }
}

/// Market and contract parameters for one hedging simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HedgeParams {
    /// Initial stock price (S0)
    pub spot: f64,
    /// Expected return of the stock (mu) - annualised, real-world
    pub drift: f64,
    /// Volatility (sigma) - annualised
    pub volatility: f64,
    /// Option strike (K)
    pub strike: f64,
    /// Call or put
    pub option_type: OptionType,
    /// Premium paid per option at entry
    pub premium: f64,
    /// Time to maturity (T) in years
    pub maturity: f64,
    /// Signed number of options hedged
    pub quantity: i64,
    /// Risk-free rate (r) - annualised
    pub rate: f64,
}

impl HedgeParams {
    fn validate(&self) -> Result<(), SimError> {
        if !(self.maturity.is_finite() && self.maturity > 0.0) {
            return Err(SimError::InvalidMaturity {
                maturity: self.maturity,
            });
        }
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "spot",
                reason: format!("{} is not a positive price", self.spot),
            });
        }
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "strike",
                reason: format!("{} is not a positive price", self.strike),
            });
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(SimError::InvalidParameter {
                name: "volatility",
                reason: format!("{} is not a non-negative volatility", self.volatility),
            });
        }
        for (name, value) in [("drift", self.drift), ("rate", self.rate), ("premium", self.premium)]
        {
            if !value.is_finite() {
                return Err(SimError::InvalidParameter {
                    name,
                    reason: format!("{value} is not finite"),
                });
            }
        }
        Ok(())
    }
}

/// Output of one Monte Carlo hedging run.
///
/// All per-path collections are ordered by path index, regardless of the
/// execution order of the underlying workers. The result lives in
/// memory for one simulation session and is replaced wholesale by the
/// next run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Time grid: n_steps + 1 points over [0, T], including t = 0.
    pub time_grid: Vec<f64>,
    /// Per path, the spot observed at each rebalancing step.
    pub stock_paths: Vec<Vec<f64>>,
    /// Per path, the delta held after each rebalancing step.
    pub delta_paths: Vec<Vec<f64>>,
    /// Per path, the realised hedging PnL.
    pub pnl: Vec<f64>,
    /// The base seed the run was generated from.
    pub seed: u64,
}

impl SimulationResult {
    /// Returns the number of simulated paths.
    pub fn n_paths(&self) -> usize {
        self.pnl.len()
    }

    /// Returns the average realised PnL across paths.
    pub fn mean_pnl(&self) -> f64 {
        if self.pnl.is_empty() {
            return 0.0;
        }
        self.pnl.iter().sum::<f64>() / self.pnl.len() as f64
    }
}

struct PathOutcome {
    prices: Vec<f64>,
    deltas: Vec<f64>,
    pnl: f64,
}

/// Monte Carlo delta-hedging simulator.
///
/// Paths are mutually independent, so they are simulated in parallel;
/// each path derives its own generator from the base seed plus the path
/// index, which makes the run reproducible and execution-order
/// independent.
///
/// # Examples
/// ```
/// use hedgelab_core::OptionType;
/// use hedgelab_sim::{HedgeParams, HedgeSimulator, SimConfig};
///
/// let params = HedgeParams {
///     spot: 100.0,
///     drift: 0.05,
///     volatility: 0.2,
///     strike: 100.0,
///     option_type: OptionType::Call,
///     premium: 5.0,
///     maturity: 1.0,
///     quantity: 1,
///     rate: 0.05,
/// };
/// let config = SimConfig::builder().n_steps(50).n_paths(20).seed(42).build().unwrap();
///
/// let result = HedgeSimulator::new(params, config).unwrap().run();
/// assert_eq!(result.n_paths(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct HedgeSimulator {
    params: HedgeParams,
    config: SimConfig,
}

impl HedgeSimulator {
    /// Creates a simulator, validating the hedge parameters fail-fast.
    ///
    /// # Errors
    /// - `SimError::InvalidMaturity` if `maturity <= 0`
    /// - `SimError::InvalidParameter` for non-positive spot/strike,
    ///   negative volatility, or non-finite drift/rate/premium
    pub fn new(params: HedgeParams, config: SimConfig) -> Result<Self, SimError> {
        params.validate()?;
        Ok(Self { params, config })
    }

    /// Runs the simulation.
    ///
    /// Uses the configured seed when present, otherwise draws one from
    /// entropy; either way the seed used is recorded on the result.
    pub fn run(&self) -> SimulationResult {
        let base_seed = self
            .config
            .seed()
            .unwrap_or_else(|| SimRng::from_entropy().seed());

        let n_steps = self.config.n_steps();
        let n_paths = self.config.n_paths();
        let dt = self.params.maturity / n_steps as f64;

        let time_grid: Vec<f64> = (0..=n_steps).map(|i| i as f64 * dt).collect();

        let outcomes: Vec<PathOutcome> = (0..n_paths)
            .into_par_iter()
            .map(|path_idx| {
                let mut rng = SimRng::from_seed(base_seed.wrapping_add(path_idx as u64));
                self.simulate_path(&mut rng, n_steps, dt)
            })
            .collect();

        let mut result = SimulationResult {
            time_grid,
            stock_paths: Vec::with_capacity(n_paths),
            delta_paths: Vec::with_capacity(n_paths),
            pnl: Vec::with_capacity(n_paths),
            seed: base_seed,
        };
        for outcome in outcomes {
            result.stock_paths.push(outcome.prices);
            result.delta_paths.push(outcome.deltas);
            result.pnl.push(outcome.pnl);
        }
        result
    }

    fn simulate_path(&self, rng: &mut SimRng, n_steps: usize, dt: f64) -> PathOutcome {
        let p = &self.params;

        // Precomputed log-space step terms
        let drift_dt = (p.drift - 0.5 * p.volatility * p.volatility) * dt;
        let vol_sqrt_dt = p.volatility * dt.sqrt();

        let mut path = Vec::with_capacity(n_steps + 1);
        path.push(p.spot);
        let mut s = p.spot;
        for _ in 0..n_steps {
            s *= (drift_dt + vol_sqrt_dt * rng.gen_normal()).exp();
            path.push(s);
        }

        let mut cash = 0.0;
        let mut delta_prev = 0.0;
        let mut deltas = Vec::with_capacity(n_steps);
        let mut prices = Vec::with_capacity(n_steps);

        let accrual = (p.rate * dt).exp();
        for (i, &s_t) in path.iter().take(n_steps).enumerate() {
            let tau = p.maturity - i as f64 * dt;
            if tau <= 0.0 {
                break;
            }
            let delta = bs_delta(s_t, p.strike, tau, p.rate, p.volatility, p.option_type);
            cash -= (delta - delta_prev) * s_t;
            cash *= accrual;
            delta_prev = delta;

            deltas.push(delta);
            prices.push(s_t);
        }

        let s_terminal = *path.last().unwrap_or(&p.spot);
        let payoff = p.option_type.intrinsic(s_terminal, p.strike);
        let hedge_value = delta_prev * s_terminal + cash;
        let quantity = p.quantity as f64;
        let pnl = (hedge_value - payoff) * quantity - p.premium * quantity;

        PathOutcome {
            prices,
            deltas,
            pnl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> HedgeParams {
        HedgeParams {
            spot: 100.0,
            drift: 0.05,
            volatility: 0.2,
            strike: 100.0,
            option_type: OptionType::Call,
            premium: 5.0,
            maturity: 1.0,
            quantity: 1,
            rate: 0.05,
        }
    }

    fn config(n_steps: usize, n_paths: usize, seed: u64) -> SimConfig {
        SimConfig::builder()
            .n_steps(n_steps)
            .n_paths(n_paths)
            .seed(seed)
            .build()
            .unwrap()
    }

    // ==========================================================
    // bs_delta
    // ==========================================================

    #[test]
    fn test_delta_bounds() {
        for spot in [50.0, 90.0, 100.0, 110.0, 200.0] {
            let call = bs_delta(spot, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
            assert!((0.0..=1.0).contains(&call));

            let put = bs_delta(spot, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
            assert!((-1.0..=0.0).contains(&put));
        }
    }

    #[test]
    fn test_delta_reference_value() {
        // S=100, K=105, T=1, r=5%, sigma=20%: call delta ~ 0.5422
        let delta = bs_delta(100.0, 105.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert_relative_eq!(delta, 0.5422, epsilon = 1e-3);
    }

    #[test]
    fn test_delta_degenerates_to_indicator() {
        // Zero volatility
        assert_eq!(bs_delta(110.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call), 1.0);
        assert_eq!(bs_delta(90.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call), 0.0);
        // Expired
        assert_eq!(bs_delta(90.0, 100.0, 0.0, 0.05, 0.2, OptionType::Put), -1.0);
        assert_eq!(bs_delta(110.0, 100.0, 0.0, 0.05, 0.2, OptionType::Put), 0.0);
    }

    // ==========================================================
    // Validation
    // ==========================================================

    #[test]
    fn test_non_positive_maturity_rejected() {
        let mut p = params();
        p.maturity = 0.0;
        let result = HedgeSimulator::new(p, config(10, 10, 1));
        assert!(matches!(result, Err(SimError::InvalidMaturity { .. })));
    }

    #[test]
    fn test_invalid_spot_rejected() {
        let mut p = params();
        p.spot = -1.0;
        let result = HedgeSimulator::new(p, config(10, 10, 1));
        assert!(matches!(
            result,
            Err(SimError::InvalidParameter { name: "spot", .. })
        ));
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let mut p = params();
        p.volatility = -0.2;
        let result = HedgeSimulator::new(p, config(10, 10, 1));
        assert!(matches!(
            result,
            Err(SimError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));
    }

    // ==========================================================
    // Result shape
    // ==========================================================

    #[test]
    fn test_result_dimensions() {
        let result = HedgeSimulator::new(params(), config(50, 7, 42)).unwrap().run();

        assert_eq!(result.time_grid.len(), 51);
        assert_eq!(result.time_grid[0], 0.0);
        assert_relative_eq!(*result.time_grid.last().unwrap(), 1.0, epsilon = 1e-12);

        assert_eq!(result.n_paths(), 7);
        assert_eq!(result.stock_paths.len(), 7);
        assert_eq!(result.delta_paths.len(), 7);
        for (prices, deltas) in result.stock_paths.iter().zip(&result.delta_paths) {
            // One observation per rebalancing step
            assert_eq!(prices.len(), 50);
            assert_eq!(deltas.len(), 50);
            assert_eq!(prices[0], 100.0);
        }
    }

    // ==========================================================
    // Reproducibility
    // ==========================================================

    #[test]
    fn test_fixed_seed_reproduces_pnl_sequence() {
        let sim = HedgeSimulator::new(params(), config(100, 40, 2024)).unwrap();
        let a = sim.run();
        let b = sim.run();

        assert_eq!(a.pnl, b.pnl);
        assert_eq!(a.stock_paths, b.stock_paths);
        assert_eq!(a.delta_paths, b.delta_paths);
        assert_eq!(a.seed, 2024);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = HedgeSimulator::new(params(), config(100, 10, 1)).unwrap().run();
        let b = HedgeSimulator::new(params(), config(100, 10, 2)).unwrap().run();
        assert_ne!(a.pnl, b.pnl);
    }

    #[test]
    fn test_unseeded_runs_record_their_seed() {
        let config = SimConfig::builder().n_steps(10).n_paths(3).build().unwrap();
        let sim = HedgeSimulator::new(params(), config).unwrap();
        let result = sim.run();

        // Replaying the recorded seed reproduces the run
        let replay_config = SimConfig::builder()
            .n_steps(10)
            .n_paths(3)
            .seed(result.seed)
            .build()
            .unwrap();
        let replay = HedgeSimulator::new(params(), replay_config).unwrap().run();
        assert_eq!(result.pnl, replay.pnl);
    }

    // ==========================================================
    // Zero volatility
    // ==========================================================

    #[test]
    fn test_zero_volatility_collapses_to_single_value() {
        let mut p = params();
        p.volatility = 0.0;
        let result = HedgeSimulator::new(p, config(50, 20, 9)).unwrap().run();

        let first = result.pnl[0];
        assert!(result.pnl.iter().all(|&pnl| pnl == first));
    }

    #[test]
    fn test_zero_volatility_deep_otm_pnl_is_minus_premium() {
        // Deterministic path never reaches the strike: delta stays 0,
        // payoff is 0, so the PnL is exactly the premium paid.
        let mut p = params();
        p.volatility = 0.0;
        p.strike = 1_000.0;
        p.premium = 5.0;
        p.quantity = 3;
        let result = HedgeSimulator::new(p, config(50, 4, 11)).unwrap().run();

        for &pnl in &result.pnl {
            assert_relative_eq!(pnl, -15.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_short_position_flips_pnl_sign() {
        let long = HedgeSimulator::new(params(), config(50, 10, 5)).unwrap().run();

        let mut p = params();
        p.quantity = -1;
        let short = HedgeSimulator::new(p, config(50, 10, 5)).unwrap().run();

        for (a, b) in long.pnl.iter().zip(&short.pnl) {
            assert_relative_eq!(*a, -b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mean_pnl() {
        let result = SimulationResult {
            time_grid: vec![0.0],
            stock_paths: vec![],
            delta_paths: vec![],
            pnl: vec![1.0, 2.0, 3.0],
            seed: 0,
        };
        assert_relative_eq!(result.mean_pnl(), 2.0, epsilon = 1e-12);
    }
}
