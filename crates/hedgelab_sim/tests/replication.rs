//! End-to-end checks of the hedging simulator against the analytical
//! layer.

use approx::assert_relative_eq;
use hedgelab_core::OptionType;
use hedgelab_models::{bs_price, GreekCalculator};
use hedgelab_sim::{bs_delta, HedgeParams, HedgeSimulator, SimConfig};

#[test]
fn simulator_delta_matches_greek_calculator() {
    for (spot, strike, tau) in [(100.0, 105.0, 1.0), (90.0, 100.0, 0.25), (140.0, 100.0, 2.0)] {
        for option_type in [OptionType::Call, OptionType::Put] {
            let reduced = bs_delta(spot, strike, tau, 0.05, 0.2, option_type);
            let full = GreekCalculator::new(spot, strike, tau, 0.05, 0.2, option_type)
                .unwrap()
                .delta();
            assert_relative_eq!(reduced, full, epsilon = 1e-9);
        }
    }
}

#[test]
fn mean_pnl_converges_to_unfunded_replication_shortfall() {
    // An unfunded replication strategy ends short the compounded option
    // value: E[hedge - payoff] ~ -C0 e^(rT), independent of the drift.
    let params = HedgeParams {
        spot: 100.0,
        drift: 0.08, // deliberately different from the risk-free rate
        volatility: 0.2,
        strike: 100.0,
        option_type: OptionType::Call,
        premium: 5.0,
        maturity: 1.0,
        quantity: 1,
        rate: 0.05,
    };
    let config = SimConfig::builder()
        .n_steps(100)
        .n_paths(400)
        .seed(7)
        .build()
        .unwrap();

    let result = HedgeSimulator::new(params, config).unwrap().run();

    let c0 = bs_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 0.0).unwrap();
    let expected = -c0 * (0.05_f64).exp() - 5.0;
    assert!(
        (result.mean_pnl() - expected).abs() < 0.5,
        "mean pnl {} too far from {}",
        result.mean_pnl(),
        expected
    );
}

#[test]
fn finer_rebalancing_reduces_pnl_dispersion() {
    let params = HedgeParams {
        spot: 100.0,
        drift: 0.05,
        volatility: 0.2,
        strike: 100.0,
        option_type: OptionType::Put,
        premium: 0.0,
        maturity: 1.0,
        quantity: 1,
        rate: 0.05,
    };

    let std_dev = |n_steps: usize| {
        let config = SimConfig::builder()
            .n_steps(n_steps)
            .n_paths(300)
            .seed(13)
            .build()
            .unwrap();
        let result = HedgeSimulator::new(params, config).unwrap().run();
        let mean = result.mean_pnl();
        let var = result
            .pnl
            .iter()
            .map(|pnl| (pnl - mean).powi(2))
            .sum::<f64>()
            / result.pnl.len() as f64;
        var.sqrt()
    };

    // 4x more rebalancing dates should roughly halve the hedging error
    let coarse = std_dev(16);
    let fine = std_dev(256);
    assert!(
        fine < coarse * 0.75,
        "hedging error did not shrink: coarse = {coarse}, fine = {fine}"
    );
}
