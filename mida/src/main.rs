use double_auction::two_good::{
    UtilityVector, demands_of_buyers, demands_of_threshold_buyers, min_walrasian_price,
    supplies_of_sellers, supplies_of_threshold_sellers,
};
use double_auction::valuation::values_from_spec;
use mida::analysis::RatioSummary;
use mida::mechanism::{Trial, run_median, run_mida};
use rand::SeedableRng;
use rand::rngs::StdRng;

const TRIALS_PER_SCENARIO: usize = 1000;
const MEDIAN_ITERATIONS: usize = 101;

/// Tiny bias breaks exact ties between equal-valued agents so that the
/// clearing scan is deterministic.
const TIE_BREAK_BIAS: f64 = 0.000001;

struct Scenario {
    name: &'static str,
    buyers: &'static str,
    sellers: &'static str,
}

const SCENARIOS: [Scenario; 3] = [
    Scenario {
        name: "One profitable trade",
        buyers: "10 of 100",
        sellers: "1 of 1, 99 of 99",
    },
    Scenario {
        name: "Balanced market",
        buyers: "50 of 100",
        sellers: "50 of 50",
    },
    Scenario {
        name: "Crossing curves",
        buyers: "20 of 100, 20 of 80, 20 of 60",
        sellers: "20 of 40, 20 of 60, 20 of 80",
    },
];

fn print_median_trial(trial: &Trial) {
    println!(
        "  Optimal: price={:.2}, gain={:.2}",
        trial.optimal.price, trial.optimal.gain
    );
    println!(
        "  Left half:  {} buyers, {} sellers, own price={:.2}, traded at={:.2}, gain={:.2}",
        trial.left.buyers.len(),
        trial.left.sellers.len(),
        trial.left.clearing_price,
        trial.left.traded_price,
        trial.left.gain
    );
    println!(
        "  Right half: {} buyers, {} sellers, own price={:.2}, traded at={:.2}, gain={:.2}",
        trial.right.buyers.len(),
        trial.right.sellers.len(),
        trial.right.clearing_price,
        trial.right.traded_price,
        trial.right.gain
    );
    match trial.competitive_ratio {
        Some(ratio) => println!("  Median competitive ratio: {:.4}", ratio),
        None => println!("  Median competitive ratio: undefined (zero benchmark gain)"),
    }
}

fn run_scenario(index: usize, scenario: &Scenario) {
    let buyers = values_from_spec(scenario.buyers, TIE_BREAK_BIAS, 0.0);
    let sellers = values_from_spec(scenario.sellers, TIE_BREAK_BIAS, 0.0);

    println!(
        "\n{} (buyers: \"{}\", sellers: \"{}\")",
        scenario.name, scenario.buyers, scenario.sellers
    );
    println!("{}", "=".repeat(60));

    let seed = index as u64 * 100;
    let mut rng = StdRng::seed_from_u64(seed);
    let median = run_median(&buyers, &sellers, MEDIAN_ITERATIONS, &mut rng)
        .expect("iteration count is positive");
    print_median_trial(&median);

    let mut rng = StdRng::seed_from_u64(seed + 1);
    let trials: Vec<Trial> = (0..TRIALS_PER_SCENARIO)
        .map(|_| run_mida(&buyers, &sellers, &mut rng))
        .collect();
    RatioSummary::from_trials(&trials).print_summary(&format!(
        "{} trials of \"{}\"",
        TRIALS_PER_SCENARIO, scenario.name
    ));
}

fn two_good_demo() {
    println!("\nTwo-good market (minimal Walrasian prices)");
    println!("{}", "=".repeat(60));

    // Unit-demand buyers and unit-endowed sellers described by utility
    // vectors over goods X and Y.
    let buyers = vec![
        UtilityVector::new(9.0, 4.0),
        UtilityVector::new(7.0, 6.0),
        UtilityVector::new(3.0, 8.0),
        UtilityVector::new(5.0, 5.0),
    ];
    let sellers = vec![
        UtilityVector::new(1.0, 2.0),
        UtilityVector::new(2.0, 1.0),
        UtilityVector::new(3.0, 3.0),
    ];

    let demands = |px: f64, py: f64| {
        let t = demands_of_buyers(&buyers, px, py);
        (t.x, t.y)
    };
    let supplies = |px: f64, py: f64| {
        let t = supplies_of_sellers(&sellers, px, py);
        (t.x, t.y)
    };
    match min_walrasian_price(demands, supplies) {
        Ok((px, py)) => {
            println!("  Utility-vector agents: price of X={:.0}, price of Y={:.0}", px, py);
            let demand = demands_of_buyers(&buyers, px, py);
            let supply = supplies_of_sellers(&sellers, px, py);
            println!(
                "    demand=({}, {}), supply=({}, {}), buyer welfare=({:.0}, {:.0})",
                demand.x, demand.y, supply.x, supply.y, demand.welfare_x, demand.welfare_y
            );
        }
        Err(e) => eprintln!("  Price discovery failed: {}", e),
    }

    // The same procedure driven by threshold agents: 5 units demanded up
    // to value 8, 5 units supplied from value 3 on, per good.
    let demands = |px: f64, py: f64| {
        let t = demands_of_threshold_buyers(5, 5, 8.0, 8.0, px, py);
        (t.x, t.y)
    };
    let supplies = |px: f64, py: f64| {
        let t = supplies_of_threshold_sellers(5, 5, 3.0, 3.0, px, py);
        (t.x, t.y)
    };
    match min_walrasian_price(demands, supplies) {
        Ok((px, py)) => {
            println!("  Threshold agents: price of X={:.0}, price of Y={:.0}", px, py)
        }
        Err(e) => eprintln!("  Price discovery failed: {}", e),
    }
}

fn main() {
    println!("MIDA Random-Sampling Double-Auction Simulation");
    println!("Pricing each random half with the other half's equilibrium price");
    println!("==============================================\n");

    for (index, scenario) in SCENARIOS.iter().enumerate() {
        run_scenario(index, scenario);
    }

    two_good_demo();

    println!("\n\nReading the results");
    println!("===================");
    println!("The competitive ratio compares the mechanism's realized gain");
    println!("with the centrally optimal gain; its median concentrates below 1");
    println!("and approaches 1 as markets grow (rationing noise can push a");
    println!("single trial above 1).");
}
