//! Example: trade accuracy for table size with the profit-scaling FPTAS.
//!
//! Run with:
//! `cargo run --example fptas`

use kp_optima::generator::{generate, InstanceKind};
use kp_optima::solve_by_profit;
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<(), kp_optima::KnapsackError> {
    let mut rng = StdRng::seed_from_u64(42);
    let kpi = generate(&mut rng, 40, 1, 1_000, InstanceKind::Uncorrelated)?;
    let capacity = kpi.weight_sum(None) / 4;

    let exact = solve_by_profit(&kpi, Some(capacity), None)?;
    println!(
        "exact: profit={} columns={}",
        exact.optimal_profit(),
        exact.profit_limit() + 1
    );

    for eps in [0.5, 0.25, 0.1, 0.01] {
        let approx = solve_by_profit(&kpi, Some(capacity), Some(eps))?;
        let ratio = approx.optimal_profit() as f64 / exact.optimal_profit() as f64;
        println!(
            "eps={eps:<5} profit={} ratio={ratio:.4} columns={}",
            approx.optimal_profit(),
            approx.profit_limit() + 1
        );
    }
    Ok(())
}
