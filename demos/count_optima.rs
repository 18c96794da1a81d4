//! Example: count and list every optimal packing of a small instance.
//!
//! Run with:
//! `cargo run --example count_optima`

use kp_optima::{solve_by_weight, Instance};

fn main() -> Result<(), kp_optima::KnapsackError> {
    // ten identical unit items, room for three: C(10, 3) optima
    let unit = Instance::new(Some(3), vec![1; 10], vec![1; 10])?;
    let result = solve_by_weight(&unit, None)?;
    println!(
        "unit items: best profit {}, {} optimal packings",
        result.optimal_profit(),
        result.optima_count()
    );

    // two optima with different total weight
    let kpi = Instance::new(Some(6), vec![6, 3, 2, 4], vec![6, 3, 3, 1])?;
    let result = solve_by_weight(&kpi, None)?;
    println!("\ncapacity {}, items {:?}", kpi.capacity(), kpi.items().collect::<Vec<_>>());
    for packing in result.all_optima() {
        let (weight, profit) = kpi.evaluate(&packing);
        println!("  {packing:?}  weight={weight} profit={profit}");
    }
    Ok(())
}
