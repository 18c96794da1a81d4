//! Exact and approximate 0-1 knapsack dynamic programs that count ties.
//!
//! Besides "what is the best packing?", this crate answers "how many distinct
//! globally optimal packings exist?" and can list all of them.
//!
//! ## Core idea
//! 1. Describe the problem as an immutable [`Instance`].
//! 2. Fill one of two dual tables with the generic layered [`engine`]:
//!    - weight-indexed ([`WeightIndexed`]): best profit per capacity, plus the
//!      number of subsets attaining it;
//!    - profit-indexed ([`ProfitIndexed`]): least weight per exact profit,
//!      optionally on a rescaled profit axis (FPTAS).
//! 3. Ask the result for one optimum, all optima, or their count.
//!
//! ## Quick start
//! ```
//! use kp_optima::{solve_by_profit, solve_by_weight, Instance};
//!
//! let kpi = Instance::new(Some(6), vec![6, 3, 2, 4], vec![6, 3, 3, 1]).unwrap();
//!
//! let wb = solve_by_weight(&kpi, None).unwrap();
//! assert_eq!(wb.optimal_profit(), 6);
//! assert_eq!(wb.optima_count(), 2);
//! assert_eq!(wb.all_optima().len(), 2);
//!
//! let pb = solve_by_profit(&kpi, None, Some(0.1)).unwrap();
//! assert!(kpi.weight_sum(Some(&pb.single_optimum())) <= 6);
//! ```
//!
//! ## Features
//! - `parallel` (default): cells within a table row are filled with rayon.
//! - `tracing` (default): spans and events around table fills and enumeration.
//! - `cli` (default): builds the `optima_sweep` binary; implies `tracing`.
//! - `heavy`: enables long-running stress tests.

pub mod engine;
pub mod error;
pub mod generator;
pub mod instance;
pub mod io;
pub mod problems;
pub mod solution;
pub mod sweep;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::error::{KnapsackError, KnapsackResult};
pub use crate::instance::Instance;
pub use crate::problems::profit_indexed::{solve_by_profit, PbResult, ProfitIndexed};
pub use crate::problems::weight_indexed::{solve_by_weight, WbResult, WeightIndexed};
pub use crate::solution::{Optimum, Solution};
pub use crate::traits::LayeredTable;
