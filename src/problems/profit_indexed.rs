//! Profit-indexed (PB) knapsack DP and the profit-scaling FPTAS.
//!
//! Row `i` of the table describes the first `i` items; column `q` is a target
//! profit. Each cell stores the minimum weight of a subset whose profit is
//! exactly `q`, or [`UNREACHABLE`] if no subset reaches it. The profit axis
//! runs up to `N · max(profits)`.
//!
//! With an approximation parameter the profit axis is built from
//! [`Instance::rescale_profits`] over the items that fit the capacity (heavier
//! items get axis profit 0), which shrinks the table to
//! `O(N² / epsilon)` columns. Capacity checks and the reported profit still use
//! the caller's unscaled instance.

use crate::engine::fill_table;
use crate::error::{KnapsackError, KnapsackResult};
use crate::instance::{check_epsilon, Instance};
use crate::table::Table;
use crate::traits::LayeredTable;
use crate::utils::axis_width;

/// Sentinel weight of a profit level no subset can reach.
pub const UNREACHABLE: u64 = u64::MAX;

/// The PB recurrence over a fixed profit axis.
#[derive(Clone)]
pub struct ProfitIndexedProblem<'a> {
    weights: &'a [u64],
    profits: &'a [u64],
    width: usize,
}

impl<'a> ProfitIndexedProblem<'a> {
    /// `profits` is the axis profit of every item (possibly rescaled).
    pub fn new(weights: &'a [u64], profits: &'a [u64], profit_limit: usize) -> Self {
        debug_assert_eq!(weights.len(), profits.len());
        Self {
            weights,
            profits,
            width: profit_limit + 1,
        }
    }
}

impl<'a> LayeredTable for ProfitIndexedProblem<'a> {
    type Cell = u64;

    fn num_layers(&self) -> usize {
        self.weights.len()
    }

    fn width(&self) -> usize {
        self.width
    }

    fn init_cell(&self, col: usize) -> u64 {
        if col == 0 {
            0
        } else {
            UNREACHABLE
        }
    }

    fn step_cell(&self, layer: usize, col: usize, prev: &[u64]) -> u64 {
        let profit = self.profits[layer];
        if profit > col as u64 {
            return prev[col];
        }
        let take = prev[col - profit as usize].saturating_add(self.weights[layer]);
        prev[col].min(take)
    }
}

/// Builder for the profit-indexed solver.
///
/// ```
/// use kp_optima::{Instance, ProfitIndexed};
///
/// let kpi = Instance::new(Some(6), vec![6, 3, 2, 4], vec![6, 3, 3, 1]).unwrap();
/// let exact = ProfitIndexed::new(&kpi).solve().unwrap();
/// assert_eq!(exact.optimal_profit(), 6);
/// // the minimum-weight witness of profit 6
/// assert_eq!(exact.single_optimum(), vec![1, 2]);
///
/// let approx = ProfitIndexed::new(&kpi).with_epsilon(0.25).solve().unwrap();
/// assert!(approx.optimal_profit() as f64 >= 0.75 * 6.0);
/// ```
pub struct ProfitIndexed<'a> {
    instance: &'a Instance,
    capacity: Option<u64>,
    epsilon: Option<f64>,
}

impl<'a> ProfitIndexed<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            capacity: None,
            epsilon: None,
        }
    }

    /// Solve at `capacity` instead of the instance's own capacity.
    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Run the FPTAS with approximation parameter `epsilon ∈ (0, 1)`.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    /// Build the (possibly scaled) profit axis and fill the table.
    pub fn solve(self) -> KnapsackResult<PbResult<'a>> {
        let instance = self.instance;
        if let Some(eps) = self.epsilon {
            check_epsilon(eps)?;
        }
        if instance.is_empty() {
            return Err(KnapsackError::EmptyInstance);
        }
        let capacity = self.capacity.unwrap_or_else(|| instance.capacity());

        let axis_profits = match self.epsilon {
            Some(eps) => instance
                .with_capacity(capacity)
                .clip_to_capacity()
                .rescale_profits(eps)?
                .profits()
                .to_vec(),
            None => instance.profits().to_vec(),
        };
        let max_profit = axis_profits.iter().copied().max().unwrap_or(0);
        let limit = (instance.item_count() as u64)
            .checked_mul(max_profit)
            .ok_or(KnapsackError::CapacityTooLarge(u64::MAX))?;
        let width = axis_width(limit, instance.item_count())?;

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "solve_by_profit",
            items = instance.item_count(),
            capacity,
            profit_limit = limit,
            epsilon = self.epsilon.unwrap_or(0.0)
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let problem = ProfitIndexedProblem::new(instance.weights(), &axis_profits, width - 1);
        let table = fill_table(&problem);
        let result = PbResult {
            instance,
            capacity,
            epsilon: self.epsilon,
            profit_limit: width - 1,
            table,
            axis_profits,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(level = result.optimal_level(), "profit-indexed table filled");

        Ok(result)
    }
}

/// Solve with the profit-indexed DP, exactly (`epsilon = None`) or as an FPTAS.
pub fn solve_by_profit(
    instance: &Instance,
    capacity: Option<u64>,
    epsilon: Option<f64>,
) -> KnapsackResult<PbResult<'_>> {
    let mut solver = ProfitIndexed::new(instance);
    if let Some(c) = capacity {
        solver = solver.with_capacity(c);
    }
    if let Some(eps) = epsilon {
        solver = solver.with_epsilon(eps);
    }
    solver.solve()
}

/// Filled PB table plus the instance, capacity and profit axis it was built for.
#[derive(Debug, Clone)]
pub struct PbResult<'a> {
    instance: &'a Instance,
    capacity: u64,
    epsilon: Option<f64>,
    profit_limit: usize,
    table: Table<u64>,
    axis_profits: Vec<u64>,
}

impl<'a> PbResult<'a> {
    /// The instance this table was built for.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Capacity the optimum was selected under.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Approximation parameter, `None` for an exact solve.
    pub fn epsilon(&self) -> Option<f64> {
        self.epsilon
    }

    /// Highest profit level of the table, `N · max(axis profits)`.
    pub fn profit_limit(&self) -> usize {
        self.profit_limit
    }

    /// Item profits used on the table axis (rescaled under the FPTAS).
    pub fn axis_profits(&self) -> &[u64] {
        &self.axis_profits
    }

    /// The filled `(N + 1) × (profit_limit + 1)` minimum-weight table.
    pub fn table(&self) -> &Table<u64> {
        &self.table
    }

    /// Minimum weight reaching profit exactly `q` with the first `i` items.
    pub fn min_weight_at(&self, i: usize, q: usize) -> u64 {
        self.table.get(i, q)
    }

    /// Largest profit level whose minimum weight fits the capacity.
    ///
    /// This is on the table axis, so under the FPTAS it is a scaled profit.
    pub fn optimal_level(&self) -> usize {
        self.table
            .last_row()
            .iter()
            .rposition(|&w| w != UNREACHABLE && w <= self.capacity)
            .unwrap_or(0)
    }

    /// Unscaled profit of [`single_optimum`](Self::single_optimum).
    pub fn optimal_profit(&self) -> u64 {
        self.instance.profit_sum(Some(&self.single_optimum()))
    }

    /// One (approximately) optimal packing as ascending item indices.
    pub fn single_optimum(&self) -> Vec<usize> {
        let mut packing = Vec::new();
        let mut col = self.optimal_level();
        for layer in (1..=self.instance.item_count()).rev() {
            if self.min_weight_at(layer, col) != self.min_weight_at(layer - 1, col) {
                packing.push(layer - 1);
                col -= self.axis_profits[layer - 1] as usize;
            }
        }
        packing.reverse();
        packing
    }
}
