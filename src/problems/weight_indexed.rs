//! Weight-indexed (WB) knapsack DP with optimum counting.
//!
//! Row `i` of the table describes the first `i` items; column `c` is the
//! residual capacity. Each cell stores the best achievable profit and the
//! number of distinct subsets reaching that profit with total weight `≤ c`.
//!
//! On a tie between skipping and taking item `i` the counts of both branches
//! are added, which is where the combinatorial growth of optima comes from.
//! The same tie condition drives [`WbResult::all_optima`], so the number of
//! enumerated packings always equals [`WbResult::optima_count`].

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::engine::fill_table;
use crate::error::KnapsackResult;
use crate::instance::Instance;
use crate::table::Table;
use crate::traits::LayeredTable;
use crate::utils::axis_width;

/// One WB table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WbCell {
    /// Maximum profit over subsets of the prefix with weight `≤ c`.
    pub profit: u64,
    /// Number of subsets attaining `profit`. Saturates at `u128::MAX`.
    pub count: u128,
}

/// The WB recurrence for a fixed instance and capacity.
#[derive(Clone)]
pub struct WeightIndexedProblem<'a> {
    weights: &'a [u64],
    profits: &'a [u64],
    width: usize,
}

impl<'a> WeightIndexedProblem<'a> {
    pub fn new(instance: &'a Instance, capacity: usize) -> Self {
        Self {
            weights: instance.weights(),
            profits: instance.profits(),
            width: capacity + 1,
        }
    }
}

impl<'a> LayeredTable for WeightIndexedProblem<'a> {
    type Cell = WbCell;

    fn num_layers(&self) -> usize {
        self.weights.len()
    }

    fn width(&self) -> usize {
        self.width
    }

    fn init_cell(&self, _col: usize) -> WbCell {
        // the empty packing is the unique optimum of zero items
        WbCell {
            profit: 0,
            count: 1,
        }
    }

    fn step_cell(&self, layer: usize, col: usize, prev: &[WbCell]) -> WbCell {
        let weight = self.weights[layer];
        let skip = prev[col];
        if weight > col as u64 {
            return skip;
        }
        let base = prev[col - weight as usize];
        let take = base.profit + self.profits[layer];
        match skip.profit.cmp(&take) {
            Ordering::Equal => WbCell {
                profit: take,
                count: skip.count.saturating_add(base.count),
            },
            Ordering::Greater => skip,
            Ordering::Less => WbCell {
                profit: take,
                count: base.count,
            },
        }
    }
}

/// Builder for the weight-indexed solver.
///
/// ```
/// use kp_optima::{Instance, WeightIndexed};
///
/// let kpi = Instance::new(Some(6), vec![6, 3, 2, 4], vec![6, 3, 3, 1]).unwrap();
/// let result = WeightIndexed::new(&kpi).solve().unwrap();
/// assert_eq!(result.optimal_profit(), 6);
/// assert_eq!(result.optima_count(), 2);
/// assert_eq!(result.all_optima(), vec![vec![0], vec![1, 2]]);
/// ```
pub struct WeightIndexed<'a> {
    instance: &'a Instance,
    capacity: Option<u64>,
}

impl<'a> WeightIndexed<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            capacity: None,
        }
    }

    /// Solve at `capacity` instead of the instance's own capacity.
    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Fill both tables.
    pub fn solve(self) -> KnapsackResult<WbResult<'a>> {
        let capacity = self.capacity.unwrap_or_else(|| self.instance.capacity());
        let width = axis_width(capacity, self.instance.item_count())?;

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("solve_by_weight", items = self.instance.item_count(), capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let problem = WeightIndexedProblem::new(self.instance, width - 1);
        let table = fill_table(&problem);
        let result = WbResult {
            instance: self.instance,
            capacity: width - 1,
            table,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            profit = result.optimal_profit(),
            optima = %result.optima_count(),
            "weight-indexed table filled"
        );

        Ok(result)
    }
}

/// Solve with the weight-indexed DP. `capacity = None` uses the instance capacity.
pub fn solve_by_weight(instance: &Instance, capacity: Option<u64>) -> KnapsackResult<WbResult<'_>> {
    let solver = WeightIndexed::new(instance);
    match capacity {
        Some(c) => solver.with_capacity(c).solve(),
        None => solver.solve(),
    }
}

/// Filled WB tables plus the instance and capacity they were built for.
#[derive(Debug, Clone)]
pub struct WbResult<'a> {
    instance: &'a Instance,
    capacity: usize,
    table: Table<WbCell>,
}

/// Pending walk in the breadth-first enumeration.
struct Walk {
    layer: usize,
    col: usize,
    tail: Option<usize>,
}

/// One packed item in the shared arena; `prev` links to the rest of the packing.
struct Link {
    item: usize,
    prev: Option<usize>,
}

impl<'a> WbResult<'a> {
    /// The instance this table was built for.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Capacity of the last table column.
    pub fn capacity(&self) -> u64 {
        self.capacity as u64
    }

    /// The filled `(N + 1) × (capacity + 1)` table of profits and counts.
    pub fn table(&self) -> &Table<WbCell> {
        &self.table
    }

    /// Best profit over the first `i` items at capacity `c`.
    pub fn profit_at(&self, i: usize, c: usize) -> u64 {
        self.table.get(i, c).profit
    }

    /// Number of optimal subsets of the first `i` items at capacity `c`.
    pub fn count_at(&self, i: usize, c: usize) -> u128 {
        self.table.get(i, c).count
    }

    fn terminal(&self) -> WbCell {
        self.table.get(self.instance.item_count(), self.capacity)
    }

    /// Maximum total profit under the capacity.
    pub fn optimal_profit(&self) -> u64 {
        self.terminal().profit
    }

    /// Number of distinct globally optimal packings.
    pub fn optima_count(&self) -> u128 {
        self.terminal().count
    }

    /// One optimal packing as ascending item indices.
    ///
    /// Ties are resolved towards leaving the item out.
    pub fn single_optimum(&self) -> Vec<usize> {
        let weights = self.instance.weights();
        let mut packing = Vec::new();
        let mut col = self.capacity;
        for layer in (1..=self.instance.item_count()).rev() {
            if self.profit_at(layer, col) != self.profit_at(layer - 1, col) {
                packing.push(layer - 1);
                col -= weights[layer - 1] as usize;
            }
        }
        packing.reverse();
        packing
    }

    /// Every optimal packing, each as ascending item indices.
    ///
    /// The number of packings equals [`optima_count`](Self::optima_count) and
    /// can be astronomically large; bound the instance before calling this, or
    /// use [`all_optima_bounded`](Self::all_optima_bounded).
    pub fn all_optima(&self) -> Vec<Vec<usize>> {
        self.enumerate(usize::MAX)
    }

    /// Like [`all_optima`](Self::all_optima) but stops after `limit` packings.
    pub fn all_optima_bounded(&self, limit: usize) -> Vec<Vec<usize>> {
        self.enumerate(limit)
    }

    fn enumerate(&self, limit: usize) -> Vec<Vec<usize>> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("enumerate_optima", limit);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let weights = self.instance.weights();
        let profits = self.instance.profits();
        let mut links: Vec<Link> = Vec::new();
        let mut queue = VecDeque::from([Walk {
            layer: self.instance.item_count(),
            col: self.capacity,
            tail: None,
        }]);
        let mut packings = Vec::new();

        while packings.len() < limit {
            let Some(Walk {
                mut layer,
                mut col,
                mut tail,
            }) = queue.pop_front()
            else {
                break;
            };

            while layer > 0 {
                let item = layer - 1;
                let weight = weights[item];
                let here = self.profit_at(layer, col);
                if here != self.profit_at(layer - 1, col) {
                    links.push(Link { item, prev: tail });
                    tail = Some(links.len() - 1);
                    col -= weight as usize;
                } else if weight <= col as u64
                    && here == self.profit_at(layer - 1, col - weight as usize) + profits[item]
                {
                    // taking the item ties with skipping it: fork
                    links.push(Link { item, prev: tail });
                    queue.push_back(Walk {
                        layer: layer - 1,
                        col: col - weight as usize,
                        tail: Some(links.len() - 1),
                    });
                }
                layer -= 1;
            }

            packings.push(collect_packing(&links, tail));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            packings = packings.len(),
            arena = links.len(),
            "enumeration finished"
        );

        packings
    }
}

fn collect_packing(links: &[Link], mut tail: Option<usize>) -> Vec<usize> {
    let mut packing = Vec::new();
    while let Some(idx) = tail {
        packing.push(links[idx].item);
        tail = links[idx].prev;
    }
    packing
}
